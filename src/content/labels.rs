//! UI label tables.
//!
//! One `Labels` value per language. Using a struct rather than a string map
//! means the two languages define the identical key set by construction;
//! a missing translation is a compile error, not a runtime fallback.

use super::Language;

/// Fixed set of UI display strings.
#[derive(Debug)]
pub struct Labels {
    pub metrics_title: &'static str,
    pub standard_formulas: &'static str,
    pub datasets_title: &'static str,
    pub performance_trend: &'static str,
    pub trend_desc: &'static str,
    pub holistic_title: &'static str,
    pub holistic_desc: &'static str,
    pub export_report: &'static str,
    pub status: &'static str,
    pub ready: &'static str,
    pub current_context: &'static str,
    pub context_desc: &'static str,
    pub designed_for: &'static str,
    pub modules: &'static str,
    pub python_impl: &'static str,
    pub dataset_name: &'static str,
    pub tags: &'static str,
    pub kpis: &'static str,
    pub desc: &'static str,
    pub baseline: &'static str,
    pub bio_agent: &'static str,
}

static LABELS_EN: Labels = Labels {
    metrics_title: "Evaluation Metrics",
    standard_formulas: "Standard Formulas",
    datasets_title: "Recommended Datasets",
    performance_trend: "Performance Trend",
    trend_desc: "Expected improvement per version iteration",
    holistic_title: "Holistic System Evaluation",
    holistic_desc: "Bio-Agent vs Baseline Performance",
    export_report: "Export Report",
    status: "Status",
    ready: "Ready for Testing",
    current_context: "Current Context",
    context_desc: "Biological System Evaluation",
    designed_for: "Designed for Bio-Agents",
    modules: "Evaluation Modules",
    python_impl: "Python Implementation",
    dataset_name: "Dataset Name",
    tags: "Tags",
    kpis: "KPIs",
    desc: "Description",
    baseline: "Baseline",
    bio_agent: "Bio-Agent",
};

static LABELS_ZH: Labels = Labels {
    metrics_title: "评估指标",
    standard_formulas: "标准公式",
    datasets_title: "推荐数据集",
    performance_trend: "性能趋势",
    trend_desc: "每个版本的预期改进",
    holistic_title: "系统整体评估",
    holistic_desc: "Bio-Agent 与基线的性能对比",
    export_report: "导出报告",
    status: "状态",
    ready: "测试准备就绪",
    current_context: "当前上下文",
    context_desc: "生物系统评估",
    designed_for: "专为生物智能体设计",
    modules: "评估模块",
    python_impl: "Python 实现",
    dataset_name: "数据集名称",
    tags: "标签",
    kpis: "关键指标",
    desc: "描述",
    baseline: "基线",
    bio_agent: "生物智能体",
};

/// Returns the label table for a language.
pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::En => &LABELS_EN,
        Language::Zh => &LABELS_ZH,
    }
}
