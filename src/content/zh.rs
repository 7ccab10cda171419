//! Chinese module table.

use super::{Dataset, IconName, Metric, ModuleId, ModuleRecord, RadarPoint};

pub(super) static MODULES: [ModuleRecord; 5] = [
    ModuleRecord {
        id: ModuleId::Overview,
        title: "系统概览",
        icon: IconName::Dashboard,
        summary: "Bio-Agent 在关键维度上与基线相比的高级性能总结。",
        metrics: &[],
        datasets: &[],
        radar: Some(&[
            RadarPoint { subject: "检索准确率", agent: 92, baseline: 65, full_mark: 100 },
            RadarPoint { subject: "临床推理", agent: 85, baseline: 55, full_mark: 100 },
            RadarPoint { subject: "工具成功率", agent: 78, baseline: 40, full_mark: 100 },
            RadarPoint { subject: "安全/真实性", agent: 95, baseline: 60, full_mark: 100 },
            RadarPoint { subject: "上下文长度", agent: 88, baseline: 50, full_mark: 100 },
            RadarPoint { subject: "生物知识", agent: 90, baseline: 60, full_mark: 100 },
        ]),
    },
    ModuleRecord {
        id: ModuleId::Rag,
        title: "RAG 评估",
        icon: IconName::Database,
        summary: "评估生物实体的检索准确性以及基于检索上下文生成的忠实度。",
        metrics: &[
            Metric {
                name: "上下文召回率 (Context Recall)",
                description: "Top-K 检索文档必须包含 Golden Truth (标准答案)。",
                tool: Some("Custom Python"),
                formula: "def context_recall(retrieved, ground_truth): \n    # Check intersection of retrieved content and ground truth\n    return len(set(retrieved) & set(ground_truth)) / len(ground_truth)",
            },
            Metric {
                name: "忠实度 (Faithfulness)",
                description: "确保生成的声明仅源自检索到的上下文。",
                tool: Some("Ragas"),
                formula: "from ragas import faithfulness \n# Calculate faithfulness score based on answer and context\nscore = faithfulness.score(answer, context)",
            },
        ],
        datasets: &[
            Dataset {
                name: "BioASQ (Task B)",
                tags: &["语义索引", "问答"],
                kpis: &["MAP@K", "Recall@K"],
                description: "生物医学检索领域的“奥运会”。Task B 包含基于 PubMed 摘要的真实问题、三元组和准确答案。",
            },
            Dataset {
                name: "SciFact",
                tags: &["声明验证", "证据支持"],
                kpis: &["Label Accuracy"],
                description: "针对科学声明的校验数据集。要求验证生成的声明（Claim）是否有证据支持。",
            },
            Dataset {
                name: "TREC-COVID",
                tags: &["信息检索", "特定领域"],
                kpis: &["NDCG@10"],
                description: "专门针对突发公共卫生事件的检索基准。测试快速增长语料库的检索能力。",
            },
            Dataset {
                name: "PubMedQA",
                tags: &["上下文推理"],
                kpis: &["Accuracy"],
                description: "要求模型根据摘要内容回答 Yes/No/Maybe，测试上下文理解力。",
            },
        ],
        radar: None,
    },
    ModuleRecord {
        id: ModuleId::Qa,
        title: "问答与推理",
        icon: IconName::MessageSquare,
        summary: "评估智能体正确回答特定领域问题的能力，包括多跳推理。",
        metrics: &[
            Metric {
                name: "精确匹配 (Exact Match)",
                description: "针对生物实体的严格匹配测试。",
                tool: Some("Python String Match"),
                formula: "def exact_match(prediction, truth): \n    # Strict string comparison after stripping whitespace\n    return 1 if prediction.strip() == truth.strip() else 0",
            },
            Metric {
                name: "生物 F1 分数 (Bio-F1)",
                description: "词汇级别的重叠度测试。",
                tool: Some("sklearn"),
                formula: "from sklearn.metrics import f1_score \n# Calculate F1 score based on precision and recall of tokens\nscore = 2 * (p * r) / (p + r)",
            },
        ],
        datasets: &[
            Dataset {
                name: "MedQA (USMLE)",
                tags: &["临床知识"],
                kpis: &["Accuracy"],
                description: "美国医疗执照考试题目，评估 AI 是否具备人类医生水平的知识。",
            },
            Dataset {
                name: "GeneTuring",
                tags: &["基因组学"],
                kpis: &["Exact Match"],
                description: "专门针对基因组学的 QA 库（包含基因位置、别名），测试分子生物学细节。",
            },
            Dataset {
                name: "MedMCQA",
                tags: &["广泛覆盖"],
                kpis: &["Accuracy"],
                description: "涵盖印度医学入学考试的 19.4万 个问题，适合做稳定性测试。",
            },
            Dataset {
                name: "MMLU-Med",
                tags: &["Zero-shot"],
                kpis: &["Zero-shot Acc"],
                description: "用于评估模型在没有微调情况下的通用生物学常识水平。",
            },
        ],
        radar: None,
    },
    ModuleRecord {
        id: ModuleId::ToolCalling,
        title: "工具调用 / Agents",
        icon: IconName::Wrench,
        summary: "评估智能体是否能够使用正确的参数调用外部 API（如 NCBI, BLAST）。",
        metrics: &[
            Metric {
                name: "工具成功率 (Tool Success)",
                description: "成功调用且符合 Schema 规范。",
                tool: Some("Schema Validator"),
                formula: "def success(outputs): \n    # Calculate ratio of successful outputs to total\n    return len([o for o in outputs if o.ok]) / total",
            },
            Metric {
                name: "参数幻觉 (Arg Hallucination)",
                description: "检查参数是否为捏造或无效。",
                tool: Some("Validation Logic"),
                formula: "def check_args(schema, args): \n    # Return 1 minus the error rate of invalid arguments\n    return 1 - (invalid / total)",
            },
        ],
        datasets: &[
            Dataset {
                name: "ChemCrow Bench",
                tags: &["化学工具"],
                kpis: &["Success Rate"],
                description: "化学 Agent 权威基准。测试使用工具进行分子合成规划、性质预测的能力。",
            },
            Dataset {
                name: "SciBench",
                tags: &["科学计算"],
                kpis: &["Calc Accuracy"],
                description: "专注于复杂的科学计算问题，如浓度计算、动力学方程求解。",
            },
            Dataset {
                name: "Mol-Instructions",
                tags: &["蛋白质设计"],
                kpis: &["Validity"],
                description: "包含关于生物分子的指令任务，测试指令遵循与工具执行。",
            },
            Dataset {
                name: "ToolBench-Bio",
                tags: &["API 调用"],
                kpis: &["Pass Rate"],
                description: "通用生物类 API 调用场景，测试参数填充和错误处理。",
            },
        ],
        radar: None,
    },
    ModuleRecord {
        id: ModuleId::DeepResearch,
        title: "深度研究",
        icon: IconName::Microscope,
        summary: "评估合成长篇报告、准确引用来源以及全面覆盖主题的能力。",
        metrics: &[
            Metric {
                name: "引用精确度 (Citation Precision)",
                description: "引用是否确实支持了论点。",
                tool: Some("Custom Eval"),
                formula: "def cite_prec(report, sources): \n    # Calculate precision of citations supporting the report claims\n    return hits / len(report.citations)",
            },
            Metric {
                name: "真实性 (Factuality)",
                description: "使用 NLI 模型判断内容的真实性。",
                tool: Some("RoBERTa-MNLI"),
                formula: "from transformers import pipeline\n# Use NLI pipeline to check entailment\npipe = pipeline(\"nli\", model=\"roberta-mnli\")",
            },
        ],
        datasets: &[
            Dataset {
                name: "LitQA (LitQA2)",
                tags: &["防泄漏", "多步检索"],
                kpis: &["Accuracy", "Evidence Retrieval"],
                description: "由 LabWorm 团队开发。基于最新文献的防泄漏基准测试，防止训练数据污染。需要专家级的多步检索和综合能力。",
            },
            Dataset {
                name: "Cochrane Reviews",
                tags: &["系统综述"],
                kpis: &["ROUGE-L"],
                description: "循证医学最高标准。测试从多篇文献中总结结论的能力。",
            },
            Dataset {
                name: "Qasper",
                tags: &["证据提取"],
                kpis: &["Evidence F1"],
                description: "专注于从学术论文全文中回答问题并定位证据片段。",
            },
            Dataset {
                name: "LongHealth",
                tags: &["长上下文"],
                kpis: &["Retrieval Acc"],
                description: "针对超长临床病历和文献的问答，测试长窗口遗忘问题。",
            },
            Dataset {
                name: "MS^2",
                tags: &["摘要生成"],
                kpis: &["BERTScore"],
                description: "医学领域多文档摘要任务，对应 Research Agent 核心产出。",
            },
        ],
        radar: None,
    },
];
