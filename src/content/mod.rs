//! # Content Store
//!
//! All dashboard content lives here as compiled-in static tables, one per
//! language. Records are constructed once and never mutated; accessors hand
//! out `&'static` borrows.
//!
//! ```text
//! modules(Language) ──▶ &'static [ModuleRecord]   (Overview always first)
//! labels(Language)  ──▶ &'static Labels           (UI strings)
//! ```
//!
//! The TUI and the exporter both consume these tables; neither owns content.

mod en;
pub mod labels;
mod zh;

pub use labels::{Labels, labels};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the two supported display languages.
///
/// A closed set: there is no "unsupported language" runtime path anywhere
/// in the crate because this enum is the only way to name a language.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh")]
    Zh,
}

impl Language {
    /// Flips between the two supported languages. `toggle` is an involution:
    /// applying it twice returns the original value.
    pub fn toggle(self) -> Language {
        match self {
            Language::En => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    /// Native display name of this language.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "中文",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

/// Identifier of one of the five evaluation modules.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleId {
    #[default]
    Overview,
    Rag,
    Qa,
    ToolCalling,
    DeepResearch,
}

/// Symbolic icon for a module. Resolved to an actual glyph only in the
/// rendering layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconName {
    Dashboard,
    Database,
    MessageSquare,
    Wrench,
    Microscope,
}

/// One evaluation formula. The formula body is display-only Python source
/// and is never parsed or executed.
#[derive(Debug, PartialEq, Eq)]
pub struct Metric {
    pub name: &'static str,
    pub description: &'static str,
    /// Reference implementation/library, shown as a badge when present.
    pub tool: Option<&'static str>,
    /// Multi-line source text block.
    pub formula: &'static str,
}

/// One benchmark dataset reference. Absent tags/KPIs are empty slices, not
/// a distinct "missing" state.
#[derive(Debug, PartialEq, Eq)]
pub struct Dataset {
    pub name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub kpis: &'static [&'static str],
}

/// One axis of the Overview comparison panel. Scores are integral in the
/// source data; `full_mark` is the axis upper bound (100 everywhere today).
#[derive(Debug, PartialEq, Eq)]
pub struct RadarPoint {
    pub subject: &'static str,
    pub agent: u16,
    pub baseline: u16,
    pub full_mark: u16,
}

/// One evaluation domain: everything a module page displays and exports.
#[derive(Debug, PartialEq, Eq)]
pub struct ModuleRecord {
    pub id: ModuleId,
    pub title: &'static str,
    pub icon: IconName,
    pub summary: &'static str,
    /// Insertion order is display order. Empty for Overview.
    pub metrics: &'static [Metric],
    /// Empty for Overview.
    pub datasets: &'static [Dataset],
    /// Present only on the Overview record.
    pub radar: Option<&'static [RadarPoint]>,
}

/// Returns the module collection for a language. Total over both language
/// codes; the Overview record is always first.
pub fn modules(language: Language) -> &'static [ModuleRecord] {
    match language {
        Language::En => &en::MODULES,
        Language::Zh => &zh::MODULES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_record_per_module_id_overview_first() {
        for language in [Language::En, Language::Zh] {
            let records = modules(language);
            assert_eq!(records.len(), 5);
            assert_eq!(records[0].id, ModuleId::Overview);
            for id in [
                ModuleId::Overview,
                ModuleId::Rag,
                ModuleId::Qa,
                ModuleId::ToolCalling,
                ModuleId::DeepResearch,
            ] {
                assert_eq!(
                    records.iter().filter(|r| r.id == id).count(),
                    1,
                    "{:?} must appear exactly once in {:?}",
                    id,
                    language
                );
            }
        }
    }

    #[test]
    fn languages_share_the_same_id_order() {
        let en_ids: Vec<ModuleId> = modules(Language::En).iter().map(|r| r.id).collect();
        let zh_ids: Vec<ModuleId> = modules(Language::Zh).iter().map(|r| r.id).collect();
        assert_eq!(en_ids, zh_ids);
    }

    #[test]
    fn overview_has_radar_and_no_metric_content() {
        for language in [Language::En, Language::Zh] {
            let overview = &modules(language)[0];
            assert!(overview.metrics.is_empty());
            assert!(overview.datasets.is_empty());
            let radar = overview.radar.expect("overview carries radar data");
            assert_eq!(radar.len(), 6);
            assert!(radar.iter().all(|p| p.full_mark == 100));
            assert!(
                radar
                    .iter()
                    .all(|p| p.agent <= p.full_mark && p.baseline <= p.full_mark)
            );
        }
    }

    #[test]
    fn non_overview_modules_have_metrics_and_datasets() {
        for language in [Language::En, Language::Zh] {
            for record in modules(language).iter().skip(1) {
                assert!(record.radar.is_none(), "{:?} must not carry radar", record.id);
                assert!(!record.metrics.is_empty());
                assert!(!record.datasets.is_empty());
            }
        }
    }

    #[test]
    fn toggle_language_is_an_involution() {
        for language in [Language::En, Language::Zh] {
            assert_eq!(language.toggle().toggle(), language);
        }
        assert_ne!(Language::En.toggle(), Language::En);
    }
}
