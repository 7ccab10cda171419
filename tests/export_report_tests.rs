use bioeval::content::{self, Language, ModuleId, ModuleRecord};
use bioeval::core::state::App;
use bioeval::export::{CSV_MIME, FileSink, ReportSink, export_report, render_report, report_filename};
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn record(language: Language, id: ModuleId) -> &'static ModuleRecord {
    content::modules(language)
        .iter()
        .find(|r| r.id == id)
        .expect("record exists")
}

/// Splits a rendered document into its blank-line-separated sections.
fn sections(document: &str) -> Vec<Vec<&str>> {
    document
        .split("\n\n")
        .map(|section| section.lines().collect())
        .collect()
}

// ============================================================================
// Document Layout
// ============================================================================

#[test]
fn rag_report_has_header_metrics_and_datasets_sections() {
    let rag = record(Language::En, ModuleId::Rag);
    let document = render_report(rag);
    let sections = sections(&document);

    assert_eq!(sections.len(), 3);

    let header = &sections[0];
    assert_eq!(header[0], "Module,RAG Evaluation");
    assert!(header[1].starts_with("Summary,\""));

    let metrics = &sections[1];
    assert_eq!(metrics[0], "METRICS");
    assert_eq!(metrics[1], "Name,Description,Tool,Formula");
    // 2 header lines + one row per metric, in collection order
    assert_eq!(metrics.len(), 2 + rag.metrics.len());
    assert!(metrics[2].starts_with("\"Context Recall\","));
    assert!(metrics[3].starts_with("\"Faithfulness\","));

    let datasets = &sections[2];
    assert_eq!(datasets[0], "DATASETS");
    assert_eq!(datasets[1], "Name,Tags,KPIs,Description");
    assert_eq!(datasets.len(), 2 + rag.datasets.len());
    assert!(datasets[2].starts_with("\"BioASQ (Task B)\","));
}

#[test]
fn overview_report_omits_metrics_and_datasets_sections() {
    let overview = record(Language::En, ModuleId::Overview);
    let document = render_report(overview);

    assert!(!document.contains("METRICS"));
    assert!(!document.contains("DATASETS"));

    let sections = sections(&document);
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0][0], "Module,System Overview");
    assert_eq!(sections[1][0], "OVERVIEW DATA");
}

#[test]
fn overview_block_has_exact_shape() {
    let overview = record(Language::En, ModuleId::Overview);
    let document = render_report(overview);
    let sections = sections(&document);
    let block = &sections[1];

    assert_eq!(block[0], "OVERVIEW DATA");
    assert_eq!(block[1], "Dimension,Bio-Agent Score,Baseline Score");
    assert_eq!(block[2], "\"Retrieval Accuracy\",92,65");
    // One row per radar point, numeric columns unquoted
    assert_eq!(block.len(), 2 + overview.radar.unwrap().len());
    for row in &block[2..] {
        let fields: Vec<&str> = row.rsplitn(3, ',').collect();
        assert!(fields[0].parse::<u16>().is_ok(), "unquoted baseline: {row}");
        assert!(fields[1].parse::<u16>().is_ok(), "unquoted agent: {row}");
    }
}

#[test]
fn every_module_renders_without_raw_newlines_inside_rows() {
    for language in [Language::En, Language::Zh] {
        for record in content::modules(language) {
            let document = render_report(record);
            // Multi-line formulas must have been collapsed: each line is a
            // complete record, so quote count per line is even.
            for line in document.lines() {
                let quotes = line.matches('"').count();
                assert!(quotes % 2 == 0, "unbalanced quotes in {line:?}");
            }
        }
    }
}

// ============================================================================
// Escaping
// ============================================================================

#[test]
fn summary_quotes_are_doubled() {
    // The BioASQ description carries real double quotes
    let rag = record(Language::En, ModuleId::Rag);
    let document = render_report(rag);
    assert!(document.contains("The \"\"Olympics\"\" of biomedical retrieval."));
}

#[test]
fn formula_line_breaks_collapse_to_spaces() {
    let rag = record(Language::En, ModuleId::Rag);
    let document = render_report(rag);
    let row = document
        .lines()
        .find(|l| l.starts_with("\"Context Recall\""))
        .unwrap();
    assert!(row.contains(
        "\"def context_recall(retrieved, ground_truth):      # Check intersection of retrieved content and ground truth     return len(set(retrieved) & set(ground_truth)) / len(ground_truth)\""
    ));
}

#[test]
fn formula_embedded_quotes_survive_doubling() {
    // The Factuality formula contains "nli" and "roberta-mnli" in quotes
    let research = record(Language::En, ModuleId::DeepResearch);
    let document = render_report(research);
    assert!(document.contains("pipe = pipeline(\"\"nli\"\", model=\"\"roberta-mnli\"\")"));
}

#[test]
fn absent_tool_exports_as_empty_field() {
    static RECORD: ModuleRecord = ModuleRecord {
        id: ModuleId::Rag,
        title: "Test",
        icon: bioeval::content::IconName::Database,
        summary: "s",
        metrics: &[bioeval::content::Metric {
            name: "Recall",
            description: "plain",
            tool: None,
            formula: "score",
        }],
        datasets: &[],
        radar: None,
    };
    let document = render_report(&RECORD);
    assert!(document.contains("\"Recall\",\"plain\",\"\",\"score\""));
}

// ============================================================================
// Filenames and Sink
// ============================================================================

#[test]
fn filename_from_title() {
    assert_eq!(report_filename("RAG Evaluation"), "RAG_Evaluation_Report.csv");
    assert_eq!(report_filename("System Overview"), "System_Overview_Report.csv");
}

#[test]
fn file_sink_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let sink = FileSink::new(dir.path());
    let qa = record(Language::En, ModuleId::Qa);

    let path = export_report(qa, &sink).unwrap();

    assert_eq!(path, dir.path().join("QA_&_Reasoning_Report.csv"));
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_report(qa));
}

#[test]
fn sink_receives_csv_mime() {
    use std::cell::RefCell;

    struct MimeCheck(RefCell<Option<String>>);

    impl ReportSink for MimeCheck {
        fn save(&self, _: &[u8], filename: &str, mime: &str) -> std::io::Result<PathBuf> {
            *self.0.borrow_mut() = Some(mime.to_string());
            Ok(PathBuf::from(filename))
        }
    }

    let sink = MimeCheck(RefCell::new(None));
    export_report(record(Language::En, ModuleId::Overview), &sink).unwrap();
    assert_eq!(sink.0.borrow().as_deref(), Some(CSV_MIME));
}

// ============================================================================
// Navigation Invariants
// ============================================================================

#[test]
fn modules_are_complete_with_overview_first() {
    for language in [Language::En, Language::Zh] {
        let records = content::modules(language);
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].id, ModuleId::Overview);
        let ids: std::collections::HashSet<ModuleId> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 5, "ids must be unique in {language:?}");
    }
}

#[test]
fn fallback_returns_first_record() {
    use bioeval::core::state::resolve_record;

    for language in [Language::En, Language::Zh] {
        let records = content::modules(language);

        // Every shipped id resolves to its own record
        for record in records {
            let app = App::new(language, record.id, PathBuf::from("."));
            assert!(std::ptr::eq(app.active_record(), record));
        }

        // An id absent from the collection resolves to the first record,
        // same as selecting the first id directly (fallback determinism)
        let tail = &records[1..];
        let fallback = resolve_record(tail, ModuleId::Overview);
        let first = resolve_record(tail, tail[0].id);
        assert!(std::ptr::eq(fallback, first));
    }
}

#[test]
fn language_switch_preserves_selection_and_round_trips() {
    let mut app = App::new(Language::En, ModuleId::DeepResearch, PathBuf::from("."));
    app.language = app.language.toggle();
    assert_eq!(app.active_record().title, "深度研究");
    app.language = app.language.toggle();
    assert_eq!(app.active_record().title, "Deep Research");
}

#[test]
fn exported_chinese_report_matches_chinese_table() {
    let rag = record(Language::Zh, ModuleId::Rag);
    let document = render_report(rag);
    assert!(document.starts_with("Module,RAG 评估"));
    assert!(document.contains("\"上下文召回率 (Context Recall)\""));
    assert_eq!(report_filename(rag.title), "RAG_评估_Report.csv");
}
