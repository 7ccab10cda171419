//! # Report Exporter
//!
//! Serializes one module record into a CSV text document and hands it to a
//! [`ReportSink`]. Building the document is pure; only the sink touches the
//! filesystem, so the CSV contract is testable without any I/O.
//!
//! Document shape: ordered sections separated by exactly one blank line.
//!
//! ```text
//! Module,<title>
//! Summary,"<summary>"
//!
//! METRICS
//! Name,Description,Tool,Formula
//! "<name>","<description>","<tool>","<formula>"
//!
//! DATASETS
//! Name,Tags,KPIs,Description
//! "<name>","<tags; joined>","<kpis; joined>","<description>"
//! ```
//!
//! The Overview record has no metrics or datasets and instead appends an
//! `OVERVIEW DATA` section with unquoted numeric score columns.

use log::debug;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::content::ModuleRecord;

/// Media type recorded with every saved report.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// Destination for rendered reports. The dashboard injects a [`FileSink`];
/// tests inject an in-memory recorder.
pub trait ReportSink {
    /// Persist `bytes` under `filename`, returning where it landed.
    fn save(&self, bytes: &[u8], filename: &str, mime: &str) -> io::Result<PathBuf>;
}

/// Writes reports into a fixed directory, creating it on demand.
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReportSink for FileSink {
    fn save(&self, bytes: &[u8], filename: &str, mime: &str) -> io::Result<PathBuf> {
        let path = self.dir.join(filename);
        // Suggested filenames may carry path separators (titles like
        // "Tool Use / Agents"); create the whole parent chain.
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, bytes)?;
        debug!("Saved {} ({} bytes, {})", path.display(), bytes.len(), mime);
        Ok(path)
    }
}

/// Renders `record` and saves it through `sink` under the record's
/// derived filename.
pub fn export_report(record: &ModuleRecord, sink: &dyn ReportSink) -> io::Result<PathBuf> {
    let document = render_report(record);
    let filename = report_filename(record.title);
    sink.save(document.as_bytes(), &filename, CSV_MIME)
}

/// Builds the CSV document for one module record.
pub fn render_report(record: &ModuleRecord) -> String {
    let mut sections: Vec<Vec<String>> = Vec::new();

    sections.push(vec![
        format!("Module,{}", record.title),
        format!("Summary,{}", quoted(record.summary)),
    ]);

    if !record.metrics.is_empty() {
        let mut block = Vec::with_capacity(record.metrics.len() + 2);
        block.push("METRICS".to_string());
        block.push("Name,Description,Tool,Formula".to_string());
        for metric in record.metrics {
            // Formulas are multi-line blocks; collapse the breaks so each
            // metric stays one CSV record.
            let formula = collapse_line_breaks(metric.formula);
            block.push(format!(
                "{},{},{},{}",
                quoted(metric.name),
                quoted(metric.description),
                quoted(metric.tool.unwrap_or("")),
                quoted(&formula),
            ));
        }
        sections.push(block);
    }

    if !record.datasets.is_empty() {
        let mut block = Vec::with_capacity(record.datasets.len() + 2);
        block.push("DATASETS".to_string());
        block.push("Name,Tags,KPIs,Description".to_string());
        for dataset in record.datasets {
            block.push(format!(
                "{},{},{},{}",
                quoted(dataset.name),
                quoted(&dataset.tags.join("; ")),
                quoted(&dataset.kpis.join("; ")),
                quoted(dataset.description),
            ));
        }
        sections.push(block);
    }

    if let Some(radar) = record.radar {
        let mut block = Vec::with_capacity(radar.len() + 2);
        block.push("OVERVIEW DATA".to_string());
        block.push("Dimension,Bio-Agent Score,Baseline Score".to_string());
        for point in radar {
            // Score columns stay unquoted numerics.
            block.push(format!(
                "{},{},{}",
                quoted(point.subject),
                point.agent,
                point.baseline
            ));
        }
        sections.push(block);
    }

    sections
        .iter()
        .map(|lines| lines.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Suggested filename for a report: every run of whitespace in the title
/// becomes a single underscore.
pub fn report_filename(title: &str) -> String {
    let underscored = title.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{underscored}_Report.csv")
}

/// Wraps a field in double quotes, doubling any embedded quote. This is the
/// only escape mechanism; there is no backslash escaping.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Replaces each line-break sequence (`\r\n`, `\n`, lone `\r`) with a single
/// space.
fn collapse_line_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push(' ');
            }
            '\n' => out.push(' '),
            other => out.push(other),
        }
    }
    out
}
