//! # DatasetTable Component
//!
//! Benchmark dataset references as a bordered table: name, tags, KPIs, and
//! a wrapped description column. Column headers come from the label table.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, Cell, Row, Table, Widget};

use crate::content::{Dataset, Labels};

const NAME_WIDTH: u16 = 18;
const TAGS_WIDTH: u16 = 20;
const KPIS_WIDTH: u16 = 18;
const COLUMN_SPACING: u16 = 1;

pub struct DatasetTable {
    datasets: &'static [Dataset],
    labels: &'static Labels,
}

impl DatasetTable {
    pub fn new(datasets: &'static [Dataset], labels: &'static Labels) -> Self {
        Self { datasets, labels }
    }

    /// Rendered height at the given outer width: borders, header row, and
    /// one multi-line row per dataset.
    pub fn height(&self, width: u16) -> u16 {
        let desc_width = description_width(width);
        let rows: u16 = self
            .datasets
            .iter()
            .map(|d| row_height(d, desc_width))
            .sum();
        rows + 1 + 2
    }

    fn build(&self, width: u16) -> Table<'static> {
        let desc_width = description_width(width);

        let header = Row::new([
            self.labels.dataset_name,
            self.labels.tags,
            self.labels.kpis,
            self.labels.desc,
        ])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .datasets
            .iter()
            .map(|dataset| {
                let description = wrap_text(dataset.description, desc_width);
                Row::new([
                    Cell::from(dataset.name),
                    Cell::from(Text::from(dataset.tags.join("\n")))
                        .style(Style::default().fg(Color::Blue)),
                    Cell::from(Text::from(dataset.kpis.join("\n")))
                        .style(Style::default().fg(Color::Magenta)),
                    Cell::from(description).style(Style::default().fg(Color::Gray)),
                ])
                .height(row_height(dataset, desc_width))
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Length(NAME_WIDTH),
                Constraint::Length(TAGS_WIDTH),
                Constraint::Length(KPIS_WIDTH),
                Constraint::Min(10),
            ],
        )
        .column_spacing(COLUMN_SPACING)
        .header(header)
        .block(
            Block::bordered()
                .title(format!(" {} ", self.labels.datasets_title))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::DarkGray)),
        )
    }
}

impl Widget for DatasetTable {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.build(area.width).render(area, buf);
    }
}

/// Columns other than the description are fixed; the description takes the
/// rest of the inner width.
fn description_width(outer_width: u16) -> u16 {
    outer_width
        .saturating_sub(2) // borders
        .saturating_sub(NAME_WIDTH + TAGS_WIDTH + KPIS_WIDTH + 3 * COLUMN_SPACING)
        .max(10)
}

fn row_height(dataset: &Dataset, desc_width: u16) -> u16 {
    let desc_lines = wrap_text(dataset.description, desc_width).lines.len();
    desc_lines
        .max(dataset.tags.len())
        .max(dataset.kpis.len())
        .max(1) as u16
}

fn wrap_text(text: &str, width: u16) -> Text<'static> {
    let wrapped = textwrap::wrap(text, width.max(1) as usize);
    Text::from_iter(wrapped.into_iter().map(|line| line.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Language, ModuleId, labels, modules};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rag_datasets() -> &'static [Dataset] {
        modules(Language::En)
            .iter()
            .find(|r| r.id == ModuleId::Rag)
            .unwrap()
            .datasets
    }

    #[test]
    fn height_tracks_wrapped_descriptions() {
        let table = DatasetTable::new(rag_datasets(), labels(Language::En));
        let narrow = table.height(80);
        let wide = table.height(160);
        assert!(narrow > wide, "narrower table must wrap to more lines");
        // At least one line per dataset + header + borders
        assert!(wide >= rag_datasets().len() as u16 + 3);
    }

    #[test]
    fn renders_headers_and_names() {
        let backend = TestBackend::new(110, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let table = DatasetTable::new(rag_datasets(), labels(Language::En));
                f.render_widget(table, f.area());
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Recommended Datasets"));
        assert!(text.contains("Dataset Name"));
        assert!(text.contains("BioASQ (Task B)"));
        assert!(text.contains("TREC-COVID"));
    }
}
