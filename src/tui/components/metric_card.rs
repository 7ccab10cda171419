//! # MetricCard Component
//!
//! One evaluation formula: bordered card with the metric name as title, the
//! prose description, an optional tool badge, and the syntect-highlighted
//! Python formula block.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::content::{Labels, Metric};
use crate::tui::highlight;

pub struct MetricCard {
    metric: &'static Metric,
    labels: &'static Labels,
}

impl MetricCard {
    pub fn new(metric: &'static Metric, labels: &'static Labels) -> Self {
        Self { metric, labels }
    }

    /// Rendered height at the given outer width, borders included.
    pub fn height(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(2);
        self.build().line_count(inner_width) as u16
    }

    fn build(&self) -> Paragraph<'static> {
        let mut text = Text::default();
        text.lines.push(Line::from(Span::styled(
            self.metric.description,
            Style::default().fg(Color::Gray),
        )));
        if let Some(tool) = self.metric.tool {
            text.lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", self.labels.python_impl),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(tool, Style::default().fg(Color::Yellow)),
            ]));
        }
        text.lines.push(Line::default());
        text.extend(highlight::python(self.metric.formula));

        Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(format!(" {} ", self.metric.name))
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            // trim would eat formula indentation
            .wrap(Wrap { trim: false })
    }
}

impl Widget for MetricCard {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.build().render(area, buf);
    }
}
