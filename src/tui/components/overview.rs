//! # OverviewPanel Component
//!
//! The Overview module's comparison chart, re-expressed for a character
//! grid: one group per dimension with agent and baseline score bars scaled
//! against the axis `full_mark`.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::content::{Labels, RadarPoint};

pub struct OverviewPanel {
    radar: &'static [RadarPoint],
    labels: &'static Labels,
}

impl OverviewPanel {
    pub fn new(radar: &'static [RadarPoint], labels: &'static Labels) -> Self {
        Self { radar, labels }
    }

    /// Fixed height: three lines per dimension plus a separating blank line,
    /// inside a bordered block. Bars shrink with width, the line count
    /// doesn't.
    pub fn height(&self) -> u16 {
        let groups = self.radar.len() as u16;
        if groups == 0 {
            return 2;
        }
        groups * 4 - 1 + 2
    }

    fn build(&self, width: u16) -> Paragraph<'static> {
        // Series labels share a column so the bars line up.
        let label_width = self
            .labels
            .bio_agent
            .width()
            .max(self.labels.baseline.width());
        // borders + indent + label + gap + "100 " score column
        let bar_width = (width as usize)
            .saturating_sub(2 + 2 + label_width + 1 + 4)
            .clamp(10, 48);

        let mut text = Text::default();
        for (i, point) in self.radar.iter().enumerate() {
            if i > 0 {
                text.lines.push(Line::default());
            }
            text.lines.push(Line::from(Span::styled(
                point.subject,
                Style::default().add_modifier(Modifier::BOLD),
            )));
            text.lines.push(score_bar(
                self.labels.bio_agent,
                label_width,
                point.agent,
                point.full_mark,
                bar_width,
                Style::default().fg(Color::Cyan),
            ));
            text.lines.push(score_bar(
                self.labels.baseline,
                label_width,
                point.baseline,
                point.full_mark,
                bar_width,
                Style::default().fg(Color::DarkGray),
            ));
        }

        Paragraph::new(text).block(
            Block::bordered()
                .title(format!(" {} ", self.labels.holistic_title))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .title_bottom(
                    Line::from(format!(" {} ", self.labels.holistic_desc)).right_aligned(),
                )
                .border_style(Style::default().fg(Color::DarkGray)),
        )
    }
}

impl Widget for OverviewPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.build(area.width).render(area, buf);
    }
}

fn score_bar(
    label: &'static str,
    label_width: usize,
    value: u16,
    full_mark: u16,
    bar_width: usize,
    style: Style,
) -> Line<'static> {
    let filled = if full_mark == 0 {
        0
    } else {
        (value as usize * bar_width) / full_mark as usize
    };
    let padding = label_width.saturating_sub(label.width());
    Line::from(vec![
        Span::styled(
            format!("  {}{} ", label, " ".repeat(padding)),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(format!("{:>3} ", value), style.add_modifier(Modifier::BOLD)),
        Span::styled("█".repeat(filled), style),
        Span::styled(
            "░".repeat(bar_width.saturating_sub(filled)),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Language, labels, modules};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn radar() -> &'static [RadarPoint] {
        modules(Language::En)[0].radar.unwrap()
    }

    #[test]
    fn height_is_four_lines_per_dimension() {
        let panel = OverviewPanel::new(radar(), labels(Language::En));
        // 6 dimensions × 4 - 1 + 2 borders
        assert_eq!(panel.height(), 25);
    }

    #[test]
    fn renders_subjects_and_scores() {
        let backend = TestBackend::new(80, 26);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let panel = OverviewPanel::new(radar(), labels(Language::En));
                f.render_widget(panel, f.area());
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Holistic System Evaluation"));
        assert!(text.contains("Retrieval Accuracy"));
        assert!(text.contains("92"));
        assert!(text.contains("65"));
    }
}
