//! # Sidebar Component
//!
//! Module navigation list. The active module is core App state; the sidebar
//! only mirrors it, so this component is a transient wrapper around a
//! borrowed `ListState` plus props.
//!
//! Titles mix Latin and CJK text; truncation and padding go through
//! `unicode-width` so the highlight bar lines up in both languages.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::content::{IconName, Labels, Language, ModuleRecord};
use crate::tui::component::Component;

/// Transient render wrapper for the module list.
pub struct Sidebar<'a> {
    list_state: &'a mut ListState,
    records: &'static [ModuleRecord],
    active_index: usize,
    labels: &'static Labels,
    language: Language,
}

impl<'a> Sidebar<'a> {
    pub fn new(
        list_state: &'a mut ListState,
        records: &'static [ModuleRecord],
        active_index: usize,
        labels: &'static Labels,
        language: Language,
    ) -> Self {
        Self {
            list_state,
            records,
            active_index,
            labels,
            language,
        }
    }
}

impl Component for Sidebar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.list_state.select(Some(self.active_index));

        let help_text = format!(
            " ↑↓ 1-5  e {}  l {}  q ",
            self.labels.export_report,
            self.language.toggle().display_name()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" {} ", self.labels.modules))
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [list_area, footer_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        // "1 ▦ System Overview" with the title padded to the full row so the
        // highlight covers the whole line.
        let title_width = (list_area.width as usize).saturating_sub(4);
        let items: Vec<ListItem> = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let style = if i == self.active_index {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let title = pad_to_width(&truncate_to_width(record.title, title_width), title_width);
                let line = Line::from(vec![
                    Span::styled(format!("{} ", i + 1), style.add_modifier(Modifier::DIM)),
                    Span::styled(format!("{} ", icon_glyph(record.icon)), style),
                    Span::styled(title, style),
                ]);
                ListItem::new(line)
            })
            .collect();

        frame.render_stateful_widget(List::new(items), list_area, &mut *self.list_state);

        let footer = Paragraph::new(self.labels.designed_for)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, footer_area);
    }
}

/// Resolve a symbolic icon to a terminal glyph. Only the rendering layer
/// knows about glyphs; the data model stays symbolic.
fn icon_glyph(icon: IconName) -> &'static str {
    match icon {
        IconName::Dashboard => "▦",
        IconName::Database => "⛁",
        IconName::MessageSquare => "✉",
        IconName::Wrench => "⚙",
        IconName::Microscope => "⚗",
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "…"
/// if needed. CJK characters occupy two columns.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pad with spaces to exactly `width` display columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Language, labels, modules};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("RAG", 10), "RAG");
    }

    #[test]
    fn truncate_counts_cjk_as_two_columns() {
        // Each CJK char is two columns: "系统" = 4 columns + ellipsis fits in 5
        assert_eq!(truncate_to_width("系统概览", 5), "系统…");
        assert_eq!(truncate_to_width("系统概览", 8), "系统概览");
    }

    #[test]
    fn pad_accounts_for_display_width() {
        assert_eq!(pad_to_width("系统", 6).width(), 6);
        assert_eq!(pad_to_width("ab", 4), "ab  ");
    }

    #[test]
    fn renders_all_modules_with_shortcuts() {
        let backend = TestBackend::new(32, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut list_state = ListState::default();
        let mut sidebar = Sidebar::new(
            &mut list_state,
            modules(Language::En),
            0,
            labels(Language::En),
            Language::En,
        );
        terminal.draw(|f| sidebar.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Evaluation Modules"));
        assert!(text.contains("System Overview"));
        assert!(text.contains("Deep Research"));
        assert!(text.contains("Designed for Bio-Agents"));
    }
}
