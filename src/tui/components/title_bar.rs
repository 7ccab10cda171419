//! # TitleBar Component
//!
//! Top status bar: evaluation context, current status, and the language
//! toggle hint.
//!
//! Stateless — it receives all data as props and has no internal state. The
//! hint always names the *other* language, mirroring a toggle button.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::{Labels, Language};
use crate::tui::component::Component;

/// Props for the top bar. `status_message` comes from core App state; the
/// rest are label-table strings for the active language.
pub struct TitleBar<'a> {
    pub labels: &'static Labels,
    pub status_message: &'a str,
    pub language: Language,
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().fg(Color::DarkGray);
        let line = Line::from(vec![
            Span::styled(
                "Bioeval",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" · ", dim),
            Span::raw(format!(
                "{}: {}",
                self.labels.current_context, self.labels.context_desc
            )),
            Span::styled(" | ", dim),
            Span::styled(
                format!("{}: ", self.labels.status),
                Style::default().fg(Color::Green),
            ),
            Span::raw(self.status_message.to_string()),
            Span::styled(" | ", dim),
            Span::styled(
                format!("l→{}", self.language.toggle().display_name()),
                dim,
            ),
        ]);
        frame.render_widget(line, area);
    }
}
