//! Formula → ratatui `Text` highlighter.
//!
//! Metric formulas are short Python snippets; syntect turns them into styled
//! lines. Loading the syntax and theme sets is expensive, so both live in
//! `LazyLock` statics shared by every card.

use std::sync::LazyLock;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span, Text};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Highlight a Python source block. Falls back to unstyled lines when a line
/// fails to highlight.
///
/// Returns owned text (`'static`) so callers aren't constrained by input
/// lifetime.
pub fn python(code: &str) -> Text<'static> {
    let syntax = SYNTAX_SET
        .find_syntax_by_token("py")
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());
    let theme = &THEME_SET.themes["base16-ocean.dark"];
    let mut highlighter = HighlightLines::new(syntax, theme);

    let mut text = Text::default();
    for line in LinesWithEndings::from(code) {
        match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(ranges) => {
                let spans: Vec<Span<'static>> = ranges
                    .into_iter()
                    .filter_map(|(hl_style, frag)| {
                        // Expand tabs — ratatui renders \t as zero-width
                        let content = frag.trim_end_matches('\n').replace('\t', "    ");
                        if content.is_empty() {
                            return None;
                        }
                        let fg = Color::Rgb(
                            hl_style.foreground.r,
                            hl_style.foreground.g,
                            hl_style.foreground.b,
                        );
                        Some(Span::styled(content, Style::default().fg(fg)))
                    })
                    .collect();
                text.lines.push(Line::from(spans));
            }
            Err(_) => {
                text.lines
                    .push(Line::raw(line.trim_end_matches('\n').to_owned()));
            }
        }
    }
    text
}
