//! # ModuleView Component
//!
//! Scrollable content region for the active module: summary header, then
//! either the Overview comparison panel or the metric cards, dataset table,
//! and version-trend chart.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ModuleViewState` (scroll offset) lives in `TuiState`
//! - `ModuleView` is created each frame with borrowed state and props
//!
//! Sections are measured first, then rendered into a `ScrollView` at their
//! computed offsets with one blank row between sections.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::content::{Labels, ModuleRecord};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::dataset_table::DatasetTable;
use crate::tui::components::metric_card::MetricCard;
use crate::tui::components::overview::OverviewPanel;
use crate::tui::event::TuiEvent;

const TREND_HEIGHT: u16 = 12;

/// Illustrative per-version trend shown under every non-overview module.
/// Display-only, like the summary prose.
const TREND: [(&str, u64); 4] = [("v0.1", 45), ("v0.2", 58), ("v0.3", 72), ("v1.0", 85)];

/// Scroll state for the module view. Must be persisted in the parent
/// `TuiState`; reset when the selection changes so a new module starts at
/// the top.
pub struct ModuleViewState {
    pub scroll_state: ScrollViewState,
    pub viewport_height: u16,
    pub content_height: u16,
}

impl Default for ModuleViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            viewport_height: 0,
            content_height: 0,
        }
    }

    /// Jump back to the top (module or language changed).
    pub fn reset(&mut self) {
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for ModuleViewState {
    type Event = (); // Scrolling is handled internally, nothing to emit

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollTop => self.reset(),
            TuiEvent::ScrollBottom => self.scroll_state.scroll_to_bottom(),
            _ => {}
        }
        None
    }
}

/// One measured block of content, ready to place into the scroll canvas.
enum Section {
    Text(Paragraph<'static>),
    Card(MetricCard),
    Datasets(DatasetTable),
    Overview(OverviewPanel),
    Chart(BarChart<'static>),
}

/// Transient render wrapper for the module content area.
pub struct ModuleView<'a> {
    state: &'a mut ModuleViewState,
    record: &'static ModuleRecord,
    labels: &'static Labels,
}

impl<'a> ModuleView<'a> {
    pub fn new(
        state: &'a mut ModuleViewState,
        record: &'static ModuleRecord,
        labels: &'static Labels,
    ) -> Self {
        Self {
            state,
            record,
            labels,
        }
    }

    fn sections(&self, content_width: u16) -> Vec<(u16, Section)> {
        let mut sections = Vec::new();

        let header = header_paragraph(self.record);
        let header_height = header.line_count(content_width) as u16;
        sections.push((header_height, Section::Text(header)));

        if let Some(radar) = self.record.radar {
            let panel = OverviewPanel::new(radar, self.labels);
            sections.push((panel.height(), Section::Overview(panel)));
            return sections;
        }

        if !self.record.metrics.is_empty() {
            let heading = section_heading(self.labels.metrics_title, self.labels.standard_formulas);
            sections.push((1, Section::Text(heading)));
            for metric in self.record.metrics {
                let card = MetricCard::new(metric, self.labels);
                sections.push((card.height(content_width), Section::Card(card)));
            }
        }

        if !self.record.datasets.is_empty() {
            let table = DatasetTable::new(self.record.datasets, self.labels);
            sections.push((table.height(content_width), Section::Datasets(table)));
        }

        sections.push((TREND_HEIGHT, Section::Chart(trend_chart(self.labels))));
        sections
    }
}

impl Component for ModuleView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // scrollbar column
        if content_width < 20 || area.height == 0 {
            return;
        }

        let sections = self.sections(content_width);
        let gaps = sections.len().saturating_sub(1) as u16;
        let total_height: u16 = sections.iter().map(|(h, _)| *h).sum::<u16>() + gaps;

        self.state.viewport_height = area.height;
        self.state.content_height = total_height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (height, section) in sections {
            let rect = Rect::new(0, y_offset, content_width, height);
            match section {
                Section::Text(paragraph) => scroll_view.render_widget(paragraph, rect),
                Section::Card(card) => scroll_view.render_widget(card, rect),
                Section::Datasets(table) => scroll_view.render_widget(table, rect),
                Section::Overview(panel) => scroll_view.render_widget(panel, rect),
                Section::Chart(chart) => scroll_view.render_widget(chart, rect),
            }
            y_offset += height + 1;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

fn header_paragraph(record: &'static ModuleRecord) -> Paragraph<'static> {
    let mut text = Text::default();
    text.lines.push(Line::from(Span::styled(
        record.title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    )));
    text.lines.push(Line::default());
    text.lines.push(Line::from(Span::styled(
        record.summary,
        Style::default().fg(Color::Gray),
    )));
    Paragraph::new(text).wrap(Wrap { trim: true })
}

fn section_heading(title: &'static str, badge: &'static str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(
            title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  ·  {}", badge), Style::default().fg(Color::DarkGray)),
    ]))
}

fn trend_chart(labels: &'static Labels) -> BarChart<'static> {
    let bars: Vec<Bar> = TREND
        .iter()
        .map(|(version, score)| {
            Bar::default()
                .value(*score)
                .label(Line::from(*version))
                .style(Style::default().fg(Color::Cyan))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    BarChart::default()
        .block(
            Block::bordered()
                .title(format!(" {} ", labels.performance_trend))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .title_bottom(Line::from(format!(" {} ", labels.trend_desc)).right_aligned())
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(2)
        .max(100)
}
