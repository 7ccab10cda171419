//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm; the
//! exporter is reached exclusively through the `Effect` values returned by
//! `core::action::update`.
//!
//! ## Redraw Strategy
//!
//! The dashboard is fully static between user inputs, so the loop sleeps in
//! `poll` (up to 250ms) and only redraws after an event arrived.

mod component;
pub mod components;
mod event;
pub mod highlight;
mod ui;

use log::{info, warn};
use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::widgets::ListState;

use crate::content;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::export::{self, FileSink, ReportSink};
use crate::tui::component::EventHandler;
use crate::tui::components::ModuleViewState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub sidebar_list: ListState,
    pub module_view: ModuleViewState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            sidebar_list: ListState::default(),
            module_view: ModuleViewState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let sink = FileSink::new(app.export_dir.clone());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(250));

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                // Resize just needs a redraw (already flagged above)
                TuiEvent::Resize => {}
                TuiEvent::Quit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        should_quit = true;
                    }
                }
                TuiEvent::CursorUp => select_step(&mut app, &mut tui, -1),
                TuiEvent::CursorDown => select_step(&mut app, &mut tui, 1),
                TuiEvent::SelectIndex(index) => select_index(&mut app, &mut tui, index),
                TuiEvent::ToggleLanguage => {
                    update(&mut app, Action::ToggleLanguage);
                    info!("Language switched to {}", app.language.code());
                    tui.module_view.reset();
                }
                TuiEvent::Export => {
                    if update(&mut app, Action::ExportReport) == Effect::ExportReport {
                        perform_export(&mut app, &sink);
                    }
                }
                // Scroll events go to the module view
                TuiEvent::ScrollUp
                | TuiEvent::ScrollDown
                | TuiEvent::ScrollPageUp
                | TuiEvent::ScrollPageDown
                | TuiEvent::ScrollTop
                | TuiEvent::ScrollBottom => {
                    tui.module_view.handle_event(&event);
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Move the selection up or down the active language's module list,
/// clamped at both ends.
fn select_step(app: &mut App, tui: &mut TuiState, delta: isize) {
    let records = content::modules(app.language);
    let current = app.active_index() as isize;
    let next = (current + delta).clamp(0, records.len() as isize - 1) as usize;
    select_index(app, tui, next);
}

/// Select the module at a list position (digit shortcuts land here too).
/// Out-of-range positions are ignored.
fn select_index(app: &mut App, tui: &mut TuiState, index: usize) {
    let records = content::modules(app.language);
    let Some(record) = records.get(index) else {
        return;
    };
    if record.id != app.active_module {
        update(app, Action::SelectModule(record.id));
        tui.module_view.reset();
    }
}

/// Render the active record and hand it to the sink. Failures surface in
/// the status bar and the log; there is no retry.
fn perform_export(app: &mut App, sink: &dyn ReportSink) {
    let record = app.active_record();
    match export::export_report(record, sink) {
        Ok(path) => {
            info!("Exported {} to {}", record.title, path.display());
            let timestamp = chrono::Local::now().format("%H:%M:%S");
            app.status_message = format!(
                "{} → {} ({})",
                app.labels().export_report,
                path.display(),
                timestamp
            );
        }
        Err(e) => {
            warn!("Export failed for {}: {}", record.title, e);
            app.status_message = format!("Export failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Language, ModuleId};
    use std::path::PathBuf;

    fn test_app() -> App {
        App::new(Language::En, ModuleId::Overview, PathBuf::from("."))
    }

    #[test]
    fn select_step_clamps_at_both_ends() {
        let mut app = test_app();
        let mut tui = TuiState::new();

        select_step(&mut app, &mut tui, -1);
        assert_eq!(app.active_module, ModuleId::Overview);

        for _ in 0..10 {
            select_step(&mut app, &mut tui, 1);
        }
        assert_eq!(app.active_module, ModuleId::DeepResearch);
    }

    #[test]
    fn select_index_ignores_out_of_range() {
        let mut app = test_app();
        let mut tui = TuiState::new();
        select_index(&mut app, &mut tui, 99);
        assert_eq!(app.active_module, ModuleId::Overview);

        select_index(&mut app, &mut tui, 3);
        assert_eq!(app.active_module, ModuleId::ToolCalling);
    }

    #[test]
    fn export_effect_writes_through_sink() {
        use std::cell::RefCell;

        struct RecordingSink {
            saves: RefCell<Vec<(String, String, usize)>>,
        }

        impl ReportSink for RecordingSink {
            fn save(
                &self,
                bytes: &[u8],
                filename: &str,
                mime: &str,
            ) -> std::io::Result<PathBuf> {
                self.saves.borrow_mut().push((
                    filename.to_string(),
                    mime.to_string(),
                    bytes.len(),
                ));
                Ok(PathBuf::from(filename))
            }
        }

        let mut app = test_app();
        app.active_module = ModuleId::Rag;
        let sink = RecordingSink {
            saves: RefCell::new(Vec::new()),
        };

        perform_export(&mut app, &sink);

        let saves = sink.saves.borrow();
        assert_eq!(saves.len(), 1);
        let (filename, mime, len) = &saves[0];
        assert_eq!(filename, "RAG_Evaluation_Report.csv");
        assert_eq!(mime, "text/csv;charset=utf-8");
        assert!(*len > 0);
        assert!(app.status_message.contains("RAG_Evaluation_Report.csv"));
    }

    #[test]
    fn failed_export_reports_in_status() {
        struct FailingSink;

        impl ReportSink for FailingSink {
            fn save(&self, _: &[u8], _: &str, _: &str) -> std::io::Result<PathBuf> {
                Err(std::io::Error::other("disk full"))
            }
        }

        let mut app = test_app();
        perform_export(&mut app, &FailingSink);
        assert!(app.status_message.contains("Export failed"));
        assert!(app.status_message.contains("disk full"));
    }
}
