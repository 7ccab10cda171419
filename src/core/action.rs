//! # Actions
//!
//! Everything the user can do to the dashboard becomes an `Action`.
//! Sidebar click? That's `Action::SelectModule(id)`.
//! Language button? That's `Action::ToggleLanguage`.
//!
//! The `update()` function takes the current state and an action and mutates
//! the state. No side effects here - I/O happens in the TUI adapter, driven
//! by the returned `Effect`.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::content::{Language, ModuleId};
use crate::core::state::App;

/// A user-driven state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Make a module the active one. The id is not validated here;
    /// resolution falls back to the first record for unknown ids.
    SelectModule(ModuleId),
    /// Flip between the two supported languages.
    ToggleLanguage,
    /// Export the active module's report.
    ExportReport,
    Quit,
}

/// Side effect the adapter must perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Render the active record to CSV and hand it to the report sink.
    ExportReport,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SelectModule(id) => {
            app.active_module = id;
            app.status_message = app.active_record().title.to_string();
            Effect::None
        }
        Action::ToggleLanguage => {
            app.language = app.language.toggle();
            // The module id survives the switch; active_record() falls back
            // to the first record if the new table doesn't carry it.
            app.status_message = match app.language {
                Language::En => format!("Language: {}", app.language.display_name()),
                Language::Zh => format!("语言: {}", app.language.display_name()),
            };
            Effect::None
        }
        Action::ExportReport => Effect::ExportReport,
        Action::Quit => Effect::Quit,
    }
}
