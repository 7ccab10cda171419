//! # Application State
//!
//! Core navigation state for the dashboard. This module contains domain
//! logic only - no TUI-specific types. Presentation state lives in the
//! `tui` module.
//!
//! ```text
//! App
//! ├── language: Language         // active display language
//! ├── active_module: ModuleId    // sidebar selection
//! ├── status_message: String     // status bar text
//! └── export_dir: PathBuf        // where reports are written
//! ```
//!
//! All content is static; `App` only remembers what the user is looking at.
//! State changes only happen through `update(state, action)` in action.rs.

use std::path::PathBuf;

use crate::content::{self, Labels, Language, ModuleId, ModuleRecord};
use crate::core::config::ResolvedConfig;

pub struct App {
    pub language: Language,
    pub active_module: ModuleId,
    pub status_message: String,
    pub export_dir: PathBuf,
}

impl App {
    pub fn new(language: Language, active_module: ModuleId, export_dir: PathBuf) -> Self {
        Self {
            language,
            active_module,
            status_message: content::labels(language).ready.to_string(),
            export_dir,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.language, config.start_module, config.export_dir.clone())
    }

    /// Resolves the record to display: the active language's record matching
    /// `active_module`, or the first record when no id matches (e.g. a stale
    /// selection). Never fails; the module tables are non-empty by
    /// construction.
    pub fn active_record(&self) -> &'static ModuleRecord {
        resolve_record(content::modules(self.language), self.active_module)
    }

    /// Position of the active record within the active language's collection.
    /// Follows the same fallback as [`active_record`](Self::active_record).
    pub fn active_index(&self) -> usize {
        content::modules(self.language)
            .iter()
            .position(|record| record.id == self.active_module)
            .unwrap_or(0)
    }

    pub fn labels(&self) -> &'static Labels {
        content::labels(self.language)
    }
}

/// The record whose id matches, else the first record in the collection.
/// The shipped tables carry every id, so the fallback only fires for
/// collections that don't - it still must be deterministic and panic-free
/// for any non-empty slice.
pub fn resolve_record(records: &[ModuleRecord], id: ModuleId) -> &ModuleRecord {
    records
        .iter()
        .find(|record| record.id == id)
        .unwrap_or(&records[0])
}
