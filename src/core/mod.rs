//! # Core Application Logic
//!
//! This module contains the dashboard's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (navigation)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Config (layered)     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │  Exporter  │
//!             │  Adapter   │          │   (CSV)    │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — navigation state in one place
//! - [`action`]: The `Action` enum — everything that can happen in the app
//! - [`config`]: Layered configuration (file, env, CLI)

pub mod action;
pub mod config;
pub mod state;
