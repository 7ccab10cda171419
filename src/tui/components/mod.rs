//! # TUI Components
//!
//! All UI components for the terminal dashboard.
//!
//! ## Component Architecture
//!
//! Two patterns, as in the rest of the crate:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as struct fields:
//! - `TitleBar`: top line with context, status, and language hint
//! - `MetricCard`, `DatasetTable`, `OverviewPanel`: content blocks placed
//!   inside the module view's scroll canvas (plain `Widget` impls)
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! Components whose presentation state outlives a frame:
//! - `Sidebar`: module list wrapping a borrowed `ListState`
//! - `ModuleView`: scrollable content wrapping `ModuleViewState`
//!
//! Props come from core `App` state and the static content tables;
//! components never reach into global state themselves.

pub mod dataset_table;
pub mod metric_card;
pub mod module_view;
pub mod overview;
pub mod sidebar;
pub mod title_bar;

pub use dataset_table::DatasetTable;
pub use metric_card::MetricCard;
pub use module_view::{ModuleView, ModuleViewState};
pub use overview::OverviewPanel;
pub use sidebar::Sidebar;
pub use title_bar::TitleBar;
