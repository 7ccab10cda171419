use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components follow the persistent state + transient wrapper pattern:
/// - They receive data via props (struct fields), rebuilt each frame.
/// - Persistent presentation state (scroll offsets, list cursors) lives in
///   `TuiState` and is borrowed mutably into the wrapper.
/// - They render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so components can update internal caches and
/// presentation state during the render pass, aligning with Ratatui's
/// `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component state that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
