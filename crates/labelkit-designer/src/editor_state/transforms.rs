//! Drags and position writes.
//!
//! Every intermediate drag position is final: each delta is clamped and
//! applied immediately, and there is no commit-on-release or revert.

use super::EditorState;
use crate::events::EditorEvent;

impl EditorState {
    /// Moves an element to a proposed position; the canvas clamps it against
    /// the rendered bounding box. Returns the applied position.
    pub fn move_element(&mut self, id: u64, x: f64, y: f64) -> Option<(f64, f64)> {
        let (applied_x, applied_y) = self.canvas.move_element(id, x, y)?;
        self.notify_moved(id, applied_x, applied_y);
        Some((applied_x, applied_y))
    }

    /// Applies one drag delta to the selected element.
    pub fn drag_selected(&mut self, dx: f64, dy: f64) -> Option<(f64, f64)> {
        let id = self.canvas.selected_id()?;
        let (applied_x, applied_y) = self.canvas.drag_element(id, dx, dy)?;
        self.notify_moved(id, applied_x, applied_y);
        Some((applied_x, applied_y))
    }

    /// Emits the move notification carrying the applied position, so a bound
    /// panel can update its live readout. Hosts wrap the widget write in
    /// [`EditorState::begin_panel_refresh`]/[`EditorState::end_panel_refresh`]
    /// so the resulting field-change echoes are dropped.
    fn notify_moved(&mut self, id: u64, x: f64, y: f64) {
        self.push_event(EditorEvent::ElementMoved { id, x, y });
        self.push_event(EditorEvent::RedrawRequested);
        self.mark_modified();
    }
}
