//! Editor state facade for UI integration.
//!
//! Owns the canvas, the outline, and the property binding, and wires them
//! together so a host shell only ever talks to this type. All mutation runs
//! synchronously inside the handler for one user input event; there is no
//! background work and nothing here suspends.
//!
//! This module is split into submodules for better organization:
//! - `elements`: element creation and deletion
//! - `selection`: selection operations and the panel payload
//! - `transforms`: drags and position writes
//! - `properties`: clamped, liveness-checked property edits
//! - `file_io`: design snapshot and the save stub

mod elements;
mod file_io;
mod properties;
mod selection;
mod transforms;

use crate::binding::PropertyBinding;
use crate::canvas::Canvas;
use crate::events::EditorEvent;
use crate::outline::Outline;

/// Editor state for UI integration.
pub struct EditorState {
    pub canvas: Canvas,
    pub outline: Outline,
    binding: PropertyBinding,
    events: Vec<EditorEvent>,
    pub show_grid: bool,
    pub is_modified: bool,
    pub design_name: String,
}

impl EditorState {
    /// Creates an editor with the default label surface.
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            outline: Outline::new(),
            binding: PropertyBinding::new(),
            events: Vec::new(),
            show_grid: true,
            is_modified: false,
            design_name: "Untitled".to_string(),
        }
    }

    /// Creates an editor with a custom surface size.
    pub fn with_canvas_size(width: f64, height: f64) -> Self {
        Self {
            canvas: Canvas::with_size(width, height),
            ..Self::new()
        }
    }

    pub fn binding(&self) -> &PropertyBinding {
        &self.binding
    }

    /// Brackets a host-side panel widget refresh. Field edits forwarded
    /// while the bracket is open are echoes of the editor's own writes and
    /// are dropped by [`Self::set_element_property`].
    pub fn begin_panel_refresh(&mut self) {
        self.binding.begin_refresh();
    }

    pub fn end_panel_refresh(&mut self) {
        self.binding.end_refresh();
    }

    /// Drains the queued change notifications. Hosts call this once per
    /// input event after forwarding it.
    pub fn take_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: EditorEvent) {
        self.events.push(event);
    }

    pub(crate) fn mark_modified(&mut self) {
        self.is_modified = true;
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
