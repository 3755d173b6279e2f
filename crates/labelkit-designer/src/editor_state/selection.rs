//! Selection operations and the property panel payload.

use super::EditorState;
use crate::binding::SelectionDetails;
use crate::events::EditorEvent;
use crate::model::Point;

impl EditorState {
    /// Selects an element by id, atomically replacing any previous
    /// selection, and binds its property panel. Returns false for unknown
    /// ids.
    pub fn select_element(&mut self, id: u64) -> bool {
        if !self.canvas.select_element(id) {
            return false;
        }
        if let Some(object) = self.canvas.get(id) {
            self.binding.bind(object);
        }
        self.push_event(EditorEvent::SelectionChanged {
            element_id: Some(id),
        });
        true
    }

    /// Clears the selection; the panel area empties to its placeholder.
    pub fn clear_selection(&mut self) {
        if self.canvas.selected_id().is_none() {
            return;
        }
        self.canvas.clear_selection();
        self.binding.unbind();
        self.push_event(EditorEvent::SelectionChanged { element_id: None });
    }

    /// Canvas click: selects the topmost element under the pointer, or
    /// clears the selection on empty surface.
    pub fn select_at(&mut self, x: f64, y: f64, tolerance: f64) -> Option<u64> {
        let previous = self.canvas.selected_id();
        let hit = self.canvas.select_at(&Point::new(x, y), tolerance);
        match hit {
            Some(id) => {
                if let Some(object) = self.canvas.get(id) {
                    self.binding.bind(object);
                }
                if previous != Some(id) {
                    self.push_event(EditorEvent::SelectionChanged {
                        element_id: Some(id),
                    });
                }
            }
            None => {
                self.binding.unbind();
                if previous.is_some() {
                    self.push_event(EditorEvent::SelectionChanged { element_id: None });
                }
            }
        }
        hit
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.canvas.selected_id()
    }

    /// Current panel payload, re-resolved through the canvas. `None` when
    /// nothing is selected or the bound element was deleted.
    pub fn selection_details(&self) -> Option<SelectionDetails> {
        self.binding.details(&self.canvas)
    }
}
