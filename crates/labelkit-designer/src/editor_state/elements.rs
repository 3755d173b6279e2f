//! Element creation and deletion.

use super::EditorState;
use crate::events::EditorEvent;
use crate::model::ElementKind;

impl EditorState {
    /// Adds an element of the given kind with its default geometry, inserts
    /// it at the top of the outline, and selects it.
    pub fn add_element(&mut self, kind: ElementKind) -> u64 {
        let id = self.canvas.add_element(kind);
        self.outline.on_element_added(&self.canvas, id);
        self.push_event(EditorEvent::OutlineChanged);
        self.select_element(id);
        self.push_event(EditorEvent::RedrawRequested);
        self.mark_modified();
        id
    }

    /// Deletes an element (outline trash gesture or host-side delete). The
    /// selection and panel are cleared when the deleted element was bound.
    /// Unknown ids are a safe no-op.
    pub fn delete_element(&mut self, id: u64) -> bool {
        let was_selected = self.canvas.selected_id() == Some(id);
        let removed = self.outline.on_delete(&mut self.canvas, id);
        if !removed {
            return false;
        }
        if was_selected {
            self.binding.unbind();
            self.push_event(EditorEvent::SelectionChanged { element_id: None });
        }
        self.push_event(EditorEvent::OutlineChanged);
        self.push_event(EditorEvent::RedrawRequested);
        self.mark_modified();
        true
    }

    /// Deletes the currently selected element, if any.
    pub fn delete_selected(&mut self) -> bool {
        match self.canvas.selected_id() {
            Some(id) => self.delete_element(id),
            None => false,
        }
    }

    /// Applies a user-driven outline reordering; the list order becomes the
    /// stacking order.
    pub fn reorder_elements(&mut self, order: &[u64]) -> labelkit_core::Result<()> {
        self.outline.on_reorder(&mut self.canvas, order)?;
        self.push_event(EditorEvent::OutlineChanged);
        self.push_event(EditorEvent::RedrawRequested);
        self.mark_modified();
        Ok(())
    }

    /// Clears the whole design.
    pub fn clear_canvas(&mut self) {
        if self.canvas.element_count() == 0 {
            return;
        }
        self.canvas.clear();
        self.outline.refresh(&self.canvas);
        self.binding.unbind();
        self.push_event(EditorEvent::SelectionChanged { element_id: None });
        self.push_event(EditorEvent::OutlineChanged);
        self.push_event(EditorEvent::RedrawRequested);
        self.mark_modified();
    }
}
