//! Element selection state.
//!
//! Exactly zero or one element is selected at any time. Selecting a new
//! element while another is selected swaps the selection in one step; there
//! is no multi-selection.

#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    selected_id: Option<u64>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self { selected_id: None }
    }

    /// Returns the ID of the selected element, if any.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selected_id == Some(id)
    }

    /// Makes `id` the selection, replacing any previous one.
    pub fn select(&mut self, id: u64) {
        self.selected_id = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }
}
