//! Design snapshot and the save action.
//!
//! The shell toolbar surfaces a save action, but no storage backend is wired
//! to it; [`EditorState::request_save`] is the extension point a backend
//! attaches to. [`EditorState::serialize_design`] builds the JSON snapshot
//! such a backend would store.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::warn;

use super::EditorState;
use crate::canvas::CanvasObject;

/// Serializable view of the current design.
#[derive(Serialize)]
struct DesignDocument<'a> {
    name: &'a str,
    canvas_width: f64,
    canvas_height: f64,
    grid_size: f64,
    /// Frontmost first; index order is the stacking order.
    elements: Vec<&'a CanvasObject>,
}

impl EditorState {
    /// Serializes the design to a JSON snapshot.
    pub fn serialize_design(&self) -> Result<String> {
        let document = DesignDocument {
            name: &self.design_name,
            canvas_width: self.canvas.width(),
            canvas_height: self.canvas.height(),
            grid_size: self.canvas.grid_size(),
            elements: self.canvas.elements().collect(),
        };
        serde_json::to_string_pretty(&document).context("serializing design document")
    }

    /// Handles the toolbar save action. No storage backend is configured;
    /// the design stays in memory and the modified flag is left set.
    pub fn request_save(&mut self) {
        warn!(
            design = %self.design_name,
            "save requested but no storage backend is configured"
        );
    }
}
