//! Outline list mirroring the canvas stacking order.
//!
//! The canvas element order is the single source of truth for z-order; the
//! outline holds the display labels and pushes user gestures (reorder,
//! delete) back through the canvas API. Entry 0 is the frontmost element.

use labelkit_core::constants::SUMMARY_TEXT_CHARS;
use labelkit_core::Result;
use tracing::warn;

use crate::canvas::{Canvas, CanvasObject};
use crate::model::ElementShape;

/// One outline row: the element it mirrors and its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub id: u64,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct Outline {
    entries: Vec<OutlineEntry>,
}

impl Outline {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[OutlineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts an entry for a newly added element at the top of the list.
    pub fn on_element_added(&mut self, canvas: &Canvas, id: u64) {
        let Some(object) = canvas.get(id) else {
            warn!(id, "outline add for element missing from canvas");
            return;
        };
        self.entries.insert(
            0,
            OutlineEntry {
                id,
                label: display_label(object),
            },
        );
    }

    /// Applies a user-driven reordering. The order is pushed into the canvas
    /// (which validates it) and the entries follow; z-indices become
    /// `count - index` implicitly.
    pub fn on_reorder(&mut self, canvas: &mut Canvas, order: &[u64]) -> Result<()> {
        canvas.reorder(order)?;
        self.entries.sort_by_key(|entry| {
            order
                .iter()
                .position(|id| *id == entry.id)
                .unwrap_or(usize::MAX)
        });
        Ok(())
    }

    /// Deletes an element via its outline row. Clearing the selection when
    /// the deleted element was selected is handled by the canvas. A missing
    /// id is a no-op.
    pub fn on_delete(&mut self, canvas: &mut Canvas, id: u64) -> bool {
        let removed = canvas.delete_element(id);
        self.entries.retain(|entry| entry.id != id);
        removed
    }

    /// Recomputes the display label for one entry. Must run after every
    /// mutation that can change a value summary (content edit, resize,
    /// design switch, rename), not only on selection change.
    pub fn relabel(&mut self, canvas: &Canvas, id: u64) {
        let Some(object) = canvas.get(id) else {
            return;
        };
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.label = display_label(object);
        }
    }

    /// Rebuilds every entry from the canvas, preserving canvas order. A
    /// safety net for hosts that redraw the whole list.
    pub fn refresh(&mut self, canvas: &Canvas) {
        self.entries = canvas
            .elements()
            .map(|object| OutlineEntry {
                id: object.id,
                label: display_label(object),
            })
            .collect();
    }
}

/// Formats an outline label as `"{Kind} - {name}: {summary}"`.
fn display_label(object: &CanvasObject) -> String {
    format!(
        "{} - {}: {}",
        object.kind().name(),
        object.name,
        value_summary(&object.shape)
    )
}

/// Short per-kind summary of the element's current value.
fn value_summary(shape: &ElementShape) -> String {
    match shape {
        ElementShape::Text(text) => {
            if text.content.is_empty() {
                "Empty".to_string()
            } else {
                text.content.chars().take(SUMMARY_TEXT_CHARS).collect()
            }
        }
        ElementShape::Line(line) => format!("{}px", line.length.round() as i64),
        ElementShape::Rectangle(rect) => format!(
            "{}x{}",
            rect.width.round() as i64,
            rect.height.round() as i64
        ),
        ElementShape::Barcode(barcode) => barcode.design().name().to_string(),
    }
}
