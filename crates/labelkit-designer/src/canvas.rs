//! Canvas for placing and manipulating label elements.

use lyon::path::Path;
use serde::{Deserialize, Serialize};
use tracing::debug;

use labelkit_core::constants::{CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_ORIGIN, GRID_SIZE};
use labelkit_core::Result;

use crate::element_store::ElementStore;
use crate::model::{
    BarcodeElement, ElementKind, ElementShape, LabelElement, LineElement, Point, RectElement,
    TextElement,
};
use crate::selection_manager::SelectionManager;

/// A placed element that can be selected and manipulated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanvasObject {
    pub id: u64,
    pub name: String,
    pub shape: ElementShape,
    pub visible: bool,
}

impl CanvasObject {
    /// Creates a new object named after its kind.
    pub fn new(id: u64, shape: ElementShape) -> Self {
        let name = shape.kind().name().to_string();
        Self {
            id,
            name,
            shape,
            visible: true,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.shape.kind()
    }

    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        self.shape.bounds()
    }

    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        self.shape.contains_point(*point, tolerance)
    }
}

/// Bounded drawing surface owning the element collection and the selection.
///
/// Every mutation of element geometry or stacking order goes through this
/// API, so position clamping can never be bypassed by a caller writing into
/// the store directly.
#[derive(Debug, Clone)]
pub struct Canvas {
    store: ElementStore,
    selection: SelectionManager,
    width: f64,
    height: f64,
    grid_size: f64,
}

impl Canvas {
    /// Creates a canvas with the default label surface size.
    pub fn new() -> Self {
        Self::with_size(CANVAS_WIDTH, CANVAS_HEIGHT)
    }

    /// Creates a canvas with specified dimensions.
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            store: ElementStore::new(),
            selection: SelectionManager::new(),
            width,
            height,
            grid_size: GRID_SIZE,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }

    pub fn set_grid_size(&mut self, grid_size: f64) {
        debug_assert!(
            grid_size.is_finite() && grid_size > 0.0,
            "grid_size must be positive and finite, got {grid_size}"
        );
        self.grid_size = grid_size;
    }

    /// Returns the number of elements on the canvas.
    pub fn element_count(&self) -> usize {
        self.store.len()
    }

    /// Adds an element of the given kind with its default geometry and
    /// returns its id. The new element is inserted at the front of the
    /// stacking order.
    pub fn add_element(&mut self, kind: ElementKind) -> u64 {
        let (x, y) = DEFAULT_ORIGIN;
        let shape = match kind {
            ElementKind::Text => ElementShape::Text(TextElement::new(x, y, "Text", 12)),
            ElementKind::Rectangle => ElementShape::Rectangle(RectElement::new(x, y, 100.0, 50.0)),
            ElementKind::Line => ElementShape::Line(LineElement::new(x, y, 100.0)),
            ElementKind::Barcode => ElementShape::Barcode(BarcodeElement::new(x, y)),
        };
        let id = self.store.generate_id();
        self.store.insert_front(CanvasObject::new(id, shape));
        // Default geometry can exceed a small surface; apply the clamp once
        // on insertion so the bounds invariant holds from the start.
        let _ = self.move_element(id, x, y);
        id
    }

    /// Removes an element by id, clearing the selection if it pointed at the
    /// removed element. Removing an unknown id is a no-op.
    pub fn delete_element(&mut self, id: u64) -> bool {
        match self.store.remove(id) {
            Some(_) => {
                if self.selection.is_selected(id) {
                    self.selection.clear();
                }
                true
            }
            None => false,
        }
    }

    /// Moves an element to the proposed top-left position, clamped so the
    /// rendered bounding box stays inside the surface. Returns the applied
    /// position, or `None` if the id is unknown.
    ///
    /// Every drag delta and every programmatic position write lands here;
    /// there is no unclamped path.
    pub fn move_element(&mut self, id: u64, proposed_x: f64, proposed_y: f64) -> Option<(f64, f64)> {
        let (width, height) = {
            let object = self.store.get(id)?;
            object.shape.extent()
        };
        let (x, y) = self.clamp_position(proposed_x, proposed_y, width, height);
        let object = self.store.get_mut(id)?;
        object.shape.set_origin(x, y);
        Some((x, y))
    }

    /// Moves an element by a drag delta, clamped. Returns the applied
    /// position.
    pub fn drag_element(&mut self, id: u64, dx: f64, dy: f64) -> Option<(f64, f64)> {
        let origin = self.store.get(id)?.shape.origin();
        self.move_element(id, origin.x + dx, origin.y + dy)
    }

    /// Re-applies the bounds clamp to an element's current position. Used
    /// after a property edit changed its rendered extent.
    pub fn reclamp_element(&mut self, id: u64) -> Option<(f64, f64)> {
        let origin = self.store.get(id)?.shape.origin();
        self.move_element(id, origin.x, origin.y)
    }

    fn clamp_position(&self, x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
        let max_x = (self.width - width).max(0.0);
        let max_y = (self.height - height).max(0.0);
        (x.clamp(0.0, max_x), y.clamp(0.0, max_y))
    }

    pub fn get(&self, id: u64) -> Option<&CanvasObject> {
        self.store.get(id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut CanvasObject> {
        self.store.get_mut(id)
    }

    /// Elements in stacking order, frontmost first.
    pub fn elements(&self) -> impl Iterator<Item = &CanvasObject> {
        self.store.iter()
    }

    /// Element ids in stacking order, frontmost first.
    pub fn element_ids(&self) -> Vec<u64> {
        self.store.ids()
    }

    pub fn element_bounds(&self, id: u64) -> Option<(f64, f64, f64, f64)> {
        self.store.get(id).map(|o| o.bounds())
    }

    /// Z-index of an element: `count - index`, frontmost highest.
    pub fn z_index(&self, id: u64) -> Option<usize> {
        self.store.z_index(id)
    }

    /// Replaces the stacking order; see [`ElementStore::reorder`].
    pub fn reorder(&mut self, order: &[u64]) -> Result<()> {
        self.store.reorder(order)?;
        debug!(?order, "canvas reordered");
        Ok(())
    }

    /// Selects an element by id. Returns false for unknown ids.
    pub fn select_element(&mut self, id: u64) -> bool {
        if self.store.contains(id) {
            self.selection.select(id);
            true
        } else {
            false
        }
    }

    /// Selects the topmost element at the given point, or clears the
    /// selection when the point hits empty surface.
    pub fn select_at(&mut self, point: &Point, tolerance: f64) -> Option<u64> {
        let hit = self
            .store
            .iter()
            .find(|o| o.visible && o.contains_point(point, tolerance))
            .map(|o| o.id);
        match hit {
            Some(id) => self.selection.select(id),
            None => self.selection.clear(),
        }
        hit
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selection.selected_id()
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Clears all elements and the selection.
    pub fn clear(&mut self) {
        self.store.clear();
        self.selection.clear();
    }

    /// Grid line offsets across the surface, as `(vertical, horizontal)`
    /// positions.
    pub fn grid_lines(&self) -> (Vec<f64>, Vec<f64>) {
        let columns = (self.width / self.grid_size).floor() as usize;
        let rows = (self.height / self.grid_size).floor() as usize;
        let vertical = (0..=columns).map(|i| i as f64 * self.grid_size).collect();
        let horizontal = (0..=rows).map(|i| i as f64 * self.grid_size).collect();
        (vertical, horizontal)
    }

    /// Outline paths for the host renderer, back to front so later entries
    /// paint on top.
    pub fn render_paths(&self) -> Vec<(u64, Path)> {
        let mut paths: Vec<(u64, Path)> = self
            .store
            .iter()
            .filter(|o| o.visible)
            .map(|o| (o.id, o.shape.render()))
            .collect();
        paths.reverse();
        paths
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
