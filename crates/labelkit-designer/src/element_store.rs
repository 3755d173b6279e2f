//! Ordered element storage for the canvas.
//!
//! The store keeps elements in stacking order: index 0 is the frontmost
//! element, and the z-index of the element at index `i` is `count - i`.
//! Ids are generated here and stay stable across reorders and renames.

use std::collections::HashSet;

use labelkit_core::{DesignError, Error, Result};

use crate::canvas::CanvasObject;

#[derive(Debug, Clone)]
pub struct ElementStore {
    objects: Vec<CanvasObject>,
    next_id: u64,
}

impl Default for ElementStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementStore {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
        }
    }

    /// Generates a new unique ID.
    pub fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Inserts an element at the front of the stacking order.
    pub fn insert_front(&mut self, object: CanvasObject) {
        self.objects.insert(0, object);
    }

    pub fn get(&self, id: u64) -> Option<&CanvasObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut CanvasObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.objects.iter().any(|o| o.id == id)
    }

    /// Stacking position of an element; 0 is frontmost.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.objects.iter().position(|o| o.id == id)
    }

    /// Z-index of an element: `count - index`, so the frontmost element has
    /// the highest value and the backmost has 1.
    pub fn z_index(&self, id: u64) -> Option<usize> {
        self.index_of(id).map(|i| self.objects.len() - i)
    }

    /// Removes an element and returns it. `None` if the id is not present.
    pub fn remove(&mut self, id: u64) -> Option<CanvasObject> {
        let index = self.index_of(id)?;
        Some(self.objects.remove(index))
    }

    /// Front-to-back iteration.
    pub fn iter(&self) -> impl Iterator<Item = &CanvasObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CanvasObject> {
        self.objects.iter_mut()
    }

    /// Element ids, front to back.
    pub fn ids(&self) -> Vec<u64> {
        self.objects.iter().map(|o| o.id).collect()
    }

    /// Replaces the stacking order with `order` (front to back).
    ///
    /// The new order must list exactly the stored ids; otherwise the current
    /// order is left untouched and an error is returned.
    pub fn reorder(&mut self, order: &[u64]) -> Result<()> {
        if order.len() != self.objects.len() {
            return Err(Error::Design(DesignError::ReorderMismatch {
                expected: self.objects.len(),
                got: order.len(),
            }));
        }
        let known: HashSet<u64> = self.objects.iter().map(|o| o.id).collect();
        let requested: HashSet<u64> = order.iter().copied().collect();
        if known != requested {
            return Err(Error::Design(DesignError::ReorderMismatch {
                expected: self.objects.len(),
                got: requested.len(),
            }));
        }

        let mut reordered = Vec::with_capacity(self.objects.len());
        for id in order {
            if let Some(index) = self.objects.iter().position(|o| o.id == *id) {
                reordered.push(self.objects.remove(index));
            }
        }
        self.objects = reordered;
        Ok(())
    }
}
