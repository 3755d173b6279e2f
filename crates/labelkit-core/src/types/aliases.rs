//! Type aliases for commonly used complex types.
//!
//! This module provides type aliases to improve code readability by giving
//! meaningful names to complex nested types commonly used throughout the
//! codebase.
//!
//! The editor core is single-threaded and event-driven: every mutation runs
//! synchronously inside one input-event handler, so the sharing primitives a
//! host needs are `Rc<RefCell<T>>` wrappers, not thread-safe ones.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use labelkit_core::types::*;
//!
//! // Instead of: Rc<RefCell<EditorState>>
//! let state: Shared<EditorState> = shared(EditorState::new());
//! state.borrow_mut().add_element(ElementKind::Text);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Use when you need to share mutable state within a single thread (e.g., a
/// GTK UI). This is the fundamental building block for UI state management.
pub type Shared<T> = Rc<RefCell<T>>;

/// An optional shared reference, for lazily-initialized shared state.
pub type SharedOption<T> = Rc<RefCell<Option<T>>>;

/// A shared vector for single-threaded collection management.
pub type SharedVec<T> = Rc<RefCell<Vec<T>>>;

/// A boxed callback with no arguments.
pub type Callback = Box<dyn Fn()>;

/// A boxed callback receiving a borrowed payload.
pub type DataCallback<T> = Box<dyn Fn(&T)>;

/// Wraps a value in a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}
