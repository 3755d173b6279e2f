//! # LabelKit Designer
//!
//! This crate provides the label design canvas: an interactive, scene-graph
//! based editor core for placing, moving and restyling the visual elements of
//! a barcode label, with a live property panel and a z-ordered outline list.
//!
//! ## Core Components
//!
//! ### Design Elements
//! - **Elements**: Text fields, rectangles, lines, and mock barcode symbols
//! - **Canvas**: Bounded drawing surface owning the element collection
//! - **Outline**: Ordered list mirroring the canvas; list order is z-order
//!
//! ### Editing
//! - **Selection**: Single active selection with per-kind property panels
//! - **Property Binding**: Two-way sync between panel fields and elements
//! - **Barcode Patterns**: Deterministic mock bar patterns per design variant
//!
//! ## Architecture
//!
//! ```text
//! EditorState (host facade)
//!   ├── Canvas (element store + selection + move constraints)
//!   │     └── ElementShape (Text | Rectangle | Line | Barcode)
//!   ├── Outline (z-order mirror, display labels)
//!   └── PropertyBinding (panel variant per kind, echo suppression)
//! ```
//!
//! All mutation flows through the `Canvas` API inside one synchronous input
//! event; the outline and binding only read through accessors and write back
//! through `EditorState`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use labelkit_designer::{EditorState, ElementKind};
//!
//! let mut editor = EditorState::new();
//! let id = editor.add_element(ElementKind::Barcode);
//! editor.set_element_property(id, "Design", PropertyValue::choice("EAN13"));
//! ```

pub mod binding;
pub mod canvas;
pub mod element_store;
pub mod events;
pub mod model;
pub mod outline;
pub mod selection_manager;

pub mod editor_state;

pub use binding::{PanelKind, PropertyBinding, SelectionDetails};
pub use canvas::{Canvas, CanvasObject};
pub use element_store::ElementStore;
pub use events::EditorEvent;
pub use model::{
    BarcodeChild, BarcodeDesign, BarcodeElement, ElementKind, ElementShape, FontFamily,
    LabelElement, LineElement, Point, Property, PropertyValue, RectElement, Rotation,
    TextAlignment, TextElement, ValueSource,
};
pub use outline::{Outline, OutlineEntry};
pub use selection_manager::SelectionManager;

pub use editor_state::EditorState;
