//! Selection-to-panel binding.
//!
//! Tracks the single active selection and resolves which property panel
//! variant to show for it. The binding never holds a reference into the
//! canvas: it stores only the element id and re-resolves it on every read,
//! so an element deleted behind an open panel simply stops resolving instead
//! of dangling.

use crate::canvas::{Canvas, CanvasObject};
use crate::model::{ElementKind, LabelElement, Property};

/// The property panel variants, one per element kind.
///
/// Closed and exhaustive: adding an element kind will not compile until a
/// panel variant is mapped here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Text,
    Rectangle,
    Line,
    Barcode,
}

impl PanelKind {
    pub fn for_kind(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => PanelKind::Text,
            ElementKind::Rectangle => PanelKind::Rectangle,
            ElementKind::Line => PanelKind::Line,
            ElementKind::Barcode => PanelKind::Barcode,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::Text => "Text Properties",
            PanelKind::Rectangle => "Rectangle Properties",
            PanelKind::Line => "Line Properties",
            PanelKind::Barcode => "Barcode Properties",
        }
    }
}

/// Payload for the host's property panel: which element is bound, which
/// panel variant to build, and the current field values.
#[derive(Debug, Clone)]
pub struct SelectionDetails {
    pub element_id: u64,
    pub kind: ElementKind,
    pub panel: PanelKind,
    pub properties: Vec<Property>,
}

/// Binding state: nothing selected, or one element bound to its panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum BindingState {
    #[default]
    NoSelection,
    Selected {
        id: u64,
        panel: PanelKind,
    },
}

#[derive(Debug, Clone, Default)]
pub struct PropertyBinding {
    state: BindingState,
    refreshing: bool,
}

impl PropertyBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the panel to an element. Replaces any previous binding in the
    /// same step; there is never more than one bound element.
    pub fn bind(&mut self, object: &CanvasObject) {
        self.state = BindingState::Selected {
            id: object.id,
            panel: PanelKind::for_kind(object.kind()),
        };
    }

    pub fn unbind(&mut self) {
        self.state = BindingState::NoSelection;
    }

    pub fn bound_id(&self) -> Option<u64> {
        match self.state {
            BindingState::Selected { id, .. } => Some(id),
            BindingState::NoSelection => None,
        }
    }

    pub fn panel(&self) -> Option<PanelKind> {
        match self.state {
            BindingState::Selected { panel, .. } => Some(panel),
            BindingState::NoSelection => None,
        }
    }

    /// True while the host is writing editor values back into its panel
    /// widgets. Field-change callbacks forwarded during a refresh are echoes
    /// of our own writes and must be dropped, not applied.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Brackets a host-side widget refresh; see [`Self::is_refreshing`].
    pub fn begin_refresh(&mut self) {
        self.refreshing = true;
    }

    pub fn end_refresh(&mut self) {
        self.refreshing = false;
    }

    /// Resolves the bound element through the canvas and returns the panel
    /// payload. Returns `None` when nothing is bound or the element no
    /// longer exists (deleted behind the open panel).
    pub fn details(&self, canvas: &Canvas) -> Option<SelectionDetails> {
        let BindingState::Selected { id, panel } = self.state else {
            return None;
        };
        let object = canvas.get(id)?;
        Some(SelectionDetails {
            element_id: id,
            kind: object.kind(),
            panel,
            properties: object.shape.properties(),
        })
    }
}
