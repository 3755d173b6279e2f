use lyon::path::Path;
use serde::{Deserialize, Serialize};

mod barcode;
mod line;
mod rectangle;
mod text;

pub use barcode::{BarcodeChild, BarcodeDesign, BarcodeElement, SAMPLE_LABEL};
pub use line::LineElement;
pub use rectangle::RectElement;
pub use text::{FontFamily, Rotation, TextAlignment, TextElement, ValueSource};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One named value exposed to a property panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    Number(f64),
    Text(String),
    Bool(bool),
    /// A fixed-option field (combo box); `selected` is one of `options`.
    Choice {
        selected: String,
        options: Vec<String>,
    },
}

impl PropertyValue {
    pub fn text(value: impl Into<String>) -> Self {
        PropertyValue::Text(value.into())
    }

    pub fn choice(selected: impl Into<String>) -> Self {
        PropertyValue::Choice {
            selected: selected.into(),
            options: Vec::new(),
        }
    }

    pub fn choice_of(selected: impl Into<String>, options: &[&str]) -> Self {
        PropertyValue::Choice {
            selected: selected.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    /// The selected string for `Text` and `Choice` values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            PropertyValue::Choice { selected, .. } => Some(selected),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// The closed set of placeable element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Text,
    Rectangle,
    Line,
    Barcode,
}

impl ElementKind {
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Text => "Text",
            ElementKind::Rectangle => "Rectangle",
            ElementKind::Line => "Line",
            ElementKind::Barcode => "Barcode",
        }
    }
}

pub trait LabelElement {
    /// Outline geometry for the host renderer.
    fn render(&self) -> Path;
    /// Rendered bounding box as `(min_x, min_y, max_x, max_y)` in canvas
    /// coordinates. The anchor is always the box top-left.
    fn bounds(&self) -> (f64, f64, f64, f64);
    fn origin(&self) -> Point;
    fn set_origin(&mut self, x: f64, y: f64);
    fn properties(&self) -> Vec<Property>;

    fn translate(&mut self, dx: f64, dy: f64) {
        let o = self.origin();
        self.set_origin(o.x + dx, o.y + dy);
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        let (x1, y1, x2, y2) = self.bounds();
        p.x >= x1 - tolerance
            && p.x <= x2 + tolerance
            && p.y >= y1 - tolerance
            && p.y <= y2 + tolerance
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ElementShape {
    Text(TextElement),
    Rectangle(RectElement),
    Line(LineElement),
    Barcode(BarcodeElement),
}

impl LabelElement for ElementShape {
    fn render(&self) -> Path {
        match self {
            ElementShape::Text(e) => e.render(),
            ElementShape::Rectangle(e) => e.render(),
            ElementShape::Line(e) => e.render(),
            ElementShape::Barcode(e) => e.render(),
        }
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            ElementShape::Text(e) => e.bounds(),
            ElementShape::Rectangle(e) => e.bounds(),
            ElementShape::Line(e) => e.bounds(),
            ElementShape::Barcode(e) => e.bounds(),
        }
    }

    fn origin(&self) -> Point {
        match self {
            ElementShape::Text(e) => e.origin(),
            ElementShape::Rectangle(e) => e.origin(),
            ElementShape::Line(e) => e.origin(),
            ElementShape::Barcode(e) => e.origin(),
        }
    }

    fn set_origin(&mut self, x: f64, y: f64) {
        match self {
            ElementShape::Text(e) => e.set_origin(x, y),
            ElementShape::Rectangle(e) => e.set_origin(x, y),
            ElementShape::Line(e) => e.set_origin(x, y),
            ElementShape::Barcode(e) => e.set_origin(x, y),
        }
    }

    fn properties(&self) -> Vec<Property> {
        match self {
            ElementShape::Text(e) => e.properties(),
            ElementShape::Rectangle(e) => e.properties(),
            ElementShape::Line(e) => e.properties(),
            ElementShape::Barcode(e) => e.properties(),
        }
    }
}

impl ElementShape {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementShape::Text(_) => ElementKind::Text,
            ElementShape::Rectangle(_) => ElementKind::Rectangle,
            ElementShape::Line(_) => ElementKind::Line,
            ElementShape::Barcode(_) => ElementKind::Barcode,
        }
    }

    /// Width and height of the rendered bounding box.
    pub fn extent(&self) -> (f64, f64) {
        let (x1, y1, x2, y2) = self.bounds();
        (x2 - x1, y2 - y1)
    }
}
