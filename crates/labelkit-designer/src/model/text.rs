use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

use labelkit_core::constants::{FONT_SIZE_MAX, FONT_SIZE_MIN, TEXT_CHAR_ADVANCE};

use super::{LabelElement, Point, Property, PropertyValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    Standard,
    Monospace,
    Serif,
}

impl FontFamily {
    pub const OPTIONS: [&'static str; 3] = ["Standard", "Monospace", "Serif"];

    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Standard => "Standard",
            FontFamily::Monospace => "Monospace",
            FontFamily::Serif => "Serif",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Standard" => Some(FontFamily::Standard),
            "Monospace" => Some(FontFamily::Monospace),
            "Serif" => Some(FontFamily::Serif),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
}

impl TextAlignment {
    pub const OPTIONS: [&'static str; 3] = ["Left", "Center", "Right"];

    pub fn name(&self) -> &'static str {
        match self {
            TextAlignment::Left => "Left",
            TextAlignment::Center => "Center",
            TextAlignment::Right => "Right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Left" => Some(TextAlignment::Left),
            "Center" => Some(TextAlignment::Center),
            "Right" => Some(TextAlignment::Right),
            _ => None,
        }
    }
}

/// Whether the field prints a fixed literal or a per-item value filled in at
/// print time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueSource {
    Fixed,
    Variable,
}

impl ValueSource {
    pub const OPTIONS: [&'static str; 2] = ["Fixed", "Variable"];

    pub fn name(&self) -> &'static str {
        match self {
            ValueSource::Fixed => "Fixed",
            ValueSource::Variable => "Variable",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Fixed" => Some(ValueSource::Fixed),
            "Variable" => Some(ValueSource::Variable),
            _ => None,
        }
    }
}

/// On-surface rotation of a text field, in quarter turns.
///
/// The stored angle is mirrored against the displayed one for the quarter
/// turns: a panel selection of 90 stores `R270` and 270 stores `R90`, while
/// 0 and 180 store as shown. Conversions must go through
/// [`Rotation::from_display`] / [`Rotation::display_degrees`] so the
/// mirroring stays in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    pub const DISPLAY_OPTIONS: [&'static str; 4] = ["0", "90", "180", "270"];

    /// Internal angle in degrees.
    pub fn degrees(&self) -> u32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 90,
            Rotation::R180 => 180,
            Rotation::R270 => 270,
        }
    }

    /// The angle shown in the property panel for this stored value.
    pub fn display_degrees(&self) -> u32 {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 270,
            Rotation::R180 => 180,
            Rotation::R270 => 90,
        }
    }

    /// Maps a panel angle to the stored rotation.
    pub fn from_display(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(Rotation::R0),
            90 => Some(Rotation::R270),
            180 => Some(Rotation::R180),
            270 => Some(Rotation::R90),
            _ => None,
        }
    }

    /// Quarter turns swap the rendered width and height.
    pub fn swaps_extent(&self) -> bool {
        matches!(self, Rotation::R90 | Rotation::R270)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextElement {
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub font_family: FontFamily,
    pub font_size: u32,
    pub alignment: TextAlignment,
    pub source: ValueSource,
    pub caption: String,
    pub show_value: bool,
    pub required: bool,
    pub rotation: Rotation,
}

impl TextElement {
    pub fn new(x: f64, y: f64, content: impl Into<String>, font_size: u32) -> Self {
        Self {
            x,
            y,
            content: content.into(),
            font_family: FontFamily::Standard,
            font_size: font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX),
            alignment: TextAlignment::Left,
            source: ValueSource::Fixed,
            caption: String::new(),
            show_value: true,
            required: false,
            rotation: Rotation::R0,
        }
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.font_size = size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
    }

    /// Unrotated extent from the approximate per-character advance.
    fn base_extent(&self) -> (f64, f64) {
        let size = self.font_size as f64;
        let width = self.content.chars().count() as f64 * size * TEXT_CHAR_ADVANCE;
        (width, size)
    }
}

impl LabelElement for TextElement {
    fn render(&self) -> Path {
        let (x1, y1, x2, y2) = self.bounds();
        let mut builder = Path::builder();
        builder.add_rectangle(
            &lyon::math::Box2D::new(point(x1 as f32, y1 as f32), point(x2 as f32, y2 as f32)),
            lyon::path::Winding::Positive,
        );
        builder.build()
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        let (w, h) = self.base_extent();
        let (w, h) = if self.rotation.swaps_extent() {
            (h, w)
        } else {
            (w, h)
        };
        (self.x, self.y, self.x + w, self.y + h)
    }

    fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_origin(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    fn properties(&self) -> Vec<Property> {
        vec![
            Property::new("X", PropertyValue::Number(self.x)),
            Property::new("Y", PropertyValue::Number(self.y)),
            Property::new("Content", PropertyValue::text(self.content.clone())),
            Property::new(
                "Font Family",
                PropertyValue::choice_of(self.font_family.name(), &FontFamily::OPTIONS),
            ),
            Property::new("Font Size", PropertyValue::Number(self.font_size as f64)),
            Property::new(
                "Alignment",
                PropertyValue::choice_of(self.alignment.name(), &TextAlignment::OPTIONS),
            ),
            Property::new(
                "Source",
                PropertyValue::choice_of(self.source.name(), &ValueSource::OPTIONS),
            ),
            Property::new("Caption", PropertyValue::text(self.caption.clone())),
            Property::new("Show Value", PropertyValue::Bool(self.show_value)),
            Property::new("Required", PropertyValue::Bool(self.required)),
            Property::new(
                "Rotation",
                PropertyValue::choice_of(
                    self.rotation.display_degrees().to_string(),
                    &Rotation::DISPLAY_OPTIONS,
                ),
            ),
        ]
    }
}
