use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

use labelkit_core::constants::{LINE_LENGTH_MIN, LINE_THICKNESS_MAX, LINE_THICKNESS_MIN};

use super::{LabelElement, Point, Property, PropertyValue};

/// A horizontal rule drawn from `(x, y)`, `length` wide and `thickness` tall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineElement {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub thickness: f64,
}

impl LineElement {
    pub fn new(x: f64, y: f64, length: f64) -> Self {
        Self {
            x,
            y,
            length: length.max(LINE_LENGTH_MIN),
            thickness: 2.0,
        }
    }

    pub fn set_length(&mut self, length: f64) {
        self.length = length.max(LINE_LENGTH_MIN);
    }

    pub fn set_thickness(&mut self, thickness: f64) {
        self.thickness = thickness.clamp(LINE_THICKNESS_MIN, LINE_THICKNESS_MAX);
    }
}

impl LabelElement for LineElement {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_rectangle(
            &lyon::math::Box2D::new(
                point(self.x as f32, self.y as f32),
                point(
                    (self.x + self.length) as f32,
                    (self.y + self.thickness) as f32,
                ),
            ),
            lyon::path::Winding::Positive,
        );
        builder.build()
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + self.length, self.y + self.thickness)
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
            Property::new("Length", PropertyValue::Number(self.length)),
            Property::new("Thickness", PropertyValue::Number(self.thickness)),
        ]
    }
}
