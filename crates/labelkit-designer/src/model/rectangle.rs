use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

use labelkit_core::constants::{RECT_BORDER_MAX, RECT_BORDER_MIN, RECT_SIDE_MAX, RECT_SIDE_MIN};

use super::{LabelElement, Point, Property, PropertyValue};

/// A framed box drawn with its top-left corner at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectElement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub border_width: f64,
}

impl RectElement {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.clamp(RECT_SIDE_MIN, RECT_SIDE_MAX),
            height: height.clamp(RECT_SIDE_MIN, RECT_SIDE_MAX),
            border_width: 1.0,
        }
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = width.clamp(RECT_SIDE_MIN, RECT_SIDE_MAX);
    }

    pub fn set_height(&mut self, height: f64) {
        self.height = height.clamp(RECT_SIDE_MIN, RECT_SIDE_MAX);
    }

    pub fn set_border_width(&mut self, border_width: f64) {
        self.border_width = border_width.clamp(RECT_BORDER_MIN, RECT_BORDER_MAX);
    }
}

impl LabelElement for RectElement {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        builder.add_rectangle(
            &lyon::math::Box2D::new(
                point(self.x as f32, self.y as f32),
                point((self.x + self.width) as f32, (self.y + self.height) as f32),
            ),
            lyon::path::Winding::Positive,
        );
        builder.build()
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x + self.width, self.y + self.height)
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
            Property::new("Width", PropertyValue::Number(self.width)),
            Property::new("Height", PropertyValue::Number(self.height)),
            Property::new("Border Width", PropertyValue::Number(self.border_width)),
        ]
    }
}
