use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use labelkit_core::constants::{
    BARCODE_CONTAINER_DEFAULT_HEIGHT, BARCODE_CONTAINER_DEFAULT_WIDTH, BARCODE_CONTAINER_MAX,
    BARCODE_CONTAINER_MIN, TEXT_CHAR_ADVANCE,
};

use super::{LabelElement, Point, Property, PropertyValue};

/// Fixed human-readable sample printed under every mock symbol.
pub const SAMPLE_LABEL: &str = "*12345678*";

/// Canvas units per bar-width unit in the pattern tables.
const BAR_UNIT: f64 = 2.0;

/// Quiet zone between the container edge and the first bar.
const QUIET_ZONE: f64 = 8.0;

/// Point size of the sample label.
const LABEL_FONT_SIZE: f64 = 12.0;

/// Gap between the container bottom and the sample label.
const LABEL_GAP: f64 = 2.0;

/// Mock symbology variants. Patterns are visual stand-ins; the bar sequences
/// do not encode data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarcodeDesign {
    Code128,
    Code39,
    Ean13,
    QrMock,
    Minimal,
}

impl BarcodeDesign {
    pub const OPTIONS: [&'static str; 5] = ["CODE128", "CODE39", "EAN13", "QRMOCK", "MINIMAL"];

    pub fn name(&self) -> &'static str {
        match self {
            BarcodeDesign::Code128 => "CODE128",
            BarcodeDesign::Code39 => "CODE39",
            BarcodeDesign::Ean13 => "EAN13",
            BarcodeDesign::QrMock => "QRMOCK",
            BarcodeDesign::Minimal => "MINIMAL",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CODE128" => Some(BarcodeDesign::Code128),
            "CODE39" => Some(BarcodeDesign::Code39),
            "EAN13" => Some(BarcodeDesign::Ean13),
            "QRMOCK" => Some(BarcodeDesign::QrMock),
            "MINIMAL" => Some(BarcodeDesign::Minimal),
            _ => None,
        }
    }

    /// Bar widths consumed left to right. The cumulative horizontal offset
    /// advances by every width; only even indices produce a filled bar.
    /// Empty for [`BarcodeDesign::QrMock`], which draws one filled square.
    pub fn widths(&self) -> &'static [u32] {
        match self {
            BarcodeDesign::Code128 => {
                &[3, 2, 3, 2, 2, 3, 2, 3, 3, 2, 2, 3, 2, 3, 2, 2, 3, 2, 3]
            }
            BarcodeDesign::Minimal => &[4, 2, 4, 2, 4, 2, 4],
            BarcodeDesign::Ean13 => &[2, 2, 3, 2, 2, 4, 3, 2, 3, 2, 2],
            BarcodeDesign::Code39 => &[3, 1, 3, 1, 2, 1, 3, 1, 2, 1, 3],
            BarcodeDesign::QrMock => &[],
        }
    }
}

impl Default for BarcodeDesign {
    fn default() -> Self {
        BarcodeDesign::Code128
    }
}

/// One derived primitive of a barcode symbol, in element-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum BarcodeChild {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        filled: bool,
    },
    Label {
        x: f64,
        y: f64,
        text: String,
    },
}

impl BarcodeChild {
    /// Bounding box in element-local coordinates.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            BarcodeChild::Rect {
                x,
                y,
                width,
                height,
                ..
            } => (*x, *y, x + width, y + height),
            BarcodeChild::Label { x, y, text } => {
                let width = text.chars().count() as f64 * LABEL_FONT_SIZE * TEXT_CHAR_ADVANCE;
                (*x, *y, x + width, y + LABEL_FONT_SIZE)
            }
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        match self {
            BarcodeChild::Rect { x, y, .. } | BarcodeChild::Label { x, y, .. } => {
                *x += dx;
                *y += dy;
            }
        }
    }
}

/// A mock barcode symbol anchored at `(x, y)`.
///
/// The child primitives are derived from `design` and the container size and
/// are rebuilt, never edited. After every rebuild the children are shifted so
/// their union bounding box starts at local `(0, 0)`; the anchor is left
/// untouched, so switching designs never moves the element on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodeElement {
    pub x: f64,
    pub y: f64,
    design: BarcodeDesign,
    container_width: f64,
    container_height: f64,
    #[serde(skip)]
    children: SmallVec<[BarcodeChild; 16]>,
}

impl BarcodeElement {
    pub fn new(x: f64, y: f64) -> Self {
        let mut element = Self {
            x,
            y,
            design: BarcodeDesign::default(),
            container_width: BARCODE_CONTAINER_DEFAULT_WIDTH,
            container_height: BARCODE_CONTAINER_DEFAULT_HEIGHT,
            children: SmallVec::new(),
        };
        element.regenerate();
        element
    }

    pub fn design(&self) -> BarcodeDesign {
        self.design
    }

    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    pub fn children(&self) -> &[BarcodeChild] {
        &self.children
    }

    /// Filled bars (or the single square for QRMOCK), in drawing order.
    pub fn bars(&self) -> impl Iterator<Item = &BarcodeChild> {
        self.children
            .iter()
            .filter(|c| matches!(c, BarcodeChild::Rect { filled: true, .. }))
    }

    pub fn set_design(&mut self, design: BarcodeDesign) {
        if self.design != design {
            self.design = design;
            self.regenerate();
        }
    }

    pub fn set_container_width(&mut self, width: f64) {
        let width = width.clamp(BARCODE_CONTAINER_MIN, BARCODE_CONTAINER_MAX);
        if self.container_width != width {
            self.container_width = width;
            self.regenerate();
        }
    }

    pub fn set_container_height(&mut self, height: f64) {
        let height = height.clamp(BARCODE_CONTAINER_MIN, BARCODE_CONTAINER_MAX);
        if self.container_height != height {
            self.container_height = height;
            self.regenerate();
        }
    }

    /// Rebuilds the child set for the current design and container size.
    ///
    /// The anchor recorded on entry is restored on exit; only the local
    /// geometry changes. Must also be called after deserializing, since the
    /// children are not persisted.
    pub fn regenerate(&mut self) {
        let anchor = (self.x, self.y);
        let cw = self.container_width;
        let ch = self.container_height;

        self.children.clear();
        self.children.push(BarcodeChild::Rect {
            x: 0.0,
            y: 0.0,
            width: cw,
            height: ch,
            filled: false,
        });

        let widths = self.design.widths();
        if widths.is_empty() {
            // QRMOCK: one filled square centered in the container.
            let side = (cw.min(ch) - 2.0 * QUIET_ZONE).max(4.0);
            self.children.push(BarcodeChild::Rect {
                x: (cw - side) / 2.0,
                y: (ch - side) / 2.0,
                width: side,
                height: side,
                filled: true,
            });
        } else {
            let bar_top = QUIET_ZONE;
            let bar_height = (ch - 2.0 * QUIET_ZONE).max(4.0);
            let mut offset = QUIET_ZONE;
            for (index, width) in widths.iter().enumerate() {
                let bar_width = *width as f64 * BAR_UNIT;
                // Odd indices are gaps: they advance the offset but draw
                // nothing.
                if index % 2 == 0 {
                    self.children.push(BarcodeChild::Rect {
                        x: offset,
                        y: bar_top,
                        width: bar_width,
                        height: bar_height,
                        filled: true,
                    });
                }
                offset += bar_width;
            }
        }

        let label_width =
            SAMPLE_LABEL.chars().count() as f64 * LABEL_FONT_SIZE * TEXT_CHAR_ADVANCE;
        self.children.push(BarcodeChild::Label {
            x: (cw - label_width) / 2.0,
            y: ch + LABEL_GAP,
            text: SAMPLE_LABEL.to_string(),
        });

        // Shift the children so the union bounding box starts at local
        // (0, 0); designs draw different extents and the element would drift
        // visually otherwise.
        let (min_x, min_y, _, _) = self.children_bounds();
        if min_x != 0.0 || min_y != 0.0 {
            for child in &mut self.children {
                child.translate(-min_x, -min_y);
            }
        }

        self.x = anchor.0;
        self.y = anchor.1;
        debug_assert_eq!(
            (self.x, self.y),
            anchor,
            "regeneration must not move the anchor"
        );
    }

    /// Union of the child bounding boxes in local coordinates.
    fn children_bounds(&self) -> (f64, f64, f64, f64) {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for child in &self.children {
            let (x1, y1, x2, y2) = child.bounds();
            min_x = min_x.min(x1);
            min_y = min_y.min(y1);
            max_x = max_x.max(x2);
            max_y = max_y.max(y2);
        }
        if min_x == f64::INFINITY {
            return (0.0, 0.0, 0.0, 0.0);
        }
        (min_x, min_y, max_x, max_y)
    }
}

impl LabelElement for BarcodeElement {
    fn render(&self) -> Path {
        let mut builder = Path::builder();
        for child in &self.children {
            let (x1, y1, x2, y2) = child.bounds();
            builder.add_rectangle(
                &lyon::math::Box2D::new(
                    point((self.x + x1) as f32, (self.y + y1) as f32),
                    point((self.x + x2) as f32, (self.y + y2) as f32),
                ),
                lyon::path::Winding::Positive,
            );
        }
        builder.build()
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        let (min_x, min_y, max_x, max_y) = self.children_bounds();
        (
            self.x + min_x,
            self.y + min_y,
            self.x + max_x,
            self.y + max_y,
        )
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
            Property::new(
                "Design",
                PropertyValue::choice_of(self.design.name(), &BarcodeDesign::OPTIONS),
            ),
            Property::new(
                "Container Width",
                PropertyValue::Number(self.container_width),
            ),
            Property::new(
                "Container Height",
                PropertyValue::Number(self.container_height),
            ),
        ]
    }
}
