//! Layout constants shared across LabelKit crates.
//!
//! The label surface defaults and the clamp ranges for every numeric element
//! property live here so the designer crate and any host shell agree on them.

/// Default label surface width in canvas units.
pub const CANVAS_WIDTH: f64 = 600.0;

/// Default label surface height in canvas units.
pub const CANVAS_HEIGHT: f64 = 400.0;

/// Default grid spacing in canvas units.
pub const GRID_SIZE: f64 = 20.0;

/// Default anchor for newly placed elements.
pub const DEFAULT_ORIGIN: (f64, f64) = (50.0, 50.0);

/// Font size range for text elements.
pub const FONT_SIZE_MIN: u32 = 1;
pub const FONT_SIZE_MAX: u32 = 100;

/// Line geometry ranges.
pub const LINE_LENGTH_MIN: f64 = 0.0;
pub const LINE_THICKNESS_MIN: f64 = 1.0;
pub const LINE_THICKNESS_MAX: f64 = 100.0;

/// Rectangle geometry ranges.
pub const RECT_SIDE_MIN: f64 = 0.0;
pub const RECT_SIDE_MAX: f64 = 5000.0;
pub const RECT_BORDER_MIN: f64 = 0.0;
pub const RECT_BORDER_MAX: f64 = 20.0;

/// Barcode container ranges and defaults.
pub const BARCODE_CONTAINER_MIN: f64 = 20.0;
pub const BARCODE_CONTAINER_MAX: f64 = 1000.0;
pub const BARCODE_CONTAINER_DEFAULT_WIDTH: f64 = 160.0;
pub const BARCODE_CONTAINER_DEFAULT_HEIGHT: f64 = 80.0;

/// Approximate advance width of one character as a fraction of the font
/// size. Used for text extents when no glyph data is available.
pub const TEXT_CHAR_ADVANCE: f64 = 0.6;

/// Outline value summaries truncate text content to this many characters.
pub const SUMMARY_TEXT_CHARS: usize = 20;
