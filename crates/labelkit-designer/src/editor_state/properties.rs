//! Property edits for the bound element.
//!
//! This is the write half of the property binding: every field edit lands in
//! [`EditorState::set_element_property`], which re-resolves the element by id
//! (a stale id from a panel left open over a delete is dropped silently),
//! clamps numeric values to their ranges, and absorbs same-value writes
//! without emitting events, so panel echoes cannot loop.

use tracing::{debug, warn};

use labelkit_core::constants::{FONT_SIZE_MAX, FONT_SIZE_MIN};

use super::EditorState;
use crate::events::EditorEvent;
use crate::model::{
    BarcodeDesign, BarcodeElement, ElementShape, FontFamily, LabelElement, LineElement,
    PropertyValue, RectElement, Rotation, TextAlignment, TextElement, ValueSource,
};

/// Result of dispatching one field write onto an element.
enum Applied {
    /// The field changed; follow-up work (relabel, reclamp, redraw) is due.
    Changed,
    /// The write matched the current value (possibly after clamping) and was
    /// absorbed.
    Unchanged,
    /// The field name or value type does not belong to this panel.
    Unknown,
}

impl EditorState {
    /// Applies one property-panel edit to an element.
    ///
    /// Returns true when the edit was accepted (including absorbed
    /// same-value writes); false when it was dropped — stale element id,
    /// unknown field, mismatched value type, or an edit echoed back during a
    /// panel refresh.
    pub fn set_element_property(&mut self, id: u64, field: &str, value: PropertyValue) -> bool {
        if self.binding.is_refreshing() {
            debug!(id, field, "dropping field edit echoed during panel refresh");
            return false;
        }

        // Position fields route through the canvas move API so the bounds
        // clamp applies, same as a drag.
        if field == "X" || field == "Y" {
            return self.set_position_field(id, field, &value);
        }

        let Some(object) = self.canvas.get_mut(id) else {
            debug!(id, field, "dropping edit for missing element");
            return false;
        };

        let applied = match &mut object.shape {
            ElementShape::Text(text) => apply_text_property(text, field, &value),
            ElementShape::Rectangle(rect) => apply_rect_property(rect, field, &value),
            ElementShape::Line(line) => apply_line_property(line, field, &value),
            ElementShape::Barcode(barcode) => apply_barcode_property(barcode, field, &value),
        };

        match applied {
            Applied::Unknown => {
                warn!(id, field, "unknown property field for element");
                false
            }
            Applied::Unchanged => true,
            Applied::Changed => {
                // The rendered extent may have changed; keep the element
                // inside the surface.
                let _ = self.canvas.reclamp_element(id);
                self.outline.relabel(&self.canvas, id);
                self.push_event(EditorEvent::OutlineChanged);
                self.push_event(EditorEvent::RedrawRequested);
                self.mark_modified();
                true
            }
        }
    }

    fn set_position_field(&mut self, id: u64, field: &str, value: &PropertyValue) -> bool {
        let Some(n) = value.as_number() else {
            warn!(id, field, "position fields take numeric values");
            return false;
        };
        let Some(object) = self.canvas.get(id) else {
            debug!(id, field, "dropping edit for missing element");
            return false;
        };
        let origin = object.shape.origin();
        let (x, y) = match field {
            "X" => (n, origin.y),
            _ => (origin.x, n),
        };
        if x == origin.x && y == origin.y {
            return true;
        }
        self.move_element(id, x, y).is_some()
    }

    /// Renames an element; the outline entry follows immediately.
    pub fn rename_element(&mut self, id: u64, name: &str) -> bool {
        let Some(object) = self.canvas.get_mut(id) else {
            debug!(id, "dropping rename for missing element");
            return false;
        };
        if object.name == name {
            return true;
        }
        object.name = name.to_string();
        self.outline.relabel(&self.canvas, id);
        self.push_event(EditorEvent::OutlineChanged);
        self.mark_modified();
        true
    }

    /// Shows or hides an element on the canvas.
    pub fn set_element_visible(&mut self, id: u64, visible: bool) -> bool {
        let Some(object) = self.canvas.get_mut(id) else {
            debug!(id, "dropping visibility change for missing element");
            return false;
        };
        if object.visible == visible {
            return true;
        }
        object.visible = visible;
        self.push_event(EditorEvent::RedrawRequested);
        self.mark_modified();
        true
    }
}

fn apply_text_property(text: &mut TextElement, field: &str, value: &PropertyValue) -> Applied {
    match field {
        "Content" => match value.as_str() {
            Some(content) if content != text.content => {
                text.content = content.to_string();
                Applied::Changed
            }
            Some(_) => Applied::Unchanged,
            None => Applied::Unknown,
        },
        "Font Family" => match value.as_str().and_then(FontFamily::from_name) {
            Some(family) if family != text.font_family => {
                text.font_family = family;
                Applied::Changed
            }
            Some(_) => Applied::Unchanged,
            None => Applied::Unknown,
        },
        "Font Size" => match value.as_number() {
            Some(n) => {
                let size = n.round().clamp(FONT_SIZE_MIN as f64, FONT_SIZE_MAX as f64) as u32;
                if size != text.font_size {
                    text.set_font_size(size);
                    Applied::Changed
                } else {
                    Applied::Unchanged
                }
            }
            None => Applied::Unknown,
        },
        "Alignment" => match value.as_str().and_then(TextAlignment::from_name) {
            Some(alignment) if alignment != text.alignment => {
                text.alignment = alignment;
                Applied::Changed
            }
            Some(_) => Applied::Unchanged,
            None => Applied::Unknown,
        },
        "Source" => match value.as_str().and_then(ValueSource::from_name) {
            Some(source) if source != text.source => {
                text.source = source;
                Applied::Changed
            }
            Some(_) => Applied::Unchanged,
            None => Applied::Unknown,
        },
        "Caption" => match value.as_str() {
            Some(caption) if caption != text.caption => {
                text.caption = caption.to_string();
                Applied::Changed
            }
            Some(_) => Applied::Unchanged,
            None => Applied::Unknown,
        },
        "Show Value" => match value.as_bool() {
            Some(show) if show != text.show_value => {
                text.show_value = show;
                Applied::Changed
            }
            Some(_) => Applied::Unchanged,
            None => Applied::Unknown,
        },
        "Required" => match value.as_bool() {
            Some(required) if required != text.required => {
                text.required = required;
                Applied::Changed
            }
            Some(_) => Applied::Unchanged,
            None => Applied::Unknown,
        },
        "Rotation" => {
            let rotation = value
                .as_str()
                .and_then(|s| s.parse::<u32>().ok())
                .and_then(Rotation::from_display);
            match rotation {
                Some(rotation) if rotation != text.rotation => {
                    text.rotation = rotation;
                    Applied::Changed
                }
                Some(_) => Applied::Unchanged,
                None => Applied::Unknown,
            }
        }
        _ => Applied::Unknown,
    }
}

fn apply_rect_property(rect: &mut RectElement, field: &str, value: &PropertyValue) -> Applied {
    let Some(n) = value.as_number() else {
        return Applied::Unknown;
    };
    match field {
        "Width" => {
            let before = rect.width;
            rect.set_width(n);
            if rect.width != before {
                Applied::Changed
            } else {
                Applied::Unchanged
            }
        }
        "Height" => {
            let before = rect.height;
            rect.set_height(n);
            if rect.height != before {
                Applied::Changed
            } else {
                Applied::Unchanged
            }
        }
        "Border Width" => {
            let before = rect.border_width;
            rect.set_border_width(n);
            if rect.border_width != before {
                Applied::Changed
            } else {
                Applied::Unchanged
            }
        }
        _ => Applied::Unknown,
    }
}

fn apply_line_property(line: &mut LineElement, field: &str, value: &PropertyValue) -> Applied {
    let Some(n) = value.as_number() else {
        return Applied::Unknown;
    };
    match field {
        "Length" => {
            let before = line.length;
            line.set_length(n);
            if line.length != before {
                Applied::Changed
            } else {
                Applied::Unchanged
            }
        }
        "Thickness" => {
            let before = line.thickness;
            line.set_thickness(n);
            if line.thickness != before {
                Applied::Changed
            } else {
                Applied::Unchanged
            }
        }
        _ => Applied::Unknown,
    }
}

fn apply_barcode_property(
    barcode: &mut BarcodeElement,
    field: &str,
    value: &PropertyValue,
) -> Applied {
    match field {
        "Design" => match value.as_str().and_then(BarcodeDesign::from_name) {
            Some(design) if design != barcode.design() => {
                barcode.set_design(design);
                Applied::Changed
            }
            Some(_) => Applied::Unchanged,
            None => Applied::Unknown,
        },
        "Container Width" => match value.as_number() {
            Some(n) => {
                let before = barcode.container_width();
                barcode.set_container_width(n);
                if barcode.container_width() != before {
                    Applied::Changed
                } else {
                    Applied::Unchanged
                }
            }
            None => Applied::Unknown,
        },
        "Container Height" => match value.as_number() {
            Some(n) => {
                let before = barcode.container_height();
                barcode.set_container_height(n);
                if barcode.container_height() != before {
                    Applied::Changed
                } else {
                    Applied::Unchanged
                }
            }
            None => Applied::Unknown,
        },
        _ => Applied::Unknown,
    }
}
