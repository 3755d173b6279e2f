//! Change notifications for the host shell.
//!
//! The editor core never calls into UI toolkits; it queues events that the
//! host drains once per input event via [`EditorState::take_events`].
//!
//! [`EditorState::take_events`]: crate::EditorState::take_events

/// One editor change notification.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// The selection changed; `None` means nothing is selected and the
    /// property panel area shows its neutral placeholder.
    SelectionChanged { element_id: Option<u64> },
    /// Outline entries were added, removed, reordered, or relabeled.
    OutlineChanged,
    /// An element moved; carries the applied (clamped) position so a bound
    /// panel can update its live position readout.
    ElementMoved { id: u64, x: f64, y: f64 },
    /// The canvas content changed and should be repainted.
    RedrawRequested,
}
