//! Shared type aliases for LabelKit.

mod aliases;

pub use aliases::{shared, Callback, DataCallback, Shared, SharedOption, SharedVec};
