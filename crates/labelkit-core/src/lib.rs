//! # LabelKit Core
//!
//! Shared foundation for LabelKit: error taxonomy, layout constants, and
//! the single-threaded sharing aliases a UI host wraps the editor state in.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{DesignError, Error, Result};

pub use types::{shared, Callback, DataCallback, Shared, SharedOption, SharedVec};
