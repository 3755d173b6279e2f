//! Error handling for LabelKit
//!
//! Provides the error types shared by the designer core and any host shell:
//! - Design errors (canvas/document state violations)
//! - Serialization errors (design snapshots)
//! - I/O errors (host-facing file boundary)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Design error type
///
/// Represents violations of the canvas/document state model. Most editor
/// inputs are absorbed defensively (stale edits, repeated deletes); the
/// variants here cover the cases that genuinely cannot be applied.
#[derive(Error, Debug, Clone)]
pub enum DesignError {
    /// No element with the given id exists on the canvas
    #[error("Element {id} not found")]
    ElementNotFound {
        /// The element id that failed to resolve.
        id: u64,
    },

    /// A reorder request did not match the current element set
    #[error("Reorder mismatch: canvas has {expected} elements, order lists {got}")]
    ReorderMismatch {
        /// Number of elements on the canvas.
        expected: usize,
        /// Number of ids in the requested order.
        got: usize,
    },

    /// Generic design error
    #[error("Design error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Main error type for LabelKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Design error
    #[error(transparent)]
    Design(#[from] DesignError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a design error
    pub fn is_design_error(&self) -> bool {
        matches!(self, Error::Design(_))
    }

    /// Check if this is a serialization error
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialization(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
