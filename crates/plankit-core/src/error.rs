//! Error handling for Plankit
//!
//! Provides error types for the two failure families of the plan editor:
//! - Partition errors (wall sub-segment layout violating its length budget)
//! - Document errors (plan file save/load)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Degenerate geometry is deliberately *not* an error anywhere in this
//! workspace: a zero-length reference segment simply produces no output.

use thiserror::Error;

/// Wall partition error type
///
/// Raised when a wall's ordered list of sub-segment widths cannot be
/// accepted for saving. Rendering never raises these; a live preview
/// draws whatever it is given so the user can see the problem.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PartitionError {
    /// A named width is negative
    #[error("Width of '{name}' must not be negative, got {value} cm")]
    NegativeWidth {
        /// The sub-segment field name.
        name: &'static str,
        /// The offending width in centimeters.
        value: f64,
    },

    /// A mandatory opening has zero (or negative) width
    #[error("Opening '{name}' must be wider than zero")]
    EmptyOpening {
        /// The opening field name.
        name: &'static str,
    },

    /// The partition does not fit the wall
    #[error("Partition spans {total} cm but the wall only offers {available} cm")]
    ExceedsAvailable {
        /// Sum of all declared sub-segment widths in centimeters.
        total: f64,
        /// The wall's available length in centimeters.
        available: f64,
    },
}

/// Wall editor error type
///
/// Represents protocol violations of the modal wall editor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    /// Save or field update attempted with no open session
    #[error("No wall editor session is open")]
    NotOpen,

    /// Save attempted while the partition is invalid
    #[error(transparent)]
    InvalidPartition(#[from] PartitionError),
}

/// Plan document error type
///
/// Represents errors while reading or writing the versioned plan file.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// File carries a version this build does not understand
    #[error("Unsupported plan file version {found}, expected {expected}")]
    UnsupportedVersion {
        /// The version string found in the file.
        found: String,
        /// The version string this build writes.
        expected: String,
    },

    /// File is not a valid plan document
    #[error("Malformed plan file: {reason}")]
    Malformed {
        /// Why deserialization was rejected.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main error type for Plankit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Wall partition error
    #[error(transparent)]
    Partition(#[from] PartitionError),

    /// Wall editor error
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// Plan document error
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a partition error (directly or via the editor)
    pub fn is_partition_error(&self) -> bool {
        matches!(
            self,
            Error::Partition(_) | Error::Editor(EditorError::InvalidPartition(_))
        )
    }

    /// Check if this is a document error
    pub fn is_document_error(&self) -> bool {
        matches!(self, Error::Document(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
