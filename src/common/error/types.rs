//! Unified error types for flat-odt.
//!
//! Cosmetic input (bad colors, negative sizes, malformed language tags) never
//! reaches this type: style setters keep their previous value instead. What is
//! left are programmer errors in the serialization pipeline and the single I/O
//! surface of the core, reading embedded images.
use std::path::PathBuf;
use thiserror::Error;

use crate::odf::style::StyleFamily;

/// Main error type for flat-odt operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML writing error
    #[error("XML error: {0}")]
    Xml(String),

    /// An automatic style name was requested for a style that was never added
    /// to the registry. Always a bug in the collect-then-emit ordering.
    #[error("{family} style was never registered with the automatic style registry")]
    StyleNotRegistered {
        /// Family of the style that could not be resolved
        family: StyleFamily,
    },

    /// An embedded image could not be read
    #[error("failed to read image '{}': {source}", path.display())]
    ImageRead {
        /// Path handed to the image reader
        path: PathBuf,
        /// Underlying reader failure
        source: std::io::Error,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for flat-odt operations.
pub type Result<T> = std::result::Result<T, Error>;
