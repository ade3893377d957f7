//! Common types, traits, and utilities shared across the crate.
//!
//! This module provides the error type, measurement and color value types,
//! and the document metadata record.

// Submodule declarations
pub mod error;
pub mod metadata;
pub mod style;
pub mod unit;

// Re-exports for convenience
pub use error::{Error, Result};
pub use metadata::Metadata;
pub use style::{Length, RGBColor};
