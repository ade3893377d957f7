//! Unified error types for flat-odt.
//!
//! This module provides the single error type returned by the document
//! serialization pipeline.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
