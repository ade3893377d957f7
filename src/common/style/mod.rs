//! Common style and formatting types.
//!
//! This module provides the measurement and color types shared by every ODF
//! style family.

// Submodule declarations
pub mod color;
pub mod len;

// Re-exports
pub use color::RGBColor;
pub use len::Length;
