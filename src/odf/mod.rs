//! OpenDocument Format support.
//!
//! Layout, leaves first:
//!
//! - [`style`]: style value objects and the common/automatic registries
//! - [`elements`]: the document tree
//! - [`core`]: the output DOM and its XML serializer
//! - [`writer`]: style collection and emission, the text whitespace codec
//! - [`odt`]: the text document host

pub mod constants;
pub mod core;
pub mod elements;
pub mod odt;
pub mod style;
pub mod writer;

#[cfg(test)]
mod tests;

pub use odt::{DocumentOptions, TextDocument};
