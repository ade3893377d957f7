//! OpenDocument Text host.
//!
//! [`TextDocument`] owns the document body, the named styles, font faces and
//! metadata, and wraps the serialized core in the `office:document` root.

mod document;
mod options;

pub use document::TextDocument;
pub use options::DocumentOptions;
