//! Output DOM and XML serialization.
//!
//! The writers in [`crate::odf::writer`] build an [`XmlDocument`]; this module
//! owns the tree types and turns them into bytes with quick-xml.

/// Element and document tree
mod dom;
/// quick-xml backed serialization
mod xml;

pub use dom::{XmlDocument, XmlElement, XmlNode};
