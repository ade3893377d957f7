//! flat-odt - build text documents and write them as flat OpenDocument XML
//!
//! This library builds an in-memory document tree (headings, paragraphs,
//! lists, spans, hyperlinks, images) and serializes it into a single-file
//! OpenDocument Text document (`.fodt`).
//!
//! # Features
//!
//! - **Value-typed styles**: every element can carry its own paragraph, text
//!   or list style; equal styles are declared once as automatic styles
//! - **Named styles**: common styles referenced by display name
//! - **Minimal output**: only properties that differ from their defaults
//!   are written, in schema order
//! - **Whitespace preserving**: runs of spaces, tabs and line breaks survive
//!   the round trip through `text:s`, `text:tab` and `text:line-break`
//! - **Self-contained**: images are embedded as base64 binary data
//!
//! # Example
//!
//! ```no_run
//! use flat_odt::odf::elements::{Heading, List, Paragraph, Span};
//! use flat_odt::odf::style::{HorizontalAlignment, NumberFormat};
//! use flat_odt::odf::TextDocument;
//!
//! # fn main() -> flat_odt::Result<()> {
//! let mut doc = TextDocument::new();
//! doc.set_title("Report");
//!
//! let mut title = Heading::with_text("Quarterly report", 1);
//! title
//!     .style_mut()
//!     .paragraph_properties_mut()
//!     .set_horizontal_alignment(HorizontalAlignment::Center);
//! doc.add_heading(title);
//!
//! let mut bold = Span::with_text("up 12%");
//! bold.style_mut().text_properties_mut().set_bold(true);
//! let mut summary = Paragraph::with_text("Revenue is ");
//! summary.add_span(bold).add_text(".");
//! doc.add_paragraph(summary);
//!
//! let mut steps = List::new();
//! steps.style_mut().set_number_level(1, NumberFormat::Arabic);
//! steps.add_item_text("Collect").add_item_text("Review");
//! doc.add_list(steps);
//!
//! doc.save("report.fodt")?;
//! # Ok(())
//! # }
//! ```

/// Shared value types, errors and metadata
pub mod common;

/// OpenDocument model and writer
///
/// Contains the document tree, the style system, the serialization pipeline
/// and the [`odf::TextDocument`] host.
pub mod odf;

pub use common::{Error, Result};
pub use odf::{DocumentOptions, TextDocument};
