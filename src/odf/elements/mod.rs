//! Document tree elements.

mod draw;
mod element;
mod list;
mod text;

pub use draw::{AnchorType, Image};
pub use element::{Element, TextBody};
pub use list::{List, ListItem};
pub use text::{Heading, Hyperlink, Paragraph, Span, Text};
