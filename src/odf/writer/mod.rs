//! Serialization of a document tree into flat ODF XML.
//!
//! [`serialize`] runs three passes over the tree:
//!
//! 1. the collector registers every automatic style, fixing the names
//! 2. the style writer declares common and automatic styles
//! 3. the body writer emits the elements, referencing styles by name
//!
//! The metadata and font face writers are separate; the document host calls
//! them around the core output.

mod collector;
mod document;
mod font_face;
mod image;
mod meta;
mod segment;
mod style;

pub use collector::collect_styles;
pub use font_face::write_font_faces;
pub use image::{FileImageReader, ImageReader};
pub use meta::write_meta;
pub use segment::{TextSegment, decode, segment};
pub use style::{write_paragraph_properties, write_style, write_text_properties};

use crate::common::Result;
use crate::odf::core::{XmlDocument, XmlElement};
use crate::odf::elements::TextBody;
use crate::odf::style::{AutomaticStyles, CommonStyles};
use document::BodyWriter;

/// Serialize a document body.
///
/// Returns an `office:document` root holding `office:styles`,
/// `office:automatic-styles` and `office:body`. The automatic style registry
/// is built fresh for every call, so serializing the same tree twice gives
/// identical output. Namespace declarations, metadata and font faces are left
/// to the caller (see [`TextDocument`](crate::odf::TextDocument)).
///
/// Fails only if an image cannot be read; no partial document is returned.
///
/// # Examples
///
/// ```
/// use flat_odt::odf::elements::{Paragraph, TextBody};
/// use flat_odt::odf::style::CommonStyles;
/// use flat_odt::odf::writer::{FileImageReader, serialize};
///
/// # fn main() -> flat_odt::Result<()> {
/// let mut body = TextBody::new();
/// body.add_paragraph(Paragraph::with_text("Hello"));
///
/// let doc = serialize(&body, &CommonStyles::new(), &FileImageReader)?;
/// let xml = doc.root().to_xml_string()?;
/// assert!(xml.contains("<office:text><text:p>Hello</text:p></office:text>"));
/// # Ok(())
/// # }
/// ```
pub fn serialize(
    body: &TextBody,
    common_styles: &CommonStyles,
    images: &dyn ImageReader,
) -> Result<XmlDocument> {
    tracing::debug!(
        nodes = body.node_count(),
        common_styles = common_styles.len(),
        "serializing document body"
    );

    let mut automatic = AutomaticStyles::new();
    collect_styles(body, &mut automatic);

    let mut root = XmlElement::new("office:document");
    root.append_child(style::write_common_styles(common_styles));
    root.append_child(style::write_automatic_styles(&automatic));

    let writer = BodyWriter::new(&automatic, common_styles, images);
    let mut office_body = XmlElement::new("office:body");
    office_body.append_child(writer.write_body(body)?);
    root.append_child(office_body);

    tracing::debug!(automatic_styles = automatic.len(), "document body serialized");
    Ok(XmlDocument::new(root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use crate::odf::elements::{Image, Paragraph};
    use std::io;
    use std::path::Path;

    fn no_images(path: &Path) -> io::Result<Vec<u8>> {
        Err(io::Error::new(io::ErrorKind::NotFound, path.display().to_string()))
    }

    #[test]
    fn test_root_layout() {
        let doc = serialize(&TextBody::new(), &CommonStyles::new(), &no_images).unwrap();
        let names: Vec<_> = doc.root().child_elements().map(|e| e.name()).collect();
        assert_eq!(
            names,
            vec!["office:styles", "office:automatic-styles", "office:body"]
        );
    }

    #[test]
    fn test_image_failure_aborts() {
        let mut paragraph = Paragraph::new();
        paragraph.add_image(Image::new("missing.png"));
        let mut body = TextBody::new();
        body.add_paragraph(paragraph);

        let err = serialize(&body, &CommonStyles::new(), &no_images).unwrap_err();
        match err {
            Error::ImageRead { path, source } => {
                assert_eq!(path, Path::new("missing.png"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            },
            other => panic!("unexpected error {other:?}"),
        }
    }
}
