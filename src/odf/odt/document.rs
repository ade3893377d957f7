//! Flat OpenDocument Text documents.

use super::options::DocumentOptions;
use crate::common::{Metadata, Result};
use crate::odf::constants::{ODF_TEXT, OFFICE_VERSION, ROOT_NAMESPACES};
use crate::odf::core::XmlDocument;
use crate::odf::elements::{Heading, List, Paragraph, TextBody};
use crate::odf::style::{CommonStyles, FontFace, FontFaceDeclarations};
use crate::odf::writer::{FileImageReader, ImageReader, serialize, write_font_faces, write_meta};
use std::path::Path;

/// A text document written as a single `.fodt` XML file.
///
/// # Examples
///
/// ```no_run
/// use flat_odt::odf::elements::{Heading, Paragraph};
/// use flat_odt::odf::style::ParagraphStyle;
/// use flat_odt::odf::TextDocument;
///
/// # fn main() -> flat_odt::Result<()> {
/// let mut doc = TextDocument::new();
/// doc.common_styles_mut()
///     .create::<ParagraphStyle>("Text body")?
///     .paragraph_properties_mut()
///     .set_margin_bottom(flat_odt::common::Length::from_mm(2.5));
///
/// let mut body = Paragraph::with_text("Hello, World!");
/// body.set_style_name("Text body");
///
/// doc.add_heading(Heading::with_text("Greeting", 1))
///     .add_paragraph(body);
/// doc.save("hello.fodt")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TextDocument {
    metadata: Metadata,
    body: TextBody,
    common_styles: CommonStyles,
    font_faces: FontFaceDeclarations,
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDocument {
    /// Create an empty document with default options
    pub fn new() -> Self {
        Self::with_options(DocumentOptions::default())
    }

    /// Create an empty document, seeding the metadata from `options`
    pub fn with_options(options: DocumentOptions) -> Self {
        let metadata = Metadata {
            generator: Some(options.generator),
            initial_creator: options.creator.clone(),
            creator: options.creator,
            created: options.creation_date,
            modified: options.creation_date,
            language: options.language,
            ..Default::default()
        };
        Self {
            metadata,
            body: TextBody::new(),
            common_styles: CommonStyles::new(),
            font_faces: FontFaceDeclarations::new(),
        }
    }

    pub fn add_heading(&mut self, heading: Heading) -> &mut Self {
        self.body.add_heading(heading);
        self
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.body.add_paragraph(paragraph);
        self
    }

    pub fn add_list(&mut self, list: List) -> &mut Self {
        self.body.add_list(list);
        self
    }

    pub fn body(&self) -> &TextBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut TextBody {
        &mut self.body
    }

    pub fn common_styles(&self) -> &CommonStyles {
        &self.common_styles
    }

    /// Named styles, written to `office:styles`
    pub fn common_styles_mut(&mut self) -> &mut CommonStyles {
        &mut self.common_styles
    }

    /// Declare a font face. Returns `false` if the name is already declared.
    pub fn add_font_face(&mut self, face: FontFace) -> bool {
        self.font_faces.add(face)
    }

    pub fn font_faces(&self) -> &FontFaceDeclarations {
        &self.font_faces
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }

    /// Set the document title
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = Some(title.into());
    }

    /// Build the complete XML tree, reading images from the file system
    pub fn to_xml_document(&self) -> Result<XmlDocument> {
        self.to_xml_document_with(&FileImageReader)
    }

    /// Build the complete XML tree, reading images through `images`
    pub fn to_xml_document_with(&self, images: &dyn ImageReader) -> Result<XmlDocument> {
        let mut document = serialize(&self.body, &self.common_styles, images)?;

        let root = document.root_mut();
        for (prefix, uri) in ROOT_NAMESPACES {
            root.set_attribute(&format!("xmlns:{prefix}"), uri);
        }
        root.set_attribute("office:version", OFFICE_VERSION);
        root.set_attribute("office:mimetype", ODF_TEXT);

        // Schema order: meta, font faces, then the styles produced by the core
        root.insert_child(0, write_meta(&self.metadata));
        root.insert_child(1, write_font_faces(&self.font_faces));
        Ok(document)
    }

    /// Serialize to a string
    pub fn to_xml_string(&self) -> Result<String> {
        self.to_xml_document()?.to_xml_string()
    }

    /// Write the document to `path`, conventionally with the `.fodt` extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let xml = self.to_xml_string()?;
        std::fs::write(path, xml)?;
        Ok(())
    }
}
