//! Embedded images.

use crate::common::Length;
use std::path::{Path, PathBuf};

/// How an image frame is anchored (`text:anchor-type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnchorType {
    /// Positioned like a character in the line
    #[default]
    AsChar,
    /// Anchored to a character
    Char,
    /// Anchored to the paragraph
    Paragraph,
}

impl AnchorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AsChar => "as-char",
            Self::Char => "char",
            Self::Paragraph => "paragraph",
        }
    }
}

/// An image embedded in the document.
///
/// Only the path is stored. The bytes are read when the document is written
/// and embedded base64-encoded as `office:binary-data`, so a flat document
/// carries no external references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    path: PathBuf,
    width: Option<Length>,
    height: Option<Length>,
    anchor: AnchorType,
    description: Option<String>,
}

impl Image {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            width: None,
            height: None,
            anchor: AnchorType::default(),
            description: None,
        }
    }

    /// Source file of the image data
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> Option<Length> {
        self.width
    }

    pub fn height(&self) -> Option<Length> {
        self.height
    }

    /// Set the frame size. Sizes that are not positive are ignored.
    pub fn set_size(&mut self, width: Length, height: Length) -> &mut Self {
        if width.emus() > 0 && height.emus() > 0 {
            self.width = Some(width);
            self.height = Some(height);
        }
        self
    }

    pub fn anchor(&self) -> AnchorType {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: AnchorType) -> &mut Self {
        self.anchor = anchor;
        self
    }

    /// Alternative text, written as `svg:desc`
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }
}
