//! ODF constants, MIME types, and namespaces.
//!
//! This module provides the constants needed to write a flat (single XML file)
//! OpenDocument Text document.
//!
//! # References
//!
//! - OASIS OpenDocument 1.2, part 1, section 2.2 (single XML document)

/// ODF specification version
pub const OFFICE_VERSION: &str = "1.2";

/// MIME type for OpenDocument Text, written into `office:mimetype`
pub const ODF_TEXT: &str = "application/vnd.oasis.opendocument.text";

/// File extension for flat OpenDocument Text
pub const FLAT_TEXT_EXTENSION: &str = "fodt";

// ============================================================================
// NAMESPACES
// ============================================================================

/// Office namespace
pub const OFFICENS: &str = "urn:oasis:names:tc:opendocument:xmlns:office:1.0";

/// Style namespace
pub const STYLENS: &str = "urn:oasis:names:tc:opendocument:xmlns:style:1.0";

/// Text namespace
pub const TEXTNS: &str = "urn:oasis:names:tc:opendocument:xmlns:text:1.0";

/// Drawing namespace
pub const DRAWNS: &str = "urn:oasis:names:tc:opendocument:xmlns:drawing:1.0";

/// XSL-FO compatible namespace
pub const FONS: &str = "urn:oasis:names:tc:opendocument:xmlns:xsl-fo-compatible:1.0";

/// SVG compatible namespace
pub const SVGNS: &str = "urn:oasis:names:tc:opendocument:xmlns:svg-compatible:1.0";

/// XLink namespace
pub const XLINKNS: &str = "http://www.w3.org/1999/xlink";

/// Dublin Core namespace
pub const DCNS: &str = "http://purl.org/dc/elements/1.1/";

/// Metadata namespace
pub const METANS: &str = "urn:oasis:names:tc:opendocument:xmlns:meta:1.0";

/// Namespaces declared on the `office:document` root, in declaration order.
pub const ROOT_NAMESPACES: [(&str, &str); 9] = [
    ("office", OFFICENS),
    ("style", STYLENS),
    ("text", TEXTNS),
    ("draw", DRAWNS),
    ("fo", FONS),
    ("svg", SVGNS),
    ("xlink", XLINKNS),
    ("dc", DCNS),
    ("meta", METANS),
];

/// Look up the namespace URI bound to a root prefix.
///
/// # Examples
///
/// ```
/// use flat_odt::odf::constants::{namespace_uri, TEXTNS};
///
/// assert_eq!(namespace_uri("text"), Some(TEXTNS));
/// assert_eq!(namespace_uri("table"), None);
/// ```
#[inline]
pub fn namespace_uri(prefix: &str) -> Option<&'static str> {
    ROOT_NAMESPACES
        .iter()
        .find(|(p, _)| *p == prefix)
        .map(|(_, uri)| *uri)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_office_version() {
        assert_eq!(OFFICE_VERSION, "1.2");
    }

    #[test]
    fn test_root_namespaces_are_unique() {
        for (i, (prefix, _)) in ROOT_NAMESPACES.iter().enumerate() {
            assert!(
                ROOT_NAMESPACES[i + 1..].iter().all(|(p, _)| p != prefix),
                "duplicate prefix {}",
                prefix
            );
        }
    }

    #[test]
    fn test_namespace_lookup() {
        assert_eq!(namespace_uri("office"), Some(OFFICENS));
        assert_eq!(namespace_uri("fo"), Some(FONS));
        assert_eq!(namespace_uri("unknown"), None);
    }
}
