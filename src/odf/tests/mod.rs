//! End-to-end tests for the serialization pipeline.

mod properties;

use crate::odf::core::{XmlElement, XmlNode};
use std::io;
use std::path::Path;

/// Image reader returning the path bytes, so no files are needed
pub(super) fn path_bytes(path: &Path) -> io::Result<Vec<u8>> {
    Ok(path.to_string_lossy().into_owned().into_bytes())
}

/// The `office:text` element of a serialized root
pub(super) fn office_text(root: &XmlElement) -> &XmlElement {
    root.find_child("office:body")
        .and_then(|body| body.find_child("office:text"))
        .expect("office:text present")
}

/// Undo the whitespace encoding of a text container
pub(super) fn decoded_text(element: &XmlElement) -> String {
    let mut out = String::new();
    for node in element.children() {
        match node {
            XmlNode::Text(text) => out.push_str(text),
            XmlNode::Element(child) => match child.name() {
                "text:s" => {
                    let count = child
                        .attribute("text:c")
                        .map(|c| c.parse::<usize>().expect("numeric text:c"))
                        .unwrap_or(1);
                    out.extend(std::iter::repeat_n(' ', count));
                },
                "text:tab" => out.push('\t'),
                "text:line-break" => out.push('\n'),
                _ => out.push_str(&decoded_text(child)),
            },
        }
    }
    out
}
