//! `office:font-face-decls` writer.

use crate::odf::core::XmlElement;
use crate::odf::style::FontFaceDeclarations;

/// Quote a family name containing whitespace, as `svg:font-family` expects
fn quote_family(family: &str) -> String {
    let quoted = family.starts_with('\'') || family.starts_with('"');
    if !quoted && family.contains(char::is_whitespace) {
        format!("'{family}'")
    } else {
        family.to_string()
    }
}

/// Render every declared font face, in declaration order
pub fn write_font_faces(faces: &FontFaceDeclarations) -> XmlElement {
    let mut element = XmlElement::new("office:font-face-decls");
    for face in faces.iter() {
        let mut decl = XmlElement::new("style:font-face");
        decl.set_attribute("style:name", face.name());
        decl.set_attribute("svg:font-family", quote_family(face.font_family()));
        if let Some(generic) = face.generic() {
            decl.set_attribute("style:font-family-generic", generic.as_str());
        }
        if let Some(pitch) = face.pitch() {
            decl.set_attribute("style:font-pitch", pitch.as_str());
        }
        element.append_child(decl);
    }
    element
}
