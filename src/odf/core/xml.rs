//! XML serialization of the output DOM.
//!
//! Writing goes through `quick_xml::Writer`, which handles attribute and text
//! escaping. Output is compact: indentation between elements would be read as
//! document whitespace inside `text:p`, so none is added.

use super::dom::{XmlDocument, XmlElement, XmlNode};
use crate::common::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

impl XmlDocument {
    /// Serialize to a string, including the XML declaration.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_odt::odf::core::{XmlDocument, XmlElement};
    ///
    /// # fn main() -> flat_odt::Result<()> {
    /// let mut root = XmlElement::new("text:p");
    /// root.append_text("a < b");
    /// let xml = XmlDocument::new(root).to_xml_string()?;
    /// assert!(xml.ends_with("<text:p>a &lt; b</text:p>"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_xml_string(&self) -> Result<String> {
        let mut buffer = Vec::with_capacity(4096);
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Serialize into any writer, including the XML declaration.
    pub fn write_to<W: Write>(&self, out: W) -> Result<()> {
        let mut writer = Writer::new(out);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        write_element(&mut writer, self.root())
    }
}

impl XmlElement {
    /// Serialize this element (without XML declaration) to a string.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, self)?;
        Ok(String::from_utf8(writer.into_inner())?)
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name());
    for (key, value) in element.attributes() {
        start.push_attribute((key, value));
    }

    if element.is_empty() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    for child in element.children() {
        match child {
            XmlNode::Element(child) => write_element(writer, child)?,
            XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new(element.name())))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_and_empty_elements() {
        let root = XmlElement::new("office:document").with_attribute("office:version", "1.2");
        let xml = XmlDocument::new(root).to_xml_string().unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.ends_with(r#"<office:document office:version="1.2"/>"#));
    }

    #[test]
    fn test_attribute_escaping() {
        let element = XmlElement::new("text:a").with_attribute("xlink:href", "a?b=1&c=\"2\"");
        let xml = element.to_xml_string().unwrap();
        assert!(xml.contains("a?b=1&amp;c=&quot;2&quot;"), "{}", xml);
    }

    #[test]
    fn test_mixed_content_is_not_indented() {
        let mut para = XmlElement::new("text:p");
        para.append_text("a ");
        para.append_child(XmlElement::new("text:s"));
        para.append_text("b");
        assert_eq!(para.to_xml_string().unwrap(), "<text:p>a <text:s/>b</text:p>");
    }
}
