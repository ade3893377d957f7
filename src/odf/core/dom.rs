//! Minimal output DOM for the serialized document.
//!
//! Elements keep attributes in insertion order and children in document order,
//! so the same tree always serializes to the same bytes. There is no parser
//! side: the tree is built by the writers and handed to [`super::xml`].

use smallvec::SmallVec;

/// A node in the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// A child element
    Element(XmlElement),
    /// A character data node (escaped on output)
    Text(String),
}

impl XmlNode {
    /// The element behind this node, if it is one.
    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// The text behind this node, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Element(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<XmlElement> for XmlNode {
    fn from(element: XmlElement) -> Self {
        Self::Element(element)
    }
}

/// An element with a qualified tag name (`text:p`), ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: SmallVec<[(String, String); 4]>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    /// Create a new element
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    /// Get the qualified tag name of this element
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set attribute value.
    ///
    /// An existing attribute keeps its position and only has its value replaced.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(slot) = self.attributes.iter_mut().find(|(key, _)| key == name) {
            slot.1 = value;
        } else {
            self.attributes.push((name.to_string(), value));
        }
    }

    /// Builder form of [`XmlElement::set_attribute`].
    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Get attribute value by name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Remove attribute, returning its value
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let index = self.attributes.iter().position(|(key, _)| key == name)?;
        Some(self.attributes.remove(index).1)
    }

    /// Iterate attributes in insertion order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Add a child element
    pub fn append_child(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    /// Add a text node. Empty strings are ignored.
    pub fn append_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if !text.is_empty() {
            self.children.push(XmlNode::Text(text));
        }
    }

    /// Add any node
    pub fn append_node(&mut self, node: XmlNode) {
        match node {
            XmlNode::Text(text) => self.append_text(text),
            element => self.children.push(element),
        }
    }

    /// Insert a child element at `index`, clamped to the number of children
    pub fn insert_child(&mut self, index: usize, child: XmlElement) {
        let index = index.min(self.children.len());
        self.children.insert(index, XmlNode::Element(child));
    }

    /// Get all child nodes
    #[inline]
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Iterate child elements, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// First child element with the given tag name
    pub fn find_child(&self, name: &str) -> Option<&XmlElement> {
        self.child_elements().find(|child| child.name == name)
    }

    /// First child element with the given tag name, mutably
    pub fn find_child_mut(&mut self, name: &str) -> Option<&mut XmlElement> {
        self.children.iter_mut().find_map(|node| match node {
            XmlNode::Element(child) if child.name == name => Some(child),
            _ => None,
        })
    }

    /// Whether the element has no child nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Get text recursively from this element and all children
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(element) => element.collect_text(out),
            }
        }
    }
}

/// A complete output document: the root element plus the XML declaration
/// written by [`XmlDocument::to_xml_string`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    /// Wrap a root element
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }

    /// Get the root element
    #[inline]
    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// Get the root element mutably
    #[inline]
    pub fn root_mut(&mut self) -> &mut XmlElement {
        &mut self.root
    }

    /// Unwrap the root element
    pub fn into_root(self) -> XmlElement {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_order_is_stable() {
        let mut element = XmlElement::new("text:p");
        element.set_attribute("text:style-name", "P1");
        element.set_attribute("text:class-names", "a");
        element.set_attribute("text:style-name", "P2");

        let attrs: Vec<_> = element.attributes().collect();
        assert_eq!(attrs, vec![("text:style-name", "P2"), ("text:class-names", "a")]);
    }

    #[test]
    fn test_remove_attribute() {
        let mut element = XmlElement::new("text:p").with_attribute("a", "1");
        assert_eq!(element.remove_attribute("a"), Some("1".to_string()));
        assert_eq!(element.attribute("a"), None);
        assert_eq!(element.remove_attribute("a"), None);
    }

    #[test]
    fn test_text_content_is_recursive() {
        let mut span = XmlElement::new("text:span");
        span.append_text("world");
        let mut para = XmlElement::new("text:p");
        para.append_text("hello ");
        para.append_child(span);
        para.append_text("");

        assert_eq!(para.text_content(), "hello world");
        assert_eq!(para.children().len(), 2);
    }

    #[test]
    fn test_insert_and_find_child() {
        let mut root = XmlElement::new("office:document");
        root.append_child(XmlElement::new("office:body"));
        root.insert_child(0, XmlElement::new("office:meta"));
        root.insert_child(99, XmlElement::new("office:tail"));

        let names: Vec<_> = root.child_elements().map(XmlElement::name).collect();
        assert_eq!(names, vec!["office:meta", "office:body", "office:tail"]);
        assert!(root.find_child("office:body").is_some());
        root.find_child_mut("office:body")
            .unwrap()
            .set_attribute("x", "y");
        assert_eq!(root.find_child("office:body").unwrap().attribute("x"), Some("y"));
    }
}
