//! The document tree.
//!
//! A document body owns its children; every container owns its own children
//! in insertion order. Lists own their [`ListItem`]s directly, so an item can
//! only ever appear inside a list.

use super::draw::Image;
use super::list::{List, ListItem};
use super::text::{Heading, Hyperlink, Paragraph, Span, Text};

/// Any node of the document tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Heading(Heading),
    Paragraph(Paragraph),
    List(List),
    Text(Text),
    Span(Span),
    Hyperlink(Hyperlink),
    Image(Image),
}

impl Element {
    /// Qualified name of the XML element this node is written as
    pub fn tag_name(&self) -> &'static str {
        match self {
            Self::Heading(_) => "text:h",
            Self::Paragraph(_) => "text:p",
            Self::List(_) => "text:list",
            // Text runs become text nodes and whitespace elements
            Self::Text(_) => "#text",
            Self::Span(_) => "text:span",
            Self::Hyperlink(_) => "text:a",
            Self::Image(_) => "draw:frame",
        }
    }

    /// Number of nodes in this subtree, list items included
    pub fn node_count(&self) -> usize {
        1 + match self {
            Self::Heading(h) => count(h.children()),
            Self::Paragraph(p) => count(p.children()),
            Self::List(l) => l.items().iter().map(|item| 1 + count(item.children())).sum(),
            Self::Span(s) => count(s.children()),
            Self::Hyperlink(a) => count(a.children()),
            Self::Text(_) | Self::Image(_) => 0,
        }
    }
}

fn count(children: &[Element]) -> usize {
    children.iter().map(Element::node_count).sum()
}

impl From<Heading> for Element {
    fn from(value: Heading) -> Self {
        Self::Heading(value)
    }
}

impl From<Paragraph> for Element {
    fn from(value: Paragraph) -> Self {
        Self::Paragraph(value)
    }
}

impl From<List> for Element {
    fn from(value: List) -> Self {
        Self::List(value)
    }
}

impl From<Text> for Element {
    fn from(value: Text) -> Self {
        Self::Text(value)
    }
}

impl From<Span> for Element {
    fn from(value: Span) -> Self {
        Self::Span(value)
    }
}

impl From<Hyperlink> for Element {
    fn from(value: Hyperlink) -> Self {
        Self::Hyperlink(value)
    }
}

impl From<Image> for Element {
    fn from(value: Image) -> Self {
        Self::Image(value)
    }
}

/// Body of a text document (`office:text`): headings, paragraphs and lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBody {
    children: Vec<Element>,
}

impl TextBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_heading(&mut self, heading: Heading) -> &mut Self {
        self.children.push(Element::Heading(heading));
        self
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.children.push(Element::Paragraph(paragraph));
        self
    }

    pub fn add_list(&mut self, list: List) -> &mut Self {
        self.children.push(Element::List(list));
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the whole tree
    pub fn node_count(&self) -> usize {
        count(&self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count() {
        let mut body = TextBody::new();
        body.add_heading(Heading::with_text("Title", 1));
        let mut list = List::new();
        list.add_item_text("one").add_item(ListItem::new());
        body.add_list(list);

        // heading + text, list + (item + paragraph + text) + empty item
        assert_eq!(body.node_count(), 2 + 1 + 3 + 1);
        assert_eq!(body.len(), 2);
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(Element::from(Paragraph::new()).tag_name(), "text:p");
        assert_eq!(Element::from(Image::new("x.png")).tag_name(), "draw:frame");
    }
}
