//! Lists and list items.

use super::element::Element;
use super::text::{Heading, Paragraph};
use crate::odf::style::ListStyle;

/// A list (`text:list`). A list without items is not written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct List {
    style: Option<ListStyle>,
    style_name: Option<String>,
    items: Vec<ListItem>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item
    pub fn add_item(&mut self, item: ListItem) -> &mut Self {
        self.items.push(item);
        self
    }

    /// Append an item holding one paragraph of text
    pub fn add_item_text(&mut self, text: &str) -> &mut Self {
        self.add_item(ListItem::with_text(text))
    }

    /// Insert an item at `index`; indices past the end append
    pub fn insert_item(&mut self, index: usize, item: ListItem) {
        let index = index.min(self.items.len());
        self.items.insert(index, item);
    }

    pub fn item(&self, index: usize) -> Option<&ListItem> {
        self.items.get(index)
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut ListItem> {
        self.items.get_mut(index)
    }

    pub fn remove_item(&mut self, index: usize) -> Option<ListItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn style(&self) -> Option<&ListStyle> {
        self.style.as_ref()
    }

    /// Automatic list style, created empty on first access
    pub fn style_mut(&mut self) -> &mut ListStyle {
        self.style.get_or_insert_with(ListStyle::default)
    }

    pub fn set_style(&mut self, style: ListStyle) {
        self.style = Some(style);
    }

    pub fn clear_style(&mut self) {
        self.style = None;
    }

    pub fn style_name(&self) -> Option<&str> {
        self.style_name.as_deref()
    }

    pub fn set_style_name(&mut self, name: impl Into<String>) {
        self.style_name = Some(name.into());
    }
}

/// An item of a list (`text:list-item`), holding paragraphs, headings and
/// nested lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    children: Vec<Element>,
}

impl ListItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let mut item = Self::new();
        item.add_paragraph(Paragraph::with_text(text));
        item
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Self {
        self.children.push(Element::Paragraph(paragraph));
        self
    }

    pub fn add_heading(&mut self, heading: Heading) -> &mut Self {
        self.children.push(Element::Heading(heading));
        self
    }

    /// Nest a list inside this item
    pub fn add_list(&mut self, list: List) -> &mut Self {
        self.children.push(Element::List(list));
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_management() {
        let mut list = List::new();
        assert!(list.is_empty());
        list.add_item_text("first").add_item_text("third");
        list.insert_item(1, ListItem::with_text("second"));
        list.insert_item(99, ListItem::with_text("fourth"));
        assert_eq!(list.len(), 4);

        let texts: Vec<_> = list
            .items()
            .iter()
            .map(|item| match &item.children()[0] {
                Element::Paragraph(p) => p.text(),
                other => panic!("unexpected child {other:?}"),
            })
            .collect();
        assert_eq!(texts, vec!["first", "second", "third", "fourth"]);

        assert!(list.remove_item(10).is_none());
        assert!(list.remove_item(0).is_some());
        assert_eq!(list.len(), 3);
        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_nested_list() {
        let mut inner = List::new();
        inner.add_item_text("child");
        let mut item = ListItem::with_text("parent");
        item.add_list(inner);
        assert_eq!(item.children().len(), 2);
        assert!(matches!(item.children()[1], Element::List(_)));
    }
}
