//! Text content: paragraphs, headings and the inline elements they hold.

use super::draw::Image;
use super::element::Element;
use crate::odf::style::{ParagraphStyle, TextStyle};

/// A run of raw text.
///
/// Spaces, tabs and line breaks are kept as typed; they are encoded into
/// `text:s`, `text:tab` and `text:line-break` when the document is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}

/// A text paragraph (`text:p`)
///
/// ```
/// use flat_odt::odf::elements::{Paragraph, Span};
/// use flat_odt::odf::style::HorizontalAlignment;
///
/// let mut strong = Span::with_text("world");
/// strong.style_mut().text_properties_mut().set_bold(true);
///
/// let mut paragraph = Paragraph::with_text("Hello, ");
/// paragraph.add_span(strong).add_text("!");
/// paragraph
///     .style_mut()
///     .paragraph_properties_mut()
///     .set_horizontal_alignment(HorizontalAlignment::Center);
///
/// assert_eq!(paragraph.text(), "Hello, world!");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    style: Option<ParagraphStyle>,
    style_name: Option<String>,
    children: Vec<Element>,
}

impl Paragraph {
    /// Create an empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph holding one text run
    pub fn with_text(text: &str) -> Self {
        let mut paragraph = Self::new();
        paragraph.add_text(text);
        paragraph
    }

    /// Append a text run. Empty text is ignored.
    pub fn add_text(&mut self, text: &str) -> &mut Self {
        push_text(&mut self.children, text);
        self
    }

    pub fn add_span(&mut self, span: Span) -> &mut Self {
        self.children.push(Element::Span(span));
        self
    }

    pub fn add_link(&mut self, link: Hyperlink) -> &mut Self {
        self.children.push(Element::Hyperlink(link));
        self
    }

    pub fn add_image(&mut self, image: Image) -> &mut Self {
        self.children.push(Element::Image(image));
        self
    }

    /// Inline content in document order
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Plain text of every run, spans and links included
    pub fn text(&self) -> String {
        collect_text(&self.children)
    }

    /// Automatic style of this paragraph, if any
    pub fn style(&self) -> Option<&ParagraphStyle> {
        self.style.as_ref()
    }

    /// Automatic style, created with default properties on first access
    pub fn style_mut(&mut self) -> &mut ParagraphStyle {
        self.style.get_or_insert_with(ParagraphStyle::default)
    }

    pub fn set_style(&mut self, style: ParagraphStyle) {
        self.style = Some(style);
    }

    pub fn clear_style(&mut self) {
        self.style = None;
    }

    /// Display name of the common style this paragraph uses
    pub fn style_name(&self) -> Option<&str> {
        self.style_name.as_deref()
    }

    /// Reference a common style by display name. The name is not checked
    /// until the document is written.
    pub fn set_style_name(&mut self, name: impl Into<String>) {
        self.style_name = Some(name.into());
    }
}

/// A heading (`text:h`). Levels start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    level: u8,
    style: Option<ParagraphStyle>,
    style_name: Option<String>,
    children: Vec<Element>,
}

impl Default for Heading {
    fn default() -> Self {
        Self::new(1)
    }
}

impl Heading {
    /// Create an empty heading; level 0 is treated as 1
    pub fn new(level: u8) -> Self {
        Self {
            level: level.max(1),
            style: None,
            style_name: None,
            children: Vec::new(),
        }
    }

    /// Create a heading holding one text run
    pub fn with_text(text: &str, level: u8) -> Self {
        let mut heading = Self::new(level);
        heading.add_text(text);
        heading
    }

    /// Outline level, at least 1
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Set the outline level; 0 is treated as 1
    pub fn set_level(&mut self, level: u8) {
        self.level = level.max(1);
    }

    pub fn add_text(&mut self, text: &str) -> &mut Self {
        push_text(&mut self.children, text);
        self
    }

    pub fn add_span(&mut self, span: Span) -> &mut Self {
        self.children.push(Element::Span(span));
        self
    }

    pub fn add_link(&mut self, link: Hyperlink) -> &mut Self {
        self.children.push(Element::Hyperlink(link));
        self
    }

    pub fn add_image(&mut self, image: Image) -> &mut Self {
        self.children.push(Element::Image(image));
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn text(&self) -> String {
        collect_text(&self.children)
    }

    pub fn style(&self) -> Option<&ParagraphStyle> {
        self.style.as_ref()
    }

    pub fn style_mut(&mut self) -> &mut ParagraphStyle {
        self.style.get_or_insert_with(ParagraphStyle::default)
    }

    pub fn set_style(&mut self, style: ParagraphStyle) {
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

/// Formatted inline text (`text:span`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Span {
    style: Option<TextStyle>,
    style_name: Option<String>,
    children: Vec<Element>,
}

impl Span {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        let mut span = Self::new();
        span.add_text(text);
        span
    }

    pub fn add_text(&mut self, text: &str) -> &mut Self {
        push_text(&mut self.children, text);
        self
    }

    /// Nest another span
    pub fn add_span(&mut self, span: Span) -> &mut Self {
        self.children.push(Element::Span(span));
        self
    }

    pub fn add_link(&mut self, link: Hyperlink) -> &mut Self {
        self.children.push(Element::Hyperlink(link));
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn text(&self) -> String {
        collect_text(&self.children)
    }

    pub fn style(&self) -> Option<&TextStyle> {
        self.style.as_ref()
    }

    pub fn style_mut(&mut self) -> &mut TextStyle {
        self.style.get_or_insert_with(TextStyle::default)
    }

    pub fn set_style(&mut self, style: TextStyle) {
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

/// A hyperlink (`text:a`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hyperlink {
    href: String,
    children: Vec<Element>,
}

impl Hyperlink {
    /// Create a link to `href` with no content
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            children: Vec::new(),
        }
    }

    /// Create a link showing `text`
    pub fn with_text(href: impl Into<String>, text: &str) -> Self {
        let mut link = Self::new(href);
        link.add_text(text);
        link
    }

    /// Target URI, written as `xlink:href`
    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn set_href(&mut self, href: impl Into<String>) {
        self.href = href.into();
    }

    pub fn add_text(&mut self, text: &str) -> &mut Self {
        push_text(&mut self.children, text);
        self
    }

    pub fn add_span(&mut self, span: Span) -> &mut Self {
        self.children.push(Element::Span(span));
        self
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn text(&self) -> String {
        collect_text(&self.children)
    }
}

fn push_text(children: &mut Vec<Element>, text: &str) {
    if !text.is_empty() {
        children.push(Element::Text(Text::new(text)));
    }
}

fn collect_text(children: &[Element]) -> String {
    let mut out = String::new();
    for child in children {
        match child {
            Element::Text(text) => out.push_str(text.content()),
            Element::Span(span) => out.push_str(&span.text()),
            Element::Hyperlink(link) => out.push_str(&link.text()),
            _ => {},
        }
    }
    out
}
