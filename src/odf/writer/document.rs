//! Document body emission.

use super::image::ImageReader;
use super::segment::append_text;
use crate::common::{Error, Result};
use crate::odf::core::XmlElement;
use crate::odf::elements::{Element, Heading, Hyperlink, Image, List, Paragraph, Span, TextBody};
use crate::odf::style::{AutomaticStyles, CommonStyles, Style, style_name_from_display_name};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Writes the tree into `office:text`, resolving style names against the
/// registries filled by the collector.
pub(crate) struct BodyWriter<'a> {
    automatic: &'a AutomaticStyles,
    common: &'a CommonStyles,
    images: &'a dyn ImageReader,
}

impl<'a> BodyWriter<'a> {
    pub(crate) fn new(
        automatic: &'a AutomaticStyles,
        common: &'a CommonStyles,
        images: &'a dyn ImageReader,
    ) -> Self {
        Self {
            automatic,
            common,
            images,
        }
    }

    /// `office:text` with every top-level element
    pub(crate) fn write_body(&self, body: &TextBody) -> Result<XmlElement> {
        let mut text = XmlElement::new("office:text");
        self.write_children(&mut text, body.children())?;
        Ok(text)
    }

    /// Adjacent text runs are encoded as one string, otherwise a space ending
    /// one run and a space starting the next would be written literally.
    fn write_children(&self, parent: &mut XmlElement, children: &[Element]) -> Result<()> {
        let mut run = String::new();
        for child in children {
            if let Element::Text(text) = child {
                run.push_str(text.content());
                continue;
            }
            if !run.is_empty() {
                append_text(parent, &std::mem::take(&mut run));
            }
            self.write_element(parent, child)?;
        }
        if !run.is_empty() {
            append_text(parent, &run);
        }
        Ok(())
    }

    fn write_element(&self, parent: &mut XmlElement, element: &Element) -> Result<()> {
        match element {
            Element::Heading(heading) => parent.append_child(self.write_heading(heading)?),
            Element::Paragraph(paragraph) => parent.append_child(self.write_paragraph(paragraph)?),
            Element::List(list) => {
                if let Some(list) = self.write_list(list)? {
                    parent.append_child(list);
                }
            },
            Element::Text(text) => append_text(parent, text.content()),
            Element::Span(span) => parent.append_child(self.write_span(span)?),
            Element::Hyperlink(link) => parent.append_child(self.write_hyperlink(link)?),
            Element::Image(image) => parent.append_child(self.write_image(image)?),
        }
        Ok(())
    }

    /// Name for `text:style-name`: the automatic style if the element has a
    /// non-default one, else the common style it names, else nothing.
    fn resolve_style_name<S: Style>(
        &self,
        style: Option<&S>,
        style_name: Option<&str>,
    ) -> Result<Option<String>> {
        if let Some(style) = style
            && !style.is_default()
        {
            return self.automatic.name(style).map(|name| Some(name.to_string()));
        }

        Ok(style_name.map(|display_name| {
            if !self.common.contains(S::FAMILY, display_name) {
                tracing::warn!(
                    family = %S::FAMILY,
                    style = display_name,
                    "referenced style is not declared"
                );
            }
            style_name_from_display_name(display_name)
        }))
    }

    fn write_paragraph(&self, paragraph: &Paragraph) -> Result<XmlElement> {
        let mut element = XmlElement::new("text:p");
        if let Some(name) = self.resolve_style_name(paragraph.style(), paragraph.style_name())? {
            element.set_attribute("text:style-name", name);
        }
        self.write_children(&mut element, paragraph.children())?;
        Ok(element)
    }

    fn write_heading(&self, heading: &Heading) -> Result<XmlElement> {
        let mut element = XmlElement::new("text:h");
        if let Some(name) = self.resolve_style_name(heading.style(), heading.style_name())? {
            element.set_attribute("text:style-name", name);
        }
        element.set_attribute("text:outline-level", itoa::Buffer::new().format(heading.level()));
        self.write_children(&mut element, heading.children())?;
        Ok(element)
    }

    /// `None` for a list without items
    fn write_list(&self, list: &List) -> Result<Option<XmlElement>> {
        if list.is_empty() {
            return Ok(None);
        }
        let mut element = XmlElement::new("text:list");
        if let Some(name) = self.resolve_style_name(list.style(), list.style_name())? {
            element.set_attribute("text:style-name", name);
        }
        for item in list.items() {
            let mut item_element = XmlElement::new("text:list-item");
            self.write_children(&mut item_element, item.children())?;
            element.append_child(item_element);
        }
        Ok(Some(element))
    }

    fn write_span(&self, span: &Span) -> Result<XmlElement> {
        let mut element = XmlElement::new("text:span");
        if let Some(name) = self.resolve_style_name(span.style(), span.style_name())? {
            element.set_attribute("text:style-name", name);
        }
        self.write_children(&mut element, span.children())?;
        Ok(element)
    }

    fn write_hyperlink(&self, link: &Hyperlink) -> Result<XmlElement> {
        let mut element = XmlElement::new("text:a");
        element.set_attribute("xlink:type", "simple");
        element.set_attribute("xlink:href", link.href());
        self.write_children(&mut element, link.children())?;
        Ok(element)
    }

    fn write_image(&self, image: &Image) -> Result<XmlElement> {
        let bytes = self.images.read(image.path()).map_err(|source| Error::ImageRead {
            path: image.path().to_path_buf(),
            source,
        })?;

        let mut frame = XmlElement::new("draw:frame");
        frame.set_attribute("text:anchor-type", image.anchor().as_str());
        if let Some(width) = image.width() {
            frame.set_attribute("svg:width", width.to_odf_mm());
        }
        if let Some(height) = image.height() {
            frame.set_attribute("svg:height", height.to_odf_mm());
        }

        let mut data = XmlElement::new("office:binary-data");
        data.append_text(STANDARD.encode(&bytes));
        let mut draw_image = XmlElement::new("draw:image");
        draw_image.append_child(data);
        frame.append_child(draw_image);

        if let Some(description) = image.description() {
            let mut desc = XmlElement::new("svg:desc");
            desc.append_text(description);
            frame.append_child(desc);
        }
        Ok(frame)
    }
}
