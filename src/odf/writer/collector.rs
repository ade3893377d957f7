//! Registers every automatic style of a document tree.
//!
//! Runs once, before anything is written, so that style names are fixed when
//! the declarations and the `text:style-name` references are emitted.

use crate::odf::elements::{Element, List, TextBody};
use crate::odf::style::AutomaticStyles;

/// Add the automatic style of every element to `styles`, in document order.
/// Elements that only name a common style are skipped.
pub fn collect_styles(body: &TextBody, styles: &mut AutomaticStyles) {
    for element in body.children() {
        collect_element(element, styles);
    }
}

fn collect_element(element: &Element, styles: &mut AutomaticStyles) {
    match element {
        Element::Heading(heading) => {
            if let Some(style) = heading.style() {
                styles.add(style);
            }
            collect_children(heading.children(), styles);
        },
        Element::Paragraph(paragraph) => {
            if let Some(style) = paragraph.style() {
                styles.add(style);
            }
            collect_children(paragraph.children(), styles);
        },
        Element::List(list) => collect_list(list, styles),
        Element::Span(span) => {
            if let Some(style) = span.style() {
                styles.add(style);
            }
            collect_children(span.children(), styles);
        },
        Element::Hyperlink(link) => collect_children(link.children(), styles),
        Element::Text(_) | Element::Image(_) => {},
    }
}

fn collect_list(list: &List, styles: &mut AutomaticStyles) {
    // Empty lists are not written, so their style is not declared either
    if list.is_empty() {
        return;
    }
    if let Some(style) = list.style() {
        styles.add(style);
    }
    for item in list.items() {
        collect_children(item.children(), styles);
    }
}

fn collect_children(children: &[Element], styles: &mut AutomaticStyles) {
    for child in children {
        collect_element(child, styles);
    }
}
