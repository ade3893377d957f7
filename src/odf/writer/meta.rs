//! `office:meta` writer.

use crate::common::Metadata;
use crate::odf::core::XmlElement;
use chrono::{DateTime, SecondsFormat, Utc};

fn text_element(name: &str, text: &str) -> XmlElement {
    let mut element = XmlElement::new(name);
    element.append_text(text);
    element
}

fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Render document metadata. Unset fields are left out.
pub fn write_meta(meta: &Metadata) -> XmlElement {
    let mut element = XmlElement::new("office:meta");

    let mut push = |name: &str, value: Option<&str>| {
        if let Some(value) = value {
            element.append_child(text_element(name, value));
        }
    };
    push("meta:generator", meta.generator.as_deref());
    push("dc:title", meta.title.as_deref());
    push("dc:description", meta.description.as_deref());
    push("dc:subject", meta.subject.as_deref());
    for keyword in &meta.keywords {
        push("meta:keyword", Some(keyword.as_str()));
    }
    push("meta:initial-creator", meta.initial_creator.as_deref());
    push("dc:creator", meta.creator.as_deref());
    push("meta:creation-date", meta.created.as_ref().map(format_date).as_deref());
    push("dc:date", meta.modified.as_ref().map(format_date).as_deref());
    push("dc:language", meta.language.as_deref());
    if let Some(cycles) = meta.editing_cycles {
        push("meta:editing-cycles", Some(itoa::Buffer::new().format(cycles)));
    }

    element
}
