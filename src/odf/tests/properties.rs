#![cfg(test)]

use super::{decoded_text, office_text, path_bytes};
use crate::common::Length;
use crate::odf::core::XmlNode;
use crate::odf::elements::{Paragraph, TextBody};
use crate::odf::style::{
    AutomaticStyles, CommonStyles, HorizontalAlignment, ParagraphStyle, Style,
};
use crate::odf::writer::{collect_styles, serialize};
use proptest::prelude::*;
use std::collections::HashSet;

fn alignment_strategy() -> impl Strategy<Value = HorizontalAlignment> {
    prop_oneof![
        Just(HorizontalAlignment::Default),
        Just(HorizontalAlignment::Left),
        Just(HorizontalAlignment::Center),
        Just(HorizontalAlignment::Justify),
    ]
}

/// Small value ranges so that equal styles come up often
fn style_strategy() -> impl Strategy<Value = ParagraphStyle> {
    (alignment_strategy(), 0u8..3, any::<bool>(), prop::option::of(10u8..12)).prop_map(
        |(alignment, margin, bold, size)| {
            let mut style = ParagraphStyle::new();
            let props = style.paragraph_properties_mut();
            props.set_horizontal_alignment(alignment);
            props.set_margin_top(Length::from_mm(f64::from(margin)));
            style.text_properties_mut().set_bold(bold);
            if let Some(size) = size {
                style.text_properties_mut().set_font_size(f64::from(size));
            }
            style
        },
    )
}

fn body_with(styles: &[ParagraphStyle]) -> TextBody {
    let mut body = TextBody::new();
    for style in styles {
        let mut paragraph = Paragraph::with_text("p");
        paragraph.set_style(style.clone());
        body.add_paragraph(paragraph);
    }
    body
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_one_declaration_per_distinct_style(
        styles in prop::collection::vec(style_strategy(), 0..24)
    ) {
        let body = body_with(&styles);
        let mut registry = AutomaticStyles::new();
        collect_styles(&body, &mut registry);

        let distinct: HashSet<&ParagraphStyle> = styles
            .iter()
            .filter(|style| !style.is_default())
            .collect();
        prop_assert_eq!(registry.len(), distinct.len());

        for a in &styles {
            for b in &styles {
                if a == b && registry.contains(a) {
                    prop_assert_eq!(registry.name(a).unwrap(), registry.name(b).unwrap());
                }
            }
        }

        let doc = serialize(&body, &CommonStyles::new(), &path_bytes).unwrap();
        let declared = doc
            .root()
            .find_child("office:automatic-styles")
            .unwrap()
            .child_elements()
            .count();
        prop_assert_eq!(declared, distinct.len());
    }

    #[test]
    fn prop_serialization_is_deterministic(
        styles in prop::collection::vec(style_strategy(), 0..12)
    ) {
        let body = body_with(&styles);
        let first = serialize(&body, &CommonStyles::new(), &path_bytes)
            .unwrap()
            .to_xml_string()
            .unwrap();
        let second = serialize(&body, &CommonStyles::new(), &path_bytes)
            .unwrap()
            .to_xml_string()
            .unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_paragraph_whitespace_round_trip(text in "[ a-c\t\r\n]{0,48}", split in 0usize..=48) {
        let (head, tail) = text.split_at(split.min(text.len()));
        let mut paragraph = Paragraph::with_text(head);
        paragraph.add_text(tail);
        let mut body = TextBody::new();
        body.add_paragraph(paragraph);
        let doc = serialize(&body, &CommonStyles::new(), &path_bytes).unwrap();
        let paragraph = office_text(doc.root()).find_child("text:p").unwrap();

        // Consecutive text nodes are one character run once written out
        let mut literal = String::new();
        for node in paragraph.children() {
            match node {
                XmlNode::Text(text) => literal.push_str(text),
                XmlNode::Element(_) => literal.push('|'),
            }
        }
        prop_assert!(!literal.contains("  "), "collapsible spaces in {:?}", literal);
        let expected: String = text.chars().filter(|&c| c != '\r').collect();
        prop_assert_eq!(decoded_text(paragraph), expected);
    }
}
