//! The contract shared by every style kind.

use super::family::StyleFamily;
use super::list::ListStyle;
use super::paragraph::ParagraphStyle;
use super::text::TextStyle;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A style value object that can be declared in `office:styles` or
/// `office:automatic-styles`.
///
/// The `Hash` and `Eq` implementations define the deduplication key: every
/// field that changes the written declaration must take part in both. All
/// style kinds derive them, so a new field is part of the key automatically.
pub trait Style: Clone + Eq + Hash + fmt::Debug {
    /// Family this style is declared with
    const FAMILY: StyleFamily;

    /// Whether every property still has its default value.
    ///
    /// Default styles are never declared and never referenced.
    fn is_default(&self) -> bool;

    /// Fixed-width digest over the family and every property of the style.
    fn canonical_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        Self::FAMILY.hash(&mut hasher);
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Move the style into the family-tagged snapshot stored by registries
    fn into_value(self) -> StyleValue;

    /// Borrow the style back out of a snapshot of the same family
    fn from_value(value: &StyleValue) -> Option<&Self>;

    /// Mutably borrow the style out of a snapshot of the same family
    fn from_value_mut(value: &mut StyleValue) -> Option<&mut Self>;
}

/// A style of any family, as held by the registries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StyleValue {
    /// Paragraph family
    Paragraph(ParagraphStyle),
    /// Text family
    Text(TextStyle),
    /// List family
    List(ListStyle),
}

impl StyleValue {
    /// Family of the wrapped style
    pub fn family(&self) -> StyleFamily {
        match self {
            Self::Paragraph(_) => StyleFamily::Paragraph,
            Self::Text(_) => StyleFamily::Text,
            Self::List(_) => StyleFamily::List,
        }
    }

    /// Whether the wrapped style is default
    pub fn is_default(&self) -> bool {
        match self {
            Self::Paragraph(style) => style.is_default(),
            Self::Text(style) => style.is_default(),
            Self::List(style) => style.is_default(),
        }
    }
}

impl Style for ParagraphStyle {
    const FAMILY: StyleFamily = StyleFamily::Paragraph;

    fn is_default(&self) -> bool {
        self.paragraph_properties().is_default() && self.text_properties().is_default()
    }

    fn into_value(self) -> StyleValue {
        StyleValue::Paragraph(self)
    }

    fn from_value(value: &StyleValue) -> Option<&Self> {
        match value {
            StyleValue::Paragraph(style) => Some(style),
            _ => None,
        }
    }

    fn from_value_mut(value: &mut StyleValue) -> Option<&mut Self> {
        match value {
            StyleValue::Paragraph(style) => Some(style),
            _ => None,
        }
    }
}

impl Style for TextStyle {
    const FAMILY: StyleFamily = StyleFamily::Text;

    fn is_default(&self) -> bool {
        self.text_properties().is_default()
    }

    fn into_value(self) -> StyleValue {
        StyleValue::Text(self)
    }

    fn from_value(value: &StyleValue) -> Option<&Self> {
        match value {
            StyleValue::Text(style) => Some(style),
            _ => None,
        }
    }

    fn from_value_mut(value: &mut StyleValue) -> Option<&mut Self> {
        match value {
            StyleValue::Text(style) => Some(style),
            _ => None,
        }
    }
}

impl Style for ListStyle {
    const FAMILY: StyleFamily = StyleFamily::List;

    fn is_default(&self) -> bool {
        !self.consecutive_numbering() && self.levels().next().is_none()
    }

    fn into_value(self) -> StyleValue {
        StyleValue::List(self)
    }

    fn from_value(value: &StyleValue) -> Option<&Self> {
        match value {
            StyleValue::List(style) => Some(style),
            _ => None,
        }
    }

    fn from_value_mut(value: &mut StyleValue) -> Option<&mut Self> {
        match value {
            StyleValue::List(style) => Some(style),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Length;
    use crate::odf::style::HorizontalAlignment;

    #[test]
    fn test_hash_is_value_based() {
        let mut a = ParagraphStyle::new();
        a.paragraph_properties_mut()
            .set_horizontal_alignment(HorizontalAlignment::Center);
        let mut b = ParagraphStyle::new();
        b.paragraph_properties_mut()
            .set_horizontal_alignment(HorizontalAlignment::Center);

        assert_eq!(a.canonical_hash(), b.canonical_hash());
        b.paragraph_properties_mut().set_margin_top(Length::from_mm(1.0));
        assert_ne!(a.canonical_hash(), b.canonical_hash());
    }

    #[test]
    fn test_families_hash_apart() {
        // Both defaults, but a paragraph style and a text style are never the same key
        assert_ne!(
            ParagraphStyle::new().canonical_hash(),
            TextStyle::new().canonical_hash()
        );
    }

    #[test]
    fn test_value_round_trip() {
        let value = TextStyle::new().into_value();
        assert_eq!(value.family(), StyleFamily::Text);
        assert!(TextStyle::from_value(&value).is_some());
        assert!(ParagraphStyle::from_value(&value).is_none());
        assert!(value.is_default());
    }
}
