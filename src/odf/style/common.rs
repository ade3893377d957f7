//! User-named styles declared in `office:styles`.

use super::family::StyleFamily;
use super::name::style_name_from_display_name;
use super::value::{Style, StyleValue};
use crate::common::{Error, Result};
use std::collections::HashMap;

/// A named style
#[derive(Debug, Clone)]
pub struct CommonStyle {
    display_name: String,
    name: String,
    value: StyleValue,
}

impl CommonStyle {
    /// Name chosen by the caller
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Escaped name written as `style:name` and referenced by elements
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> StyleFamily {
        self.value.family()
    }

    pub fn value(&self) -> &StyleValue {
        &self.value
    }
}

/// Registry of common styles, persisted with the document.
///
/// Styles are identified by family and display name. Two styles with equal
/// properties but different names stay two declarations.
///
/// ```
/// use flat_odt::odf::style::{CommonStyles, FontStyle, ParagraphStyle};
///
/// # fn main() -> flat_odt::Result<()> {
/// let mut styles = CommonStyles::new();
/// styles
///     .create::<ParagraphStyle>("Quote")?
///     .text_properties_mut()
///     .set_italic(true);
///
/// // Creating again returns the existing style
/// let quote = styles.create::<ParagraphStyle>("Quote")?;
/// assert_eq!(quote.text_properties().font_style(), FontStyle::Italic);
/// assert_eq!(styles.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct CommonStyles {
    styles: Vec<CommonStyle>,
    index: HashMap<(StyleFamily, String), usize>,
}

impl CommonStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the style named `display_name`, creating an empty one first if
    /// it does not exist yet.
    ///
    /// Fails only if the entry found under `S`'s family holds a style of
    /// another family.
    pub fn create<S: Style + Default>(&mut self, display_name: &str) -> Result<&mut S> {
        let key = (S::FAMILY, display_name.to_string());
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.styles.len();
                self.styles.push(CommonStyle {
                    display_name: display_name.to_string(),
                    name: style_name_from_display_name(display_name),
                    value: S::default().into_value(),
                });
                self.index.insert(key, position);
                position
            },
        };

        S::from_value_mut(&mut self.styles[position].value).ok_or_else(|| {
            Error::Other(format!(
                "common style '{display_name}' is not a {} style",
                S::FAMILY
            ))
        })
    }

    /// Style named `display_name`, if any
    pub fn get<S: Style>(&self, display_name: &str) -> Option<&S> {
        self.entry(S::FAMILY, display_name)
            .and_then(|entry| S::from_value(&entry.value))
    }

    /// Mutable style named `display_name`, if any
    pub fn get_mut<S: Style>(&mut self, display_name: &str) -> Option<&mut S> {
        let position = *self
            .index
            .get(&(S::FAMILY, display_name.to_string()))?;
        S::from_value_mut(&mut self.styles[position].value)
    }

    /// Entry of any kind by family and display name
    pub fn entry(&self, family: StyleFamily, display_name: &str) -> Option<&CommonStyle> {
        self.index
            .get(&(family, display_name.to_string()))
            .map(|&position| &self.styles[position])
    }

    pub fn contains(&self, family: StyleFamily, display_name: &str) -> bool {
        self.entry(family, display_name).is_some()
    }

    /// All styles in creation order
    pub fn iter(&self) -> impl Iterator<Item = &CommonStyle> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::style::{HorizontalAlignment, ParagraphStyle, TextStyle};

    #[test]
    fn test_create_is_idempotent() {
        let mut styles = CommonStyles::new();
        styles
            .create::<ParagraphStyle>("Title").unwrap()
            .paragraph_properties_mut()
            .set_horizontal_alignment(HorizontalAlignment::Center);
        let again = styles.create::<ParagraphStyle>("Title").unwrap();
        assert_eq!(
            again.paragraph_properties().horizontal_alignment(),
            HorizontalAlignment::Center
        );
        assert_eq!(styles.len(), 1);
    }

    #[test]
    fn test_create_same_name_in_each_family() {
        let mut styles = CommonStyles::new();
        assert!(styles.create::<TextStyle>("Accent").is_ok());
        assert!(styles.create::<ParagraphStyle>("Accent").is_ok());
        assert!(styles.create::<TextStyle>("Accent").is_ok());
        assert_eq!(styles.len(), 2);
        assert_eq!(styles.entry(StyleFamily::Text, "Accent").unwrap().family(), StyleFamily::Text);
    }

    #[test]
    fn test_identity_is_the_name() {
        let mut styles = CommonStyles::new();
        styles.create::<TextStyle>("Strong").unwrap().text_properties_mut().set_bold(true);
        styles.create::<TextStyle>("Bold").unwrap().text_properties_mut().set_bold(true);
        assert_eq!(styles.len(), 2);
    }

    #[test]
    fn test_families_are_separate() {
        let mut styles = CommonStyles::new();
        styles.create::<TextStyle>("Emphasis").unwrap();
        assert!(styles.get::<ParagraphStyle>("Emphasis").is_none());
        assert!(styles.get::<TextStyle>("Emphasis").is_some());
        assert!(styles.get::<TextStyle>("Missing").is_none());
    }

    #[test]
    fn test_escaped_name_and_order() {
        let mut styles = CommonStyles::new();
        styles.create::<ParagraphStyle>("Text body").unwrap();
        styles.create::<ParagraphStyle>("Caption").unwrap();
        let names: Vec<_> = styles.iter().map(|s| (s.display_name(), s.name())).collect();
        assert_eq!(
            names,
            vec![("Text body", "Text_20_body"), ("Caption", "Caption")]
        );
    }
}
