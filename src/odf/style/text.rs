//! Character formatting shared by paragraph and text styles.

use crate::common::{Length, RGBColor};

/// Font style (`fo:font-style`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
            Self::Oblique => "oblique",
        }
    }
}

/// Font weight (`fo:font-weight`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    /// One of 100, 200, ... 900
    Numeric(u16),
}

impl FontWeight {
    /// Attribute value
    pub fn to_odf(&self) -> String {
        match self {
            Self::Normal => "normal".to_string(),
            Self::Bold => "bold".to_string(),
            Self::Numeric(weight) => itoa::Buffer::new().format(*weight).to_string(),
        }
    }
}

/// Font variant (`fo:font-variant`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontVariant {
    #[default]
    Normal,
    SmallCaps,
}

impl FontVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::SmallCaps => "small-caps",
        }
    }
}

/// Text transformation (`fo:text-transform`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextTransform {
    #[default]
    None,
    Lowercase,
    Uppercase,
    Capitalize,
}

impl TextTransform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Lowercase => "lowercase",
            Self::Uppercase => "uppercase",
            Self::Capitalize => "capitalize",
        }
    }
}

/// Underline kind, written as `style:text-underline-type` and
/// `style:text-underline-style`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    #[default]
    None,
    Single,
    Double,
    Dotted,
    Dash,
    Wave,
}

impl Underline {
    /// Value of `style:text-underline-type`
    pub fn line_type(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Double => "double",
            _ => "single",
        }
    }

    /// Value of `style:text-underline-style`
    pub fn line_style(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single | Self::Double => "solid",
            Self::Dotted => "dotted",
            Self::Dash => "dash",
            Self::Wave => "wave",
        }
    }
}

/// Text formatting properties (`style:text-properties`).
///
/// Setters validate their input and ignore anything invalid, keeping the
/// previous value.
///
/// ```
/// use flat_odt::odf::style::TextProperties;
///
/// let mut props = TextProperties::new();
/// props.set_font_size(11.5);
/// props.set_font_size(-2.0);
/// assert_eq!(props.font_size(), Some(11.5));
///
/// props.set_language("english");
/// assert_eq!(props.language(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextProperties {
    font_variant: FontVariant,
    text_transform: TextTransform,
    color: Option<RGBColor>,
    font_name: Option<String>,
    font_size: Option<Length>,
    language: Option<String>,
    country: Option<String>,
    font_style: FontStyle,
    underline: Underline,
    underline_color: Option<RGBColor>,
    font_weight: FontWeight,
    background_color: Option<RGBColor>,
}

impl TextProperties {
    /// Create properties with every value at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every property equals its default
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn font_variant(&self) -> FontVariant {
        self.font_variant
    }

    pub fn set_font_variant(&mut self, variant: FontVariant) {
        self.font_variant = variant;
    }

    pub fn text_transform(&self) -> TextTransform {
        self.text_transform
    }

    pub fn set_text_transform(&mut self, transform: TextTransform) {
        self.text_transform = transform;
    }

    /// Font color
    pub fn color(&self) -> Option<RGBColor> {
        self.color
    }

    /// Set the font color from a `#rrggbb` string. Invalid colors are ignored.
    pub fn set_color(&mut self, color: &str) {
        if let Some(color) = RGBColor::from_hex(color) {
            self.color = Some(color);
        }
    }

    pub fn set_color_rgb(&mut self, color: RGBColor) {
        self.color = Some(color);
    }

    /// Name of a font face declared in `office:font-face-decls`
    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }

    /// Set the font name. Empty names are ignored.
    pub fn set_font_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.trim().is_empty() {
            self.font_name = Some(name);
        }
    }

    /// Font size in points
    pub fn font_size(&self) -> Option<f64> {
        self.font_size.map(|size| size.points())
    }

    /// Font size as a length
    pub fn font_size_length(&self) -> Option<Length> {
        self.font_size
    }

    /// Set the font size in points. Negative or non-finite sizes are ignored.
    pub fn set_font_size(&mut self, points: f64) {
        if points.is_finite() && points >= 0.0 {
            self.font_size = Some(Length::from_points(points));
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Set the language as an ISO 639 code of 2 or 3 letters
    pub fn set_language(&mut self, language: &str) {
        if (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic()) {
            self.language = Some(language.to_ascii_lowercase());
        }
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Set the country as an ISO 3166 code: 2 letters or 3 digits
    pub fn set_country(&mut self, country: &str) {
        let letters = country.len() == 2 && country.chars().all(|c| c.is_ascii_alphabetic());
        let digits = country.len() == 3 && country.chars().all(|c| c.is_ascii_digit());
        if letters || digits {
            self.country = Some(country.to_ascii_uppercase());
        }
    }

    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    pub fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
    }

    /// Shorthand for [`FontStyle::Italic`] or [`FontStyle::Normal`]
    pub fn set_italic(&mut self, italic: bool) {
        self.font_style = if italic { FontStyle::Italic } else { FontStyle::Normal };
    }

    pub fn underline(&self) -> Underline {
        self.underline
    }

    pub fn set_underline(&mut self, underline: Underline) {
        self.underline = underline;
    }

    /// Underline color; `None` follows the font color
    pub fn underline_color(&self) -> Option<RGBColor> {
        self.underline_color
    }

    pub fn set_underline_color(&mut self, color: RGBColor) {
        self.underline_color = Some(color);
    }

    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Set the font weight. Numeric weights outside 100..=900 or not a
    /// multiple of 100 are ignored.
    pub fn set_font_weight(&mut self, weight: FontWeight) {
        if let FontWeight::Numeric(value) = weight {
            if !(100..=900).contains(&value) || value % 100 != 0 {
                return;
            }
        }
        self.font_weight = weight;
    }

    /// Shorthand for [`FontWeight::Bold`] or [`FontWeight::Normal`]
    pub fn set_bold(&mut self, bold: bool) {
        self.font_weight = if bold { FontWeight::Bold } else { FontWeight::Normal };
    }

    /// Highlight color behind the text
    pub fn background_color(&self) -> Option<RGBColor> {
        self.background_color
    }

    /// Set the background color from a `#rrggbb` string. Invalid colors are ignored.
    pub fn set_background_color(&mut self, color: &str) {
        if let Some(color) = RGBColor::from_hex(color) {
            self.background_color = Some(color);
        }
    }

    pub fn set_background_color_rgb(&mut self, color: RGBColor) {
        self.background_color = Some(color);
    }
}

/// A character style applied to spans of text
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextStyle {
    text: TextProperties,
}

impl TextStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_properties(&self) -> &TextProperties {
        &self.text
    }

    pub fn text_properties_mut(&mut self) -> &mut TextProperties {
        &mut self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_size_validation() {
        let mut props = TextProperties::new();
        props.set_font_size(12.0);
        props.set_font_size(f64::NAN);
        props.set_font_size(f64::INFINITY);
        props.set_font_size(-1.0);
        assert_eq!(props.font_size(), Some(12.0));

        props.set_font_size(0.0);
        assert_eq!(props.font_size(), Some(0.0));
    }

    #[test]
    fn test_color_validation() {
        let mut props = TextProperties::new();
        props.set_color("#336699");
        props.set_color("#3369");
        props.set_color("blue");
        assert_eq!(props.color(), Some(RGBColor::new(0x33, 0x66, 0x99)));
    }

    #[test]
    fn test_language_and_country() {
        let mut props = TextProperties::new();
        props.set_language("de");
        props.set_language("d");
        props.set_language("deu1");
        assert_eq!(props.language(), Some("de"));

        props.set_country("at");
        assert_eq!(props.country(), Some("AT"));
        props.set_country("040");
        assert_eq!(props.country(), Some("040"));
        props.set_country("A1");
        props.set_country("12");
        assert_eq!(props.country(), Some("040"));
    }

    #[test]
    fn test_font_weight_validation() {
        let mut props = TextProperties::new();
        props.set_font_weight(FontWeight::Numeric(600));
        props.set_font_weight(FontWeight::Numeric(650));
        props.set_font_weight(FontWeight::Numeric(1000));
        assert_eq!(props.font_weight(), FontWeight::Numeric(600));
        assert_eq!(props.font_weight().to_odf(), "600");

        props.set_bold(true);
        assert_eq!(props.font_weight().to_odf(), "bold");
    }

    #[test]
    fn test_is_default() {
        let mut props = TextProperties::new();
        assert!(props.is_default());
        props.set_font_name("   ");
        assert!(props.is_default());
        props.set_italic(true);
        assert!(!props.is_default());
        props.set_italic(false);
        assert!(props.is_default());
    }

    #[test]
    fn test_underline_values() {
        assert_eq!(Underline::Double.line_type(), "double");
        assert_eq!(Underline::Double.line_style(), "solid");
        assert_eq!(Underline::Wave.line_type(), "single");
    }
}
