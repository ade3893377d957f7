//! Style families.

use std::fmt;

/// Style family types
///
/// The family decides which XML element a style is declared with and the
/// prefix used for generated automatic style names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleFamily {
    /// List styles (`text:list-style`)
    List,
    /// Paragraph styles, also used by headings
    Paragraph,
    /// Text/character styles
    Text,
}

impl StyleFamily {
    /// Convert to the `style:family` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Paragraph => "paragraph",
            Self::Text => "text",
        }
    }

    /// Prefix for automatic style names (`P1`, `T1`, `L1`)
    pub fn name_prefix(&self) -> &'static str {
        match self {
            Self::List => "L",
            Self::Paragraph => "P",
            Self::Text => "T",
        }
    }
}

impl fmt::Display for StyleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
