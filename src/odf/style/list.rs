//! List styles: per-level bullet or numbering definitions.

use super::paragraph::HorizontalAlignment;
use crate::common::Length;
use std::collections::BTreeMap;

/// Highest list level a list style can define
pub const MAX_LIST_LEVEL: u8 = 10;

/// Numbering format (`style:num-format`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// 1, 2, 3
    #[default]
    Arabic,
    /// a, b, c
    LowerAlpha,
    /// A, B, C
    UpperAlpha,
    /// i, ii, iii
    LowerRoman,
    /// I, II, III
    UpperRoman,
    /// No number, only prefix and suffix
    None,
}

impl NumberFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Arabic => "1",
            Self::LowerAlpha => "a",
            Self::UpperAlpha => "A",
            Self::LowerRoman => "i",
            Self::UpperRoman => "I",
            Self::None => "",
        }
    }
}

/// What separates the label from the item text (`text:label-followed-by`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LabelFollowedBy {
    #[default]
    ListTab,
    Space,
    Nothing,
}

impl LabelFollowedBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ListTab => "listtab",
            Self::Space => "space",
            Self::Nothing => "nothing",
        }
    }
}

/// Label placement of one list level, written in label-alignment mode
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListLevelProperties {
    text_align: HorizontalAlignment,
    label_followed_by: LabelFollowedBy,
    list_tab_stop_position: Option<Length>,
    text_indent: Length,
    margin_left: Length,
}

impl ListLevelProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every property equals its default
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Alignment of the label
    pub fn text_align(&self) -> HorizontalAlignment {
        self.text_align
    }

    pub fn set_text_align(&mut self, alignment: HorizontalAlignment) {
        self.text_align = alignment;
    }

    pub fn label_followed_by(&self) -> LabelFollowedBy {
        self.label_followed_by
    }

    pub fn set_label_followed_by(&mut self, followed_by: LabelFollowedBy) {
        self.label_followed_by = followed_by;
    }

    /// Tab position used when the label is followed by a tab
    pub fn list_tab_stop_position(&self) -> Option<Length> {
        self.list_tab_stop_position
    }

    /// Negative positions are ignored
    pub fn set_list_tab_stop_position(&mut self, position: Length) {
        if !position.is_negative() {
            self.list_tab_stop_position = Some(position);
        }
    }

    pub fn text_indent(&self) -> Length {
        self.text_indent
    }

    pub fn set_text_indent(&mut self, indent: Length) {
        self.text_indent = indent;
    }

    pub fn margin_left(&self) -> Length {
        self.margin_left
    }

    pub fn set_margin_left(&mut self, margin: Length) {
        self.margin_left = margin;
    }
}

/// Kind of label a list level shows
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListLevelKind {
    /// `text:list-level-style-bullet`
    Bullet {
        /// Bullet glyph
        char: char,
        /// Size relative to the item font, in percent
        relative_size: Option<u16>,
    },
    /// `text:list-level-style-number`
    Number {
        format: NumberFormat,
        prefix: String,
        suffix: String,
        /// First number, at least 1
        start_value: u32,
        /// How many parent level numbers are shown, 1..=10
        display_levels: u8,
    },
}

/// Definition of one list level
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListLevelStyle {
    level: u8,
    kind: ListLevelKind,
    properties: ListLevelProperties,
}

impl ListLevelStyle {
    fn bullet(level: u8, char: char) -> Self {
        Self {
            level,
            kind: ListLevelKind::Bullet {
                char,
                relative_size: None,
            },
            properties: ListLevelProperties::default(),
        }
    }

    fn number(level: u8, format: NumberFormat) -> Self {
        Self {
            level,
            kind: ListLevelKind::Number {
                format,
                prefix: String::new(),
                suffix: String::new(),
                start_value: 1,
                display_levels: 1,
            },
            properties: ListLevelProperties::default(),
        }
    }

    /// Level this definition applies to, 1..=10
    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn kind(&self) -> &ListLevelKind {
        &self.kind
    }

    pub fn is_bullet(&self) -> bool {
        matches!(self.kind, ListLevelKind::Bullet { .. })
    }

    pub fn properties(&self) -> &ListLevelProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut ListLevelProperties {
        &mut self.properties
    }

    /// Set the bullet size in percent of the item font.
    /// Ignored on numbered levels and for zero.
    pub fn set_bullet_relative_size(&mut self, percent: u16) -> &mut Self {
        if let ListLevelKind::Bullet { relative_size, .. } = &mut self.kind
            && percent > 0
        {
            *relative_size = Some(percent);
        }
        self
    }

    /// Text before the number. Ignored on bullet levels.
    pub fn set_prefix(&mut self, value: impl Into<String>) -> &mut Self {
        if let ListLevelKind::Number { prefix, .. } = &mut self.kind {
            *prefix = value.into();
        }
        self
    }

    /// Text after the number. Ignored on bullet levels.
    pub fn set_suffix(&mut self, value: impl Into<String>) -> &mut Self {
        if let ListLevelKind::Number { suffix, .. } = &mut self.kind {
            *suffix = value.into();
        }
        self
    }

    /// First number of the level. Zero is ignored.
    pub fn set_start_value(&mut self, value: u32) -> &mut Self {
        if let ListLevelKind::Number { start_value, .. } = &mut self.kind
            && value >= 1
        {
            *start_value = value;
        }
        self
    }

    /// Number of levels shown in the label, e.g. 2 renders "1.3".
    /// Values outside 1..=10 are ignored.
    pub fn set_display_levels(&mut self, levels: u8) -> &mut Self {
        if let ListLevelKind::Number { display_levels, .. } = &mut self.kind
            && (1..=MAX_LIST_LEVEL).contains(&levels)
        {
            *display_levels = levels;
        }
        self
    }
}

/// A list style: up to ten level definitions.
///
/// ```
/// use flat_odt::odf::style::{ListStyle, NumberFormat};
///
/// let mut style = ListStyle::new();
/// style.set_bullet_level(1, '•');
/// style.set_number_level(2, NumberFormat::LowerRoman)
///     .map(|level| level.set_suffix(")"));
/// assert!(style.set_bullet_level(11, '-').is_none());
/// assert_eq!(style.levels().count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListStyle {
    levels: BTreeMap<u8, ListLevelStyle>,
    consecutive_numbering: bool,
}

impl ListStyle {
    pub fn new() -> Self {
        Self::default()
    }

    fn valid_level(level: u8) -> bool {
        (1..=MAX_LIST_LEVEL).contains(&level)
    }

    /// Define `level` as a bullet level, replacing any previous definition.
    /// Returns `None` for levels outside 1..=10.
    pub fn set_bullet_level(&mut self, level: u8, char: char) -> Option<&mut ListLevelStyle> {
        self.set_level(ListLevelStyle::bullet(level, char))
    }

    /// Define `level` as a numbered level, replacing any previous definition.
    /// Returns `None` for levels outside 1..=10.
    pub fn set_number_level(
        &mut self,
        level: u8,
        format: NumberFormat,
    ) -> Option<&mut ListLevelStyle> {
        self.set_level(ListLevelStyle::number(level, format))
    }

    fn set_level(&mut self, style: ListLevelStyle) -> Option<&mut ListLevelStyle> {
        if !Self::valid_level(style.level) {
            return None;
        }
        let level = style.level;
        self.levels.insert(level, style);
        self.levels.get_mut(&level)
    }

    pub fn level(&self, level: u8) -> Option<&ListLevelStyle> {
        self.levels.get(&level)
    }

    pub fn level_mut(&mut self, level: u8) -> Option<&mut ListLevelStyle> {
        self.levels.get_mut(&level)
    }

    pub fn remove_level(&mut self, level: u8) -> Option<ListLevelStyle> {
        self.levels.remove(&level)
    }

    /// Defined levels, ascending
    pub fn levels(&self) -> impl Iterator<Item = &ListLevelStyle> {
        self.levels.values()
    }

    /// Remove every level definition
    pub fn clear(&mut self) {
        self.levels.clear();
    }

    /// Whether numbering continues across levels (`text:consecutive-numbering`)
    pub fn consecutive_numbering(&self) -> bool {
        self.consecutive_numbering
    }

    pub fn set_consecutive_numbering(&mut self, consecutive: bool) {
        self.consecutive_numbering = consecutive;
    }
}
