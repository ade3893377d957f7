//! Tab stop value type.

use crate::common::{Length, RGBColor};

/// Alignment of text at a tab stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabStopType {
    /// Text starts at the tab position
    #[default]
    Left,
    /// Text is centered on the tab position
    Center,
    /// Text ends at the tab position
    Right,
    /// Text is aligned on the given character (decimal tab)
    Char(char),
}

impl TabStopType {
    /// Convert to the `style:type` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Char(_) => "char",
        }
    }
}

/// Line style of the leader drawn up to a tab stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaderStyle {
    /// Solid line
    Solid,
    /// Dotted line
    Dotted,
    /// Dashed line
    Dash,
    /// Long dashes
    LongDash,
    /// Dot-dash pattern
    DotDash,
    /// Dot-dot-dash pattern
    DotDotDash,
    /// Wavy line
    Wave,
}

impl LeaderStyle {
    /// Convert to the `style:leader-style` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dotted => "dotted",
            Self::Dash => "dash",
            Self::LongDash => "long-dash",
            Self::DotDash => "dot-dash",
            Self::DotDotDash => "dot-dot-dash",
            Self::Wave => "wave",
        }
    }
}

/// A tab stop of a paragraph.
///
/// Two tab stops are equal only if position, type, leader style and leader
/// color all match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabStop {
    position: Length,
    kind: TabStopType,
    leader_style: Option<LeaderStyle>,
    leader_color: Option<RGBColor>,
}

impl TabStop {
    /// Create a tab stop without leader.
    pub fn new(position: Length, kind: TabStopType) -> Self {
        Self {
            position,
            kind,
            leader_style: None,
            leader_color: None,
        }
    }

    /// Builder: add a leader line.
    ///
    /// Without a color the leader uses the font color.
    pub fn with_leader(mut self, style: LeaderStyle, color: Option<RGBColor>) -> Self {
        self.leader_style = Some(style);
        self.leader_color = color;
        self
    }

    /// Position from the start margin
    #[inline]
    pub fn position(&self) -> Length {
        self.position
    }

    /// Alignment type
    #[inline]
    pub fn kind(&self) -> TabStopType {
        self.kind
    }

    /// Leader line style
    #[inline]
    pub fn leader_style(&self) -> Option<LeaderStyle> {
        self.leader_style
    }

    /// Leader line color
    #[inline]
    pub fn leader_color(&self) -> Option<RGBColor> {
        self.leader_color
    }
}
