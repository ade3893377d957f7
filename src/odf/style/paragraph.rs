//! Paragraph properties and the paragraph style family.
//!
//! Every setter follows the same policy: a value that is valid is stored,
//! anything else (negative spacing, zero line height, unparsable color) is
//! dropped and the previous value stays in place.

use super::border::Border;
use super::tab_stop::TabStop;
use super::text::TextProperties;
use crate::common::{Length, RGBColor};
use std::collections::BTreeMap;

/// Horizontal alignment of paragraph text (`fo:text-align`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Inherit from the parent style; not written
    #[default]
    Default,
    /// Start of the writing direction
    Start,
    /// End of the writing direction
    End,
    /// Left edge
    Left,
    /// Right edge
    Right,
    /// Centered
    Center,
    /// Justified
    Justify,
}

impl HorizontalAlignment {
    /// Convert to the `fo:text-align` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Start => "start",
            Self::End => "end",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
            Self::Justify => "justify",
        }
    }
}

/// Alignment of the last line of a justified paragraph (`fo:text-align-last`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LastLineAlignment {
    /// Inherit; not written
    #[default]
    Default,
    /// Start of the writing direction
    Start,
    /// Centered
    Center,
    /// Justified
    Justify,
}

impl LastLineAlignment {
    /// Convert to the `fo:text-align-last` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Start => "start",
            Self::Center => "center",
            Self::Justify => "justify",
        }
    }
}

/// Vertical alignment of characters within a line (`style:vertical-align`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    /// Automatic; not written
    #[default]
    Auto,
    /// Baseline
    Baseline,
    /// Top of the line
    Top,
    /// Middle of the line
    Middle,
    /// Bottom of the line
    Bottom,
}

impl VerticalAlignment {
    /// Convert to the `style:vertical-align` attribute value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Baseline => "baseline",
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

/// Line height of a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineHeight {
    /// Percentage of the font line height (`fo:line-height="150%"`)
    Proportional(u16),
    /// Fixed height (`fo:line-height="5mm"`)
    Fixed(Length),
    /// Minimum height (`style:line-height-at-least`)
    AtLeast(Length),
}

/// Side of a paragraph border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSide {
    /// Top border
    Top,
    /// Bottom border
    Bottom,
    /// Left border
    Left,
    /// Right border
    Right,
}

impl BorderSide {
    /// All sides, in the order the border attributes are written
    pub const ALL: [BorderSide; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }

    /// The `fo:border-*` attribute name for this side
    pub fn attribute(&self) -> &'static str {
        match self {
            Self::Top => "fo:border-top",
            Self::Bottom => "fo:border-bottom",
            Self::Left => "fo:border-left",
            Self::Right => "fo:border-right",
        }
    }
}

/// Paragraph formatting properties (`style:paragraph-properties`).
///
/// # Examples
///
/// ```
/// use flat_odt::common::Length;
/// use flat_odt::odf::style::{HorizontalAlignment, ParagraphProperties, TabStop, TabStopType};
///
/// let mut props = ParagraphProperties::new();
/// assert!(props.is_default());
///
/// props.set_horizontal_alignment(HorizontalAlignment::Justify);
/// props.set_margin_bottom(Length::from_mm(-3.0)); // ignored
/// assert!(props.margin_bottom().is_zero());
///
/// let first = props.add_tab_stop(TabStop::new(Length::from_mm(23.0), TabStopType::Left));
/// assert!(first.is_some());
/// let second = props.add_tab_stop(TabStop::new(Length::from_mm(23.0), TabStopType::Right));
/// assert!(second.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParagraphProperties {
    line_height: Option<LineHeight>,
    horizontal_alignment: HorizontalAlignment,
    last_line_alignment: LastLineAlignment,
    keep_together: bool,
    margin_left: Length,
    margin_right: Length,
    text_indent: Length,
    margin_top: Length,
    margin_bottom: Length,
    page_break_before: bool,
    page_break_after: bool,
    background_color: Option<RGBColor>,
    borders: [Option<Border>; 4],
    padding: Length,
    keep_with_next: bool,
    vertical_alignment: VerticalAlignment,
    tab_stops: BTreeMap<Length, TabStop>,
}

impl ParagraphProperties {
    /// Create properties with every value at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether every property equals its default
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Line height, if set
    #[inline]
    pub fn line_height(&self) -> Option<LineHeight> {
        self.line_height
    }

    /// Set a proportional line height in percent. Zero is ignored.
    pub fn set_line_height_percent(&mut self, percent: u16) {
        if percent > 0 {
            self.line_height = Some(LineHeight::Proportional(percent));
        }
    }

    /// Set a fixed line height. Values that are not positive are ignored.
    pub fn set_line_height(&mut self, height: Length) {
        if height.emus() > 0 {
            self.line_height = Some(LineHeight::Fixed(height));
        }
    }

    /// Set a minimum line height. Negative values are ignored.
    pub fn set_line_height_at_least(&mut self, height: Length) {
        if !height.is_negative() {
            self.line_height = Some(LineHeight::AtLeast(height));
        }
    }

    /// Reset the line height to the default
    pub fn clear_line_height(&mut self) {
        self.line_height = None;
    }

    /// Horizontal alignment
    #[inline]
    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal_alignment
    }

    /// Set the horizontal alignment
    pub fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) {
        self.horizontal_alignment = alignment;
    }

    /// Alignment of the last line
    #[inline]
    pub fn last_line_alignment(&self) -> LastLineAlignment {
        self.last_line_alignment
    }

    /// Set the alignment of the last line
    pub fn set_last_line_alignment(&mut self, alignment: LastLineAlignment) {
        self.last_line_alignment = alignment;
    }

    /// Whether lines of the paragraph are kept on one page
    #[inline]
    pub fn keep_together(&self) -> bool {
        self.keep_together
    }

    /// Keep the lines of the paragraph on one page
    pub fn set_keep_together(&mut self, keep: bool) {
        self.keep_together = keep;
    }

    /// Left margin
    #[inline]
    pub fn margin_left(&self) -> Length {
        self.margin_left
    }

    /// Set the left margin
    pub fn set_margin_left(&mut self, margin: Length) {
        self.margin_left = margin;
    }

    /// Right margin
    #[inline]
    pub fn margin_right(&self) -> Length {
        self.margin_right
    }

    /// Set the right margin
    pub fn set_margin_right(&mut self, margin: Length) {
        self.margin_right = margin;
    }

    /// First line indent
    #[inline]
    pub fn text_indent(&self) -> Length {
        self.text_indent
    }

    /// Set the first line indent; negative values produce a hanging indent
    pub fn set_text_indent(&mut self, indent: Length) {
        self.text_indent = indent;
    }

    /// Space above the paragraph
    #[inline]
    pub fn margin_top(&self) -> Length {
        self.margin_top
    }

    /// Set the space above the paragraph. Negative values are ignored.
    pub fn set_margin_top(&mut self, margin: Length) {
        if !margin.is_negative() {
            self.margin_top = margin;
        }
    }

    /// Space below the paragraph
    #[inline]
    pub fn margin_bottom(&self) -> Length {
        self.margin_bottom
    }

    /// Set the space below the paragraph. Negative values are ignored.
    pub fn set_margin_bottom(&mut self, margin: Length) {
        if !margin.is_negative() {
            self.margin_bottom = margin;
        }
    }

    /// Set all four margins at once. Negative top/bottom values are ignored.
    pub fn set_margins(&mut self, top: Length, right: Length, bottom: Length, left: Length) {
        self.set_margin_top(top);
        self.set_margin_right(right);
        self.set_margin_bottom(bottom);
        self.set_margin_left(left);
    }

    /// Whether a page break is inserted before the paragraph
    #[inline]
    pub fn page_break_before(&self) -> bool {
        self.page_break_before
    }

    /// Insert a page break before the paragraph
    pub fn set_page_break_before(&mut self, page_break: bool) {
        self.page_break_before = page_break;
    }

    /// Whether a page break is inserted after the paragraph
    #[inline]
    pub fn page_break_after(&self) -> bool {
        self.page_break_after
    }

    /// Insert a page break after the paragraph
    pub fn set_page_break_after(&mut self, page_break: bool) {
        self.page_break_after = page_break;
    }

    /// Background color
    #[inline]
    pub fn background_color(&self) -> Option<RGBColor> {
        self.background_color
    }

    /// Set the background color from a `#rrggbb` string. Invalid colors are ignored.
    pub fn set_background_color(&mut self, color: &str) {
        if let Some(color) = RGBColor::from_hex(color) {
            self.background_color = Some(color);
        }
    }

    /// Set the background color
    pub fn set_background_color_rgb(&mut self, color: RGBColor) {
        self.background_color = Some(color);
    }

    /// Remove the background color
    pub fn clear_background_color(&mut self) {
        self.background_color = None;
    }

    /// Border of one side
    #[inline]
    pub fn border(&self, side: BorderSide) -> Option<Border> {
        self.borders[side.index()]
    }

    /// Set the border of one side. Borders without positive width are ignored.
    pub fn set_border(&mut self, side: BorderSide, border: Border) {
        if border.is_valid() {
            self.borders[side.index()] = Some(border);
        }
    }

    /// Set the same border on all four sides
    pub fn set_borders(&mut self, border: Border) {
        for side in BorderSide::ALL {
            self.set_border(side, border);
        }
    }

    /// Remove the border of one side
    pub fn clear_border(&mut self, side: BorderSide) {
        self.borders[side.index()] = None;
    }

    /// Padding between border and text, on all sides
    #[inline]
    pub fn padding(&self) -> Length {
        self.padding
    }

    /// Set the padding. Negative values are ignored.
    pub fn set_padding(&mut self, padding: Length) {
        if !padding.is_negative() {
            self.padding = padding;
        }
    }

    /// Whether the paragraph is kept on the same page as the next one
    #[inline]
    pub fn keep_with_next(&self) -> bool {
        self.keep_with_next
    }

    /// Keep the paragraph on the same page as the next one
    pub fn set_keep_with_next(&mut self, keep: bool) {
        self.keep_with_next = keep;
    }

    /// Vertical alignment
    #[inline]
    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    /// Set the vertical alignment
    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        self.vertical_alignment = alignment;
    }

    /// Add a tab stop.
    ///
    /// Returns `None` without changing anything when the position is negative
    /// or a tab stop already exists at that position; the first one wins.
    pub fn add_tab_stop(&mut self, tab_stop: TabStop) -> Option<&TabStop> {
        let position = tab_stop.position();
        if position.is_negative() || self.tab_stops.contains_key(&position) {
            return None;
        }
        Some(self.tab_stops.entry(position).or_insert(tab_stop))
    }

    /// Tab stop at the given position
    pub fn tab_stop(&self, position: Length) -> Option<&TabStop> {
        self.tab_stops.get(&position)
    }

    /// All tab stops, ascending by position
    pub fn tab_stops(&self) -> impl Iterator<Item = &TabStop> {
        self.tab_stops.values()
    }

    /// Remove the tab stop at the given position
    pub fn remove_tab_stop(&mut self, position: Length) -> Option<TabStop> {
        self.tab_stops.remove(&position)
    }

    /// Remove all tab stops
    pub fn clear_tab_stops(&mut self) {
        self.tab_stops.clear();
    }
}

/// A paragraph style: paragraph properties plus the text properties applied
/// to the whole paragraph. Headings use this family too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ParagraphStyle {
    paragraph: ParagraphProperties,
    text: TextProperties,
}

impl ParagraphStyle {
    /// Create a style with default properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph properties
    #[inline]
    pub fn paragraph_properties(&self) -> &ParagraphProperties {
        &self.paragraph
    }

    /// Paragraph properties, mutably
    #[inline]
    pub fn paragraph_properties_mut(&mut self) -> &mut ParagraphProperties {
        &mut self.paragraph
    }

    /// Text properties
    #[inline]
    pub fn text_properties(&self) -> &TextProperties {
        &self.text
    }

    /// Text properties, mutably
    #[inline]
    pub fn text_properties_mut(&mut self) -> &mut TextProperties {
        &mut self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::style::{LeaderStyle, TabStopType};

    #[test]
    fn test_default() {
        let props = ParagraphProperties::new();
        assert!(props.is_default());
        assert!(props.is_default(), "is_default must be repeatable");
        assert_eq!(props.horizontal_alignment(), HorizontalAlignment::Default);
        assert_eq!(props.vertical_alignment(), VerticalAlignment::Auto);
        assert!(props.margin_left().is_zero());
        assert_eq!(props.tab_stops().count(), 0);
    }

    #[test]
    fn test_invalid_values_keep_previous() {
        let mut props = ParagraphProperties::new();
        props.set_margin_top(Length::from_mm(5.0));
        props.set_margin_top(Length::from_mm(-1.0));
        assert_eq!(props.margin_top(), Length::from_mm(5.0));

        props.set_background_color("#00ff00");
        props.set_background_color("green");
        assert_eq!(props.background_color(), Some(RGBColor::new(0, 255, 0)));

        props.set_line_height_percent(150);
        props.set_line_height(Length::ZERO);
        assert_eq!(props.line_height(), Some(LineHeight::Proportional(150)));

        props.set_border(BorderSide::Top, Border::solid(Length::ZERO));
        assert_eq!(props.border(BorderSide::Top), None);
    }

    #[test]
    fn test_tab_stops_first_writer_wins() {
        let mut props = ParagraphProperties::new();
        let pos = Length::from_mm(23.0);
        assert!(props.add_tab_stop(TabStop::new(pos, TabStopType::Left)).is_some());
        assert!(
            props
                .add_tab_stop(TabStop::new(pos, TabStopType::Right).with_leader(LeaderStyle::Dotted, None))
                .is_none()
        );
        assert_eq!(props.tab_stop(pos).map(TabStop::kind), Some(TabStopType::Left));
        assert_eq!(props.tab_stops().count(), 1);
    }

    #[test]
    fn test_tab_stops_are_ordered() {
        let mut props = ParagraphProperties::new();
        for mm in [50.0, 10.0, 30.0] {
            props.add_tab_stop(TabStop::new(Length::from_mm(mm), TabStopType::Left));
        }
        assert!(props
            .add_tab_stop(TabStop::new(Length::from_mm(-1.0), TabStopType::Left))
            .is_none());

        let positions: Vec<_> = props.tab_stops().map(|t| t.position()).collect();
        assert_eq!(
            positions,
            vec![Length::from_mm(10.0), Length::from_mm(30.0), Length::from_mm(50.0)]
        );

        assert!(props.remove_tab_stop(Length::from_mm(30.0)).is_some());
        props.clear_tab_stops();
        assert!(props.is_default());
    }

    #[test]
    fn test_style_default_tracks_both_property_sets() {
        use crate::odf::style::Style;

        let mut style = ParagraphStyle::new();
        assert!(style.is_default());
        style.text_properties_mut().set_font_size(12.0);
        assert!(!style.is_default());
    }
}
