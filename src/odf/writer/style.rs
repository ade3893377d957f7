//! Style declarations.
//!
//! Only properties that differ from their default are written, and a
//! properties element with nothing to write is left out. Attribute order
//! follows the schema's declaration order.

use crate::common::unit::format_number;
use crate::common::{Length, RGBColor};
use crate::odf::core::XmlElement;
use crate::odf::style::{
    AutomaticStyles, BorderSide, CommonStyle, CommonStyles, HorizontalAlignment,
    LastLineAlignment, LineHeight, ListLevelKind, ListLevelStyle, ListStyle, ParagraphProperties,
    StyleValue, TabStopType, TextProperties, Underline, VerticalAlignment,
};

/// `office:styles` with every common style, in creation order
pub(crate) fn write_common_styles(styles: &CommonStyles) -> XmlElement {
    let mut element = XmlElement::new("office:styles");
    for style in styles.iter() {
        element.append_child(write_common_style(style));
    }
    element
}

fn write_common_style(style: &CommonStyle) -> XmlElement {
    let display_name = (style.display_name() != style.name()).then(|| style.display_name());
    write_style(style.name(), display_name, style.value())
}

/// `office:automatic-styles` with every registered style, in name order
pub(crate) fn write_automatic_styles(styles: &AutomaticStyles) -> XmlElement {
    let mut element = XmlElement::new("office:automatic-styles");
    for style in styles.iter() {
        element.append_child(write_style(style.name(), None, style.value()));
    }
    element
}

/// Declaration of one style: `style:style` or `text:list-style`
pub fn write_style(name: &str, display_name: Option<&str>, value: &StyleValue) -> XmlElement {
    match value {
        StyleValue::Paragraph(style) => {
            let mut element = style_element(name, display_name, value);
            if let Some(props) = write_paragraph_properties(style.paragraph_properties()) {
                element.append_child(props);
            }
            if let Some(props) = write_text_properties(style.text_properties()) {
                element.append_child(props);
            }
            element
        },
        StyleValue::Text(style) => {
            let mut element = style_element(name, display_name, value);
            if let Some(props) = write_text_properties(style.text_properties()) {
                element.append_child(props);
            }
            element
        },
        StyleValue::List(style) => write_list_style(name, display_name, style),
    }
}

fn style_element(name: &str, display_name: Option<&str>, value: &StyleValue) -> XmlElement {
    let mut element = XmlElement::new("style:style");
    element.set_attribute("style:name", name);
    if let Some(display_name) = display_name {
        element.set_attribute("style:display-name", display_name);
    }
    element.set_attribute("style:family", value.family().as_str());
    element
}

fn color(color: RGBColor) -> String {
    color.to_string()
}

fn set_length(element: &mut XmlElement, name: &str, value: Length) {
    if !value.is_zero() {
        element.set_attribute(name, value.to_odf_mm());
    }
}

fn set_flag(element: &mut XmlElement, name: &str, value: bool, on: &str) {
    if value {
        element.set_attribute(name, on);
    }
}

/// `style:paragraph-properties`, or `None` when every property is default
pub fn write_paragraph_properties(props: &ParagraphProperties) -> Option<XmlElement> {
    if props.is_default() {
        return None;
    }
    let mut element = XmlElement::new("style:paragraph-properties");

    match props.line_height() {
        Some(LineHeight::Proportional(percent)) => {
            element.set_attribute("fo:line-height", format!("{percent}%"));
        },
        Some(LineHeight::Fixed(height)) => {
            element.set_attribute("fo:line-height", height.to_odf_mm());
        },
        Some(LineHeight::AtLeast(height)) => {
            element.set_attribute("style:line-height-at-least", height.to_odf_mm());
        },
        None => {},
    }
    if props.horizontal_alignment() != HorizontalAlignment::Default {
        element.set_attribute("fo:text-align", props.horizontal_alignment().as_str());
    }
    if props.last_line_alignment() != LastLineAlignment::Default {
        element.set_attribute("fo:text-align-last", props.last_line_alignment().as_str());
    }
    set_flag(&mut element, "fo:keep-together", props.keep_together(), "always");
    set_length(&mut element, "fo:margin-left", props.margin_left());
    set_length(&mut element, "fo:margin-right", props.margin_right());
    set_length(&mut element, "fo:text-indent", props.text_indent());
    set_length(&mut element, "fo:margin-top", props.margin_top());
    set_length(&mut element, "fo:margin-bottom", props.margin_bottom());
    set_flag(&mut element, "fo:break-before", props.page_break_before(), "page");
    set_flag(&mut element, "fo:break-after", props.page_break_after(), "page");
    if let Some(background) = props.background_color() {
        element.set_attribute("fo:background-color", color(background));
    }
    for side in BorderSide::ALL {
        if let Some(border) = props.border(side) {
            element.set_attribute(side.attribute(), border.to_odf());
        }
    }
    set_length(&mut element, "fo:padding", props.padding());
    set_flag(&mut element, "fo:keep-with-next", props.keep_with_next(), "always");
    if props.vertical_alignment() != VerticalAlignment::Auto {
        element.set_attribute("style:vertical-align", props.vertical_alignment().as_str());
    }

    let mut tab_stops = XmlElement::new("style:tab-stops");
    for tab in props.tab_stops() {
        let mut stop = XmlElement::new("style:tab-stop");
        stop.set_attribute("style:position", tab.position().to_odf_mm());
        if tab.kind() != TabStopType::Left {
            stop.set_attribute("style:type", tab.kind().as_str());
        }
        if let TabStopType::Char(ch) = tab.kind() {
            stop.set_attribute("style:char", ch.to_string());
        }
        if let Some(leader) = tab.leader_style() {
            stop.set_attribute("style:leader-style", leader.as_str());
        }
        if let Some(leader_color) = tab.leader_color() {
            stop.set_attribute("style:leader-color", color(leader_color));
        }
        tab_stops.append_child(stop);
    }
    if !tab_stops.is_empty() {
        element.append_child(tab_stops);
    }

    Some(element)
}

/// `style:text-properties`, or `None` when every property is default
pub fn write_text_properties(props: &TextProperties) -> Option<XmlElement> {
    if props.is_default() {
        return None;
    }
    let mut element = XmlElement::new("style:text-properties");

    if props.font_variant() != Default::default() {
        element.set_attribute("fo:font-variant", props.font_variant().as_str());
    }
    if props.text_transform() != Default::default() {
        element.set_attribute("fo:text-transform", props.text_transform().as_str());
    }
    if let Some(font_color) = props.color() {
        element.set_attribute("fo:color", color(font_color));
    }
    if let Some(font_name) = props.font_name() {
        element.set_attribute("style:font-name", font_name);
    }
    if let Some(size) = props.font_size() {
        element.set_attribute("fo:font-size", format!("{}pt", format_number(size)));
    }
    if let Some(language) = props.language() {
        element.set_attribute("fo:language", language);
    }
    if let Some(country) = props.country() {
        element.set_attribute("fo:country", country);
    }
    if props.font_style() != Default::default() {
        element.set_attribute("fo:font-style", props.font_style().as_str());
    }
    if props.underline() != Underline::None {
        let underline = props.underline();
        if underline == Underline::Double {
            element.set_attribute("style:text-underline-type", underline.line_type());
        }
        element.set_attribute("style:text-underline-style", underline.line_style());
        element.set_attribute("style:text-underline-width", "auto");
        let underline_color = props
            .underline_color()
            .map(color)
            .unwrap_or_else(|| "font-color".to_string());
        element.set_attribute("style:text-underline-color", underline_color);
    }
    if props.font_weight() != Default::default() {
        element.set_attribute("fo:font-weight", props.font_weight().to_odf());
    }
    if let Some(background) = props.background_color() {
        element.set_attribute("fo:background-color", color(background));
    }

    Some(element)
}

fn write_list_style(name: &str, display_name: Option<&str>, style: &ListStyle) -> XmlElement {
    let mut element = XmlElement::new("text:list-style");
    element.set_attribute("style:name", name);
    if let Some(display_name) = display_name {
        element.set_attribute("style:display-name", display_name);
    }
    set_flag(
        &mut element,
        "text:consecutive-numbering",
        style.consecutive_numbering(),
        "true",
    );
    for level in style.levels() {
        element.append_child(write_list_level(level));
    }
    element
}

fn write_list_level(level: &ListLevelStyle) -> XmlElement {
    let mut element = match level.kind() {
        ListLevelKind::Bullet {
            char,
            relative_size,
        } => {
            let mut element = XmlElement::new("text:list-level-style-bullet");
            element.set_attribute("text:level", itoa::Buffer::new().format(level.level()));
            element.set_attribute("text:bullet-char", char.to_string());
            if let Some(percent) = relative_size {
                element.set_attribute("text:bullet-relative-size", format!("{percent}%"));
            }
            element
        },
        ListLevelKind::Number {
            format,
            prefix,
            suffix,
            start_value,
            display_levels,
        } => {
            let mut element = XmlElement::new("text:list-level-style-number");
            element.set_attribute("text:level", itoa::Buffer::new().format(level.level()));
            element.set_attribute("style:num-format", format.as_str());
            if !prefix.is_empty() {
                element.set_attribute("style:num-prefix", prefix.as_str());
            }
            if !suffix.is_empty() {
                element.set_attribute("style:num-suffix", suffix.as_str());
            }
            if *display_levels > 1 {
                element.set_attribute(
                    "text:display-levels",
                    itoa::Buffer::new().format(*display_levels),
                );
            }
            if *start_value > 1 {
                element.set_attribute("text:start-value", itoa::Buffer::new().format(*start_value));
            }
            element
        },
    };

    let props = level.properties();
    if !props.is_default() {
        let mut properties = XmlElement::new("style:list-level-properties");
        if props.text_align() != HorizontalAlignment::Default {
            properties.set_attribute("fo:text-align", props.text_align().as_str());
        }
        properties.set_attribute("text:list-level-position-and-space-mode", "label-alignment");

        let mut alignment = XmlElement::new("style:list-level-label-alignment");
        alignment.set_attribute("text:label-followed-by", props.label_followed_by().as_str());
        if let Some(position) = props.list_tab_stop_position() {
            alignment.set_attribute("text:list-tab-stop-position", position.to_odf_mm());
        }
        set_length(&mut alignment, "fo:text-indent", props.text_indent());
        set_length(&mut alignment, "fo:margin-left", props.margin_left());
        properties.append_child(alignment);
        element.append_child(properties);
    }
    element
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odf::style::{
        Border, BorderStyle, FontWeight, LeaderStyle, NumberFormat, ParagraphStyle, Style,
        TabStop, TextStyle,
    };

    fn attribute_names(element: &XmlElement) -> Vec<&str> {
        element.attributes().map(|(name, _)| name).collect()
    }

    #[test]
    fn test_default_properties_are_omitted() {
        assert!(write_paragraph_properties(&ParagraphProperties::new()).is_none());
        assert!(write_text_properties(&TextProperties::new()).is_none());
    }

    #[test]
    fn test_paragraph_attribute_order() {
        let mut props = ParagraphProperties::new();
        // Set in reverse of the written order
        props.set_vertical_alignment(VerticalAlignment::Middle);
        props.set_keep_with_next(true);
        props.set_padding(Length::from_mm(1.0));
        props.set_border(BorderSide::Top, Border::solid(Length::from_points(0.5)));
        props.set_background_color("#ffff00");
        props.set_page_break_before(true);
        props.set_margin_bottom(Length::from_mm(2.0));
        props.set_margin_top(Length::from_mm(2.0));
        props.set_text_indent(Length::from_mm(-5.0));
        props.set_margin_left(Length::from_mm(10.0));
        props.set_keep_together(true);
        props.set_horizontal_alignment(HorizontalAlignment::Justify);
        props.set_line_height_percent(150);

        let element = write_paragraph_properties(&props).unwrap();
        assert_eq!(
            attribute_names(&element),
            vec![
                "fo:line-height",
                "fo:text-align",
                "fo:keep-together",
                "fo:margin-left",
                "fo:text-indent",
                "fo:margin-top",
                "fo:margin-bottom",
                "fo:break-before",
                "fo:background-color",
                "fo:border-top",
                "fo:padding",
                "fo:keep-with-next",
                "style:vertical-align",
            ]
        );
        assert_eq!(element.attribute("fo:line-height"), Some("150%"));
        assert_eq!(element.attribute("fo:text-indent"), Some("-5mm"));
        assert_eq!(element.attribute("fo:border-top"), Some("0.5pt solid #000000"));
    }

    #[test]
    fn test_tab_stops() {
        let mut props = ParagraphProperties::new();
        props.add_tab_stop(
            TabStop::new(Length::from_mm(40.0), TabStopType::Char(','))
                .with_leader(LeaderStyle::Dotted, None),
        );
        props.add_tab_stop(TabStop::new(Length::from_mm(20.0), TabStopType::Left));

        let xml = write_paragraph_properties(&props)
            .unwrap()
            .to_xml_string()
            .unwrap();
        assert_eq!(
            xml,
            "<style:paragraph-properties><style:tab-stops>\
             <style:tab-stop style:position=\"20mm\"/>\
             <style:tab-stop style:position=\"40mm\" style:type=\"char\" style:char=\",\" style:leader-style=\"dotted\"/>\
             </style:tab-stops></style:paragraph-properties>"
        );
    }

    #[test]
    fn test_text_properties() {
        let mut props = TextProperties::new();
        props.set_font_weight(FontWeight::Bold);
        props.set_underline(Underline::Double);
        props.set_font_size(10.5);
        props.set_color("#FF0000");
        props.set_font_name("Liberation Sans");

        let element = write_text_properties(&props).unwrap();
        assert_eq!(
            attribute_names(&element),
            vec![
                "fo:color",
                "style:font-name",
                "fo:font-size",
                "style:text-underline-type",
                "style:text-underline-style",
                "style:text-underline-width",
                "style:text-underline-color",
                "fo:font-weight",
            ]
        );
        assert_eq!(element.attribute("fo:color"), Some("#ff0000"));
        assert_eq!(element.attribute("fo:font-size"), Some("10.5pt"));
        assert_eq!(element.attribute("style:text-underline-color"), Some("font-color"));
    }

    #[test]
    fn test_paragraph_style_declaration() {
        let mut style = ParagraphStyle::new();
        style.text_properties_mut().set_italic(true);
        let xml = write_style("P1", None, &style.into_value())
            .to_xml_string()
            .unwrap();
        assert_eq!(
            xml,
            "<style:style style:name=\"P1\" style:family=\"paragraph\">\
             <style:text-properties fo:font-style=\"italic\"/></style:style>"
        );
    }

    #[test]
    fn test_common_style_display_name() {
        let mut styles = CommonStyles::new();
        styles
            .create::<TextStyle>("Strong Emphasis").unwrap()
            .text_properties_mut()
            .set_bold(true);
        styles.create::<TextStyle>("Plain").unwrap();

        let element = write_common_styles(&styles);
        let declarations: Vec<_> = element.child_elements().collect();
        assert_eq!(declarations.len(), 2);
        assert_eq!(declarations[0].attribute("style:name"), Some("Strong_20_Emphasis"));
        assert_eq!(
            declarations[0].attribute("style:display-name"),
            Some("Strong Emphasis")
        );
        // Named styles are declared even without properties
        assert_eq!(declarations[1].attribute("style:display-name"), None);
        assert!(declarations[1].is_empty());
    }

    #[test]
    fn test_list_style() {
        let mut style = ListStyle::new();
        if let Some(level) = style.set_bullet_level(1, '•') {
            level.set_bullet_relative_size(75);
        }
        if let Some(level) = style.set_number_level(2, NumberFormat::LowerRoman) {
            level.set_suffix(")").set_start_value(3).set_display_levels(2);
            let props = level.properties_mut();
            props.set_list_tab_stop_position(Length::from_mm(12.7));
            props.set_text_indent(Length::from_mm(-6.35));
            props.set_margin_left(Length::from_mm(12.7));
        }
        style.set_consecutive_numbering(true);

        let xml = write_style("L1", None, &style.into_value())
            .to_xml_string()
            .unwrap();
        assert_eq!(
            xml,
            "<text:list-style style:name=\"L1\" text:consecutive-numbering=\"true\">\
             <text:list-level-style-bullet text:level=\"1\" text:bullet-char=\"•\" text:bullet-relative-size=\"75%\"/>\
             <text:list-level-style-number text:level=\"2\" style:num-format=\"i\" style:num-suffix=\")\" text:display-levels=\"2\" text:start-value=\"3\">\
             <style:list-level-properties text:list-level-position-and-space-mode=\"label-alignment\">\
             <style:list-level-label-alignment text:label-followed-by=\"listtab\" text:list-tab-stop-position=\"12.7mm\" fo:text-indent=\"-6.35mm\" fo:margin-left=\"12.7mm\"/>\
             </style:list-level-properties></text:list-level-style-number></text:list-style>"
        );
    }

    #[test]
    fn test_border_styles() {
        let mut props = ParagraphProperties::new();
        props.set_borders(Border::new(
            Length::from_points(1.0),
            BorderStyle::Dashed,
            RGBColor::new(0, 0, 255),
        ));
        let element = write_paragraph_properties(&props).unwrap();
        for side in BorderSide::ALL {
            assert_eq!(element.attribute(side.attribute()), Some("1pt dashed #0000ff"));
        }
    }
}
