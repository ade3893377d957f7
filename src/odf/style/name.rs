//! Style name escaping.

/// Turn a display name into a style name that is a legal XML identifier.
///
/// Every character that is not an ASCII letter or digit is replaced by its
/// code point in lowercase hex wrapped in underscores, the same encoding
/// office suites use for `style:name` (`"Heading 1"` becomes `"Heading_20_1"`).
///
/// # Examples
///
/// ```
/// use flat_odt::odf::style::style_name_from_display_name;
///
/// assert_eq!(style_name_from_display_name("Heading 1"), "Heading_20_1");
/// assert_eq!(style_name_from_display_name("Title"), "Title");
/// ```
pub fn style_name_from_display_name(display_name: &str) -> String {
    let mut name = String::with_capacity(display_name.len());
    for ch in display_name.chars() {
        if ch.is_ascii_alphanumeric() {
            name.push(ch);
        } else {
            name.push('_');
            name.push_str(&format!("{:x}", ch as u32));
            name.push('_');
        }
    }
    name
}
