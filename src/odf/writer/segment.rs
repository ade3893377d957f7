//! Whitespace encoding for text content.
//!
//! ODF collapses whitespace in text the same way HTML does, so runs of spaces,
//! tabs and line breaks have to be written as elements: `text:s`, `text:tab`
//! and `text:line-break`. Carriage returns are dropped, which turns `\r\n`
//! into a single line break.

use crate::odf::core::XmlElement;

/// One piece of encoded text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    /// Literal text, possibly containing single spaces
    Text(String),
    /// Spaces following a space kept in the preceding text (`text:s`)
    Spaces(usize),
    /// `text:tab`
    Tab,
    /// `text:line-break`
    LineBreak,
}

/// Split `text` into literal runs and whitespace elements.
///
/// A single space stays in the text. For a run of N > 1 spaces the first one
/// stays in the text and the other N - 1 become one [`TextSegment::Spaces`].
///
/// ```
/// use flat_odt::odf::writer::{TextSegment, segment};
///
/// assert_eq!(
///     segment("a  b\tc\r\nd"),
///     vec![
///         TextSegment::Text("a ".into()),
///         TextSegment::Spaces(1),
///         TextSegment::Text("b".into()),
///         TextSegment::Tab,
///         TextSegment::Text("c".into()),
///         TextSegment::LineBreak,
///         TextSegment::Text("d".into()),
///     ]
/// );
/// ```
pub fn segment(text: &str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut pending = String::new();
    // Carriage returns are removed before scanning so that spaces on both
    // sides of one count as a single run.
    let mut chars = text.chars().filter(|&ch| ch != '\r').peekable();

    while let Some(ch) = chars.next() {
        match ch {
            ' ' => {
                pending.push(' ');
                let mut extra = 0;
                while chars.next_if_eq(&' ').is_some() {
                    extra += 1;
                }
                if extra > 0 {
                    flush(&mut pending, &mut segments);
                    segments.push(TextSegment::Spaces(extra));
                }
            },
            '\t' => {
                flush(&mut pending, &mut segments);
                segments.push(TextSegment::Tab);
            },
            '\n' => {
                flush(&mut pending, &mut segments);
                segments.push(TextSegment::LineBreak);
            },
            _ => pending.push(ch),
        }
    }
    flush(&mut pending, &mut segments);
    segments
}

fn flush(pending: &mut String, segments: &mut Vec<TextSegment>) {
    if !pending.is_empty() {
        segments.push(TextSegment::Text(std::mem::take(pending)));
    }
}

/// Rebuild the text a segment list stands for. Inverse of [`segment`] up to
/// the dropped carriage returns.
pub fn decode(segments: &[TextSegment]) -> String {
    let mut text = String::new();
    for segment in segments {
        match segment {
            TextSegment::Text(literal) => text.push_str(literal),
            TextSegment::Spaces(count) => text.extend(std::iter::repeat_n(' ', *count)),
            TextSegment::Tab => text.push('\t'),
            TextSegment::LineBreak => text.push('\n'),
        }
    }
    text
}

/// Append the encoded form of `text` to `parent`
pub(crate) fn append_text(parent: &mut XmlElement, text: &str) {
    for segment in segment(text) {
        match segment {
            TextSegment::Text(literal) => parent.append_text(literal),
            TextSegment::Spaces(count) => {
                let mut spaces = XmlElement::new("text:s");
                if count > 1 {
                    spaces.set_attribute("text:c", itoa::Buffer::new().format(count));
                }
                parent.append_child(spaces);
            },
            TextSegment::Tab => parent.append_child(XmlElement::new("text:tab")),
            TextSegment::LineBreak => parent.append_child(XmlElement::new("text:line-break")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_spaces_stay_in_text() {
        assert_eq!(segment("a b c"), vec![TextSegment::Text("a b c".into())]);
    }

    #[test]
    fn test_space_runs() {
        assert_eq!(
            segment("a    b"),
            vec![
                TextSegment::Text("a ".into()),
                TextSegment::Spaces(3),
                TextSegment::Text("b".into()),
            ]
        );
        assert_eq!(
            segment("  "),
            vec![TextSegment::Text(" ".into()), TextSegment::Spaces(1)]
        );
    }

    #[test]
    fn test_carriage_returns_dropped() {
        assert_eq!(segment("\r"), vec![]);
        assert_eq!(
            segment("x\r\n\r\ny"),
            vec![
                TextSegment::Text("x".into()),
                TextSegment::LineBreak,
                TextSegment::LineBreak,
                TextSegment::Text("y".into()),
            ]
        );
    }

    #[test]
    fn test_space_run_spans_carriage_return() {
        assert_eq!(
            segment("a \r b"),
            vec![
                TextSegment::Text("a ".into()),
                TextSegment::Spaces(1),
                TextSegment::Text("b".into()),
            ]
        );
        assert_eq!(
            segment(" \r "),
            vec![TextSegment::Text(" ".into()), TextSegment::Spaces(1)]
        );

        let mut p = XmlElement::new("text:p");
        append_text(&mut p, "a \r\r  b");
        assert_eq!(p.to_xml_string().unwrap(), "<text:p>a <text:s text:c=\"2\"/>b</text:p>");
    }

    #[test]
    fn test_empty_input() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_append_text_elements() {
        let mut p = XmlElement::new("text:p");
        append_text(&mut p, "a   b\tc\nd  e");
        assert_eq!(
            p.to_xml_string().unwrap(),
            "<text:p>a <text:s text:c=\"2\"/>b<text:tab/>c<text:line-break/>d <text:s/>e</text:p>"
        );
    }

    mod property_tests {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(256))]

            #[test]
            fn prop_round_trip_drops_only_carriage_returns(input in "[ a-z\t\r\n]{0,64}") {
                let expected: String = input.chars().filter(|&c| c != '\r').collect();
                prop_assert_eq!(decode(&segment(&input)), expected);
            }

            #[test]
            fn prop_segments_are_minimal(input in "[ ab\t\r\n]{0,64}") {
                let segments = segment(&input);
                for pair in segments.windows(2) {
                    // Adjacent literal runs are always merged
                    let adjacent = matches!(pair, [TextSegment::Text(_), TextSegment::Text(_)]);
                    prop_assert!(!adjacent);
                }
                for item in &segments {
                    match item {
                        TextSegment::Text(text) => {
                            prop_assert!(!text.is_empty());
                            prop_assert!(!text.contains("  "));
                        },
                        TextSegment::Spaces(count) => {
                            prop_assert!(*count >= 1);
                        },
                        _ => {},
                    }
                }
            }
        }
    }
}
