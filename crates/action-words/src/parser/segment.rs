//! Split flushed text into wording and bare numeric literals.

use crate::literal::is_numeric_literal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Text(String),
    Number(String),
}

/// Segment a text span on whitespace.
///
/// Numeric words become [`Segment::Number`]; the remaining words are joined
/// back with single spaces. A span that starts or ends with whitespace keeps
/// one space at that edge, so text around quoted values keeps its spacing.
pub(crate) fn segment_text(span: &str) -> Vec<Segment> {
    let mut words = span.split_whitespace().peekable();
    if words.peek().is_none() {
        return if span.is_empty() {
            Vec::new()
        } else {
            vec![Segment::Text(" ".to_string())]
        };
    }

    let mut segments = Vec::new();
    let mut pending = String::new();
    if span.starts_with(char::is_whitespace) {
        pending.push(' ');
    }
    for (index, word) in words.enumerate() {
        if index > 0 {
            pending.push(' ');
        }
        if is_numeric_literal(word) {
            if !pending.is_empty() {
                segments.push(Segment::Text(std::mem::take(&mut pending)));
            }
            segments.push(Segment::Number(word.to_string()));
        } else {
            pending.push_str(word);
        }
    }
    if span.ends_with(char::is_whitespace) {
        pending.push(' ');
    }
    if !pending.is_empty() {
        segments.push(Segment::Text(pending));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> Segment {
        Segment::Text(value.to_string())
    }

    fn number(value: &str) -> Segment {
        Segment::Number(value.to_string())
    }

    #[test]
    fn keeps_plain_wording_whole() {
        assert_eq!(
            segment_text("I am on the home page"),
            vec![text("I am on the home page")]
        );
    }

    #[test]
    fn collapses_internal_whitespace() {
        assert_eq!(segment_text("I  am\ton it"), vec![text("I am on it")]);
    }

    #[test]
    fn promotes_numbers_between_words() {
        assert_eq!(
            segment_text("go to page 2 now"),
            vec![text("go to page "), number("2"), text(" now")]
        );
    }

    #[test]
    fn promotes_leading_and_trailing_numbers() {
        assert_eq!(
            segment_text("3 apples cost 1.50"),
            vec![number("3"), text(" apples cost "), number("1.50")]
        );
    }

    #[test]
    fn keeps_single_boundary_spaces() {
        assert_eq!(segment_text("  and  "), vec![text(" and ")]);
        assert_eq!(segment_text(" "), vec![text(" ")]);
        assert!(segment_text("").is_empty());
    }

    #[test]
    fn adjacent_numbers_stay_separated() {
        assert_eq!(
            segment_text("between 1 2"),
            vec![text("between "), number("1"), text(" "), number("2")]
        );
    }
}
