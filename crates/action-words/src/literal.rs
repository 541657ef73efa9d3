//! Literal classification and parameter-name normalization helpers.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ActionWordError;

static NUMERIC_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(?:\.[0-9]+)?$")
        .unwrap_or_else(|error| panic!("numeric literal pattern must compile: {error}"))
});

static TEST_CASE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<[^<>]+>$")
        .unwrap_or_else(|error| panic!("reference pattern must compile: {error}"))
});

/// Return `true` when `value` is a plain integer or decimal literal.
///
/// Bare literals in action-word text are promoted to parameters, and the
/// script writers emit them without quotes.
///
/// # Examples
/// ```
/// use action_words::is_numeric_literal;
///
/// assert!(is_numeric_literal("42"));
/// assert!(is_numeric_literal("3.14"));
/// assert!(!is_numeric_literal("3."));
/// assert!(!is_numeric_literal("page2"));
/// ```
#[must_use]
pub fn is_numeric_literal(value: &str) -> bool {
    NUMERIC_LITERAL.is_match(value)
}

/// Return `true` when `value` has the `<name>` shape of a test-case parameter
/// reference.
///
/// # Examples
/// ```
/// use action_words::is_test_case_reference;
///
/// assert!(is_test_case_reference("<user_name>"));
/// assert!(!is_test_case_reference("<>"));
/// assert!(!is_test_case_reference("user"));
/// ```
#[must_use]
pub fn is_test_case_reference(value: &str) -> bool {
    TEST_CASE_REFERENCE.is_match(value)
}

/// Join the whitespace-separated words of `raw` with `separator`.
pub(crate) fn join_words(raw: &str, separator: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(separator)
}

pub(crate) fn is_reference_name_char(character: char) -> bool {
    character.is_alphanumeric() || matches!(character, '-' | '_' | ' ')
}

/// Normalize the text collected between `<` and `>` into the stored
/// `<name>` form.
///
/// `position` is the offset of the opening `<` and is reported when the name
/// is blank.
pub(crate) fn normalize_reference(raw: &str, position: usize) -> Result<String, ActionWordError> {
    let collapsed = join_words(raw, " ");
    if collapsed.is_empty() {
        return Err(ActionWordError::EmptyParameterName { position });
    }
    if let Some(character) = collapsed.chars().find(|c| !is_reference_name_char(*c)) {
        return Err(ActionWordError::InvalidParameterName {
            name: collapsed,
            character,
        });
    }
    Ok(format!("<{}>", collapsed.replace(' ', "_")))
}

/// Normalize the text of a quoted library span into a slot name.
pub(crate) fn normalize_slot_name(raw: &str, position: usize) -> Result<String, ActionWordError> {
    let name = join_words(raw, "_");
    if name.is_empty() {
        return Err(ActionWordError::EmptyParameterName { position });
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0", true)]
    #[case("2024", true)]
    #[case("12.50", true)]
    #[case("-3", false)]
    #[case("1,5", false)]
    #[case(".5", false)]
    #[case("", false)]
    #[case("4th", false)]
    #[case("\u{663}", false)]
    #[case("\u{661}.\u{665}", false)]
    fn classifies_numeric_literals(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_numeric_literal(value), expected);
    }

    #[rstest]
    #[case("<login>", true)]
    #[case("<user_name>", true)]
    #[case("<a<b>", false)]
    #[case("<login", false)]
    #[case("login>", false)]
    fn classifies_references(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_test_case_reference(value), expected);
    }

    #[test]
    fn normalizes_reference_whitespace() {
        assert_eq!(
            normalize_reference("  user   name ", 0),
            Ok("<user_name>".to_string())
        );
    }

    #[test]
    fn rejects_blank_reference() {
        assert_eq!(
            normalize_reference("   ", 7),
            Err(ActionWordError::EmptyParameterName { position: 7 })
        );
    }

    #[test]
    fn rejects_reference_with_punctuation() {
        let Err(ActionWordError::InvalidParameterName { name, character }) =
            normalize_reference("user.name", 0)
        else {
            panic!("expected an invalid name error");
        };
        assert_eq!(name, "user.name");
        assert_eq!(character, '.');
    }

    #[test]
    fn slot_names_replace_whitespace_runs() {
        assert_eq!(
            normalize_slot_name(" login   name ", 0),
            Ok("login_name".to_string())
        );
        assert_eq!(
            normalize_slot_name(" \t ", 3),
            Err(ActionWordError::EmptyParameterName { position: 3 })
        );
    }
}
