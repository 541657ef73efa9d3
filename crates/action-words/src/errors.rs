//! Error types surfaced while parsing action words.

use thiserror::Error;

/// Validation failures raised by the action-word parser.
///
/// Every variant is an input error: retrying with the same text fails the
/// same way. Messages name the violated rule so callers can show them to
/// the author verbatim. Positions are zero-based character offsets into the
/// trimmed input.
///
/// # Examples
/// ```
/// use action_words::{ActionWordError, parse_step_action_word};
///
/// let err = parse_step_action_word("   ").unwrap_err();
/// assert_eq!(err, ActionWordError::EmptyInput);
/// assert_eq!(err.to_string(), "an action word cannot be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionWordError {
    /// The input was empty once surrounding whitespace was removed.
    #[error("an action word cannot be empty")]
    EmptyInput,
    /// The trimmed input exceeded the maximum length.
    #[error("an action word cannot exceed {max} characters (found {length})")]
    TooLong {
        /// Number of characters in the trimmed input.
        length: usize,
        /// Maximum number of characters allowed.
        max: usize,
    },
    /// Parsing produced parameters only.
    #[error("an action word must contain at least some text")]
    NoText,
    /// A `>` appeared without a matching `<`.
    #[error("unexpected '>' at position {position}: a parameter reference must start with '<'")]
    StrayCloseMarker {
        /// Position of the offending `>`.
        position: usize,
    },
    /// A `<...>` reference was malformed or not allowed here.
    #[error("{reason} at position {position}")]
    InvalidParameterReference {
        /// Position at which the problem was detected.
        position: usize,
        /// Human readable description of the violated rule.
        reason: &'static str,
    },
    /// A parameter name was blank.
    #[error("a parameter name cannot be empty (at position {position})")]
    EmptyParameterName {
        /// Position of the span that produced the blank name.
        position: usize,
    },
    /// A parameter name contained a forbidden character.
    #[error(
        "invalid character '{character}' in parameter name `{name}`: only letters, digits, '-', '_' and spaces are allowed"
    )]
    InvalidParameterName {
        /// Name collected up to the offending character.
        name: String,
        /// The rejected character.
        character: char,
    },
    /// A library action word declared the same parameter twice.
    #[error("parameter `{name}` is declared more than once in this action word")]
    DuplicateParameterName {
        /// Normalized name of the repeated parameter.
        name: String,
    },
    /// A double-quoted value was never closed.
    #[error("missing closing '\"' for the value opened at position {position}")]
    UnclosedFreeValue {
        /// Position of the opening `"`.
        position: usize,
    },
}
