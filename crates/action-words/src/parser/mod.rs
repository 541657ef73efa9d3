//! Action-word parsing entry points.

mod machine;
mod segment;
#[cfg(test)]
pub(crate) mod test_support;

use crate::errors::ActionWordError;
use crate::fragment::ActionWord;

use machine::FragmentBuilder;

/// Maximum number of characters in a trimmed action word.
pub const MAX_ACTION_WORD_LENGTH: usize = 255;

/// Which side of an action word the input describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// Reusable definition declaring parameter slots.
    ///
    /// Quoted spans name a slot; bare numbers become slots with a default
    /// value. Test-case references (`<...>`) are not allowed.
    Library,
    /// Concrete step binding values.
    ///
    /// Quoted spans and bare numbers become values; `<name>` binds a
    /// test-case parameter.
    Step,
}

/// Parse `raw` into an [`ActionWord`].
///
/// The input is trimmed first. Parsing either returns the complete fragment
/// list or fails without producing anything.
///
/// # Errors
/// Returns [`ActionWordError`] when the input is empty or too long, when
/// quoting or references are malformed, when a parameter name is blank,
/// invalid or repeated, or when no wording remains.
///
/// # Examples
/// ```
/// use action_words::{Fragment, ParseMode, parse_action_word};
///
/// let word = parse_action_word("go to page 2", ParseMode::Step).unwrap();
/// assert_eq!(word.fragments().len(), 2);
/// assert!(matches!(&word.fragments()[1], Fragment::Value(value) if value.value() == "2"));
/// ```
pub fn parse_action_word(raw: &str, mode: ParseMode) -> Result<ActionWord, ActionWordError> {
    parse_trimmed(raw.trim(), mode).inspect_err(|error| {
        log::debug!("rejected {mode:?} action word {raw:?}: {error}");
    })
}

/// Parse a library action word definition.
///
/// # Errors
/// See [`parse_action_word`]; additionally rejects `<` and `>` anywhere in
/// the input and repeated slot names.
///
/// # Examples
/// ```
/// use action_words::parse_library_action_word;
///
/// let word = parse_library_action_word("I log in as \"login name\"").unwrap();
/// let names: Vec<_> = word.slots().map(|slot| slot.name().to_string()).collect();
/// assert_eq!(names, vec!["login_name"]);
/// ```
pub fn parse_library_action_word(raw: &str) -> Result<ActionWord, ActionWordError> {
    parse_action_word(raw, ParseMode::Library)
}

/// Parse the action word typed in a keyword test step.
///
/// # Errors
/// See [`parse_action_word`].
///
/// # Examples
/// ```
/// use action_words::parse_step_action_word;
///
/// let word = parse_step_action_word("select <user name>").unwrap();
/// let values: Vec<_> = word.parameter_values().map(|v| v.value().to_string()).collect();
/// assert_eq!(values, vec!["<user_name>"]);
/// ```
pub fn parse_step_action_word(raw: &str) -> Result<ActionWord, ActionWordError> {
    parse_action_word(raw, ParseMode::Step)
}

fn parse_trimmed(input: &str, mode: ParseMode) -> Result<ActionWord, ActionWordError> {
    if input.is_empty() {
        return Err(ActionWordError::EmptyInput);
    }
    let length = input.chars().count();
    if length > MAX_ACTION_WORD_LENGTH {
        return Err(ActionWordError::TooLong {
            length,
            max: MAX_ACTION_WORD_LENGTH,
        });
    }
    if mode == ParseMode::Library {
        reject_references(input)?;
    }

    let word = ActionWord::from_fragments(FragmentBuilder::new(mode).build(input)?);
    if !word.has_text() {
        return Err(ActionWordError::NoText);
    }
    Ok(word)
}

fn reject_references(input: &str) -> Result<(), ActionWordError> {
    match input.chars().position(|c| c == '<' || c == '>') {
        Some(position) => Err(ActionWordError::InvalidParameterReference {
            position,
            reason: "a library action word cannot reference test case parameters",
        }),
        None => Ok(()),
    }
}
