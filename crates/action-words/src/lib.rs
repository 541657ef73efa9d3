//! Action-word parsing for keyword-driven BDD test cases.
//!
//! An action word is a reusable phrase such as `I log in as "admin"`. The
//! crate turns the typed phrase into an ordered list of [`Fragment`]s: literal
//! text, parameter slots declared by a library definition, and parameter
//! values bound by a concrete test step. Both parsing modes share a single
//! character state machine; see [`parse_action_word`].

mod errors;
mod fragment;
mod keyword;
mod literal;
mod parser;

pub use errors::ActionWordError;
pub use fragment::{ActionWord, Fragment, ParameterSlot, ParameterValue};
pub use keyword::{StepKeyword, StepKeywordParseError};
pub use literal::{is_numeric_literal, is_test_case_reference};
pub use parser::{
    MAX_ACTION_WORD_LENGTH, ParseMode, parse_action_word, parse_library_action_word,
    parse_step_action_word,
};
