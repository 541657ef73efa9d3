//! Test helpers for asserting parser outcomes.
use super::{ParseMode, parse_action_word};
use crate::errors::ActionWordError;
use crate::fragment::ActionWord;

pub(crate) fn parse_ok(input: &str, mode: ParseMode) -> ActionWord {
    match parse_action_word(input, mode) {
        Ok(word) => word,
        Err(err) => panic!("action word {input:?} should parse: {err}"),
    }
}

pub(crate) fn parse_err(input: &str, mode: ParseMode) -> ActionWordError {
    match parse_action_word(input, mode) {
        Ok(word) => panic!("action word {input:?} should fail, got {word:?}"),
        Err(err) => err,
    }
}
