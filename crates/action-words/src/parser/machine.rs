//! Character state machine shared by the library and step parsers.
//!
//! A [`FragmentBuilder`] lives for exactly one parse call. It owns every
//! buffer, the parameter counter and the fragment list, so nothing leaks
//! between calls and concurrent parses never share state.

use std::collections::HashSet;

use crate::errors::ActionWordError;
use crate::fragment::{Fragment, ParameterSlot, ParameterValue};
use crate::literal::{is_reference_name_char, normalize_reference, normalize_slot_name};

use super::ParseMode;
use super::segment::{Segment, segment_text};

const FREE_VALUE_MARKER: char = '"';
const REFERENCE_OPEN: char = '<';
const REFERENCE_CLOSE: char = '>';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    FreeValue,
    Reference { inside_free_value: bool },
}

#[derive(Debug)]
pub(crate) struct FragmentBuilder {
    mode: ParseMode,
    state: State,
    fragments: Vec<Fragment>,
    text: String,
    free_value: String,
    reference: String,
    free_value_start: usize,
    reference_start: usize,
    // Set once a reference was emitted inside the current quoted span.
    free_value_bound: bool,
    parameter_count: usize,
    slot_names: HashSet<String>,
}

impl FragmentBuilder {
    pub(crate) fn new(mode: ParseMode) -> Self {
        Self {
            mode,
            state: State::Text,
            fragments: Vec::new(),
            text: String::new(),
            free_value: String::new(),
            reference: String::new(),
            free_value_start: 0,
            reference_start: 0,
            free_value_bound: false,
            parameter_count: 0,
            slot_names: HashSet::new(),
        }
    }

    /// Feed every character of `input` and return the resulting fragments.
    pub(crate) fn build(mut self, input: &str) -> Result<Vec<Fragment>, ActionWordError> {
        for (position, character) in input.chars().enumerate() {
            self.accept(position, character)?;
        }
        self.finish()
    }

    fn accept(&mut self, position: usize, character: char) -> Result<(), ActionWordError> {
        match self.state {
            State::Text => self.accept_text(position, character),
            State::FreeValue => self.accept_free_value(position, character),
            State::Reference { inside_free_value } => {
                self.accept_reference(position, character, inside_free_value)
            }
        }
    }

    fn accept_text(&mut self, position: usize, character: char) -> Result<(), ActionWordError> {
        match character {
            FREE_VALUE_MARKER => {
                self.flush_text()?;
                self.free_value_start = position;
                self.free_value_bound = false;
                self.state = State::FreeValue;
            }
            REFERENCE_OPEN if self.mode == ParseMode::Step => {
                self.flush_text()?;
                self.open_reference(position, false);
            }
            REFERENCE_CLOSE => return Err(ActionWordError::StrayCloseMarker { position }),
            other => self.text.push(other),
        }
        Ok(())
    }

    fn accept_free_value(
        &mut self,
        position: usize,
        character: char,
    ) -> Result<(), ActionWordError> {
        match character {
            FREE_VALUE_MARKER => {
                if !self.free_value.is_empty() || !self.free_value_bound {
                    self.emit_free_value()?;
                }
                self.state = State::Text;
            }
            REFERENCE_OPEN if self.mode == ParseMode::Step => {
                if !self.free_value.is_empty() {
                    self.emit_free_value()?;
                }
                self.open_reference(position, true);
            }
            REFERENCE_CLOSE => return Err(ActionWordError::StrayCloseMarker { position }),
            other => self.free_value.push(other),
        }
        Ok(())
    }

    fn accept_reference(
        &mut self,
        position: usize,
        character: char,
        inside_free_value: bool,
    ) -> Result<(), ActionWordError> {
        match character {
            REFERENCE_CLOSE => {
                self.emit_reference()?;
                // A reference opened inside quotes resumes the quoted span,
                // which still needs its closing quote.
                self.state = if inside_free_value {
                    self.free_value_bound = true;
                    State::FreeValue
                } else {
                    State::Text
                };
            }
            REFERENCE_OPEN => {
                return Err(ActionWordError::InvalidParameterReference {
                    position,
                    reason: "'<' cannot be nested inside a parameter reference",
                });
            }
            FREE_VALUE_MARKER => {
                return Err(ActionWordError::InvalidParameterReference {
                    position,
                    reason: "'\"' is not allowed inside a parameter reference",
                });
            }
            other if is_reference_name_char(other) => self.reference.push(other),
            other => {
                return Err(ActionWordError::InvalidParameterName {
                    name: std::mem::take(&mut self.reference),
                    character: other,
                });
            }
        }
        Ok(())
    }

    fn open_reference(&mut self, position: usize, inside_free_value: bool) {
        self.reference_start = position;
        self.state = State::Reference { inside_free_value };
    }

    fn finish(mut self) -> Result<Vec<Fragment>, ActionWordError> {
        match self.state {
            State::Text => {
                self.flush_text()?;
                Ok(self.fragments)
            }
            State::FreeValue => Err(ActionWordError::UnclosedFreeValue {
                position: self.free_value_start,
            }),
            State::Reference { .. } => Err(ActionWordError::InvalidParameterReference {
                position: self.reference_start,
                reason: "missing closing '>' for parameter reference",
            }),
        }
    }

    fn next_parameter_name(&mut self) -> String {
        self.parameter_count += 1;
        format!("param{}", self.parameter_count)
    }

    fn flush_text(&mut self) -> Result<(), ActionWordError> {
        if self.text.is_empty() {
            return Ok(());
        }
        let span = std::mem::take(&mut self.text);
        for segment in segment_text(&span) {
            match segment {
                Segment::Text(text) => self.fragments.push(Fragment::Text(text)),
                Segment::Number(literal) => {
                    let name = self.next_parameter_name();
                    self.push_parameter(name, literal)?;
                }
            }
        }
        Ok(())
    }

    fn emit_free_value(&mut self) -> Result<(), ActionWordError> {
        let raw = std::mem::take(&mut self.free_value);
        let synthetic = self.next_parameter_name();
        match self.mode {
            ParseMode::Library => {
                let name = normalize_slot_name(&raw, self.free_value_start)?;
                self.declare_slot(ParameterSlot::new(name, String::new()))
            }
            ParseMode::Step => {
                self.fragments
                    .push(Fragment::Value(ParameterValue::new(synthetic, raw)));
                Ok(())
            }
        }
    }

    fn emit_reference(&mut self) -> Result<(), ActionWordError> {
        let raw = std::mem::take(&mut self.reference);
        let value = normalize_reference(&raw, self.reference_start)?;
        let name = self.next_parameter_name();
        self.fragments
            .push(Fragment::Value(ParameterValue::new(name, value)));
        Ok(())
    }

    /// Push a numeric literal as a slot or a value, depending on the mode.
    fn push_parameter(&mut self, name: String, literal: String) -> Result<(), ActionWordError> {
        match self.mode {
            ParseMode::Library => self.declare_slot(ParameterSlot::new(name, literal)),
            ParseMode::Step => {
                self.fragments
                    .push(Fragment::Value(ParameterValue::new(name, literal)));
                Ok(())
            }
        }
    }

    fn declare_slot(&mut self, slot: ParameterSlot) -> Result<(), ActionWordError> {
        if !self.slot_names.insert(slot.name().to_string()) {
            return Err(ActionWordError::DuplicateParameterName {
                name: slot.name().to_string(),
            });
        }
        self.fragments.push(Fragment::Slot(slot));
        Ok(())
    }
}
