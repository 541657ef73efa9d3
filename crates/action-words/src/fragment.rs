//! Fragment model produced by the parser.

use std::fmt;

use crate::literal::{is_numeric_literal, is_test_case_reference};

/// Parameter declared by a library action word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterSlot {
    name: String,
    default_value: String,
}

impl ParameterSlot {
    /// Create a slot with the given name and default value.
    ///
    /// # Examples
    /// ```
    /// use action_words::ParameterSlot;
    ///
    /// let slot = ParameterSlot::new("param1", "2");
    /// assert_eq!(slot.name(), "param1");
    /// assert_eq!(slot.default_value(), "2");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_value: default_value.into(),
        }
    }

    /// Name of the slot, unique within its action word.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default value; empty for slots declared by a quoted span.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default_value
    }
}

/// Value bound by a test step.
///
/// `value` holds a free value without its quotes, a numeric literal, or a
/// normalized test-case parameter reference such as `<user_name>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterValue {
    name: String,
    value: String,
}

impl ParameterValue {
    /// Create a value carrying the synthetic parameter `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Synthetic `param<N>` name assigned while parsing.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Return `true` when the value references a test-case parameter.
    ///
    /// # Examples
    /// ```
    /// use action_words::ParameterValue;
    ///
    /// assert!(ParameterValue::new("param1", "<login>").is_test_case_reference());
    /// assert!(!ParameterValue::new("param1", "login").is_test_case_reference());
    /// ```
    #[must_use]
    pub fn is_test_case_reference(&self) -> bool {
        is_test_case_reference(&self.value)
    }

    /// Name of the referenced test-case parameter, without angle brackets.
    ///
    /// # Examples
    /// ```
    /// use action_words::ParameterValue;
    ///
    /// let value = ParameterValue::new("param1", "<user_name>");
    /// assert_eq!(value.test_case_parameter(), Some("user_name"));
    /// assert_eq!(ParameterValue::new("param1", "7").test_case_parameter(), None);
    /// ```
    #[must_use]
    pub fn test_case_parameter(&self) -> Option<&str> {
        if !self.is_test_case_reference() {
            return None;
        }
        self.value
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
    }
}

/// One piece of an action word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// Literal wording, including the spaces that surround it.
    Text(String),
    /// Parameter declared by a library definition.
    Slot(ParameterSlot),
    /// Value bound by a test step.
    Value(ParameterValue),
}

impl Fragment {
    /// Return `true` for text fragments containing more than whitespace.
    #[must_use]
    pub fn is_wording(&self) -> bool {
        matches!(self, Self::Text(text) if !text.trim().is_empty())
    }
}

/// Parsed action word: an ordered, immutable list of fragments.
///
/// Values are only produced by the parser, which guarantees at least one
/// wording fragment and, for library definitions, unique slot names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionWord {
    fragments: Vec<Fragment>,
}

impl ActionWord {
    pub(crate) fn from_fragments(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// Fragments in input order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Parameter slots declared by a library definition, in order.
    pub fn slots(&self) -> impl Iterator<Item = &ParameterSlot> {
        self.fragments.iter().filter_map(|fragment| match fragment {
            Fragment::Slot(slot) => Some(slot),
            Fragment::Text(_) | Fragment::Value(_) => None,
        })
    }

    /// Values extracted from a step, in order.
    pub fn parameter_values(&self) -> impl Iterator<Item = &ParameterValue> {
        self.fragments.iter().filter_map(|fragment| match fragment {
            Fragment::Value(value) => Some(value),
            Fragment::Text(_) | Fragment::Slot(_) => None,
        })
    }

    /// Return `true` when at least one fragment carries wording.
    #[must_use]
    pub fn has_text(&self) -> bool {
        self.fragments.iter().any(Fragment::is_wording)
    }

    /// Signature shared by a library definition and every step using it.
    ///
    /// Parameters are reduced to their position, so `go to page 2` and the
    /// library definition `go to page "page"` produce the same token.
    ///
    /// # Examples
    /// ```
    /// use action_words::{parse_library_action_word, parse_step_action_word};
    ///
    /// let step = parse_step_action_word("go to page 2 now").unwrap();
    /// let definition = parse_library_action_word("go to page \"page\" now").unwrap();
    /// assert_eq!(step.token(), "TPT-go to page - now-");
    /// assert_eq!(step.token(), definition.token());
    /// ```
    #[must_use]
    pub fn token(&self) -> String {
        let mut kinds = String::with_capacity(self.fragments.len());
        let mut texts = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(text) => {
                    kinds.push('T');
                    texts.push_str(text);
                    texts.push('-');
                }
                Fragment::Slot(_) | Fragment::Value(_) => kinds.push('P'),
            }
        }
        format!("{kinds}-{texts}")
    }

    /// Derive a library definition from a parsed step.
    ///
    /// Used when a typed step matches no existing library action word: text
    /// is kept and every value becomes a slot named after the value, with the
    /// value as default. Test-case references leave the default empty.
    ///
    /// # Examples
    /// ```
    /// use action_words::parse_step_action_word;
    ///
    /// let step = parse_step_action_word("I pay 12 to <payee>").unwrap();
    /// let definition = step.derive_definition();
    /// let slots: Vec<_> = definition
    ///     .slots()
    ///     .map(|slot| (slot.name(), slot.default_value()))
    ///     .collect();
    /// assert_eq!(slots, vec![("param1", "12"), ("param2", "")]);
    /// assert_eq!(definition.token(), step.token());
    /// ```
    #[must_use]
    pub fn derive_definition(&self) -> Self {
        let fragments = self
            .fragments
            .iter()
            .map(|fragment| match fragment {
                Fragment::Value(value) => {
                    let default_value = if value.is_test_case_reference() {
                        ""
                    } else {
                        value.value()
                    };
                    Fragment::Slot(ParameterSlot::new(value.name(), default_value))
                }
                Fragment::Text(_) | Fragment::Slot(_) => fragment.clone(),
            })
            .collect();
        Self { fragments }
    }
}

impl fmt::Display for ActionWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(text) => f.write_str(text)?,
                Fragment::Slot(slot) if is_numeric_literal(slot.default_value()) => {
                    f.write_str(slot.default_value())?;
                }
                Fragment::Slot(slot) => write!(f, "\"{}\"", slot.name())?,
                Fragment::Value(value)
                    if is_numeric_literal(value.value()) || value.is_test_case_reference() =>
                {
                    f.write_str(value.value())?;
                }
                Fragment::Value(value) => write!(f, "\"{}\"", value.value())?,
            }
        }
        Ok(())
    }
}
