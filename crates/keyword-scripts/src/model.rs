//! Keyword test cases, their steps and datasets.

use std::collections::HashMap;
use std::sync::Arc;

use action_words::{ActionWord, Fragment, ParameterValue, StepKeyword};
use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// Errors raised while binding a typed step to a library action word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// The step and the definition describe different action words.
    #[error("step `{step}` does not match action word `{definition}`")]
    TokenMismatch {
        /// Token of the typed step.
        step: String,
        /// Token of the library definition.
        definition: String,
    },
}

/// Value bound by a step to one slot of its action word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundValue {
    slot: String,
    value: ParameterValue,
}

impl BoundValue {
    /// Bind `value` to the slot called `slot`.
    #[must_use]
    pub fn new(slot: impl Into<String>, value: ParameterValue) -> Self {
        Self {
            slot: slot.into(),
            value,
        }
    }

    /// Name of the slot this value fills.
    #[must_use]
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// The bound value.
    #[must_use]
    pub fn value(&self) -> &ParameterValue {
        &self.value
    }
}

/// One line of a keyword test case.
///
/// Values are matched to slots by name, not position. A slot without a
/// bound value renders as nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTestStep {
    keyword: StepKeyword,
    action_word: Arc<ActionWord>,
    values: Vec<BoundValue>,
}

impl KeywordTestStep {
    /// Create a step from explicit bindings.
    #[must_use]
    pub fn new(
        keyword: StepKeyword,
        action_word: Arc<ActionWord>,
        values: Vec<BoundValue>,
    ) -> Self {
        Self {
            keyword,
            action_word,
            values,
        }
    }

    /// Bind the values of a typed step to the slots of `definition`.
    ///
    /// Values are paired with slots in declaration order.
    ///
    /// # Errors
    /// Returns [`BindingError::TokenMismatch`] when the step does not share
    /// the definition's token.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use action_words::{StepKeyword, parse_library_action_word, parse_step_action_word};
    /// use keyword_scripts::KeywordTestStep;
    ///
    /// let definition = Arc::new(parse_library_action_word("I log in as \"login\"").unwrap());
    /// let typed = parse_step_action_word("I log in as <user>").unwrap();
    /// let step = KeywordTestStep::bind(StepKeyword::Given, definition, &typed).unwrap();
    /// assert_eq!(step.value_for("login").map(|v| v.value()), Some("<user>"));
    /// ```
    pub fn bind(
        keyword: StepKeyword,
        definition: Arc<ActionWord>,
        typed: &ActionWord,
    ) -> Result<Self, BindingError> {
        let (step_token, definition_token) = (typed.token(), definition.token());
        if step_token != definition_token {
            return Err(BindingError::TokenMismatch {
                step: step_token,
                definition: definition_token,
            });
        }
        let values = definition
            .slots()
            .zip(typed.parameter_values())
            .map(|(slot, value)| BoundValue::new(slot.name(), value.clone()))
            .collect();
        Ok(Self::new(keyword, definition, values))
    }

    /// Build a step whose action word carries its values inline.
    ///
    /// Used to preview a typed step before it is bound to a library
    /// definition.
    #[must_use]
    pub fn inline(keyword: StepKeyword, typed: ActionWord) -> Self {
        Self::new(keyword, Arc::new(typed), Vec::new())
    }

    /// The step keyword.
    #[must_use]
    pub fn keyword(&self) -> StepKeyword {
        self.keyword
    }

    /// The action word this step instantiates.
    #[must_use]
    pub fn action_word(&self) -> &ActionWord {
        &self.action_word
    }

    /// Bound values, in binding order.
    #[must_use]
    pub fn values(&self) -> &[BoundValue] {
        &self.values
    }

    /// Value bound to the slot called `slot`, if any.
    #[must_use]
    pub fn value_for(&self, slot: &str) -> Option<&ParameterValue> {
        self.values
            .iter()
            .find(|bound| bound.slot() == slot)
            .map(BoundValue::value)
    }

    /// Return `true` when any value references a test-case parameter.
    #[must_use]
    pub fn binds_test_case_parameter(&self) -> bool {
        let inline = self
            .action_word
            .fragments()
            .iter()
            .any(|fragment| {
                matches!(fragment, Fragment::Value(value) if value.is_test_case_reference())
            });
        inline
            || self
                .values
                .iter()
                .any(|bound| bound.value().is_test_case_reference())
    }
}

/// Named set of values for the parameters of a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    name: String,
    values: HashMap<String, String>,
}

impl Dataset {
    /// Create a dataset from parameter name and value pairs.
    #[must_use]
    pub fn new<I, K, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            name: name.into(),
            values: values
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// The dataset name as authored.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter values keyed by parameter name, in no particular order.
    #[must_use]
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Tag identifying the dataset in a generated script.
    ///
    /// # Examples
    /// ```
    /// use keyword_scripts::Dataset;
    ///
    /// let dataset = Dataset::new("  admin   user ", [("login", "root")]);
    /// assert_eq!(dataset.tag(), "@admin_user");
    /// ```
    #[must_use]
    pub fn tag(&self) -> String {
        let words: Vec<_> = self.name.split_whitespace().collect();
        format!("@{}", words.join("_"))
    }
}

/// A keyword test case: ordered steps plus optional datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTestCase {
    name: String,
    script_language: LanguageIdentifier,
    steps: Vec<KeywordTestStep>,
    datasets: Vec<Dataset>,
}

impl KeywordTestCase {
    /// Create an empty test case scripted in `script_language`.
    #[must_use]
    pub fn new(name: impl Into<String>, script_language: LanguageIdentifier) -> Self {
        Self {
            name: name.into(),
            script_language,
            steps: Vec::new(),
            datasets: Vec::new(),
        }
    }

    /// Append a step.
    #[must_use]
    pub fn with_step(mut self, step: KeywordTestStep) -> Self {
        self.steps.push(step);
        self
    }

    /// Append a dataset.
    #[must_use]
    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    /// Test case name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Language the script keywords are written in.
    #[must_use]
    pub fn script_language(&self) -> &LanguageIdentifier {
        &self.script_language
    }

    /// Steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[KeywordTestStep] {
        &self.steps
    }

    /// Datasets in authoring order.
    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }
}
