//! JSON test case documents.
//!
//! A document lists library action words, the steps of one test case and
//! its datasets:
//!
//! ```json
//! {
//!   "name": "Log in",
//!   "language": "fr",
//!   "library": ["I log in as \"login\""],
//!   "steps": [{ "keyword": "given", "action": "I log in as <user>" }],
//!   "datasets": [{ "name": "admin", "values": { "user": "root" } }]
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use action_words::{ActionWord, StepKeyword, parse_library_action_word, parse_step_action_word};
use keyword_scripts::{Dataset, KeywordTestCase, KeywordTestStep};
use serde::Deserialize;
use unic_langid::LanguageIdentifier;

use crate::config::parse_language;
use crate::error::CliError;

/// A test case as written in a JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestCaseDocument {
    /// Test case name.
    pub name: String,
    /// Script language tag; the configured locale applies when absent.
    #[serde(default)]
    pub language: Option<String>,
    /// Library action words, in library syntax.
    #[serde(default)]
    pub library: Vec<String>,
    /// Ordered steps.
    #[serde(default)]
    pub steps: Vec<StepDocument>,
    /// Datasets driving the test case.
    #[serde(default)]
    pub datasets: Vec<DatasetDocument>,
}

/// One step of a [`TestCaseDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepDocument {
    /// Step keyword such as `Given`, matched case-insensitively.
    pub keyword: String,
    /// Action word in step syntax.
    pub action: String,
}

/// One dataset of a [`TestCaseDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetDocument {
    /// Dataset name.
    pub name: String,
    /// Parameter values keyed by parameter name.
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl TestCaseDocument {
    /// Read and deserialize the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::ReadDocument`] when the file cannot be read and
    /// [`CliError::InvalidDocument`] when it is not a valid document.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::ReadDocument {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CliError::InvalidDocument {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Build the keyword test case described by the document.
    ///
    /// Each step is bound to the library action word sharing its token.
    /// Steps without a library counterpart get a definition derived from
    /// the step itself.
    ///
    /// # Errors
    ///
    /// Returns an error when an action word, keyword or language tag is
    /// invalid, or when two library entries share a token.
    pub fn into_test_case(
        self,
        default_language: &LanguageIdentifier,
    ) -> Result<KeywordTestCase, CliError> {
        let language = match &self.language {
            Some(tag) => parse_language(tag)?,
            None => default_language.clone(),
        };
        let library = index_library(&self.library)?;

        let mut test_case = KeywordTestCase::new(self.name, language);
        for step in self.steps {
            test_case = test_case.with_step(step.into_step(&library)?);
        }
        for dataset in self.datasets {
            test_case = test_case.with_dataset(Dataset::new(dataset.name, dataset.values));
        }
        Ok(test_case)
    }
}

impl StepDocument {
    fn into_step(
        self,
        library: &HashMap<String, (String, Arc<ActionWord>)>,
    ) -> Result<KeywordTestStep, CliError> {
        let keyword: StepKeyword = self.keyword.parse()?;
        let typed = parse_step_action_word(&self.action).map_err(|source| CliError::ActionWord {
            text: self.action.clone(),
            source,
        })?;
        let definition = match library.get(&typed.token()) {
            Some((_, definition)) => Arc::clone(definition),
            None => {
                tracing::debug!(
                    action = %self.action,
                    "no library action word matches; deriving one from the step"
                );
                Arc::new(typed.derive_definition())
            }
        };
        Ok(KeywordTestStep::bind(keyword, definition, &typed)?)
    }
}

fn index_library(
    entries: &[String],
) -> Result<HashMap<String, (String, Arc<ActionWord>)>, CliError> {
    let mut library: HashMap<String, (String, Arc<ActionWord>)> = HashMap::with_capacity(entries.len());
    for entry in entries {
        let action_word =
            parse_library_action_word(entry).map_err(|source| CliError::ActionWord {
                text: entry.clone(),
                source,
            })?;
        let token = action_word.token();
        if let Some((first, _)) = library.get(&token) {
            return Err(CliError::DuplicateLibraryEntry {
                first: first.clone(),
                second: entry.clone(),
            });
        }
        library.insert(token, (entry.clone(), Arc::new(action_word)));
    }
    Ok(library)
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use unic_langid::langid;

    use super::*;

    fn document(json: &str) -> TestCaseDocument {
        serde_json::from_str(json).expect("valid document")
    }

    #[test]
    fn steps_bind_to_library_slots() {
        let test_case = document(
            r#"{
                "name": "Log in",
                "library": ["I log in as \"login\" with \"pin\""],
                "steps": [{ "keyword": "when", "action": "I log in as <user> with 1234" }]
            }"#,
        )
        .into_test_case(&langid!("en-US"))
        .unwrap();
        let step = test_case.steps().first().expect("one step");
        assert_eq!(step.keyword(), StepKeyword::When);
        assert_eq!(step.value_for("login").map(|v| v.value()), Some("<user>"));
        assert_eq!(step.value_for("pin").map(|v| v.value()), Some("1234"));
        assert_eq!(test_case.script_language(), &langid!("en-US"));
    }

    #[test]
    fn unmatched_steps_derive_a_definition() {
        let test_case = document(
            r#"{ "name": "t", "language": "fr", "steps": [{ "keyword": "Then", "action": "I see \"home\"" }] }"#,
        )
        .into_test_case(&langid!("en-US"))
        .unwrap();
        let step = test_case.steps().first().expect("one step");
        assert_eq!(step.value_for("param1").map(|v| v.value()), Some("home"));
        assert_eq!(test_case.script_language(), &langid!("fr"));
    }

    #[test]
    fn datasets_are_carried_over() {
        let test_case = document(
            r#"{ "name": "t", "datasets": [{ "name": "admin", "values": { "user": "root" } }] }"#,
        )
        .into_test_case(&langid!("en-US"))
        .unwrap();
        let dataset = test_case.datasets().first().expect("one dataset");
        assert_eq!(dataset.name(), "admin");
        assert_eq!(dataset.values().get("user").map(String::as_str), Some("root"));
    }

    #[test]
    fn duplicate_library_entries_are_rejected() {
        let error = document(
            r#"{ "name": "t", "library": ["open \"door\"", "open \"window\""] }"#,
        )
        .into_test_case(&langid!("en-US"))
        .unwrap_err();
        assert!(matches!(error, CliError::DuplicateLibraryEntry { .. }));
    }

    #[test]
    fn library_entries_must_not_reference_parameters() {
        let error = document(r#"{ "name": "t", "library": ["open <door>"] }"#)
            .into_test_case(&langid!("en-US"))
            .unwrap_err();
        assert!(matches!(error, CliError::ActionWord { .. }));
    }

    #[test]
    fn unknown_keywords_are_rejected() {
        let error = document(r#"{ "name": "t", "steps": [{ "keyword": "Whenever", "action": "go" }] }"#)
            .into_test_case(&langid!("en-US"))
            .unwrap_err();
        assert!(matches!(error, CliError::UnknownKeyword(_)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(serde_json::from_str::<TestCaseDocument>(r#"{ "name": "t", "tags": [] }"#).is_err());
    }
}
