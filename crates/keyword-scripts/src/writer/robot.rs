//! Robot Framework test suites.

use action_words::StepKeyword;
use unic_langid::LanguageIdentifier;

use super::{Dialect, ScriptContext};
use crate::translate::Translator;

const DEFAULT_RESOURCE: &str = "squash_resources.resource";
const DEFAULT_PARAMETER_LIBRARY: &str = "squash_tf.TFParamService";

/// Robot Framework dialect.
///
/// Keywords use the fixed English labels Robot Framework understands and
/// references become `${name}` variables. The parameter library is imported
/// only for data-driven test cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    resource: String,
    parameter_library: String,
}

impl Robot {
    /// Create a dialect importing `resource` and, for data-driven test
    /// cases, `parameter_library`.
    #[must_use]
    pub fn new(resource: impl Into<String>, parameter_library: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            parameter_library: parameter_library.into(),
        }
    }

    /// Resource file imported by every suite.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Library resolving dataset parameters.
    #[must_use]
    pub fn parameter_library(&self) -> &str {
        &self.parameter_library
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCE, DEFAULT_PARAMETER_LIBRARY)
    }
}

impl Dialect for Robot {
    fn name(&self) -> &'static str {
        "robot"
    }

    fn step_indent(&self) -> &'static str {
        "\t"
    }

    fn keyword_label(
        &self,
        keyword: StepKeyword,
        _translator: &dyn Translator,
        _locale: &LanguageIdentifier,
    ) -> String {
        keyword.as_str().to_string()
    }

    fn render_reference(&self, reference: &str, _escape_arrows: bool) -> String {
        let name = reference
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .unwrap_or(reference);
        format!("${{{name}}}")
    }

    fn examples_label(&self, _translator: &dyn Translator, _locale: &LanguageIdentifier) -> String {
        "Examples:".to_string()
    }

    fn write_preamble(&self, script: &mut String, context: &ScriptContext<'_>) {
        script.push_str("*** Settings ***\nResource\t");
        script.push_str(&self.resource);
        if context.data_driven {
            script.push_str("\nLibrary\t");
            script.push_str(&self.parameter_library);
        }
        script.push_str("\n\n*** Test Cases ***\n");
        script.push_str(context.name);
    }
}
