//! Gherkin feature files for Cucumber-style runners.

use action_words::StepKeyword;
use unic_langid::LanguageIdentifier;

use super::{Dialect, ScriptContext};
use crate::translate::{Label, Translator};

/// Gherkin dialect.
///
/// Every heading and keyword is translated into the script language, which
/// is also declared on the `# language:` line. References stay in `<name>`
/// form, optionally HTML-escaped for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cucumber;

impl Dialect for Cucumber {
    fn name(&self) -> &'static str {
        "cucumber"
    }

    fn step_indent(&self) -> &'static str {
        "\t\t"
    }

    fn keyword_label(
        &self,
        keyword: StepKeyword,
        translator: &dyn Translator,
        locale: &LanguageIdentifier,
    ) -> String {
        translator.label(Label::Keyword(keyword), locale)
    }

    fn render_reference(&self, reference: &str, escape_arrows: bool) -> String {
        if escape_arrows {
            reference.replace('<', "&lt;").replace('>', "&gt;")
        } else {
            reference.to_string()
        }
    }

    fn examples_label(&self, translator: &dyn Translator, locale: &LanguageIdentifier) -> String {
        format!("{}:", translator.label(Label::Examples, locale))
    }

    fn write_preamble(&self, script: &mut String, context: &ScriptContext<'_>) {
        script.push_str(&format!(
            "# language: {}\n{}: {}",
            context.locale.language,
            context.translator.label(Label::Feature, context.locale),
            context.name
        ));
    }

    fn write_scenario_header(&self, script: &mut String, context: &ScriptContext<'_>) {
        let heading = if context.data_driven {
            Label::ScenarioOutline
        } else {
            Label::Scenario
        };
        script.push_str(&format!(
            "\n\n\t{}: {}",
            context.translator.label(heading, context.locale),
            context.name
        ));
    }
}
