//! Script writers for keyword test cases.
//!
//! [`ScriptWriter`] owns the rendering algorithm: steps, the data-driven
//! decision and example blocks. A [`Dialect`] only supplies decoration:
//! preamble, scenario heading, keyword labels, indentation and the way a
//! test-case parameter reference is spelled. Adding a dialect means
//! implementing the trait; the writer and the shared formatting stay as
//! they are.

mod cucumber;
mod robot;

use action_words::{Fragment, StepKeyword};
use unic_langid::LanguageIdentifier;

use crate::examples::ExampleTable;
use crate::format::format_value;
use crate::model::{KeywordTestCase, KeywordTestStep};
use crate::translate::Translator;

pub use cucumber::Cucumber;
pub use robot::Robot;

/// Facts about the script being written, handed to dialect decoration.
#[derive(Clone, Copy)]
pub struct ScriptContext<'a> {
    /// Name of the test case.
    pub name: &'a str,
    /// Script language of the test case.
    pub locale: &'a LanguageIdentifier,
    /// Label translator supplied by the caller.
    pub translator: &'a dyn Translator,
    /// `true` when datasets drive the scenario through bound references.
    pub data_driven: bool,
}

/// Decoration specific to one target script format.
pub trait Dialect {
    /// Short dialect name, used in logs.
    fn name(&self) -> &'static str;

    /// Indentation placed before step lines and example blocks.
    fn step_indent(&self) -> &'static str;

    /// Label introducing a step.
    fn keyword_label(
        &self,
        keyword: StepKeyword,
        translator: &dyn Translator,
        locale: &LanguageIdentifier,
    ) -> String;

    /// Spell a normalized `<name>` reference.
    fn render_reference(&self, reference: &str, escape_arrows: bool) -> String;

    /// Heading line of an example block.
    fn examples_label(&self, translator: &dyn Translator, locale: &LanguageIdentifier) -> String;

    /// Write everything that precedes the steps.
    fn write_preamble(&self, script: &mut String, context: &ScriptContext<'_>);

    /// Write the scenario heading; only called when the test case has steps.
    fn write_scenario_header(&self, _script: &mut String, _context: &ScriptContext<'_>) {}
}

/// Renders keyword test cases in the dialect `D`.
///
/// The writer holds no per-call state, so one instance can serve any
/// number of concurrent calls.
///
/// # Examples
/// ```
/// use action_words::{StepKeyword, parse_step_action_word};
/// use keyword_scripts::{Cucumber, KeywordTestCase, KeywordTestStep, ScriptWriter};
/// use unic_langid::{LanguageIdentifier, langid};
///
/// let english = |id: &str, _: &LanguageIdentifier| match id {
///     "script-feature" => "Feature".to_string(),
///     "script-scenario" => "Scenario".to_string(),
///     _ => "Given".to_string(),
/// };
/// let step = KeywordTestStep::inline(
///     StepKeyword::Given,
///     parse_step_action_word("I am on page 2").unwrap(),
/// );
/// let test_case = KeywordTestCase::new("Navigation", langid!("en")).with_step(step);
/// let script = ScriptWriter::new(Cucumber).write_script(&test_case, &english, false);
/// assert_eq!(
///     script,
///     "# language: en\nFeature: Navigation\n\n\tScenario: Navigation\n\t\tGiven I am on page 2"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptWriter<D> {
    dialect: D,
}

struct RenderedStep {
    line: String,
    binds_test_case_parameter: bool,
}

impl<D: Dialect> ScriptWriter<D> {
    /// Create a writer for `dialect`.
    #[must_use]
    pub fn new(dialect: D) -> Self {
        Self { dialect }
    }

    /// The dialect this writer renders.
    #[must_use]
    pub fn dialect(&self) -> &D {
        &self.dialect
    }

    /// Render a whole test case.
    ///
    /// When the test case owns datasets and at least one step binds a
    /// test-case parameter, the scenario is data-driven and one example
    /// block per dataset follows the steps.
    #[must_use]
    pub fn write_script(
        &self,
        test_case: &KeywordTestCase,
        translator: &dyn Translator,
        escape_arrows: bool,
    ) -> String {
        let locale = test_case.script_language();
        let mut binds_test_case_parameter = false;
        let lines: Vec<String> = test_case
            .steps()
            .iter()
            .map(|step| {
                let rendered = self.render_step(step, translator, locale, escape_arrows);
                binds_test_case_parameter |= rendered.binds_test_case_parameter;
                rendered.line
            })
            .collect();

        let context = ScriptContext {
            name: test_case.name(),
            locale,
            translator,
            data_driven: binds_test_case_parameter && !test_case.datasets().is_empty(),
        };

        let mut script = String::new();
        self.dialect.write_preamble(&mut script, &context);
        if lines.is_empty() {
            log::debug!(
                "rendered {} script for test case {:?} without steps",
                self.dialect.name(),
                test_case.name()
            );
            return script;
        }

        self.dialect.write_scenario_header(&mut script, &context);
        let indent = self.dialect.step_indent();
        for line in &lines {
            script.push('\n');
            script.push_str(indent);
            script.push_str(line);
        }

        if context.data_driven {
            let label = self.dialect.examples_label(translator, locale);
            for dataset in test_case.datasets() {
                let table = ExampleTable::from_dataset(dataset);
                write_examples(&mut script, indent, &label, &table);
            }
        }

        log::debug!(
            "rendered {} script for test case {:?}: {} steps, {} example blocks",
            self.dialect.name(),
            test_case.name(),
            lines.len(),
            if context.data_driven {
                test_case.datasets().len()
            } else {
                0
            }
        );
        script
    }

    /// Render one step line: keyword label, a space, then the action word.
    #[must_use]
    pub fn write_step_script(
        &self,
        step: &KeywordTestStep,
        translator: &dyn Translator,
        locale: &LanguageIdentifier,
        escape_arrows: bool,
    ) -> String {
        self.render_step(step, translator, locale, escape_arrows).line
    }

    fn render_step(
        &self,
        step: &KeywordTestStep,
        translator: &dyn Translator,
        locale: &LanguageIdentifier,
        escape_arrows: bool,
    ) -> RenderedStep {
        let mut line = self.dialect.keyword_label(step.keyword(), translator, locale);
        line.push(' ');
        let mut binds_test_case_parameter = false;
        for fragment in step.action_word().fragments() {
            let value = match fragment {
                Fragment::Text(text) => {
                    line.push_str(text);
                    continue;
                }
                Fragment::Slot(slot) => {
                    let Some(value) = step.value_for(slot.name()) else {
                        log::trace!(
                            "no value bound to slot {:?}; rendering nothing",
                            slot.name()
                        );
                        continue;
                    };
                    value
                }
                Fragment::Value(value) => value,
            };
            binds_test_case_parameter |= value.is_test_case_reference();
            line.push_str(&format_value(&self.dialect, value.value(), escape_arrows));
        }
        log::trace!("rendered step line {line:?}");
        RenderedStep {
            line,
            binds_test_case_parameter,
        }
    }
}

fn write_examples(script: &mut String, indent: &str, label: &str, table: &ExampleTable) {
    let header = table.header_row();
    let values = table.value_row();
    script.push_str("\n\n");
    for line in [table.tag(), label, header.as_str(), values.as_str()] {
        script.push_str(indent);
        script.push_str(line);
        script.push('\n');
    }
    script.pop();
}
