//! Script generation tests for the Cucumber and Robot Framework writers.
#![expect(clippy::expect_used, reason = "tests assert rendering outcomes")]

use std::sync::Arc;

use action_words::{
    ActionWord, ParameterValue, StepKeyword, parse_library_action_word, parse_step_action_word,
};
use gherkin::{GherkinEnv, StepType};
use keyword_scripts::{
    BoundValue, Cucumber, Dataset, KeywordTestCase, KeywordTestStep, Robot, ScriptWriter,
};
use rstest::{fixture, rstest};
use unic_langid::{LanguageIdentifier, langid};

fn labels(id: &str, locale: &LanguageIdentifier) -> String {
    let french = locale.language.as_str() == "fr";
    let label = match (id, french) {
        ("script-feature", false) => "Feature",
        ("script-feature", true) => "Fonctionnalité",
        ("script-scenario", false) => "Scenario",
        ("script-scenario", true) => "Scénario",
        ("script-scenario-outline", false) => "Scenario Outline",
        ("script-scenario-outline", true) => "Plan du scénario",
        ("script-examples", false) => "Examples",
        ("script-examples", true) => "Exemples",
        ("keyword-given", false) => "Given",
        ("keyword-given", true) => "Soit",
        ("keyword-when", false) => "When",
        ("keyword-when", true) => "Quand",
        ("keyword-then", false) => "Then",
        ("keyword-then", true) => "Alors",
        ("keyword-and", false) => "And",
        ("keyword-and", true) => "Et",
        ("keyword-but", false) => "But",
        ("keyword-but", true) => "Mais",
        _ => id,
    };
    label.to_string()
}

fn bound_step(keyword: StepKeyword, definition: &str, typed: &str) -> KeywordTestStep {
    let definition = Arc::new(parse_library_action_word(definition).expect("definition parses"));
    let typed = parse_step_action_word(typed).expect("step parses");
    KeywordTestStep::bind(keyword, definition, &typed).expect("step binds")
}

#[fixture]
fn login_case() -> KeywordTestCase {
    KeywordTestCase::new("Log in", langid!("en-US"))
        .with_step(bound_step(
            StepKeyword::Given,
            "I am on the \"page\" page",
            "I am on the \"login\" page",
        ))
        .with_step(bound_step(
            StepKeyword::When,
            "I log in as \"user\" with pin \"pin\"",
            "I log in as <user name> with pin <pin>",
        ))
        .with_step(bound_step(
            StepKeyword::Then,
            "I see 1 notification",
            "I see 3 notification",
        ))
        .with_dataset(Dataset::new("admin account", [("pin", "1234"), ("user_name", " root ")]))
        .with_dataset(Dataset::new("guest", [("user_name", "visitor"), ("pin", "0")]))
}

#[fixture]
fn plain_case() -> KeywordTestCase {
    KeywordTestCase::new("Browse", langid!("en"))
        .with_step(bound_step(StepKeyword::Given, "I open \"site\"", "I open \"home\""))
        .with_step(bound_step(StepKeyword::And, "I wait 5 seconds", "I wait 10 seconds"))
        .with_dataset(Dataset::new("unused", [("site", "x")]))
}

#[rstest]
fn cucumber_outline_with_examples(login_case: KeywordTestCase) {
    let script = ScriptWriter::new(Cucumber).write_script(&login_case, &labels, false);
    assert_eq!(
        script,
        "# language: en\n\
         Feature: Log in\n\
         \n\
         \tScenario Outline: Log in\n\
         \t\tGiven I am on the \"login\" page\n\
         \t\tWhen I log in as <user_name> with pin <pin>\n\
         \t\tThen I see 3 notification\n\
         \n\
         \t\t@admin_account\n\
         \t\tExamples:\n\
         \t\t| pin | user_name |\n\
         \t\t| 1234 | \"root\" |\n\
         \n\
         \t\t@guest\n\
         \t\tExamples:\n\
         \t\t| pin | user_name |\n\
         \t\t| 0 | \"visitor\" |"
    );
}

#[rstest]
fn cucumber_escapes_arrows_on_request(login_case: KeywordTestCase) {
    let script = ScriptWriter::new(Cucumber).write_script(&login_case, &labels, true);
    assert!(script.contains("When I log in as &lt;user_name&gt; with pin &lt;pin&gt;"));
}

#[rstest]
fn datasets_without_references_render_a_plain_scenario(plain_case: KeywordTestCase) {
    let script = ScriptWriter::new(Cucumber).write_script(&plain_case, &labels, false);
    assert_eq!(
        script,
        "# language: en\nFeature: Browse\n\n\tScenario: Browse\n\t\tGiven I open \"home\"\n\t\tAnd I wait 10 seconds"
    );
}

#[test]
fn references_without_datasets_render_a_plain_scenario() {
    let test_case = KeywordTestCase::new("Solo", langid!("en")).with_step(bound_step(
        StepKeyword::Given,
        "I pick \"fruit\"",
        "I pick <fruit>",
    ));
    let script = ScriptWriter::new(Cucumber).write_script(&test_case, &labels, false);
    assert!(script.contains("\tScenario: Solo"));
    assert!(!script.contains("Examples"));
}

#[test]
fn empty_test_case_has_no_scenario() {
    let test_case = KeywordTestCase::new("Empty", langid!("en"));
    let script = ScriptWriter::new(Cucumber).write_script(&test_case, &labels, false);
    assert_eq!(script, "# language: en\nFeature: Empty");
}

#[rstest]
fn cucumber_output_is_valid_gherkin(login_case: KeywordTestCase) {
    let mut script = ScriptWriter::new(Cucumber).write_script(&login_case, &labels, false);
    script.push('\n');
    let feature = gherkin::Feature::parse(&script, GherkinEnv::default())
        .expect("generated script should be valid Gherkin");
    assert_eq!(feature.name, "Log in");
    let scenario = feature.scenarios.first().expect("one scenario");
    assert_eq!(scenario.steps.len(), 3);
    let step_types: Vec<_> = scenario.steps.iter().map(|step| step.ty).collect();
    assert_eq!(
        step_types,
        vec![StepType::Given, StepType::When, StepType::Then]
    );
    assert_eq!(scenario.examples.len(), 2);
    let table = scenario
        .examples
        .first()
        .and_then(|examples| examples.table.as_ref())
        .expect("examples table");
    assert_eq!(
        table.rows,
        vec![
            vec!["pin".to_string(), "user_name".to_string()],
            vec!["1234".to_string(), "\"root\"".to_string()],
        ]
    );
}

#[rstest]
fn french_scripts_use_translated_labels(login_case: KeywordTestCase) {
    let french = KeywordTestCase::new("Connexion", langid!("fr-FR"))
        .with_step(login_case.steps().first().expect("first step").clone());
    let script = ScriptWriter::new(Cucumber).write_script(&french, &labels, false);
    assert_eq!(
        script,
        "# language: fr\nFonctionnalité: Connexion\n\n\tScénario: Connexion\n\t\tSoit I am on the \"login\" page"
    );
}

#[rstest]
fn robot_data_driven_suite(login_case: KeywordTestCase) {
    let script = ScriptWriter::new(Robot::default()).write_script(&login_case, &labels, true);
    assert_eq!(
        script,
        "*** Settings ***\n\
         Resource\tsquash_resources.resource\n\
         Library\tsquash_tf.TFParamService\n\
         \n\
         *** Test Cases ***\n\
         Log in\n\
         \tGiven I am on the \"login\" page\n\
         \tWhen I log in as ${user_name} with pin ${pin}\n\
         \tThen I see 3 notification\n\
         \n\
         \t@admin_account\n\
         \tExamples:\n\
         \t| pin | user_name |\n\
         \t| 1234 | \"root\" |\n\
         \n\
         \t@guest\n\
         \tExamples:\n\
         \t| pin | user_name |\n\
         \t| 0 | \"visitor\" |"
    );
}

#[rstest]
fn robot_plain_suite_skips_parameter_library(plain_case: KeywordTestCase) {
    let script = ScriptWriter::new(Robot::default()).write_script(&plain_case, &labels, false);
    assert_eq!(
        script,
        "*** Settings ***\nResource\tsquash_resources.resource\n\n*** Test Cases ***\nBrowse\n\tGiven I open \"home\"\n\tAnd I wait 10 seconds"
    );
}

#[test]
fn robot_keywords_ignore_the_translator() {
    let step = bound_step(StepKeyword::But, "I stop", "I stop");
    let line = ScriptWriter::new(Robot::default()).write_step_script(
        &step,
        &labels,
        &langid!("fr"),
        false,
    );
    assert_eq!(line, "But I stop");
}

#[test]
fn step_preview_renders_inline_values() {
    let typed = parse_step_action_word("select <user name> on page 2 as \"admin\"")
        .expect("step parses");
    let step = KeywordTestStep::inline(StepKeyword::When, typed);
    let cucumber =
        ScriptWriter::new(Cucumber).write_step_script(&step, &labels, &langid!("en"), false);
    assert_eq!(cucumber, "When select <user_name> on page 2 as \"admin\"");
    let robot = ScriptWriter::new(Robot::default()).write_step_script(
        &step,
        &labels,
        &langid!("en"),
        false,
    );
    assert_eq!(robot, "When select ${user_name} on page 2 as \"admin\"");
}

#[test]
fn unbound_slots_render_nothing() {
    let definition: Arc<ActionWord> = Arc::new(
        parse_library_action_word("I move \"item\" to \"place\"").expect("definition parses"),
    );
    let step = KeywordTestStep::new(
        StepKeyword::When,
        definition,
        vec![BoundValue::new("item", ParameterValue::new("param1", "box"))],
    );
    let line =
        ScriptWriter::new(Cucumber).write_step_script(&step, &labels, &langid!("en"), false);
    assert_eq!(line, "When I move \"box\" to ");
}

#[test]
fn values_bind_by_slot_name_not_position() {
    let definition = Arc::new(
        parse_library_action_word("I copy \"source\" into \"target\"").expect("definition parses"),
    );
    let step = KeywordTestStep::new(
        StepKeyword::Given,
        definition,
        vec![
            BoundValue::new("target", ParameterValue::new("param2", "b.txt")),
            BoundValue::new("source", ParameterValue::new("param1", "a.txt")),
        ],
    );
    let line =
        ScriptWriter::new(Cucumber).write_step_script(&step, &labels, &langid!("en"), false);
    assert_eq!(line, "Given I copy \"a.txt\" into \"b.txt\"");
}

#[rstest]
fn writers_are_reusable_across_calls(login_case: KeywordTestCase, plain_case: KeywordTestCase) {
    let writer = ScriptWriter::new(Cucumber);
    let first = writer.write_script(&login_case, &labels, false);
    let _ = writer.write_script(&plain_case, &labels, true);
    assert_eq!(writer.write_script(&login_case, &labels, false), first);
}

#[test]
fn dataset_tables_follow_sorted_parameter_names() {
    let test_case = KeywordTestCase::new("Greet", langid!("en"))
        .with_step(bound_step(
            StepKeyword::Given,
            "I greet \"name\" aged \"age\"",
            "I greet <B> aged <A>",
        ))
        .with_dataset(Dataset::new("first", [("B", "smith"), ("A", "5")]))
        .with_dataset(Dataset::new("second", [("A", "6"), ("B", "lee")]));
    let script = ScriptWriter::new(Cucumber).write_script(&test_case, &labels, false);
    let rows: Vec<_> = script
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('|'))
        .collect();
    assert_eq!(
        rows,
        vec!["| A | B |", "| 5 | \"smith\" |", "| A | B |", "| 6 | \"lee\" |"]
    );
}

#[test]
fn non_ascii_digits_are_quoted_like_wording() {
    let step = bound_step(
        StepKeyword::Given,
        "go to page \"page\"",
        "go to page \"\u{663}\"",
    );
    let line =
        ScriptWriter::new(Cucumber).write_step_script(&step, &labels, &langid!("en"), false);
    assert_eq!(line, "Given go to page \"\u{663}\"");
    assert_eq!(keyword_scripts::format_cell("\u{663}"), "\"\u{663}\"");
}
