//! Helpers for rendering command output.

use std::io::Write;

use action_words::{ActionWord, Fragment};
use eyre::{Context, Result};

/// Write one line per fragment of `action_word`, then its token.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
///
/// # Examples
/// ```
/// use action_words::parse_step_action_word;
/// use keyword_scripts_cli::output::write_fragments;
///
/// let action_word = parse_step_action_word("go to page 2").unwrap();
/// let mut out = Vec::new();
/// write_fragments(&mut out, &action_word).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "text  \"go to page \"\nvalue param1 = \"2\"\ntoken TP-go to page -\n"
/// );
/// ```
pub fn write_fragments(writer: &mut dyn Write, action_word: &ActionWord) -> Result<()> {
    for fragment in action_word.fragments() {
        match fragment {
            Fragment::Text(text) => writeln!(writer, "text  {text:?}"),
            Fragment::Slot(slot) => writeln!(
                writer,
                "slot  {} default={:?}",
                slot.name(),
                slot.default_value()
            ),
            Fragment::Value(value) => {
                writeln!(writer, "value {} = {:?}", value.name(), value.value())
            }
        }
        .wrap_err("failed to write fragment listing")?;
    }
    writeln!(writer, "token {}", action_word.token()).wrap_err("failed to write token")
}

/// Write a rendered script followed by a newline.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_script(writer: &mut dyn Write, script: &str) -> Result<()> {
    writeln!(writer, "{script}").wrap_err("failed to write script")
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use action_words::parse_library_action_word;

    use super::*;

    #[test]
    fn slots_list_their_defaults() {
        let action_word =
            parse_library_action_word("wait 5 for \"event\"").expect("action word parses");
        let mut out = Vec::new();
        write_fragments(&mut out, &action_word).expect("listing written");
        let listing = String::from_utf8(out).expect("utf8");
        assert_eq!(
            listing,
            "text  \"wait \"\n\
             slot  param1 default=\"5\"\n\
             text  \" for \"\n\
             slot  event default=\"\"\n\
             token TPTP-wait - for -\n"
        );
    }
}
