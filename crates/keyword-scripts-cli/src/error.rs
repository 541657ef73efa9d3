//! Error types for the `kwscript` front end.
//!
//! Each variant names the input that failed so the message printed on
//! stderr points the user at the offending document entry or argument.

use std::path::PathBuf;

use action_words::{ActionWordError, StepKeywordParseError};
use i18n_embed::I18nEmbedError;
use keyword_scripts::BindingError;
use thiserror::Error;

/// Errors that can occur while loading configuration or documents.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A test case document could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    ReadDocument {
        /// Path of the document.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A test case document is not valid JSON for the expected shape.
    #[error("invalid test case document {}: {source}", .path.display())]
    InvalidDocument {
        /// Path of the document.
        path: PathBuf,
        /// Underlying deserialization failure.
        source: serde_json::Error,
    },

    /// An action word was rejected by the parser.
    #[error("invalid action word `{text}`: {source}")]
    ActionWord {
        /// Text handed to the parser.
        text: String,
        /// Parser failure.
        source: ActionWordError,
    },

    /// Two library entries describe the same action word.
    #[error("library entries `{first}` and `{second}` describe the same action word")]
    DuplicateLibraryEntry {
        /// Entry declared first.
        first: String,
        /// Entry declared later.
        second: String,
    },

    /// A step keyword was not recognised.
    #[error(transparent)]
    UnknownKeyword(#[from] StepKeywordParseError),

    /// A step could not be bound to its action word.
    #[error(transparent)]
    Binding(#[from] BindingError),

    /// A language tag could not be parsed.
    #[error("invalid language tag '{tag}'")]
    InvalidLanguage {
        /// Tag as written.
        tag: String,
    },

    /// Embedded translations could not be loaded.
    #[error("failed to load translations: {0}")]
    Localisation(#[from] I18nEmbedError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_displays_message() {
        let error = CliError::InvalidConfig("bad value".to_string());
        assert_eq!(error.to_string(), "invalid configuration: bad value");
    }

    #[test]
    fn action_word_error_names_the_input() {
        let error = CliError::ActionWord {
            text: "open \"door".to_string(),
            source: ActionWordError::UnclosedFreeValue { position: 5 },
        };
        assert!(error.to_string().starts_with("invalid action word `open \"door`: "));
    }

    #[test]
    fn keyword_errors_are_transparent() {
        let error = CliError::from(StepKeywordParseError("Whenever".to_string()));
        assert_eq!(
            error.to_string(),
            StepKeywordParseError("Whenever".to_string()).to_string()
        );
    }

    #[test]
    fn read_errors_name_the_path() {
        let error = CliError::ReadDocument {
            path: PathBuf::from("cases/login.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(error.to_string(), "failed to read cases/login.json: missing");
    }
}
