//! Front-end configuration parsed from environment variables.
//!
//! All settings can be overridden via environment variables prefixed with
//! `KWSCRIPT_`, and command line flags take precedence over both.

use std::env;
use std::str::FromStr;

use unic_langid::{LanguageIdentifier, langid};

use crate::error::CliError;

/// Environment variable holding the log level.
pub const LOG_LEVEL_VAR: &str = "KWSCRIPT_LOG_LEVEL";
/// Environment variable holding the default script language.
pub const LOCALE_VAR: &str = "KWSCRIPT_LOCALE";
/// Environment variable enabling HTML escaping of references.
pub const ESCAPE_ARROWS_VAR: &str = "KWSCRIPT_ESCAPE_ARROWS";

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Warn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes every rendered step.
    Trace,
    /// Debug-level information such as parser rejections.
    Debug,
    /// Standard informational messages.
    Info,
    /// Warning messages for potentially problematic situations.
    #[default]
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Parse a language tag such as `fr` or `en-US`.
///
/// # Errors
///
/// Returns [`CliError::InvalidLanguage`] when the tag is not well formed.
pub fn parse_language(tag: &str) -> Result<LanguageIdentifier, CliError> {
    tag.trim()
        .parse()
        .map_err(|_| CliError::InvalidLanguage {
            tag: tag.to_string(),
        })
}

fn parse_bool(name: &str, value: &str) -> Result<bool, CliError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(CliError::InvalidConfig(format!(
            "invalid value '{value}' for {name}, expected true or false"
        ))),
    }
}

/// Configuration for the `kwscript` front end.
///
/// # Environment Variables
///
/// - `KWSCRIPT_LOG_LEVEL`: Sets the log level (trace, debug, info, warn,
///   error)
/// - `KWSCRIPT_LOCALE`: Script language used when a document names none
/// - `KWSCRIPT_ESCAPE_ARROWS`: HTML-escape test-case references in
///   Gherkin output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Script language for documents and previews that do not set one.
    pub locale: LanguageIdentifier,
    /// Escape `<` and `>` of test-case references.
    pub escape_arrows: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            locale: langid!("en-US"),
            escape_arrows: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` or `CliError::InvalidLanguage` if an
    /// environment variable contains an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, which resolves variable names.
    ///
    /// # Errors
    ///
    /// As for [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => defaults.log_level,
        };
        let locale = match lookup(LOCALE_VAR) {
            Some(val) => parse_language(&val)?,
            None => defaults.locale,
        };
        let escape_arrows = match lookup(ESCAPE_ARROWS_VAR) {
            Some(val) => parse_bool(ESCAPE_ARROWS_VAR, &val)?,
            None => defaults.escape_arrows,
        };

        Ok(Self {
            log_level,
            locale,
            escape_arrows,
        })
    }

    /// Apply optional overrides to an existing configuration.
    ///
    /// This is intended for CLI overrides that should take precedence over
    /// environment-based defaults.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        locale: Option<LanguageIdentifier>,
        escape_arrows: bool,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(locale) = locale {
            self.locale = locale;
        }
        self.escape_arrows |= escape_arrows;
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[rstest]
    #[case("trace", LogLevel::Trace)]
    #[case("Debug", LogLevel::Debug)]
    #[case("INFO", LogLevel::Info)]
    #[case("warning", LogLevel::Warn)]
    #[case("error", LogLevel::Error)]
    fn log_level_parses_valid_values(#[case] raw: &str, #[case] expected: LogLevel) {
        assert_eq!(raw.parse::<LogLevel>().unwrap(), expected);
    }

    #[test]
    fn log_level_rejects_unknown_values() {
        let error = "loud".parse::<LogLevel>().unwrap_err();
        assert!(error.to_string().contains("unknown log level 'loud'"));
    }

    #[test]
    fn missing_variables_use_defaults() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.locale.to_string(), "en-US");
    }

    #[test]
    fn variables_are_read() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (LOG_LEVEL_VAR, "debug"),
            (LOCALE_VAR, "fr-FR"),
            (ESCAPE_ARROWS_VAR, "yes"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.locale, langid!("fr-FR"));
        assert!(config.escape_arrows);
    }

    #[rstest]
    #[case(ESCAPE_ARROWS_VAR, "maybe")]
    #[case(LOCALE_VAR, "not a tag!")]
    #[case(LOG_LEVEL_VAR, "chatty")]
    fn invalid_variables_are_rejected(#[case] name: &str, #[case] value: &str) {
        assert!(CliConfig::from_lookup(lookup_from(&[(name, value)])).is_err());
    }

    #[test]
    fn overrides_take_precedence() {
        let config = CliConfig::default().apply_overrides(
            Some(LogLevel::Trace),
            Some(langid!("fr")),
            true,
        );
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.locale, langid!("fr"));
        assert!(config.escape_arrows);
    }

    #[test]
    fn absent_overrides_keep_existing_values() {
        let base = CliConfig {
            log_level: LogLevel::Info,
            locale: langid!("en-US"),
            escape_arrows: true,
        };
        assert_eq!(base.clone().apply_overrides(None, None, false), base);
    }
}
