//! Keywords that introduce a keyword test step.
//!
//! The keyword is stored as a fixed enum and translated only for display:
//! Gherkin scripts ask a translator for the localized label through
//! [`StepKeyword::message_id`], while Robot Framework scripts use the
//! canonical English label from [`StepKeyword::as_str`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Keyword used to introduce a test step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Setup preconditions.
    Given,
    /// Perform an action.
    When,
    /// Assert the expected outcome.
    Then,
    /// Continue the previous keyword.
    And,
    /// Contrast with the previous keyword.
    But,
}

impl StepKeyword {
    /// Every keyword, in canonical order.
    pub const ALL: [Self; 5] = [Self::Given, Self::When, Self::Then, Self::And, Self::But];

    /// Return the canonical English label.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_words::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::And.as_str(), "And");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }

    /// Identifier of the translated label for this keyword.
    ///
    /// # Examples
    ///
    /// ```
    /// use action_words::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Then.message_id(), "keyword-then");
    /// ```
    #[must_use]
    pub const fn message_id(&self) -> &'static str {
        match self {
            Self::Given => "keyword-given",
            Self::When => "keyword-when",
            Self::Then => "keyword-then",
            Self::And => "keyword-and",
            Self::But => "keyword-but",
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text names no [`StepKeyword`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid step keyword: {0}")]
pub struct StepKeywordParseError(pub String);

impl FromStr for StepKeyword {
    type Err = StepKeywordParseError;

    /// Match `text` against the English labels, ignoring case and
    /// surrounding whitespace.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let label = text.trim();
        Self::ALL
            .into_iter()
            .find(|keyword| keyword.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| StepKeywordParseError(label.to_owned()))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests assert parse failures directly")]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Given", StepKeyword::Given)]
    #[case("when", StepKeyword::When)]
    #[case(" THEN ", StepKeyword::Then)]
    #[case("aNd", StepKeyword::And)]
    #[case("but\t", StepKeyword::But)]
    fn labels_parse_in_any_case(#[case] text: &str, #[case] expected: StepKeyword) {
        assert_eq!(text.parse::<StepKeyword>(), Ok(expected));
    }

    #[rstest]
    #[case("Soit")]
    #[case("")]
    #[case("Given that")]
    fn unknown_labels_are_reported(#[case] text: &str) {
        let error = text.parse::<StepKeyword>().unwrap_err();
        assert_eq!(error, StepKeywordParseError(text.trim().to_owned()));
        assert!(error.to_string().starts_with("invalid step keyword:"));
    }

    #[test]
    fn every_keyword_has_its_own_message_id() {
        let ids: std::collections::HashSet<_> = StepKeyword::ALL
            .iter()
            .map(StepKeyword::message_id)
            .collect();
        assert_eq!(ids.len(), StepKeyword::ALL.len());
        assert!(ids.iter().all(|id| id.starts_with("keyword-")));
    }

    #[test]
    fn labels_round_trip_through_display() {
        for keyword in StepKeyword::ALL {
            assert_eq!(keyword.to_string().parse::<StepKeyword>(), Ok(keyword));
        }
    }
}
