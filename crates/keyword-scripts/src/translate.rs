//! Label translation seam.
//!
//! Script writers never ship translations themselves. Callers hand in a
//! [`Translator`] that resolves the message ids listed by [`Label`] for the
//! script language of the test case.

use action_words::StepKeyword;
use unic_langid::LanguageIdentifier;

/// Labels requested by the script writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// A step keyword such as `Given`.
    Keyword(StepKeyword),
    /// The feature heading.
    Feature,
    /// Heading of a scenario without examples.
    Scenario,
    /// Heading of a scenario driven by datasets.
    ScenarioOutline,
    /// Heading of an example block.
    Examples,
}

impl Label {
    /// Message id looked up through the [`Translator`].
    ///
    /// # Examples
    /// ```
    /// use action_words::StepKeyword;
    /// use keyword_scripts::Label;
    ///
    /// assert_eq!(Label::ScenarioOutline.message_id(), "script-scenario-outline");
    /// assert_eq!(Label::Keyword(StepKeyword::When).message_id(), "keyword-when");
    /// ```
    #[must_use]
    pub const fn message_id(&self) -> &'static str {
        match self {
            Self::Keyword(keyword) => keyword.message_id(),
            Self::Feature => "script-feature",
            Self::Scenario => "script-scenario",
            Self::ScenarioOutline => "script-scenario-outline",
            Self::Examples => "script-examples",
        }
    }
}

/// Resolves message ids to localized text.
///
/// Any `Fn(&str, &LanguageIdentifier) -> String` closure is a translator.
///
/// # Examples
/// ```
/// use keyword_scripts::{Label, Translator};
/// use unic_langid::langid;
///
/// let translator = |id: &str, _: &unic_langid::LanguageIdentifier| id.to_uppercase();
/// assert_eq!(translator.label(Label::Feature, &langid!("en")), "SCRIPT-FEATURE");
/// ```
pub trait Translator {
    /// Translate the message `id` for `locale`.
    fn translate(&self, id: &str, locale: &LanguageIdentifier) -> String;

    /// Translate a writer [`Label`].
    fn label(&self, label: Label, locale: &LanguageIdentifier) -> String {
        self.translate(label.message_id(), locale)
    }
}

impl<F> Translator for F
where
    F: Fn(&str, &LanguageIdentifier) -> String,
{
    fn translate(&self, id: &str, locale: &LanguageIdentifier) -> String {
        self(id, locale)
    }
}
