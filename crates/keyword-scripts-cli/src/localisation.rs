//! Fluent-backed labels for generated scripts.
//!
//! Translations ship embedded in the binary. One loader is prepared per
//! shipped language so a single run can render test cases written in
//! different script languages.

use i18n_embed::fluent::{FluentLanguageLoader, fluent_language_loader};
use keyword_scripts::Translator;
use rust_embed::RustEmbed;
use unic_langid::{LanguageIdentifier, langid};

use crate::error::CliError;

/// Embedded Fluent resources shipped with the binary.
///
/// # Examples
/// ```
/// # use keyword_scripts_cli::localisation::Localisations;
/// # use i18n_embed::fluent::fluent_language_loader;
/// # use unic_langid::langid;
/// let loader = fluent_language_loader!();
/// let selected = i18n_embed::select(&loader, &Localisations, &[langid!("fr")]).unwrap();
/// assert!(selected.contains(&langid!("fr")));
/// ```
#[derive(RustEmbed)]
#[folder = "i18n"]
pub struct Localisations;

/// Languages with an embedded resource directory, sorted.
#[must_use]
pub fn shipped_languages() -> Vec<LanguageIdentifier> {
    let mut languages: Vec<LanguageIdentifier> = Localisations::iter()
        .filter_map(|path| {
            let (directory, _) = path.split_once('/')?;
            directory.parse().ok()
        })
        .collect();
    languages.sort_by_key(ToString::to_string);
    languages.dedup();
    languages
}

/// [`Translator`] resolving labels from the embedded Fluent resources.
///
/// A locale is matched exactly first, then by primary language, and falls
/// back to `en-US`.
pub struct FluentTranslator {
    loaders: Vec<(LanguageIdentifier, FluentLanguageLoader)>,
    fallback: FluentLanguageLoader,
}

impl FluentTranslator {
    /// Load every shipped language.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Localisation`] when an embedded resource cannot be
    /// loaded.
    pub fn new() -> Result<Self, CliError> {
        let fallback = load(langid!("en-US"))?;
        let loaders = shipped_languages()
            .into_iter()
            .map(|language| load(language.clone()).map(|loader| (language, loader)))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(languages = loaders.len(), "loaded script label translations");
        Ok(Self { loaders, fallback })
    }

    fn loader_for(&self, locale: &LanguageIdentifier) -> &FluentLanguageLoader {
        let exact = self.loaders.iter().find(|(language, _)| language == locale);
        let primary = || {
            self.loaders
                .iter()
                .find(|(language, _)| language.language == locale.language)
        };
        match exact.or_else(primary) {
            Some((_, loader)) => loader,
            None => {
                tracing::debug!(%locale, "no translations shipped; using en-US labels");
                &self.fallback
            }
        }
    }
}

fn load(language: LanguageIdentifier) -> Result<FluentLanguageLoader, CliError> {
    let loader = fluent_language_loader!();
    i18n_embed::select(&loader, &Localisations, &[language])?;
    Ok(loader)
}

impl Translator for FluentTranslator {
    fn translate(&self, id: &str, locale: &LanguageIdentifier) -> String {
        self.loader_for(locale).get(id)
    }
}

#[cfg(test)]
#[expect(
    clippy::expect_used,
    reason = "embedded resources are part of the build"
)]
mod tests {
    use action_words::StepKeyword;
    use keyword_scripts::Label;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn translator() -> FluentTranslator {
        FluentTranslator::new().expect("embedded translations load")
    }

    #[test]
    fn ships_english_and_french() {
        assert_eq!(shipped_languages(), vec![langid!("en-US"), langid!("fr")]);
    }

    #[rstest]
    #[case(langid!("en-US"), Label::ScenarioOutline, "Scenario Outline")]
    #[case(langid!("en"), Label::Keyword(StepKeyword::Given), "Given")]
    #[case(langid!("fr"), Label::Feature, "Fonctionnalité")]
    #[case(langid!("fr-CA"), Label::Keyword(StepKeyword::Then), "Alors")]
    #[case(langid!("de"), Label::Examples, "Examples")]
    fn labels_follow_the_locale(
        translator: FluentTranslator,
        #[case] locale: LanguageIdentifier,
        #[case] label: Label,
        #[case] expected: &str,
    ) {
        assert_eq!(translator.label(label, &locale), expected);
    }
}
