use crate::catalog::Locale;
use crate::error::EmitterError;
use fluent::{FluentArgs, FluentBundle, FluentResource};
use unic_langid::LanguageIdentifier;

// Use embedded UI locales
include!(concat!(env!("OUT_DIR"), "/ui_locales.rs"));

pub const DEFAULT_UI_LOCALE: &str = "en";

/// Messages of the tool itself: block headers and the closing notice.
pub struct Localization {
    bundle: FluentBundle<FluentResource>,
    current_locale: String,
}

impl std::fmt::Debug for Localization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localization")
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

fn embedded_resource(locale: &str) -> Option<&'static str> {
    embedded_ui_locales()
        .iter()
        .find(|(code, _)| *code == locale)
        .map(|(_, content)| *content)
}

pub fn available_ui_locales() -> Vec<&'static str> {
    embedded_ui_locales().iter().map(|(code, _)| *code).collect()
}

impl Localization {
    pub fn new(locale: &str) -> Result<Self, EmitterError> {
        let (current_locale, resource_content) = match embedded_resource(locale) {
            Some(content) => (locale, content),
            None => {
                let content = embedded_resource(DEFAULT_UI_LOCALE).ok_or_else(|| {
                    EmitterError::Localization("Default UI locale not embedded".to_string())
                })?;
                (DEFAULT_UI_LOCALE, content)
            }
        };

        let langid: LanguageIdentifier = current_locale.parse().unwrap_or_default();
        let mut bundle = FluentBundle::new(vec![langid]);
        // Output is pasted into source files; no bidi isolation marks around arguments
        bundle.set_use_isolating(false);

        let resource = FluentResource::try_new(resource_content.to_string()).map_err(|(_, e)| {
            EmitterError::Localization(format!("Failed to parse resource: {:?}", e))
        })?;

        bundle.add_resource(resource).map_err(|e| {
            EmitterError::Localization(format!("Failed to add resource: {:?}", e))
        })?;

        Ok(Self {
            bundle,
            current_locale: current_locale.to_string(),
        })
    }

    pub fn get(&self, key: &str) -> String {
        self.get_with_args(key, None)
    }

    pub fn get_with_args(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(message) = self.bundle.get_message(key)
            && let Some(pattern) = message.value()
        {
            let mut errors = vec![];
            let value = self.bundle.format_pattern(pattern, args, &mut errors);
            return value.to_string();
        }
        key.to_string()
    }

    pub fn language_name(&self, locale: Locale) -> String {
        self.get(&format!("language-{}", locale.code()))
    }

    /// Header line that opens a locale block, e.g. `French - Keys to add:`.
    pub fn locale_header(&self, locale: Locale) -> String {
        let mut args = FluentArgs::new();
        args.set("language", self.language_name(locale));
        self.get_with_args("locale-header", Some(&args))
    }

    pub fn notice(&self) -> String {
        self.get("notice")
    }

    pub fn current_locale(&self) -> &str {
        &self.current_locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localization_creation_valid_locale() {
        let localization = Localization::new("en").unwrap();
        assert_eq!(localization.current_locale(), "en");
        assert!(!localization.notice().is_empty());
    }

    #[test]
    fn test_localization_creation_invalid_locale_fallback() {
        let localization = Localization::new("invalid_locale").unwrap();
        assert_eq!(localization.current_locale(), DEFAULT_UI_LOCALE);
        assert_eq!(
            localization.locale_header(Locale::French),
            "French - Keys to add:"
        );
    }

    #[test]
    fn test_localization_get_nonexistent_key() {
        let localization = Localization::new("en").unwrap();
        assert_eq!(localization.get("nonexistent_key"), "nonexistent_key");
    }

    #[rstest::rstest]
    #[case("en", Locale::French, "French - Keys to add:")]
    #[case("en", Locale::German, "German - Keys to add:")]
    #[case("es", Locale::French, "Francés - Claves a agregar:")]
    #[case("es", Locale::German, "Alemán - Claves a agregar:")]
    fn test_locale_header(#[case] ui: &str, #[case] locale: Locale, #[case] expected: &str) {
        let localization = Localization::new(ui).unwrap();
        assert_eq!(localization.locale_header(locale), expected);
    }

    #[test]
    fn test_header_has_no_isolation_marks() {
        let localization = Localization::new("en").unwrap();
        let header = localization.locale_header(Locale::German);
        assert!(!header.contains('\u{2068}'));
        assert!(!header.contains('\u{2069}'));
    }

    #[rstest::rstest]
    #[case("en")]
    #[case("es")]
    fn test_ui_locales_translate_every_message(#[case] ui: &str) {
        let localization = Localization::new(ui).unwrap();
        for key in ["notice", "locale-header", "language-fr", "language-de"] {
            assert_ne!(localization.get(key), key, "{} missing in {}", key, ui);
        }
    }

    #[test]
    fn test_available_ui_locales() {
        let locales = available_ui_locales();
        assert!(locales.contains(&"en"));
        assert!(locales.contains(&"es"));
    }

    #[test]
    fn test_spanish_notice() {
        let localization = Localization::new("es").unwrap();
        assert_eq!(
            localization.notice(),
            "Archivo de script creado. Ejecutar manualmente las sustituciones."
        );
    }
}
