// SPDX-License-Identifier: MPL-2.0
//! Translation table backed by Fluent bundles.
//!
//! One bundle per locale is built from the embedded `assets/i18n/<code>.ftl`
//! resources. Lookups fall back to the table's fallback locale when the
//! requested locale has no entry for a key.

use super::keys;
use super::locale::{Locale, PageProfile};
use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct TranslationTable {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
    fallback: Locale,
}

impl std::fmt::Debug for TranslationTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut locales: Vec<_> = self.bundles.keys().collect();
        locales.sort();
        f.debug_struct("TranslationTable")
            .field("locales", &locales)
            .field("fallback", &self.fallback)
            .finish()
    }
}

impl TranslationTable {
    /// Loads the embedded resources for every locale the page supports and
    /// checks that all rendered keys resolve.
    pub fn embedded(profile: &PageProfile) -> Result<Self> {
        let mut sources = Vec::new();
        for &locale in profile.supported() {
            let filename = format!("{}.ftl", locale.code());
            if let Some(content) = Asset::get(&filename) {
                sources.push((locale, String::from_utf8_lossy(content.data.as_ref()).into_owned()));
            }
        }

        let table = Self::from_sources(profile.fallback_locale(), sources)?;
        table.validate(profile.supported(), keys::REQUIRED)?;
        Ok(table)
    }

    /// Builds a table from raw FTL sources without validating coverage.
    pub fn from_sources(
        fallback: Locale,
        sources: impl IntoIterator<Item = (Locale, String)>,
    ) -> Result<Self> {
        let mut bundles = HashMap::new();
        for (locale, source) in sources {
            let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
                Error::Translation(format!("failed to parse {}.ftl: {errors:?}", locale.code()))
            })?;
            let mut bundle = FluentBundle::new(vec![locale.language_id()]);
            // Interpolated reference numbers must come out verbatim.
            bundle.set_use_isolating(false);
            bundle.add_resource(resource).map_err(|errors| {
                Error::Translation(format!("failed to add {}.ftl: {errors:?}", locale.code()))
            })?;
            bundles.insert(locale, bundle);
        }

        Ok(Self { bundles, fallback })
    }

    /// Checks that every locale resolves every key, directly or through the
    /// fallback locale.
    pub fn validate(&self, locales: &[Locale], required: &[&str]) -> Result<()> {
        for &locale in locales {
            for &key in required {
                if !self.has_direct(locale, key) && !self.has_direct(self.fallback, key) {
                    return Err(Error::MissingTranslation {
                        locale: locale.code().to_string(),
                        key: key.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn fallback_locale(&self) -> Locale {
        self.fallback
    }

    /// Returns whether `locale` has its own entry for `key`.
    #[must_use]
    pub fn has_direct(&self, locale: Locale, key: &str) -> bool {
        self.bundles
            .get(&locale)
            .is_some_and(|bundle| bundle.has_message(key))
    }

    /// Looks up a message without arguments.
    #[must_use]
    pub fn get(&self, locale: Locale, key: &str) -> Option<String> {
        self.format(locale, key, &[])
    }

    /// Looks up a message, substituting `args` into its placeables.
    ///
    /// Falls back to the fallback locale when `locale` has no entry.
    #[must_use]
    pub fn format(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> Option<String> {
        self.format_direct(locale, key, args)
            .or_else(|| self.format_direct(self.fallback, key, args))
    }

    /// Like [`format`](Self::format), but yields a visible marker instead of
    /// `None` so markup is never rendered with a hole.
    #[must_use]
    pub fn tr(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
        self.format(locale, key, args)
            .unwrap_or_else(|| format!("MISSING: {}", key))
    }

    /// Every locale with a loaded bundle, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<Locale> = self.bundles.keys().copied().collect();
        locales.sort();
        locales
    }

    fn format_direct(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> Option<String> {
        let bundle = self.bundles.get(&locale)?;
        let pattern = bundle.get_message(key)?.value()?;

        let fluent_args = if args.is_empty() {
            None
        } else {
            let mut fluent_args = FluentArgs::new();
            for (name, value) in args {
                fluent_args.set(*name, *value);
            }
            Some(fluent_args)
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            tracing::debug!(locale = %locale, key, ?errors, "translation failed to format");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial_table() -> TranslationTable {
        TranslationTable::from_sources(
            Locale::En,
            [
                (Locale::En, "greeting = Hello\nfarewell = Bye\n".to_string()),
                (Locale::Ber, "greeting = ⴰⵣⵓⵍ\n".to_string()),
            ],
        )
        .expect("sources should parse")
    }

    #[test]
    fn embedded_table_covers_every_locale() {
        let table = TranslationTable::embedded(&PageProfile::default()).expect("embedded table");
        assert_eq!(table.locales(), Locale::ALL.to_vec());
        for locale in Locale::ALL {
            for key in keys::REQUIRED {
                assert!(table.has_direct(locale, key), "{locale} lacks {key}");
            }
        }
    }

    #[test]
    fn embedded_placeholders_match_expected_text() {
        let table = TranslationTable::embedded(&PageProfile::default()).unwrap();
        assert_eq!(
            table.get(Locale::Fr, keys::NAME_PLACEHOLDER).as_deref(),
            Some("Votre nom")
        );
        assert_eq!(
            table.get(Locale::Ar, keys::TRACKING_PLACEHOLDER).as_deref(),
            Some("مثال: DOC-2024-12345")
        );
    }

    #[test]
    fn missing_key_falls_back_to_fallback_locale() {
        let table = partial_table();
        assert_eq!(table.get(Locale::Ber, "greeting").as_deref(), Some("ⴰⵣⵓⵍ"));
        assert_eq!(table.get(Locale::Ber, "farewell").as_deref(), Some("Bye"));
    }

    #[test]
    fn locale_without_bundle_uses_fallback() {
        let table = partial_table();
        assert_eq!(table.get(Locale::Fr, "greeting").as_deref(), Some("Hello"));
    }

    #[test]
    fn unknown_key_is_none_and_tr_marks_it() {
        let table = partial_table();
        assert!(table.get(Locale::En, "nope").is_none());
        assert_eq!(table.tr(Locale::En, "nope", &[]), "MISSING: nope");
    }

    #[test]
    fn validate_accepts_fallback_coverage() {
        let table = partial_table();
        assert!(table
            .validate(&[Locale::En, Locale::Ber], &["greeting", "farewell"])
            .is_ok());
    }

    #[test]
    fn validate_rejects_key_missing_everywhere() {
        let table = partial_table();
        let err = table
            .validate(&[Locale::En, Locale::Ber], &["greeting", "absent"])
            .unwrap_err();
        assert!(matches!(err, Error::MissingTranslation { ref key, .. } if key == "absent"));
    }

    #[test]
    fn format_substitutes_arguments_without_isolation_marks() {
        let table = TranslationTable::embedded(&PageProfile::default()).unwrap();
        let header = table.tr(Locale::En, keys::TRACKING_HEADER, &[("reference", "DOC-2024-12345")]);
        assert_eq!(header, "Tracking request: DOC-2024-12345");
    }

    #[test]
    fn invalid_source_is_a_translation_error() {
        let result = TranslationTable::from_sources(
            Locale::En,
            [(Locale::En, "= no identifier\n".to_string())],
        );
        assert!(matches!(result, Err(Error::Translation(_))));
    }
}
