// SPDX-License-Identifier: MPL-2.0
//! Locale model: the closed set of site languages and per-page profiles.
//!
//! Every locale maps to its DOM attribute names through explicit match arms,
//! so an attribute name is never assembled from user input at runtime.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value written to the root `dir` attribute.
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// A language the site can be displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    #[default]
    En,
    Fr,
    Ar,
    /// Tamazight, written in Tifinagh.
    Ber,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Fr, Locale::Ar, Locale::Ber];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::Ar => "ar",
            Locale::Ber => "ber",
        }
    }

    /// Native display label, as shown in the language menu.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fr => "Français",
            Locale::Ar => "العربية",
            Locale::Ber => "ⵜⴰⵎⴰⵣⵉⵖⵜ",
        }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::En | Locale::Fr | Locale::Ber => Direction::Ltr,
        }
    }

    /// Short text shown in the current-language indicator.
    #[must_use]
    pub fn indicator(self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Fr => "FR",
            Locale::Ar => "AR",
            Locale::Ber => "ⵣ",
        }
    }

    /// Attribute holding this locale's text on a translatable element.
    #[must_use]
    pub fn text_attribute(self) -> &'static str {
        match self {
            Locale::En => "data-en",
            Locale::Fr => "data-fr",
            Locale::Ar => "data-ar",
            Locale::Ber => "data-ber",
        }
    }

    /// Attribute holding this locale's placeholder on an input.
    #[must_use]
    pub fn placeholder_attribute(self) -> &'static str {
        match self {
            Locale::En => "data-placeholder-en",
            Locale::Fr => "data-placeholder-fr",
            Locale::Ar => "data-placeholder-ar",
            Locale::Ber => "data-placeholder-ber",
        }
    }

    /// Body class marking the active language (`lang-en`, ...).
    #[must_use]
    pub fn body_class(self) -> &'static str {
        match self {
            Locale::En => "lang-en",
            Locale::Fr => "lang-fr",
            Locale::Ar => "lang-ar",
            Locale::Ber => "lang-ber",
        }
    }

    /// Language identifier used to key the Fluent bundle.
    #[must_use]
    pub fn language_id(self) -> LanguageIdentifier {
        // All four codes are valid BCP 47 language subtags.
        LanguageIdentifier::from_str(self.code()).unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        // Accept region-qualified system locales such as `fr-FR` or `ar_MA`.
        let primary = normalized
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == primary)
            .ok_or_else(|| Error::UnknownLocale(s.to_string()))
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.code().to_string()
    }
}

/// Locale configuration for one page variant.
///
/// Pages differ in which languages they ship; a single engine is
/// parameterized by this profile instead of duplicating tables per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageProfile {
    supported: Vec<Locale>,
    default: Locale,
    fallback: Locale,
}

impl PageProfile {
    /// Builds a profile, rejecting defaults or fallbacks outside the set.
    pub fn new(supported: impl IntoIterator<Item = Locale>, default: Locale, fallback: Locale) -> Result<Self> {
        let mut locales: Vec<Locale> = Vec::new();
        for locale in supported {
            if !locales.contains(&locale) {
                locales.push(locale);
            }
        }

        if locales.is_empty() {
            return Err(Error::Config("page supports no locales".into()));
        }
        if !locales.contains(&default) {
            return Err(Error::Config(format!(
                "default locale '{default}' is not supported by the page"
            )));
        }
        if !locales.contains(&fallback) {
            return Err(Error::Config(format!(
                "fallback locale '{fallback}' is not supported by the page"
            )));
        }

        Ok(Self {
            supported: locales,
            default,
            fallback,
        })
    }

    #[must_use]
    pub fn supported(&self) -> &[Locale] {
        &self.supported
    }

    #[must_use]
    pub fn default_locale(&self) -> Locale {
        self.default
    }

    #[must_use]
    pub fn fallback_locale(&self) -> Locale {
        self.fallback
    }

    #[must_use]
    pub fn supports(&self, locale: Locale) -> bool {
        self.supported.contains(&locale)
    }
}

impl Default for PageProfile {
    /// The full four-language site with English as default and fallback.
    fn default() -> Self {
        Self {
            supported: Locale::ALL.to_vec(),
            default: Locale::En,
            fallback: Locale::En,
        }
    }
}
