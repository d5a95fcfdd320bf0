//! Locales the site is published in.

use core::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A supported site language.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the default
    #[default]
    En,
    /// Dutch
    Nl,
}

/// Returned when a locale code is not one of the supported languages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale `{0}`")]
pub struct UnsupportedLocale(pub String);

impl Locale {
    /// All supported locales.
    pub const ALL: [Self; 2] = [Self::En, Self::Nl];

    /// The language code used in URLs and message file names.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Nl => "nl",
        }
    }

    /// Human readable language name, in that language.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Nl => "Nederlands",
        }
    }

    /// Text shown in place of an article body that has not been written yet.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::En => "Content coming soon...",
            Self::Nl => "Inhoud binnenkort beschikbaar...",
        }
    }
}

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| UnsupportedLocale(code.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("NL".parse::<Locale>(), Ok(Locale::Nl));
        assert_eq!(
            "de".parse::<Locale>(),
            Err(UnsupportedLocale("de".to_string()))
        );
    }

    #[test]
    fn placeholders_differ_per_locale() {
        assert_eq!(Locale::En.placeholder(), "Content coming soon...");
        assert_eq!(Locale::Nl.placeholder(), "Inhoud binnenkort beschikbaar...");
    }
}
