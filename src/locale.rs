//! Locale tags and their fallback chains.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::BundleError;

/// A validated, normalized locale tag (e.g. `de`, `de_at`, `zh_hant_tw`).
///
/// Tags are accepted with either `-` or `_` as the subtag separator and in any
/// case; they are stored lowercase with `_` separators so that `de-AT` and
/// `de_at` select the same override.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(
    /// Normalized tag.
    String,
);

impl Locale {
    /// Locale of the base bundles.
    pub const DEFAULT: &'static str = "en";

    /// Parses and normalizes a locale tag.
    ///
    /// # Errors
    /// - The tag is empty
    /// - The language subtag is not 2-3 ASCII letters
    /// - Any other subtag is empty or not ASCII alphanumeric
    pub fn parse(tag: &str) -> Result<Self, BundleError> {
        let normalized = normalize_locale_tag(tag);
        let mut subtags = normalized.split('_');

        let language = subtags.next().unwrap_or_default();
        let language_ok =
            (2..=3).contains(&language.len()) && language.chars().all(|c| c.is_ascii_alphabetic());
        if !language_ok {
            return Err(BundleError::InvalidLocale(tag.to_string()));
        }

        if subtags.any(|subtag| subtag.is_empty() || !subtag.chars().all(|c| c.is_ascii_alphanumeric()))
        {
            return Err(BundleError::InvalidLocale(tag.to_string()));
        }

        Ok(Self(normalized))
    }

    /// The locale the base bundles are written in.
    #[must_use]
    pub fn default_locale() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    /// The normalized tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag (`de` for `de_at`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('_').next().unwrap_or(&self.0)
    }

    /// Locales to consult when resolving a bundle, least specific first.
    ///
    /// # Examples
    /// ```
    /// use feedback_hub_imagga::locale::Locale;
    ///
    /// let locale = Locale::parse("de-AT").unwrap();
    /// let chain: Vec<String> =
    ///     locale.fallback_chain().iter().map(|l| l.as_str().to_string()).collect();
    /// assert_eq!(chain, vec!["de".to_string(), "de_at".to_string()]);
    /// ```
    #[must_use]
    pub fn fallback_chain(&self) -> Vec<Self> {
        let mut chain = Vec::new();
        let mut current = String::new();
        for subtag in self.0.split('_') {
            if !current.is_empty() {
                current.push('_');
            }
            current.push_str(subtag);
            chain.push(Self(current.clone()));
        }
        chain
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = BundleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = BundleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

/// Lowercase and replace `-` with `_`.
fn normalize_locale_tag(tag: &str) -> String {
    tag.trim().to_lowercase().replace('-', "_")
}
