//! Per-locale overrides of a base bundle.

use std::collections::BTreeMap;

use super::{
    BundleValue,
    ResourceBundle,
};
use crate::error::BundleError;
use crate::locale::Locale;

/// Replacement values for a subset of a bundle's keys, for one locale.
///
/// An override never introduces keys: [`LocaleOverride::validate_against`]
/// rejects any key the base bundle does not define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleOverride {
    /// Name of the target bundle.
    bundle: String,
    /// Locale the replacements apply to.
    locale: Locale,
    /// Replacement values by key.
    entries: BTreeMap<String, BundleValue>,
}

impl LocaleOverride {
    /// Override of `bundle` for `locale`.
    ///
    /// # Errors
    /// - [`BundleError::DuplicateKey`] if a key appears more than once
    pub fn new<K, V>(
        bundle: impl Into<String>,
        locale: Locale,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, BundleError>
    where
        K: Into<String>,
        V: Into<BundleValue>,
    {
        let bundle = bundle.into();
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            let key = key.into();
            if map.contains_key(&key) {
                return Err(BundleError::DuplicateKey { bundle, key });
            }
            map.insert(key, value.into());
        }
        Ok(Self { bundle, locale, entries: map })
    }

    /// Name of the bundle this override targets.
    #[must_use]
    pub fn bundle(&self) -> &str {
        &self.bundle
    }

    /// Locale the override applies to.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Replacement entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BundleValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of replaced keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the override replaces nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that this override targets `base` and only touches its keys.
    ///
    /// # Errors
    /// - [`BundleError::OverrideMismatch`] if `base` has a different name
    /// - [`BundleError::UnknownKey`] for the first key `base` does not define
    pub fn validate_against(&self, base: &ResourceBundle) -> Result<(), BundleError> {
        if self.bundle != base.name() {
            return Err(BundleError::OverrideMismatch {
                expected: self.bundle.clone(),
                actual: base.name().to_string(),
            });
        }
        if let Some(key) = self.entries.keys().find(|key| !base.contains_key(key)) {
            return Err(BundleError::UnknownKey { bundle: self.bundle.clone(), key: key.clone() });
        }
        Ok(())
    }
}
