//! Named key/value resource bundles.

use std::collections::BTreeMap;

use serde::Serialize;

use super::BundleValue;
use crate::error::BundleError;

/// A named mapping from keys to localized values.
///
/// Lookups never add keys. Contents change in exactly two places:
/// [`super::build_bundle`] replaces values of existing keys on a fresh copy,
/// and [`ResourceBundle::copy_from`], run by the bundle copy action, writes
/// the source's entries into a destination and so may add keys to it.
/// A bundle that is only ever a copy source keeps the key set it was built
/// with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceBundle {
    /// Bundle name, as referenced by configuration actions.
    name: String,
    /// Entries sorted by key.
    entries: BTreeMap<String, BundleValue>,
}

impl ResourceBundle {
    /// Builds a bundle from its entries.
    ///
    /// # Errors
    /// - [`BundleError::DuplicateKey`] if a key appears more than once
    pub fn new<K, V>(
        name: impl Into<String>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Result<Self, BundleError>
    where
        K: Into<String>,
        V: Into<BundleValue>,
    {
        let name = name.into();
        let mut map = BTreeMap::new();
        for (key, value) in entries {
            let key = key.into();
            if map.contains_key(&key) {
                return Err(BundleError::DuplicateKey { bundle: name, key });
            }
            map.insert(key, value.into());
        }
        Ok(Self { name, entries: map })
    }

    /// An empty bundle, e.g. a shared destination nothing has written to yet.
    #[must_use]
    pub fn empty(name: impl Into<String>) -> Self {
        Self { name: name.into(), entries: BTreeMap::new() }
    }

    /// Name of the bundle.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Looks up a value.
    ///
    /// # Errors
    /// - [`BundleError::UnknownKey`] if the bundle does not define `key`
    pub fn get(&self, key: &str) -> Result<&BundleValue, BundleError> {
        self.entries.get(key).ok_or_else(|| BundleError::UnknownKey {
            bundle: self.name.clone(),
            key: key.to_string(),
        })
    }

    /// Looks up a text value.
    ///
    /// # Errors
    /// - [`BundleError::UnknownKey`] if the bundle does not define `key`
    /// - [`BundleError::NotText`] if the value is an icon reference
    pub fn text(&self, key: &str) -> Result<&str, BundleError> {
        self.get(key)?.as_text().ok_or_else(|| BundleError::NotText {
            bundle: self.name.clone(),
            key: key.to_string(),
        })
    }

    /// Whether the bundle defines `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BundleValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes every entry of `source` into this bundle.
    ///
    /// Keys only present here are left alone; keys only present in `source`
    /// are added; on collisions the source value wins. `source` is not
    /// modified. Returns how many entries actually changed, so applying the same
    /// source twice returns 0 the second time.
    pub fn copy_from(&mut self, source: &Self) -> usize {
        let mut changed = 0;
        for (key, value) in &source.entries {
            if self.entries.get(key) != Some(value) {
                self.entries.insert(key.clone(), value.clone());
                changed += 1;
            }
        }
        tracing::debug!(
            "Copied {} entries from '{}' into '{}' ({} changed)",
            source.len(),
            source.name,
            self.name,
            changed
        );
        changed
    }

    /// Replaces the value of an existing key. Used by override application.
    pub(super) fn replace(&mut self, key: &str, value: BundleValue) -> Result<(), BundleError> {
        match self.entries.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(BundleError::UnknownKey {
                bundle: self.name.clone(),
                key: key.to_string(),
            }),
        }
    }
}
