//! Registry of bundle families and their per-locale resolution.

use std::collections::BTreeMap;

use super::{
    BundleFamily,
    ResourceBundle,
};
use crate::error::{
    ActivationError,
    BundleError,
};
use crate::locale::Locale;

/// All known bundle families, keyed by bundle name.
///
/// Built once at startup and then only read.
#[derive(Debug, Clone, Default)]
pub struct BundleRegistry {
    /// Families by bundle name.
    families: BTreeMap<String, BundleFamily>,
}

impl BundleRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a bundle family under its name.
    ///
    /// # Errors
    /// - [`BundleError::DuplicateBundle`] if a family with the same name exists
    pub fn register(&mut self, family: BundleFamily) -> Result<(), BundleError> {
        let name = family.name().to_string();
        if self.families.contains_key(&name) {
            return Err(BundleError::DuplicateBundle(name));
        }
        tracing::debug!("Registered resource bundle '{}'", name);
        self.families.insert(name, family);
        Ok(())
    }

    /// The family registered under `name`.
    #[must_use]
    pub fn family(&self, name: &str) -> Option<&BundleFamily> {
        self.families.get(name)
    }

    /// Registered bundle names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    /// Resolves every registered family for `locale`.
    ///
    /// All overrides are applied here, before any configuration action gets
    /// to read a bundle.
    ///
    /// # Errors
    /// - Any error of [`BundleFamily::resolve`]
    pub fn localize(&self, locale: &Locale) -> Result<LocalizedBundles, BundleError> {
        let mut bundles = BTreeMap::new();
        for (name, family) in &self.families {
            bundles.insert(name.clone(), family.resolve(locale)?);
        }
        tracing::debug!("Resolved {} resource bundles for locale '{}'", bundles.len(), locale);
        Ok(LocalizedBundles { locale: locale.clone(), bundles })
    }
}

/// The effective bundles for the current user locale.
///
/// This is what extensions see during activation; copy actions write into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedBundles {
    /// Locale every bundle was resolved for.
    locale: Locale,
    /// Effective bundles by name.
    bundles: BTreeMap<String, ResourceBundle>,
}

impl LocalizedBundles {
    /// Locale the bundles were resolved for.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// The effective bundle named `name`, if it was resolved.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ResourceBundle> {
        self.bundles.get(name)
    }

    /// Looks up a bundle that an activation step depends on.
    ///
    /// # Errors
    /// - [`ActivationError::IncompatibleBundle`] if `name` is not resolved
    ///   for the current locale
    pub fn require(&self, name: &str) -> Result<&ResourceBundle, ActivationError> {
        self.bundles.get(name).ok_or_else(|| ActivationError::IncompatibleBundle {
            bundle: name.to_string(),
            locale: self.locale.to_string(),
        })
    }

    /// Copies every entry of `source` into `destination`.
    ///
    /// Both bundles are looked up before anything is written, so a failed
    /// lookup leaves every bundle unchanged. Returns the number of changed
    /// entries.
    ///
    /// # Errors
    /// - [`ActivationError::IncompatibleBundle`] if either bundle is missing
    pub fn copy(&mut self, destination: &str, source: &str) -> Result<usize, ActivationError> {
        self.require(destination)?;
        let source = self.require(source)?.clone();
        let target = self.bundles.get_mut(destination).ok_or_else(|| {
            ActivationError::IncompatibleBundle {
                bundle: destination.to_string(),
                locale: self.locale.to_string(),
            }
        })?;
        Ok(target.copy_from(&source))
    }
}
