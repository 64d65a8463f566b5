//! A base bundle together with its locale overrides.

use std::collections::BTreeMap;

use super::{
    LocaleOverride,
    ResourceBundle,
};
use crate::error::BundleError;
use crate::locale::Locale;

/// Applies `overrides` to a copy of `base`, in order.
///
/// The base bundle is never modified; later overrides win over earlier ones.
///
/// # Errors
/// - Any error of [`LocaleOverride::validate_against`]
pub fn build_bundle<'a>(
    base: &ResourceBundle,
    overrides: impl IntoIterator<Item = &'a LocaleOverride>,
) -> Result<ResourceBundle, BundleError> {
    let mut bundle = base.clone();
    for over in overrides {
        over.validate_against(base)?;
        for (key, value) in over.iter() {
            bundle.replace(key, value.clone())?;
        }
    }
    Ok(bundle)
}

/// The base (default locale) bundle and every override registered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFamily {
    /// Default locale bundle; every key of the family is defined here.
    base: ResourceBundle,
    /// At most one override per locale.
    overrides: BTreeMap<Locale, LocaleOverride>,
}

impl BundleFamily {
    /// A family with no overrides yet.
    #[must_use]
    pub const fn new(base: ResourceBundle) -> Self {
        Self { base, overrides: BTreeMap::new() }
    }

    /// Adds an override, validating it against the base bundle right away so
    /// that a bad key fails at load time rather than at lookup.
    ///
    /// # Errors
    /// - Any error of [`LocaleOverride::validate_against`]
    /// - [`BundleError::DuplicateOverride`] if the locale already has an
    ///   override
    pub fn with_override(mut self, over: LocaleOverride) -> Result<Self, BundleError> {
        over.validate_against(&self.base)?;
        if self.overrides.contains_key(over.locale()) {
            return Err(BundleError::DuplicateOverride {
                bundle: self.base.name().to_string(),
                locale: over.locale().to_string(),
            });
        }
        tracing::debug!(
            "Registered {} override entries for '{}' in locale '{}'",
            over.len(),
            self.base.name(),
            over.locale()
        );
        self.overrides.insert(over.locale().clone(), over);
        Ok(self)
    }

    /// Name shared by the base bundle and its overrides.
    #[must_use]
    pub fn name(&self) -> &str {
        self.base.name()
    }

    /// The unmodified default locale bundle.
    #[must_use]
    pub const fn base(&self) -> &ResourceBundle {
        &self.base
    }

    /// Locales that have an override.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.overrides.keys()
    }

    /// Effective bundle for `locale`.
    ///
    /// Overrides along the locale's fallback chain are applied from least to
    /// most specific, so `de_at` sees the `de` strings unless it overrides
    /// them itself. Keys no override touches keep their base value.
    ///
    /// # Errors
    /// Overrides are validated when added, so this only fails if that
    /// invariant was broken.
    pub fn resolve(&self, locale: &Locale) -> Result<ResourceBundle, BundleError> {
        let chain = locale.fallback_chain();
        let applicable = chain.iter().filter_map(|candidate| self.overrides.get(candidate));
        build_bundle(&self.base, applicable)
    }
}
