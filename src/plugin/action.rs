//! Configuration actions an extension runs when it is activated.

use serde::{
    Deserialize,
    Serialize,
};

use crate::bundle::LocalizedBundles;
use crate::error::ActivationError;

/// Copies every entry of one bundle into another, for the current locale.
///
/// Bundles are referenced by name and looked up in the [`LocalizedBundles`]
/// at activation time, so `source` already carries the active locale's
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleCopyAction {
    /// Bundle that receives the entries.
    pub destination: String,
    /// Bundle the entries are read from.
    pub source: String,
}

impl BundleCopyAction {
    /// Copy action from `source` into `destination`.
    #[must_use]
    pub fn new(destination: impl Into<String>, source: impl Into<String>) -> Self {
        Self { destination: destination.into(), source: source.into() }
    }

    /// Checks that both bundles resolve, without writing anything.
    ///
    /// # Errors
    /// - [`ActivationError::IncompatibleBundle`] for the first missing bundle
    pub fn preflight(&self, bundles: &LocalizedBundles) -> Result<(), ActivationError> {
        bundles.require(&self.destination)?;
        bundles.require(&self.source)?;
        Ok(())
    }

    /// Runs the copy and returns the number of changed entries.
    ///
    /// # Errors
    /// - [`ActivationError::IncompatibleBundle`] if either bundle is missing;
    ///   nothing is written in that case
    pub fn apply(&self, bundles: &mut LocalizedBundles) -> Result<usize, ActivationError> {
        let changed = bundles.copy(&self.destination, &self.source)?;
        tracing::debug!(
            "Copied resource bundle '{}' into '{}' for locale '{}' ({} entries changed)",
            self.source,
            self.destination,
            bundles.locale(),
            changed
        );
        Ok(changed)
    }
}

/// A step declared in an extension's configuration list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ConfigurationAction {
    /// Copies every entry of one bundle into another.
    CopyResourceBundleProperties(BundleCopyAction),
}

impl ConfigurationAction {
    /// Checks the action's preconditions without changing any bundle.
    ///
    /// # Errors
    /// - The action's preconditions do not hold for `bundles`
    pub fn preflight(&self, bundles: &LocalizedBundles) -> Result<(), ActivationError> {
        match self {
            Self::CopyResourceBundleProperties(copy) => copy.preflight(bundles),
        }
    }

    /// Runs the action.
    ///
    /// # Errors
    /// - The action failed; see the variant's own `apply`
    pub fn apply(&self, bundles: &mut LocalizedBundles) -> Result<(), ActivationError> {
        match self {
            Self::CopyResourceBundleProperties(copy) => copy.apply(bundles).map(|_| ()),
        }
    }
}

impl From<BundleCopyAction> for ConfigurationAction {
    fn from(action: BundleCopyAction) -> Self {
        Self::CopyResourceBundleProperties(action)
    }
}
