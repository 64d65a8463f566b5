//! Extension descriptors and their configuration.

use serde::{
    Deserialize,
    Serialize,
};

use super::ConfigurationAction;
use crate::bundle::LocalizedBundles;
use crate::error::ActivationError;

/// Configuration of a plugin instance.
///
/// Every field is optional so that the same type can describe both a
/// plugin's defaults and the partial overrides a host supplies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginConfig {
    /// Type identifier the host registers the plugin under.
    pub xtype: Option<String>,
    /// Human readable name.
    pub name: Option<String>,
    /// Package namespace of the plugin.
    pub namespace: Option<String>,
    /// Actions run on activation, in order.
    pub configuration: Option<Vec<ConfigurationAction>>,
}

impl PluginConfig {
    /// Actions of this configuration, or none when unset.
    #[must_use]
    pub fn actions(&self) -> &[ConfigurationAction] {
        self.configuration.as_deref().unwrap_or_default()
    }
}

/// Merges plugin defaults with host-supplied configuration.
///
/// Field by field, a value set by the host wins over the plugin default.
/// A host `configuration` list replaces the default list as a whole.
///
/// This is a plain merge. [`ExtensionDescriptor::activate`] additionally
/// refuses host configuration addressed to a different `xtype`.
#[must_use]
pub fn merge_config(defaults: &PluginConfig, host: &PluginConfig) -> PluginConfig {
    PluginConfig {
        xtype: host.xtype.clone().or_else(|| defaults.xtype.clone()),
        name: host.name.clone().or_else(|| defaults.name.clone()),
        namespace: host.namespace.clone().or_else(|| defaults.namespace.clone()),
        configuration: host.configuration.clone().or_else(|| defaults.configuration.clone()),
    }
}

/// The registration unit the host's plugin registry consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionDescriptor {
    /// Package namespace of the extension.
    pub namespace: String,
    /// Name of the packaged extension.
    pub extension_name: String,
    /// Fully qualified name of the plugin's main type.
    pub main_class: String,
    /// Display name shown by the host.
    pub name: String,
    /// Stable type identifier.
    pub xtype: String,
    /// Actions run on activation unless the host replaces them.
    pub configuration: Vec<ConfigurationAction>,
}

impl ExtensionDescriptor {
    /// The plugin's own configuration, before host overrides.
    #[must_use]
    pub fn defaults(&self) -> PluginConfig {
        PluginConfig {
            xtype: Some(self.xtype.clone()),
            name: Some(self.name.clone()),
            namespace: Some(self.namespace.clone()),
            configuration: Some(self.configuration.clone()),
        }
    }

    /// Merges `host` into the defaults and runs the resulting actions.
    ///
    /// Every action is checked before the first one runs, so a missing bundle
    /// aborts activation with no bundle modified. Returns the merged
    /// configuration. The merged `xtype` always equals [`Self::xtype`].
    ///
    /// # Errors
    /// - [`ActivationError::XtypeMismatch`] if `host` names another `xtype`
    /// - [`ActivationError::IncompatibleBundle`] if an action references a
    ///   bundle that is not resolved for the current locale
    pub fn activate(
        &self,
        host: &PluginConfig,
        bundles: &mut LocalizedBundles,
    ) -> Result<PluginConfig, ActivationError> {
        if let Some(actual) = host.xtype.as_deref().filter(|xtype| *xtype != self.xtype) {
            return Err(ActivationError::XtypeMismatch {
                expected: self.xtype.clone(),
                actual: actual.to_string(),
            });
        }

        let merged = merge_config(&self.defaults(), host);
        tracing::debug!("Activating '{}' with configuration: {:?}", self.xtype, merged);

        for action in merged.actions() {
            action.preflight(bundles)?;
        }
        for action in merged.actions() {
            action.apply(bundles)?;
        }

        Ok(merged)
    }
}
