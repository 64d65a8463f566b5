//! Host-side registry of extensions and their activation state.

use std::collections::HashMap;

use super::{
    ExtensionDescriptor,
    PluginConfig,
};
use crate::bundle::LocalizedBundles;
use crate::error::ActivationError;

/// Activation state of a registered extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionStatus {
    /// Registered, not yet activated.
    Registered,
    /// Activated with the given merged configuration.
    Active(PluginConfig),
    /// Activation failed; the message is the error's display text.
    Failed(String),
}

/// A registered extension and where it stands.
#[derive(Debug, Clone)]
struct ExtensionEntry {
    /// The extension as registered.
    descriptor: ExtensionDescriptor,
    /// Current activation state.
    status: ExtensionStatus,
}

/// Extensions in registration order, addressed by their type identifier.
///
/// Activation order is registration order. When two extensions copy the same
/// key into a shared bundle, the one activated last determines the value.
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    /// Entries in registration order.
    entries: Vec<ExtensionEntry>,
}

impl ExtensionRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an extension in [`ExtensionStatus::Registered`] state.
    ///
    /// # Errors
    /// - [`ActivationError::DuplicateExtension`] if the type identifier is taken
    pub fn register(&mut self, descriptor: ExtensionDescriptor) -> Result<(), ActivationError> {
        if self.position(&descriptor.xtype).is_some() {
            return Err(ActivationError::DuplicateExtension(descriptor.xtype));
        }
        tracing::debug!("Registered extension '{}' ({})", descriptor.name, descriptor.xtype);
        self.entries.push(ExtensionEntry { descriptor, status: ExtensionStatus::Registered });
        Ok(())
    }

    /// Activation state of the extension registered under `xtype`.
    #[must_use]
    pub fn status(&self, xtype: &str) -> Option<&ExtensionStatus> {
        self.position(xtype).and_then(|index| self.entries.get(index)).map(|entry| &entry.status)
    }

    /// Descriptor of the extension registered under `xtype`.
    #[must_use]
    pub fn descriptor(&self, xtype: &str) -> Option<&ExtensionDescriptor> {
        self.position(xtype)
            .and_then(|index| self.entries.get(index))
            .map(|entry| &entry.descriptor)
    }

    /// Type identifiers in registration order.
    pub fn xtypes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.descriptor.xtype.as_str())
    }

    /// Activates one extension.
    ///
    /// A failure is recorded as [`ExtensionStatus::Failed`] and logged; the
    /// bundles are left as they were. An extension is activated at most once.
    /// The configuration stored in [`ExtensionStatus::Active`] always carries
    /// the registered `xtype`.
    ///
    /// # Errors
    /// - [`ActivationError::UnknownExtension`] if `xtype` is not registered
    /// - [`ActivationError::AlreadyActivated`] if it was activated before
    /// - Any error of [`ExtensionDescriptor::activate`]
    pub fn activate(
        &mut self,
        xtype: &str,
        host: &PluginConfig,
        bundles: &mut LocalizedBundles,
    ) -> Result<PluginConfig, ActivationError> {
        let entry = self
            .position(xtype)
            .and_then(|index| self.entries.get_mut(index))
            .ok_or_else(|| ActivationError::UnknownExtension(xtype.to_string()))?;

        if entry.status != ExtensionStatus::Registered {
            return Err(ActivationError::AlreadyActivated(xtype.to_string()));
        }

        match entry.descriptor.activate(host, bundles) {
            Ok(merged) => {
                tracing::info!(
                    "Activated extension '{}' for locale '{}'",
                    entry.descriptor.name,
                    bundles.locale()
                );
                entry.status = ExtensionStatus::Active(merged.clone());
                Ok(merged)
            }
            Err(error) => {
                tracing::warn!("Failed to activate extension '{}': {}", entry.descriptor.name, error);
                entry.status = ExtensionStatus::Failed(error.to_string());
                Err(error)
            }
        }
    }

    /// Activates every registered extension in registration order.
    ///
    /// `host_configs` supplies per-extension overrides keyed by type
    /// identifier. Failures do not stop the remaining activations; they are
    /// returned together with the failing type identifier.
    pub fn activate_all(
        &mut self,
        host_configs: &HashMap<String, PluginConfig>,
        bundles: &mut LocalizedBundles,
    ) -> Vec<(String, ActivationError)> {
        let pending: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.status == ExtensionStatus::Registered)
            .map(|entry| entry.descriptor.xtype.clone())
            .collect();

        let empty = PluginConfig::default();
        let mut failures = Vec::new();
        for xtype in pending {
            let host = host_configs.get(&xtype).unwrap_or(&empty);
            if let Err(error) = self.activate(&xtype, host, bundles) {
                failures.push((xtype, error));
            }
        }
        failures
    }

    /// Index of the entry registered under `xtype`.
    fn position(&self, xtype: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.descriptor.xtype == xtype)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::bundle::{
        BundleFamily,
        BundleRegistry,
        ResourceBundle,
    };
    use crate::locale::Locale;
    use crate::plugin::BundleCopyAction;

    fn descriptor(xtype: &str, source: &str) -> ExtensionDescriptor {
        ExtensionDescriptor {
            namespace: "com.example".to_string(),
            extension_name: format!("com.example__{xtype}"),
            main_class: format!("com.example.{xtype}"),
            name: xtype.to_string(),
            xtype: xtype.to_string(),
            configuration: vec![BundleCopyAction::new("Shared", source).into()],
        }
    }

    #[fixture]
    fn bundles() -> LocalizedBundles {
        let mut registry = BundleRegistry::new();
        for bundle in [
            ResourceBundle::new("Shared", [("label", "Shared")]).unwrap(),
            ResourceBundle::new("First", [("label", "First"), ("first", "1")]).unwrap(),
            ResourceBundle::new("Second", [("label", "Second"), ("second", "2")]).unwrap(),
        ] {
            registry.register(BundleFamily::new(bundle)).unwrap();
        }
        registry.localize(&Locale::default()).unwrap()
    }

    #[rstest]
    fn test_register_rejects_duplicate_xtype() {
        let mut registry = ExtensionRegistry::new();
        registry.register(descriptor("a", "First")).unwrap();

        assert_that!(
            registry.register(descriptor("a", "Second")),
            err(eq(&ActivationError::DuplicateExtension("a".to_string())))
        );
        assert_that!(registry.status("a"), some(eq(&ExtensionStatus::Registered)));
    }

    #[rstest]
    fn test_activate_records_merged_config(mut bundles: LocalizedBundles) {
        let mut registry = ExtensionRegistry::new();
        registry.register(descriptor("a", "First")).unwrap();
        let host = PluginConfig { name: Some("Renamed".to_string()), ..PluginConfig::default() };

        let merged = registry.activate("a", &host, &mut bundles).unwrap();

        assert_that!(merged.name, some(eq("Renamed")));
        assert_that!(registry.status("a"), some(eq(&ExtensionStatus::Active(merged.clone()))));
        assert_that!(registry.descriptor("a").map(|d| d.name.as_str()), some(eq("a")));
    }

    #[rstest]
    fn test_host_config_for_other_xtype_fails_activation(mut bundles: LocalizedBundles) {
        let mut registry = ExtensionRegistry::new();
        registry.register(descriptor("a", "First")).unwrap();
        let host = PluginConfig { xtype: Some("b".to_string()), ..PluginConfig::default() };
        let before = bundles.clone();

        let result = registry.activate("a", &host, &mut bundles);

        assert_that!(
            result,
            err(eq(&ActivationError::XtypeMismatch {
                expected: "a".to_string(),
                actual: "b".to_string()
            }))
        );
        assert_that!(
            matches!(registry.status("a"), Some(ExtensionStatus::Failed(_))),
            eq(true)
        );
        assert_that!(bundles, eq(&before));
    }

    #[rstest]
    fn test_activate_only_once(mut bundles: LocalizedBundles) {
        let mut registry = ExtensionRegistry::new();
        registry.register(descriptor("a", "First")).unwrap();
        registry.activate("a", &PluginConfig::default(), &mut bundles).unwrap();

        let again = registry.activate("a", &PluginConfig::default(), &mut bundles);

        assert_that!(again, err(eq(&ActivationError::AlreadyActivated("a".to_string()))));
    }

    #[rstest]
    fn test_activate_unknown_extension(mut bundles: LocalizedBundles) {
        let mut registry = ExtensionRegistry::new();

        let result = registry.activate("missing", &PluginConfig::default(), &mut bundles);

        assert_that!(result, err(eq(&ActivationError::UnknownExtension("missing".to_string()))));
    }

    #[rstest]
    fn test_failed_activation_is_recorded_and_isolated(mut bundles: LocalizedBundles) {
        let mut registry = ExtensionRegistry::new();
        registry.register(descriptor("broken", "Missing")).unwrap();
        registry.register(descriptor("ok", "First")).unwrap();

        let failures = registry.activate_all(&HashMap::new(), &mut bundles);

        let failed: Vec<&str> = failures.iter().map(|(xtype, _)| xtype.as_str()).collect();
        assert_that!(failed, elements_are![eq(&"broken")]);
        let Some(ExtensionStatus::Failed(message)) = registry.status("broken") else {
            panic!("expected a failed status, got {:?}", registry.status("broken"));
        };
        assert_that!(message, contains_substring("Missing"));
        assert_that!(
            matches!(registry.status("ok"), Some(ExtensionStatus::Active(_))),
            eq(true)
        );
        assert_that!(bundles.get("Shared").unwrap().text("first"), ok(eq(&"1")));
    }

    #[rstest]
    fn test_last_activated_wins_on_collisions(mut bundles: LocalizedBundles) {
        let mut registry = ExtensionRegistry::new();
        registry.register(descriptor("first", "First")).unwrap();
        registry.register(descriptor("second", "Second")).unwrap();

        let failures = registry.activate_all(&HashMap::new(), &mut bundles);

        let shared = bundles.get("Shared").unwrap();
        assert_that!(failures, is_empty());
        assert_that!(registry.xtypes().collect::<Vec<_>>(), elements_are![eq(&"first"), eq(&"second")]);
        assert_that!(shared.text("label"), ok(eq(&"Second")));
        assert_that!(shared.text("first"), ok(eq(&"1")));
        assert_that!(shared.text("second"), ok(eq(&"2")));
    }
}
