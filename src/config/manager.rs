//! Validated configuration and the values derived from it.

use std::path::Path;

use super::{
    ConfigError,
    ImaggaAdapterSettings,
    Settings,
    ValidationError,
    loader,
};
use crate::locale::Locale;
use crate::plugin::PluginConfig;

/// Settings that passed validation, with the user locale already parsed.
///
/// Construction fails on invalid settings, so a `ConfigManager` never holds
/// a configuration the activation path would have to re-check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigManager {
    /// The validated settings.
    settings: Settings,
    /// Parsed form of `settings.locale`.
    locale: Locale,
}

impl ConfigManager {
    /// Loads `.feedback-hub-imagga.json` from `dir`.
    ///
    /// Without a directory, or when the directory has no configuration file,
    /// the defaults are used.
    ///
    /// # Errors
    /// - [`ConfigError::Read`] or [`ConfigError::Parse`] for a broken file
    /// - [`ConfigError::ValidationErrors`] for invalid settings
    pub fn load(dir: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = match dir {
            Some(dir) => loader::load_from_dir(dir)?.unwrap_or_default(),
            None => Settings::default(),
        };
        Self::from_settings(settings)
    }

    /// Validates `settings` and derives the user locale.
    ///
    /// # Errors
    /// - [`ConfigError::ValidationErrors`] for invalid settings
    pub fn from_settings(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        let locale = settings.locale().map_err(|e| {
            ConfigError::ValidationErrors(vec![ValidationError::new("locale", e.to_string())])
        })?;
        tracing::debug!("Configured locale: {}", locale);
        Ok(Self { settings, locale })
    }

    /// Locale the bundles are resolved for.
    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Host overrides for the extension's configuration.
    #[must_use]
    pub const fn plugin(&self) -> &PluginConfig {
        &self.settings.plugin
    }

    /// Imagga adapter settings with defaults applied.
    ///
    /// # Errors
    /// - Any error of [`super::ImaggaSettings::resolve`]
    pub fn imagga(&self) -> Result<ImaggaAdapterSettings, ConfigError> {
        self.settings.imagga.resolve()
    }
}
