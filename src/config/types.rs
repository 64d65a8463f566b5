//! Settings read from the configuration file, and their validation.

use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::error::BundleError;
use crate::imagga::ImaggaErrorCode;
use crate::locale::Locale;
use crate::plugin::PluginConfig;

/// A single invalid setting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "imagga.minAccuracy")
    pub field_path: String,
    /// What is wrong, with an example of a valid value where one helps.
    pub message: String,
}

impl ValidationError {
    /// Error for the field at `field_path`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more settings are invalid.
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file {}: {source}", .path.display())]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid settings JSON.
    #[error("Failed to parse configuration file {}: {source}", .path.display())]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The Imagga adapter cannot run with the configured settings.
    #[error("Imagga adapter settings are incomplete ({0})")]
    Imagga(ImaggaErrorCode),
}

/// One numbered line per validation error.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Contents of `.feedback-hub-imagga.json`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Locale of the current user. Selects which overrides apply.
    pub locale: String,

    /// Host overrides for the extension's configuration.
    pub plugin: PluginConfig,

    /// Settings of the Imagga adapter.
    pub imagga: ImaggaSettings,
}

/// Settings of the Imagga feedback hub adapter.
///
/// All fields are optional; [`ImaggaSettings::resolve`] fills in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImaggaSettings {
    /// Imagga API endpoint. Default: `https://api.imagga.com/v2`.
    pub url: Option<String>,

    /// Authentication key. Mandatory; the adapter cannot work without it.
    pub basic_auth_key: Option<String>,

    /// Minimum confidence (percent, 0-100) for a tag to be included.
    /// Higher values accept fewer tags. Default: 30.
    pub min_accuracy: Option<u32>,

    /// Maximum number of tags, or -1 for no limit. Default: -1.
    pub limit: Option<i32>,
}

/// Imagga adapter settings with every default applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImaggaAdapterSettings {
    /// Imagga API endpoint.
    pub url: String,
    /// Authentication key, never empty.
    pub basic_auth_key: String,
    /// Minimum tag confidence in percent.
    pub min_accuracy: u32,
    /// Maximum number of tags, -1 for no limit.
    pub limit: i32,
}

impl ImaggaSettings {
    /// Public Imagga API endpoint.
    pub const DEFAULT_URL: &'static str = "https://api.imagga.com/v2";
    /// Minimum tag confidence used when none is configured.
    pub const DEFAULT_MIN_ACCURACY: u32 = 30;
    /// Imagga's own default for the `limit` parameter, meaning "no limit".
    pub const DEFAULT_LIMIT: i32 = -1;

    /// Applies defaults to the optional settings.
    ///
    /// # Errors
    /// - [`ConfigError::Imagga`] with [`ImaggaErrorCode::BasicAuthKeyNotSet`]
    ///   if no (or an empty) authentication key is set
    pub fn resolve(&self) -> Result<ImaggaAdapterSettings, ConfigError> {
        let basic_auth_key = self
            .basic_auth_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Imagga(ImaggaErrorCode::BasicAuthKeyNotSet))?;

        Ok(ImaggaAdapterSettings {
            url: self.url.clone().unwrap_or_else(|| Self::DEFAULT_URL.to_string()),
            basic_auth_key: basic_auth_key.to_string(),
            min_accuracy: self.min_accuracy.unwrap_or(Self::DEFAULT_MIN_ACCURACY),
            limit: self.limit.unwrap_or(Self::DEFAULT_LIMIT),
        })
    }
}

impl Settings {
    /// The configured user locale.
    ///
    /// # Errors
    /// - [`BundleError::InvalidLocale`] if the tag is malformed
    pub fn locale(&self) -> Result<Locale, BundleError> {
        Locale::parse(&self.locale)
    }

    /// Checks every field and reports all problems at once.
    ///
    /// # Errors
    /// - Invalid locale tag
    /// - Empty plugin type identifier or name
    /// - Imagga settings out of range
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.locale() {
            errors.push(ValidationError::new(
                "locale",
                format!("{e}. Example: \"en\", \"de\" or \"de-AT\""),
            ));
        }

        if self.plugin.xtype.as_deref().is_some_and(str::is_empty) {
            errors.push(ValidationError::new(
                "plugin.xtype",
                "The type identifier cannot be empty. Please remove this field to keep the default",
            ));
        }

        if self.plugin.name.as_deref().is_some_and(str::is_empty) {
            errors.push(ValidationError::new(
                "plugin.name",
                "The name cannot be empty. Please remove this field to keep the default",
            ));
        }

        if self.imagga.url.as_deref().is_some_and(str::is_empty) {
            errors.push(ValidationError::new(
                "imagga.url",
                format!("The URL cannot be empty. Example: \"{}\"", ImaggaSettings::DEFAULT_URL),
            ));
        }

        if let Some(min_accuracy) = self.imagga.min_accuracy {
            if min_accuracy > 100 {
                errors.push(ValidationError::new(
                    "imagga.minAccuracy",
                    format!("Must be a percentage between 0 and 100, got {min_accuracy}"),
                ));
            }
        }

        if let Some(limit) = self.imagga.limit {
            if limit == 0 || limit < ImaggaSettings::DEFAULT_LIMIT {
                errors.push(ValidationError::new(
                    "imagga.limit",
                    format!("Must be a positive number, or -1 for no limit, got {limit}"),
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::DEFAULT.to_string(),
            plugin: PluginConfig::default(),
            imagga: ImaggaSettings::default(),
        }
    }
}
