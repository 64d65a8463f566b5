//! Error types shared by the bundle and plugin layers.

use thiserror::Error;

/// Errors raised while building or reading resource bundles.
///
/// These are configuration errors: bundle key sets are fixed when the
/// bundles are defined, so any of these surfacing at runtime means the
/// definitions themselves are wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BundleError {
    /// A key was looked up (or overridden) that the bundle does not define.
    #[error("Unknown key '{key}' in resource bundle '{bundle}'")]
    UnknownKey {
        /// Name of the bundle.
        bundle: String,
        /// The missing key.
        key: String,
    },

    /// The same key was defined twice while constructing a bundle.
    #[error("Duplicate key '{key}' in resource bundle '{bundle}'")]
    DuplicateKey {
        /// Name of the bundle.
        bundle: String,
        /// The repeated key.
        key: String,
    },

    /// A bundle family with this name is already registered.
    #[error("Resource bundle '{0}' is already registered")]
    DuplicateBundle(String),

    /// A second override was added for a bundle and locale that already
    /// have one.
    #[error("Resource bundle '{bundle}' already has an override for locale '{locale}'")]
    DuplicateOverride {
        /// Name of the bundle.
        bundle: String,
        /// Normalized locale tag.
        locale: String,
    },

    /// An override was applied to a bundle it was not declared for.
    #[error("Override for '{expected}' cannot be applied to resource bundle '{actual}'")]
    OverrideMismatch {
        /// Bundle the override was declared for.
        expected: String,
        /// Bundle it was applied to.
        actual: String,
    },

    /// The key exists but holds an icon reference instead of text.
    #[error("Key '{key}' in resource bundle '{bundle}' is not a text value")]
    NotText {
        /// Name of the bundle.
        bundle: String,
        /// The key holding the icon reference.
        key: String,
    },

    /// A locale tag that is empty or malformed.
    #[error("Invalid locale tag '{0}'")]
    InvalidLocale(String),
}

/// Errors raised while activating an extension.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActivationError {
    /// A bundle referenced by a configuration action is not available for
    /// the active locale.
    #[error("Resource bundle '{bundle}' cannot be resolved for locale '{locale}'")]
    IncompatibleBundle {
        /// Name of the missing bundle.
        bundle: String,
        /// Locale the bundles were resolved for.
        locale: String,
    },

    /// No extension is registered under the requested type identifier.
    #[error("No extension registered with type '{0}'")]
    UnknownExtension(String),

    /// Two extensions were registered under the same type identifier.
    #[error("An extension with type '{0}' is already registered")]
    DuplicateExtension(String),

    /// The extension was already activated, successfully or not.
    #[error("Extension '{0}' has already been activated")]
    AlreadyActivated(String),

    /// The host configuration names a different type identifier than the
    /// extension it is passed to.
    #[error("Configuration for type '{actual}' cannot activate extension '{expected}'")]
    XtypeMismatch {
        /// Type identifier of the extension.
        expected: String,
        /// Type identifier named by the host configuration.
        actual: String,
    },
}
