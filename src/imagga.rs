//! The FeedbackHub for Imagga extension: its bundles and its descriptor.

use std::fmt;

use crate::bundle::{
    BundleFamily,
    BundleRegistry,
    BundleValue,
    LocaleOverride,
    ResourceBundle,
};
use crate::error::BundleError;
use crate::locale::Locale;
use crate::message::format_message;
use crate::plugin::{
    BundleCopyAction,
    ExtensionDescriptor,
};

/// Name of the Imagga resource bundle.
pub const BUNDLE_NAME: &str = "FeedbackHubImagga";

/// Name of the shared feedback hub bundle the Imagga strings are copied into.
pub const FEEDBACK_HUB_BUNDLE: &str = "FeedbackHub";

/// Bundle holding the shared editor icons.
pub const CORE_ICONS_BUNDLE: &str = "CoreIcons";

/// Package namespace of the extension.
pub const NAMESPACE: &str = "com.coremedia.labs.plugins.feedbackhub.imagga";
/// Name the extension is packaged under.
pub const EXTENSION_NAME: &str =
    "com.coremedia.labs.plugins__studio-client.feedback-hub-adapter-imagga";
/// Fully qualified name of the plugin's main type.
pub const MAIN_CLASS: &str =
    "com.coremedia.labs.plugins.feedbackhub.imagga.ImaggaFeedbackHubStudioPlugin";
/// Type identifier the host registers the extension under.
pub const XTYPE: &str =
    "com.coremedia.labs.plugins.feedbackhub.imagga.config.imaggaFeedbackHubStudioPlugin";
/// Display name of the extension.
pub const DISPLAY_NAME: &str = "FeedbackHub for Imagga";

/// Error codes reported by the Imagga feedback hub adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImaggaErrorCode {
    /// No authentication key is configured.
    BasicAuthKeyNotSet,
    /// Imagga rejected the image upload.
    UploadFailed,
    /// Imagga rejected the credentials.
    LoginError,
    /// Imagga failed to return tags for an uploaded image.
    GetTagsFromUploadFailed,
    /// An Imagga response could not be read.
    ErrorProcessingJson,
    /// The image is neither JPG nor PNG.
    NotSupportedFileType,
}

impl ImaggaErrorCode {
    /// Every code, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::BasicAuthKeyNotSet,
        Self::UploadFailed,
        Self::LoginError,
        Self::GetTagsFromUploadFailed,
        Self::ErrorProcessingJson,
        Self::NotSupportedFileType,
    ];

    /// The code as the adapter reports it (e.g. `UPLOAD_FAILED`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BasicAuthKeyNotSet => "BASIC_AUTH_KEY_NOT_SET",
            Self::UploadFailed => "UPLOAD_FAILED",
            Self::LoginError => "LOGIN_ERROR",
            Self::GetTagsFromUploadFailed => "GET_TAGS_FROM_UPLOAD_FAILED",
            Self::ErrorProcessingJson => "ERROR_PROCESSING_JSON",
            Self::NotSupportedFileType => "NOT_SUPPORTED_FILE_TYPE",
        }
    }

    /// Parses a code as reported by the adapter.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == code)
    }

    /// Key of the localized message for this code.
    #[must_use]
    pub fn bundle_key(self) -> String {
        format!("imagga_error_{}", self.as_str())
    }

    /// Localized message for this code with `{n}` arguments filled in.
    ///
    /// # Errors
    /// - [`BundleError::UnknownKey`] if `bundle` lacks the message
    /// - [`BundleError::NotText`] if the entry is not text
    pub fn message(self, bundle: &ResourceBundle, args: &[&str]) -> Result<String, BundleError> {
        let pattern = bundle.text(&self.bundle_key())?;
        Ok(format_message(pattern, args))
    }
}

impl fmt::Display for ImaggaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The English base bundle.
///
/// # Errors
/// Only if the definitions below contain a duplicate key.
pub fn base_bundle() -> Result<ResourceBundle, BundleError> {
    ResourceBundle::new(
        BUNDLE_NAME,
        [
            ("imagga_iconCls", BundleValue::icon(CORE_ICONS_BUNDLE, "imagga")),
            ("imagga_tooltip", "Imagga Feedback".into()),
            ("imagga_title", "Imagga".into()),
            (
                "imagga_error_BASIC_AUTH_KEY_NOT_SET",
                "Please provide a valid basicAuthKey in the configuration for {0}.".into(),
            ),
            (
                "imagga_error_UPLOAD_FAILED",
                "Upload of picture failed. Imagga responded with a problem: \"{1}\"".into(),
            ),
            (
                "imagga_error_LOGIN_ERROR",
                "Login at Imagga failed. Please provide a valid credentials key in the configuration."
                    .into(),
            ),
            (
                "imagga_error_GET_TAGS_FROM_UPLOAD_FAILED",
                "Request for keywords to Imagga failed. Imagga responded with a problem: \"{1}\""
                    .into(),
            ),
            (
                "imagga_error_ERROR_PROCESSING_JSON",
                "Imagga is currently unavailable. Please try again later.".into(),
            ),
            (
                "imagga_error_NOT_SUPPORTED_FILE_TYPE",
                "Please upload a valid file type. Imagga supports the file types \"JPG\" or \"PNG\"."
                    .into(),
            ),
        ],
    )
}

/// German texts for the error messages.
///
/// # Errors
/// Only if the definitions below contain a duplicate key.
pub fn german_override() -> Result<LocaleOverride, BundleError> {
    LocaleOverride::new(
        BUNDLE_NAME,
        Locale::parse("de")?,
        [
            (
                "imagga_error_BASIC_AUTH_KEY_NOT_SET",
                "Bitte geben Sie einen gültigen basicAuthKey in der Konfiguration für {0} an.",
            ),
            (
                "imagga_error_UPLOAD_FAILED",
                "Das Bild konnte nicht hochgeladen werden. Imagga hat einen Fehler gemeldet: \"{1}\"",
            ),
            (
                "imagga_error_LOGIN_ERROR",
                "Login bei Imagga fehlgeschlagen. Bitte geben Sie einen gültigen credentials key in der Konfiguration an.",
            ),
            (
                "imagga_error_GET_TAGS_FROM_UPLOAD_FAILED",
                "Tags konnten nicht geladen werden. Imagga hat einen Fehler gemeldet: \"{1}\"",
            ),
            (
                "imagga_error_ERROR_PROCESSING_JSON",
                "Imagga ist derzeit nicht verfügbar. Versuchen sie es später noch einmal.",
            ),
            (
                "imagga_error_NOT_SUPPORTED_FILE_TYPE",
                "Bitte laden Sie einen gültigen Dateitypen hoch. Imagga unterstützt die Dateitypen \"jpg\" oder \"png\".",
            ),
        ],
    )
}

/// The Imagga bundle family: English base plus German override.
///
/// # Errors
/// - [`BundleError::UnknownKey`] if the override touches a key the base lacks
pub fn bundle_family() -> Result<BundleFamily, BundleError> {
    BundleFamily::new(base_bundle()?).with_override(german_override()?)
}

/// Registers the Imagga bundle family.
///
/// The shared feedback hub bundle belongs to the feedback hub itself and is
/// not registered here.
///
/// # Errors
/// - Any error of [`bundle_family`] or [`BundleRegistry::register`]
pub fn register_bundles(registry: &mut BundleRegistry) -> Result<(), BundleError> {
    registry.register(bundle_family()?)
}

/// Descriptor of the extension: copies the Imagga strings into the shared
/// feedback hub bundle on activation.
#[must_use]
pub fn descriptor() -> ExtensionDescriptor {
    ExtensionDescriptor {
        namespace: NAMESPACE.to_string(),
        extension_name: EXTENSION_NAME.to_string(),
        main_class: MAIN_CLASS.to_string(),
        name: DISPLAY_NAME.to_string(),
        xtype: XTYPE.to_string(),
        configuration: vec![BundleCopyAction::new(FEEDBACK_HUB_BUNDLE, BUNDLE_NAME).into()],
    }
}
