//! Values stored in a resource bundle.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Reference to an icon defined in another bundle (e.g. the shared core icons).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconRef {
    /// Bundle that defines the icon.
    pub bundle: String,
    /// Key of the icon within that bundle.
    pub key: String,
}

impl IconRef {
    /// Reference to `key` in `bundle`.
    #[must_use]
    pub fn new(bundle: impl Into<String>, key: impl Into<String>) -> Self {
        Self { bundle: bundle.into(), key: key.into() }
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.bundle, self.key)
    }
}

/// A localized value: display text, or an icon reference.
///
/// Text serializes as a plain JSON string, icons as `{"icon": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BundleValue {
    /// Display text, possibly with `{n}` placeholders.
    Text(String),
    /// Icon defined in another bundle.
    Icon {
        /// The referenced icon.
        icon: IconRef,
    },
}

impl BundleValue {
    /// A text value.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// An icon reference to `key` in `bundle`.
    #[must_use]
    pub fn icon(bundle: impl Into<String>, key: impl Into<String>) -> Self {
        Self::Icon { icon: IconRef::new(bundle, key) }
    }

    /// Returns the text if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Icon { .. } => None,
        }
    }
}

impl From<&str> for BundleValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for BundleValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<IconRef> for BundleValue {
    fn from(icon: IconRef) -> Self {
        Self::Icon { icon }
    }
}

impl fmt::Display for BundleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Icon { icon } => write!(f, "{icon}"),
        }
    }
}
