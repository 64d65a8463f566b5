//! feedback-hub-imagga
//!
//! Resource bundles with locale overrides, and the extension that copies the
//! Imagga strings into the shared feedback hub bundle when a host activates it.

pub mod bundle;
pub mod config;
pub mod error;
pub mod imagga;
pub mod locale;
pub mod message;
pub mod plugin;

pub use error::{
    ActivationError,
    BundleError,
};
