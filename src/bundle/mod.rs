//! Resource bundles, locale overrides and their resolution.
mod family;
mod overrides;
mod registry;
mod resource;
mod value;

pub use family::{
    BundleFamily,
    build_bundle,
};
pub use overrides::LocaleOverride;
pub use registry::{
    BundleRegistry,
    LocalizedBundles,
};
pub use resource::ResourceBundle;
pub use value::{
    BundleValue,
    IconRef,
};
