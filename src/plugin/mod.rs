//! Extension descriptors, configuration actions and activation.
mod action;
mod descriptor;
mod registry;

pub use action::{
    BundleCopyAction,
    ConfigurationAction,
};
pub use descriptor::{
    ExtensionDescriptor,
    PluginConfig,
    merge_config,
};
pub use registry::{
    ExtensionRegistry,
    ExtensionStatus,
};
