//! Configuration file loading and validation.
mod loader;
mod manager;
mod types;

pub use manager::ConfigManager;
pub use types::{
    ConfigError,
    ImaggaAdapterSettings,
    ImaggaSettings,
    Settings,
    ValidationError,
};
