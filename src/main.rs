//! Activates the Imagga extension against a stand-in feedback hub and prints
//! the resulting shared bundle as JSON.

use std::process::ExitCode;

use feedback_hub_imagga::bundle::{
    BundleFamily,
    BundleRegistry,
    ResourceBundle,
};
use feedback_hub_imagga::config::{
    ConfigError,
    ConfigManager,
};
use feedback_hub_imagga::imagga;
use feedback_hub_imagga::plugin::ExtensionRegistry;
use tracing_subscriber::EnvFilter;

/// Installs logging, then runs the activation and maps its outcome to the exit code.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

#[allow(clippy::print_stdout)]
/// Loads the configuration, activates the extension and prints the shared bundle.
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigManager::load(std::env::current_dir().ok().as_deref())?;

    let mut bundles = BundleRegistry::new();
    bundles.register(BundleFamily::new(ResourceBundle::empty(imagga::FEEDBACK_HUB_BUNDLE)))?;
    imagga::register_bundles(&mut bundles)?;
    let mut localized = bundles.localize(config.locale())?;

    let mut extensions = ExtensionRegistry::new();
    extensions.register(imagga::descriptor())?;
    extensions.activate(imagga::XTYPE, config.plugin(), &mut localized)?;

    let shared = localized.require(imagga::FEEDBACK_HUB_BUNDLE)?;
    match config.imagga() {
        Ok(adapter) => tracing::info!("Imagga adapter endpoint: {}", adapter.url),
        Err(ConfigError::Imagga(code)) => {
            tracing::warn!("{}", code.message(shared, &["imagga"])?);
        }
        Err(error) => return Err(error.into()),
    }

    println!("{}", serde_json::to_string_pretty(shared)?);
    Ok(())
}
