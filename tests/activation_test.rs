//! End-to-end activation of the Imagga extension against a feedback hub bundle.

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::collections::HashMap;

use feedback_hub_imagga::bundle::{
    BundleFamily,
    BundleRegistry,
    LocaleOverride,
    LocalizedBundles,
    ResourceBundle,
};
use feedback_hub_imagga::imagga::{
    self,
    ImaggaErrorCode,
};
use feedback_hub_imagga::locale::Locale;
use feedback_hub_imagga::plugin::{
    ExtensionRegistry,
    ExtensionStatus,
    PluginConfig,
};
use feedback_hub_imagga::{
    ActivationError,
    BundleError,
};
use googletest::prelude::*;
use rstest::*;

fn locale(tag: &str) -> Locale {
    Locale::parse(tag).unwrap()
}

fn feedback_hub() -> ResourceBundle {
    ResourceBundle::new(
        imagga::FEEDBACK_HUB_BUNDLE,
        [("feedbackHub_title", "Feedback Hub"), ("imagga_title", "placeholder")],
    )
    .unwrap()
}

fn localized(tag: &str) -> LocalizedBundles {
    let mut registry = BundleRegistry::new();
    registry.register(BundleFamily::new(feedback_hub())).unwrap();
    imagga::register_bundles(&mut registry).unwrap();
    registry.localize(&locale(tag)).unwrap()
}

fn activate(bundles: &mut LocalizedBundles) -> ExtensionRegistry {
    let mut extensions = ExtensionRegistry::new();
    extensions.register(imagga::descriptor()).unwrap();
    extensions.activate(imagga::XTYPE, &PluginConfig::default(), bundles).unwrap();
    extensions
}

#[rstest]
fn test_resolve_scenario_from_base_and_german_override() {
    let base =
        ResourceBundle::new("Scenario", [("title", "Imagga"), ("error1", "Upload failed")]).unwrap();
    let de =
        LocaleOverride::new("Scenario", locale("de"), [("error1", "Hochladen fehlgeschlagen")])
            .unwrap();
    let family = BundleFamily::new(base).with_override(de).unwrap();

    let german = family.resolve(&locale("de")).unwrap();
    let english = family.resolve(&locale("en")).unwrap();

    assert_that!(
        german,
        eq(&ResourceBundle::new(
            "Scenario",
            [("title", "Imagga"), ("error1", "Hochladen fehlgeschlagen")]
        )
        .unwrap())
    );
    assert_that!(
        english,
        eq(&ResourceBundle::new("Scenario", [("title", "Imagga"), ("error1", "Upload failed")])
            .unwrap())
    );
}

#[rstest]
#[case::english("en", "Imagga is currently unavailable. Please try again later.")]
#[case::german("de", "Imagga ist derzeit nicht verfügbar. Versuchen sie es später noch einmal.")]
fn test_activation_copies_localized_strings(#[case] tag: &str, #[case] expected: &str) {
    let mut bundles = localized(tag);

    let extensions = activate(&mut bundles);

    let shared = bundles.get(imagga::FEEDBACK_HUB_BUNDLE).unwrap();
    assert_that!(
        matches!(extensions.status(imagga::XTYPE), Some(ExtensionStatus::Active(_))),
        eq(true)
    );
    assert_that!(shared.text("imagga_error_ERROR_PROCESSING_JSON"), ok(eq(&expected)));
    assert_that!(shared.text("imagga_title"), ok(eq(&"Imagga")));
    assert_that!(shared.text("feedbackHub_title"), ok(eq(&"Feedback Hub")));
    assert_that!(
        ImaggaErrorCode::ErrorProcessingJson.message(shared, &[]),
        ok(eq(expected))
    );
}

#[rstest]
fn test_activation_copies_every_imagga_key() {
    let mut bundles = localized("de");

    activate(&mut bundles);

    let shared = bundles.get(imagga::FEEDBACK_HUB_BUNDLE).unwrap();
    let source = bundles.get(imagga::BUNDLE_NAME).unwrap();
    for (key, value) in source.iter() {
        assert_that!(shared.get(key), ok(eq(&value)));
    }
    assert_that!(shared.len(), eq(source.len() + 1));
}

#[rstest]
fn test_activation_without_shared_bundle_fails_cleanly() {
    let mut registry = BundleRegistry::new();
    imagga::register_bundles(&mut registry).unwrap();
    let mut bundles = registry.localize(&locale("de")).unwrap();
    let before = bundles.clone();
    let mut extensions = ExtensionRegistry::new();
    extensions.register(imagga::descriptor()).unwrap();

    let failures = extensions.activate_all(&HashMap::new(), &mut bundles);

    assert_that!(failures.len(), eq(1));
    assert_that!(
        failures.first().map(|(_, error)| error),
        some(eq(&ActivationError::IncompatibleBundle {
            bundle: imagga::FEEDBACK_HUB_BUNDLE.to_string(),
            locale: "de".to_string()
        }))
    );
    assert_that!(
        matches!(extensions.status(imagga::XTYPE), Some(ExtensionStatus::Failed(_))),
        eq(true)
    );
    assert_that!(bundles, eq(&before));
}

#[rstest]
fn test_host_configuration_overrides_defaults() {
    let mut bundles = localized("en");
    let before = bundles.clone();
    let mut extensions = ExtensionRegistry::new();
    extensions.register(imagga::descriptor()).unwrap();
    let host: PluginConfig =
        serde_json::from_str(r#"{"name": "Imagga (custom)", "configuration": []}"#).unwrap();

    let merged = extensions.activate(imagga::XTYPE, &host, &mut bundles).unwrap();

    assert_that!(merged.name, some(eq("Imagga (custom)")));
    assert_that!(merged.xtype, some(eq(imagga::XTYPE)));
    assert_that!(bundles, eq(&before));
}

#[rstest]
fn test_unknown_key_is_reported() {
    let bundles = localized("en");
    let shared = bundles.get(imagga::FEEDBACK_HUB_BUNDLE).unwrap();

    assert_that!(
        shared.get("imagga_subtitle"),
        err(eq(&BundleError::UnknownKey {
            bundle: imagga::FEEDBACK_HUB_BUNDLE.to_string(),
            key: "imagga_subtitle".to_string()
        }))
    );
}
