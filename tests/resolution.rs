// SPDX-License-Identifier: MPL-2.0
use locale_lens::{Bundle, Localize, Localizer};
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture_bundle() -> Bundle {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/bundle");
    Bundle::from_dir(root).expect("failed to load fixture bundle")
}

#[test]
fn language_switch_and_base_fallback_scenario() {
    let mut localizer = Localizer::new(fixture_bundle());

    // French sub-bundle present: lookups prefer it.
    localizer.set_language("fr");
    assert_eq!(localizer.localize("greeting"), "Bonjour");

    // No German sub-bundle: lookups fall back to base.
    localizer.set_language("de");
    assert_eq!(localizer.localize("greeting"), "Hi");

    // Unknown everywhere: the key itself is the last resort.
    assert_eq!(localizer.localize("UNKNOWN_KEY"), "UNKNOWN_KEY");
}

#[test]
fn format_round_trips_an_argument() {
    let mut localizer = Localizer::new(fixture_bundle());

    localizer.set_language("en");
    assert_eq!(
        "hello-user".localized_format(&[("name", "World".into())], &localizer),
        "Hello World"
    );

    localizer.set_language("fr");
    assert_eq!(
        "hello-user".localized_format(&[("name", "World".into())], &localizer),
        "Bonjour World"
    );
}

#[test]
fn plural_boundary_quantities() {
    let mut localizer = Localizer::new(fixture_bundle());

    localizer.set_language("en");
    assert_eq!("items-count".localized_plural(0, &localizer), "no items");
    assert_eq!("items-count".localized_plural(1, &localizer), "one item");
    assert_eq!("items-count".localized_plural(2, &localizer), "2 items");

    localizer.set_language("fr");
    assert_eq!(
        "items-count".localized_plural(0, &localizer),
        "aucun élément"
    );
    assert_eq!("items-count".localized_plural(1, &localizer), "un élément");
    assert_eq!("items-count".localized_plural(2, &localizer), "2 éléments");
}

#[test]
fn resolution_is_idempotent() {
    let mut localizer = Localizer::new(fixture_bundle());
    localizer.set_language("fr");

    let first = localizer.localize("greeting");
    let second = localizer.localize("greeting");
    assert_eq!(first, second);
}

#[test]
fn named_table_and_default_table_are_separate() {
    let mut localizer = Localizer::new(fixture_bundle());
    localizer.set_language("en");

    assert_eq!(
        localizer.localize_using("not-found", "errors"),
        "File not found"
    );
    assert_eq!(localizer.localize("not-found"), "not-found");
}

#[test]
fn stored_override_survives_a_restart() {
    let dir = tempdir().expect("failed to create temp dir");
    let settings_path = dir.path().join("settings.toml");

    {
        let mut localizer = Localizer::with_settings_at(fixture_bundle(), &settings_path);
        localizer.set_language("fr");
    }

    // A fresh localizer over the same settings file picks the override up.
    let localizer = Localizer::with_settings_at(fixture_bundle(), &settings_path);
    assert_eq!(localizer.current_language(), "fr");
    assert_eq!(localizer.localize("greeting"), "Bonjour");
}

#[test]
fn reset_clears_the_stored_override() {
    let dir = tempdir().expect("failed to create temp dir");
    let settings_path = dir.path().join("settings.toml");

    {
        let mut localizer = Localizer::with_settings_at(fixture_bundle(), &settings_path);
        localizer.set_language("fr");
        localizer.reset_language();
    }

    let localizer = Localizer::with_settings_at(fixture_bundle(), &settings_path);
    assert_eq!(localizer.current_language(), localizer.default_language());
}

#[test]
fn available_languages_match_the_fixture_layout() {
    let localizer = Localizer::new(fixture_bundle());
    let languages: Vec<String> = localizer
        .available_languages()
        .iter()
        .map(|l| l.to_string())
        .collect();
    assert_eq!(languages, vec!["en", "fr"]);
}
