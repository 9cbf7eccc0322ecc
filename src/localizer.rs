// SPDX-License-Identifier: MPL-2.0
//! The localization context.
//!
//! A [`Localizer`] owns a default [`Bundle`], the current-language setting,
//! and the listeners interested in language changes. It is an explicit,
//! injectable object: multi-tenant callers build one per tenant instead of
//! sharing process-global state.
//!
//! Lookups never fail. A key with no translation anywhere comes back
//! verbatim, so missing entries surface as visible raw keys instead of
//! errors.
//!
//! # Examples
//!
//! ```no_run
//! use locale_lens::{Bundle, Localizer};
//!
//! let bundle = Bundle::from_dir("locales")?;
//! let mut localizer = Localizer::new(bundle);
//!
//! localizer.set_language("fr");
//! let greeting = localizer.localize("greeting");
//! # Ok::<(), locale_lens::Error>(())
//! ```

use crate::bundle::{Bundle, BASE_LANGUAGE, DEFAULT_TABLE};
use crate::language;
use crate::settings::{self, Settings};
use fluent_bundle::{FluentArgs, FluentValue};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

/// Callback invoked with the new effective language after a change.
pub type LanguageObserver = Box<dyn Fn(&str)>;

pub struct Localizer {
    bundle: Bundle,
    default_language: String,
    override_language: Option<String>,
    observers: Vec<LanguageObserver>,
    settings_path: Option<PathBuf>,
}

impl Localizer {
    /// Build a localizer over `bundle` with no persistence.
    ///
    /// The default language is detected once, here: the first of the
    /// system's preferred locales that `bundle` ships, else `"en"`.
    pub fn new(bundle: Bundle) -> Self {
        Self::from_parts(bundle, None)
    }

    /// Like [`Localizer::new`], but the explicit language override survives
    /// restarts in a `settings.toml` under the platform config directory.
    pub fn with_settings(bundle: Bundle) -> Self {
        Self::from_parts(bundle, settings::default_path())
    }

    /// Like [`Localizer::with_settings`], with an explicit settings file path.
    pub fn with_settings_at(bundle: Bundle, path: impl Into<PathBuf>) -> Self {
        Self::from_parts(bundle, Some(path.into()))
    }

    fn from_parts(bundle: Bundle, settings_path: Option<PathBuf>) -> Self {
        let default_language = language::detect_default(&bundle.languages());
        let override_language = settings_path
            .as_deref()
            .filter(|path| path.exists())
            .and_then(|path| settings::load_from_path(path).ok())
            .and_then(|settings| settings.language);

        Self {
            bundle,
            default_language,
            override_language,
            observers: Vec::new(),
            settings_path,
        }
    }

    /// The active language identifier.
    pub fn current_language(&self) -> &str {
        self.override_language
            .as_deref()
            .unwrap_or(&self.default_language)
    }

    /// The language detected at construction, used while no override is set.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Override the active language for the rest of this localizer's life.
    ///
    /// The value is not validated; a language with no sub-bundle makes every
    /// lookup take the base fallback path.
    pub fn set_language(&mut self, language: impl Into<String>) {
        let language = language.into();
        tracing::debug!(%language, "language changed");
        self.override_language = Some(language);
        self.persist();
        self.notify();
    }

    /// Drop the explicit override and revert to the detected default.
    pub fn reset_language(&mut self) {
        tracing::debug!(language = %self.default_language, "language reset to default");
        self.override_language = None;
        self.persist();
        self.notify();
    }

    /// Languages the default bundle ships, sorted, `base` excluded.
    pub fn available_languages(&self) -> Vec<LanguageIdentifier> {
        self.bundle.languages()
    }

    /// The default bundle this localizer resolves against.
    pub fn bundle(&self) -> &Bundle {
        &self.bundle
    }

    /// Register a callback for language changes.
    ///
    /// Callbacks run synchronously on every [`Localizer::set_language`] and
    /// [`Localizer::reset_language`], receiving the new effective language.
    pub fn on_language_change(&mut self, observer: impl Fn(&str) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Look up `key` in the default table of the default bundle.
    pub fn localize(&self, key: &str) -> String {
        self.localize_with(key, None, None)
    }

    /// Look up `key` in the named `table`. An empty table name means the
    /// default table.
    pub fn localize_using(&self, key: &str, table: &str) -> String {
        self.localize_with(key, Some(table), None)
    }

    /// Look up `key` in the default table of a caller-supplied bundle.
    pub fn localize_in(&self, key: &str, bundle: &Bundle) -> String {
        self.localize_with(key, None, Some(bundle))
    }

    /// Fully-qualified lookup; `None` falls back to the default table and the
    /// default bundle respectively.
    pub fn localize_with(&self, key: &str, table: Option<&str>, bundle: Option<&Bundle>) -> String {
        self.resolve(key, table, bundle, None)
    }

    /// Look up `key` and substitute the named arguments into its placeables.
    pub fn localize_format(&self, key: &str, args: &[(&str, FluentValue<'_>)]) -> String {
        self.localize_format_using(key, DEFAULT_TABLE, args)
    }

    /// [`Localizer::localize_format`] against a named table.
    pub fn localize_format_using(
        &self,
        key: &str,
        table: &str,
        args: &[(&str, FluentValue<'_>)],
    ) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, value.clone());
        }
        self.resolve(key, Some(table), None, Some(&fluent_args))
    }

    /// Look up `key` and select the plural form for `count`.
    ///
    /// The count is exposed to the message as `$count`; messages select on it
    /// with exact-number variants and CLDR categories.
    pub fn localize_plural(&self, key: &str, count: i64) -> String {
        self.localize_plural_using(key, DEFAULT_TABLE, count)
    }

    /// [`Localizer::localize_plural`] against a named table.
    pub fn localize_plural_using(&self, key: &str, table: &str, count: i64) -> String {
        let mut args = FluentArgs::new();
        args.set("count", count);
        self.resolve(key, Some(table), None, Some(&args))
    }

    // Fallback order: current-language sub-bundle, else the base sub-bundle,
    // else the key itself. A present sub-bundle is authoritative — a key it
    // lacks echoes back without consulting base.
    fn resolve(
        &self,
        key: &str,
        table: Option<&str>,
        bundle: Option<&Bundle>,
        args: Option<&FluentArgs>,
    ) -> String {
        let bundle = bundle.unwrap_or(&self.bundle);
        let table = match table {
            Some(name) if !name.is_empty() => name,
            _ => DEFAULT_TABLE,
        };
        let language = self.current_language();

        if bundle.has_language(language) {
            return bundle
                .format_message(language, table, key, args)
                .unwrap_or_else(|| key.to_string());
        }
        bundle
            .format_message(BASE_LANGUAGE, table, key, args)
            .unwrap_or_else(|| key.to_string())
    }

    fn persist(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        let settings = Settings {
            language: self.override_language.clone(),
        };
        if let Err(error) = settings::save_to_path(&settings, path) {
            tracing::warn!(%error, "failed to persist language settings");
        }
    }

    fn notify(&self) {
        let language = self.current_language();
        for observer in &self.observers {
            observer(language);
        }
    }
}
