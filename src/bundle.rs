// SPDX-License-Identifier: MPL-2.0
//! Loading of Fluent resource bundles.
//!
//! A bundle is a two-level tree of string tables: one sub-directory per
//! language, each holding one or more `<table>.ftl` files. A `base`
//! sub-directory, when present, acts as the fallback consulted for languages
//! that have no sub-directory of their own.
//!
//! ```text
//! locales/
//! ├── base/
//! │   └── main.ftl
//! ├── en/
//! │   ├── main.ftl
//! │   └── errors.ftl
//! └── fr/
//!     └── main.ftl
//! ```

use crate::error::Result;
use crate::language::DEFAULT_LANGUAGE;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Table consulted when the caller does not name one.
pub const DEFAULT_TABLE: &str = "main";

/// Name of the fallback sub-bundle directory.
pub const BASE_LANGUAGE: &str = "base";

struct LanguageBundle {
    tables: HashMap<String, FluentBundle<FluentResource>>,
}

/// A loaded resource bundle. Read-only after construction.
pub struct Bundle {
    languages: HashMap<String, LanguageBundle>,
}

impl Bundle {
    /// Load a bundle from a directory laid out as `<root>/<language>/<table>.ftl`.
    ///
    /// Directories without any `.ftl` file are skipped. Malformed FTL entries
    /// are dropped individually; the rest of the file stays usable.
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let mut languages = HashMap::new();

        for entry in fs::read_dir(root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let Some(language) = entry.file_name().to_str().map(String::from) else {
                continue;
            };

            let mut tables = HashMap::new();
            for file in fs::read_dir(entry.path())? {
                let file = file?;
                let path = file.path();
                if path.extension().and_then(|e| e.to_str()) != Some("ftl") {
                    continue;
                }
                let Some(table) = path.file_stem().and_then(|s| s.to_str()) else {
                    continue;
                };
                let source = fs::read_to_string(&path)?;
                tables.insert(table.to_string(), parse_table(&language, &source));
            }

            if !tables.is_empty() {
                languages.insert(language, LanguageBundle { tables });
            }
        }

        tracing::debug!(
            root = %root.display(),
            languages = languages.len(),
            "loaded resource bundle"
        );
        Ok(Self { languages })
    }

    /// Build a bundle from assets embedded with `rust-embed`.
    ///
    /// Asset paths must follow the same `<language>/<table>.ftl` layout as
    /// [`Bundle::from_dir`]; anything else is ignored.
    pub fn from_embedded<A: RustEmbed>() -> Self {
        let mut languages: HashMap<String, LanguageBundle> = HashMap::new();

        for file in A::iter() {
            let path = file.as_ref();
            let Some(rest) = path.strip_suffix(".ftl") else {
                continue;
            };
            let Some((language, table)) = rest.split_once('/') else {
                continue;
            };
            if table.contains('/') {
                continue;
            }
            let Some(content) = A::get(path) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            languages
                .entry(language.to_string())
                .or_insert_with(|| LanguageBundle {
                    tables: HashMap::new(),
                })
                .tables
                .insert(table.to_string(), parse_table(language, &source));
        }

        Self { languages }
    }

    /// Whether a sub-bundle exists for `language`.
    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Languages with a sub-bundle, sorted, `base` excluded.
    pub fn languages(&self) -> Vec<LanguageIdentifier> {
        let mut languages: Vec<LanguageIdentifier> = self
            .languages
            .keys()
            .filter(|name| name.as_str() != BASE_LANGUAGE)
            .filter_map(|name| name.parse().ok())
            .collect();
        languages.sort_unstable_by(|a, b| a.to_string().cmp(&b.to_string()));
        languages
    }

    /// Format the message `key` from `language`'s `table`.
    ///
    /// Returns `None` when the sub-bundle, table, or message is absent, or
    /// when the message formats to an empty string.
    pub(crate) fn format_message(
        &self,
        language: &str,
        table: &str,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> Option<String> {
        let bundle = self.languages.get(language)?.tables.get(table)?;
        let message = bundle.get_message(key)?;
        let pattern = message.value()?;

        let mut errors = Vec::new();
        let value = bundle.format_pattern(pattern, args, &mut errors).into_owned();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}

fn parse_table(language: &str, source: &str) -> FluentBundle<FluentResource> {
    let locale = language
        .parse::<LanguageIdentifier>()
        .or_else(|_| DEFAULT_LANGUAGE.parse())
        .unwrap_or_default();

    let resource = match FluentResource::try_new(source.to_string()) {
        Ok(resource) => resource,
        Err((partial, errors)) => {
            for error in &errors {
                tracing::warn!(language, %error, "skipping malformed FTL entry");
            }
            partial
        }
    };

    let mut bundle = FluentBundle::new(vec![locale]);
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        for error in &errors {
            tracing::warn!(language, %error, "dropping conflicting FTL entry");
        }
    }
    bundle
}
