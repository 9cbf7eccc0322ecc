// SPDX-License-Identifier: MPL-2.0
//! `locale_lens` is a small runtime localization library built on Fluent
//! resource bundles.
//!
//! It resolves keys against a two-level `<language>/<table>.ftl` bundle
//! layout with a `base` fallback, supports switching the active language at
//! runtime (with change observers and optional persistence of the override),
//! and exposes format-argument and plural lookup variants. Lookups never
//! fail: a missing translation comes back as the raw key.
//!
//! ```no_run
//! use locale_lens::{Bundle, Localize, Localizer};
//!
//! let bundle = Bundle::from_dir("locales")?;
//! let mut localizer = Localizer::with_settings(bundle);
//!
//! localizer.set_language("fr");
//! let title = "window-title".localized(&localizer);
//! let items = "items-count".localized_plural(3, &localizer);
//! # Ok::<(), locale_lens::Error>(())
//! ```

#![doc(html_root_url = "https://docs.rs/locale_lens/0.1.0")]

pub mod bundle;
pub mod error;
pub mod language;
pub mod localize;
pub mod localizer;
pub mod settings;

pub use bundle::{Bundle, BASE_LANGUAGE, DEFAULT_TABLE};
pub use error::{Error, Result};
pub use language::DEFAULT_LANGUAGE;
pub use localize::Localize;
pub use localizer::Localizer;

// Callers build format arguments out of this; re-exported so they don't need
// a direct fluent-bundle dependency.
pub use fluent_bundle::FluentValue;
