// SPDX-License-Identifier: MPL-2.0
//! Default-language detection.
//!
//! Walks the system's ordered preferred locales and picks the first one the
//! bundle actually ships. Matching is exact on the canonical language
//! identifier; a preference for `en-US` does not match a bundle that only
//! ships `en`.

use sys_locale::get_locales;
use unic_langid::LanguageIdentifier;

/// Last-resort language when nothing the system prefers is available.
pub const DEFAULT_LANGUAGE: &str = "en";

/// First entry of `preferred` that parses and is present in `available`.
fn best_match<I>(preferred: I, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier>
where
    I: IntoIterator<Item = String>,
{
    preferred
        .into_iter()
        .filter_map(|tag| tag.parse::<LanguageIdentifier>().ok())
        .find(|candidate| available.contains(candidate))
}

/// Default language for a bundle offering `available` languages.
pub(crate) fn detect_default(available: &[LanguageIdentifier]) -> String {
    best_match(get_locales(), available)
        .map(|language| language.to_string())
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}
