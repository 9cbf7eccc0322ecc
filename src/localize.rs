// SPDX-License-Identifier: MPL-2.0
//! Extension methods on `str` for localization call sites.
//!
//! Lookup-heavy UI code reads better as `"window-title".localized(&loc)` than
//! as a method chain on the localizer, so every lookup shape is mirrored here
//! as a thin delegation.

use crate::bundle::Bundle;
use crate::localizer::Localizer;
use fluent_bundle::FluentValue;

pub trait Localize {
    /// Look up `self` as a key in the default table.
    fn localized(&self, localizer: &Localizer) -> String;

    /// Look up `self` in the named `table`; an empty name means the default
    /// table.
    fn localized_using(&self, table: &str, localizer: &Localizer) -> String;

    /// Look up `self` in a caller-supplied bundle.
    fn localized_in(&self, bundle: &Bundle, localizer: &Localizer) -> String;

    /// Look up `self` and substitute the named arguments.
    fn localized_format(&self, args: &[(&str, FluentValue<'_>)], localizer: &Localizer) -> String;

    /// Look up `self` and select the plural form for `count`.
    fn localized_plural(&self, count: i64, localizer: &Localizer) -> String;
}

impl Localize for str {
    fn localized(&self, localizer: &Localizer) -> String {
        localizer.localize(self)
    }

    fn localized_using(&self, table: &str, localizer: &Localizer) -> String {
        localizer.localize_using(self, table)
    }

    fn localized_in(&self, bundle: &Bundle, localizer: &Localizer) -> String {
        localizer.localize_in(self, bundle)
    }

    fn localized_format(&self, args: &[(&str, FluentValue<'_>)], localizer: &Localizer) -> String {
        localizer.localize_format(self, args)
    }

    fn localized_plural(&self, count: i64, localizer: &Localizer) -> String {
        localizer.localize_plural(self, count)
    }
}
