// SPDX-License-Identifier: MPL-2.0
//! Localization with Fluent.
//!
//! Translations are embedded at compile time from `assets/i18n/*.ftl`.
//! The locale comes from the `--lang` flag, then the config file, then the
//! OS, and falls back to `en-US`.

pub mod fluent;
