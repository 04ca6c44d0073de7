// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! # Features
//!
//! - Four site locales, Arabic rendered right-to-left
//! - Fluent translation table embedded at compile time, with a fallback locale
//! - Per-page profiles selecting which locales a page ships
//! - Runtime language switching that rewrites translatable page nodes and
//!   persists the choice

pub mod engine;
pub mod fluent;
pub mod keys;
pub mod locale;

pub use engine::{dismiss_locale_menu, handle_outside_click, toggle_locale_menu, LocalizationEngine};
pub use fluent::TranslationTable;
pub use locale::{Direction, Locale, PageProfile};
