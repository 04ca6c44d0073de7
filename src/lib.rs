// SPDX-License-Identifier: MPL-2.0
//! `morocco_docs` is the localization engine behind a multilingual civil
//! document service for Morocco.
//!
//! It switches a page between English, French, Arabic (right-to-left), and
//! Tamazight, remembers the visitor's choice, and renders the localized
//! feedback of the request and tracking sections.

#![doc(html_root_url = "https://docs.rs/morocco_docs/0.3.0")]

pub mod app;
pub mod config;
pub mod dom;
pub mod error;
pub mod i18n;
pub mod request;
pub mod ui;
