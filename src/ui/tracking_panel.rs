// SPDX-License-Identifier: MPL-2.0
//! The tracking result panel (`#trackingResult`).

use super::notifications::{Kind, Manager, Region};
use crate::dom::Document;
use crate::i18n::{Locale, TranslationTable};
use crate::request::{track, Timeline, TrackingError};
use std::time::Instant;

/// Class that makes the panel visible.
pub const ACTIVE_CLASS: &str = "active";

/// Tracks `input` and shows the outcome in the panel.
///
/// A timeline stays visible. An error is shown and scheduled to hide
/// after its notification lifetime. A page without the panel still gets
/// the result back.
pub fn show_tracking(
    document: &mut impl Document,
    notifications: &mut Manager,
    table: &TranslationTable,
    locale: Locale,
    input: &str,
    now: Instant,
) -> Result<Timeline, TrackingError> {
    let result = track(input);
    let html = match &result {
        Ok(timeline) => timeline.render(table, locale),
        Err(err) => {
            notifications.notify_at(Kind::TrackingError, now);
            err.render(table, locale)
        }
    };

    if let Some(panel) = document.element_by_id(Region::TrackingResult.element_id()) {
        document.set_inner_html(panel, &html);
        document.add_class(panel, ACTIVE_CLASS);
    }

    result
}

/// Hides the panel; its last content is kept.
pub fn hide(document: &mut impl Document) {
    if let Some(panel) = document.element_by_id(Region::TrackingResult.element_id()) {
        document.remove_class(panel, ACTIVE_CLASS);
    }
}
