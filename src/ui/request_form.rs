// SPDX-License-Identifier: MPL-2.0
//! Request form feedback: the confirmation message and field cues.

use super::notifications::{Kind, Manager, NotificationId, Region};
use crate::dom::Document;
use crate::i18n::{Locale, TranslationTable};
use crate::request::{field_cue, FieldCue, SubmissionReceipt};
use std::time::Instant;

const BORDER_COLOR: &str = "border-color";

/// Shows the confirmation for `receipt` at the top of the form, replacing
/// any earlier message, and schedules its removal.
pub fn show_receipt(
    document: &mut impl Document,
    notifications: &mut Manager,
    table: &TranslationTable,
    locale: Locale,
    receipt: &SubmissionReceipt,
    now: Instant,
) -> NotificationId {
    if let Some(region) = document.element_by_id(Region::RequestForm.element_id()) {
        document.set_inner_html(region, &receipt.render(table, locale));
    }
    notifications.notify_at(Kind::RequestSubmitted, now)
}

/// Removes the form's message, if any.
pub fn clear_message(document: &mut impl Document) {
    if let Some(region) = document.element_by_id(Region::RequestForm.element_id()) {
        document.set_inner_html(region, "");
    }
}

/// Re-checks the field `field_id` after it loses focus and colors its
/// border accordingly.
pub fn check_field(
    document: &mut impl Document,
    field_id: &str,
    validator: fn(&str) -> bool,
) -> FieldCue {
    let Some(field) = document.element_by_id(field_id) else {
        return FieldCue::Neutral;
    };

    let value = document.attribute(field, "value").unwrap_or_default().to_string();
    let cue = field_cue(&value, validator);
    let style = with_border_color(document.attribute(field, "style").unwrap_or_default(), cue.border_color());
    document.set_attribute(field, "style", &style);
    cue
}

/// Rewrites the `border-color` declaration of an inline style, leaving the
/// other declarations in place. `None` removes it.
fn with_border_color(style: &str, color: Option<&str>) -> String {
    let mut declarations: Vec<String> = style
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .filter(|decl| {
            let property = decl.split(':').next().unwrap_or_default();
            !property.trim().eq_ignore_ascii_case(BORDER_COLOR)
        })
        .map(str::to_string)
        .collect();
    if let Some(color) = color {
        declarations.push(format!("{BORDER_COLOR}: {color}"));
    }
    declarations.join("; ")
}
