// SPDX-License-Identifier: MPL-2.0
//! Page-side feedback for the request and tracking sections.
//!
//! - [`tracking_panel`] - Tracking results and errors in `#trackingResult`
//! - [`request_form`] - Submission confirmations and field cues
//! - [`notifications`] - Auto-dismiss deadlines for transient messages

pub mod notifications;
pub mod request_form;
pub mod tracking_panel;

use crate::dom::Document;
use notifications::{Manager, Region};
use std::time::Instant;

/// Removes every message whose deadline has passed at `now`.
///
/// Returns how many messages were dismissed.
pub fn dismiss_expired(document: &mut impl Document, notifications: &mut Manager, now: Instant) -> usize {
    let expired = notifications.tick_at(now);
    for notification in &expired {
        match notification.region() {
            Region::RequestForm => request_form::clear_message(document),
            Region::TrackingResult => tracking_panel::hide(document),
        }
    }
    if !expired.is_empty() {
        tracing::debug!(count = expired.len(), "transient messages dismissed");
    }
    expired.len()
}
