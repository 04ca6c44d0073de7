// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` keeps at most one message per page region and reports
//! which ones have passed their deadline on each tick.

use super::notification::{Kind, Notification, NotificationId, Region};
use crate::config::MessagesConfig;
use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct Manager {
    active: Vec<Notification>,
    durations: Option<(Duration, Duration)>,
}

impl Manager {
    /// Creates a manager using each kind's default lifetime.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager using the configured message lifetimes.
    #[must_use]
    pub fn from_config(messages: &MessagesConfig) -> Self {
        Self {
            active: Vec::new(),
            durations: Some((messages.success_dismiss(), messages.tracking_error_dismiss())),
        }
    }

    /// Shows a new message of `kind`, shown as of `now`.
    pub fn notify_at(&mut self, kind: Kind, now: Instant) -> NotificationId {
        let mut notification = Notification::created_at(kind, now);
        if let Some((submitted, tracking_error)) = self.durations {
            notification = notification.auto_dismiss(match kind {
                Kind::RequestSubmitted => submitted,
                Kind::TrackingError => tracking_error,
            });
        }
        let id = notification.id();
        self.push(notification);
        id
    }

    pub fn notify(&mut self, kind: Kind) -> NotificationId {
        self.notify_at(kind, Instant::now())
    }

    /// Shows `notification`, replacing any message already in its region.
    ///
    /// Returns the replaced message, if any.
    pub fn push(&mut self, notification: Notification) -> Option<Notification> {
        let replaced = self
            .active
            .iter()
            .position(|n| n.region() == notification.region())
            .map(|pos| self.active.remove(pos));
        self.active.push(notification);
        replaced
    }

    /// Removes a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.active.iter().position(|n| n.id() == id) {
            self.active.remove(pos);
            return true;
        }
        false
    }

    /// Drops and returns every notification whose deadline has passed at `now`.
    pub fn tick_at(&mut self, now: Instant) -> Vec<Notification> {
        let (expired, remaining): (Vec<_>, Vec<_>) = self
            .active
            .drain(..)
            .partition(|n| n.is_expired_at(now));
        self.active = remaining;
        expired
    }

    pub fn tick(&mut self) -> Vec<Notification> {
        self.tick_at(Instant::now())
    }

    /// The message currently shown in `region`.
    #[must_use]
    pub fn active_in(&self, region: Region) -> Option<&Notification> {
        self.active.iter().find(|n| n.region() == region)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}
