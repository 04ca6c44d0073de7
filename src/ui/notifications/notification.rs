// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Page region a transient message occupies. One message per region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Top of the request form container.
    RequestForm,
    /// The tracking result panel.
    TrackingResult,
}

impl Region {
    /// Id of the element holding this region's message.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Region::RequestForm => "requestMessages",
            Region::TrackingResult => "trackingResult",
        }
    }
}

/// What the message reports; determines its region and default lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Request accepted, reference number shown (10s).
    RequestSubmitted,
    /// Tracking attempted with an empty reference (3s).
    TrackingError,
}

impl Kind {
    #[must_use]
    pub fn region(self) -> Region {
        match self {
            Kind::RequestSubmitted => Region::RequestForm,
            Kind::TrackingError => Region::TrackingResult,
        }
    }

    #[must_use]
    pub fn default_duration(self) -> Duration {
        match self {
            Kind::RequestSubmitted => Duration::from_secs(10),
            Kind::TrackingError => Duration::from_secs(3),
        }
    }
}

/// A transient message with an auto-dismiss deadline.
///
/// Nothing cancels the deadline, and nothing guarantees it is ever acted on:
/// if the page goes away first, the message simply goes with it.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    created_at: Instant,
    dismiss_after: Duration,
}

impl Notification {
    pub fn new(kind: Kind) -> Self {
        Self::created_at(kind, Instant::now())
    }

    /// Creates a notification as if it had been shown at `created_at`.
    pub fn created_at(kind: Kind, created_at: Instant) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            created_at,
            dismiss_after: kind.default_duration(),
        }
    }

    /// Overrides the kind's default lifetime.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.dismiss_after = duration;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn region(&self) -> Region {
        self.kind.region()
    }

    #[must_use]
    pub fn expires_at(&self) -> Instant {
        self.created_at + self.dismiss_after
    }

    #[must_use]
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at()
    }
}
