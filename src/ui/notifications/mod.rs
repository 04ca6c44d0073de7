// SPDX-License-Identifier: MPL-2.0
//! Transient page messages with auto-dismiss deadlines.
//!
//! # Components
//!
//! - [`notification`] - `Notification` with its kind, region, and deadline
//! - [`manager`] - `Manager` keeping one message per region and expiring them
//!
//! Deadlines are checked when the caller ticks the manager; expired
//! notifications are handed back so the caller can clear their regions.

mod manager;
mod notification;

pub use manager::Manager;
pub use notification::{Kind, Notification, NotificationId, Region};
