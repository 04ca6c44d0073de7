// SPDX-License-Identifier: MPL-2.0
//! Document requests, tracking, and the contact form.
//!
//! None of these talk to a backend: submissions get a synthetic reference
//! number and tracking always answers with the same sample timeline.

pub mod contact;
pub mod document;
pub mod reference;
pub mod tracking;
pub mod validation;

pub use document::{submit, DocumentRequest, DocumentType, SubmissionReceipt};
pub use reference::ReferenceNumber;
pub use tracking::{track, Stage, StageStatus, Timeline, TrackingError};
pub use validation::{field_cue, validate_email, validate_phone, FieldCue};
