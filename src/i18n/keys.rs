// SPDX-License-Identifier: MPL-2.0
//! Message keys looked up directly in the translation table.
//!
//! Keys for text carried by page attributes are not listed here; only
//! strings the code itself renders.

pub const TRACKING_PLACEHOLDER: &str = "tracking-placeholder";
pub const NAME_PLACEHOLDER: &str = "name-placeholder";
pub const EMAIL_PLACEHOLDER: &str = "email-placeholder";
pub const MESSAGE_PLACEHOLDER: &str = "message-placeholder";
pub const ADDITIONAL_INFO_PLACEHOLDER: &str = "additional-info-placeholder";

pub const SERVICE_BIRTH_TITLE: &str = "service-birth-title";
pub const SERVICE_MARRIAGE_TITLE: &str = "service-marriage-title";
pub const SERVICE_DEATH_TITLE: &str = "service-death-title";
pub const SERVICE_FAMILY_TITLE: &str = "service-family-title";

pub const REQUEST_SUCCESS_TITLE: &str = "request-success-title";
pub const REQUEST_SUCCESS_REFERENCE_LABEL: &str = "request-success-reference-label";
pub const REQUEST_SUCCESS_RECEIVED: &str = "request-success-received";
pub const REQUEST_SUCCESS_TRACK_HINT: &str = "request-success-track-hint";

/// Takes a `$reference` argument.
pub const TRACKING_HEADER: &str = "tracking-header";
pub const TRACKING_ERROR_EMPTY: &str = "tracking-error-empty";

pub const CONTACT_THANKS: &str = "contact-thanks";

/// Every key the code renders; each supported locale must resolve all of
/// them, directly or through the fallback locale.
pub const REQUIRED: &[&str] = &[
    TRACKING_PLACEHOLDER,
    NAME_PLACEHOLDER,
    EMAIL_PLACEHOLDER,
    MESSAGE_PLACEHOLDER,
    ADDITIONAL_INFO_PLACEHOLDER,
    SERVICE_BIRTH_TITLE,
    SERVICE_MARRIAGE_TITLE,
    SERVICE_DEATH_TITLE,
    SERVICE_FAMILY_TITLE,
    REQUEST_SUCCESS_TITLE,
    REQUEST_SUCCESS_REFERENCE_LABEL,
    REQUEST_SUCCESS_RECEIVED,
    REQUEST_SUCCESS_TRACK_HINT,
    TRACKING_HEADER,
    TRACKING_ERROR_EMPTY,
    "stage-submitted-title",
    "stage-submitted-desc",
    "stage-verified-title",
    "stage-verified-desc",
    "stage-processing-title",
    "stage-processing-desc",
    "stage-ready-title",
    "stage-ready-desc",
    CONTACT_THANKS,
];
