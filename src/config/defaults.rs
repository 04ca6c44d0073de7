// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.

use crate::i18n::Locale;

// ==========================================================================
// Locale Defaults
// ==========================================================================

/// Locale shown when no preference has been stored.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// Locale whose text fills in for partially translated content.
pub const DEFAULT_FALLBACK_LOCALE: Locale = Locale::En;

// ==========================================================================
// Message Timeout Defaults
// ==========================================================================

/// How long the request confirmation stays on screen (seconds).
pub const DEFAULT_SUCCESS_DISMISS_SECS: u64 = 10;

/// How long the empty-reference tracking error stays on screen (seconds).
pub const DEFAULT_TRACKING_ERROR_DISMISS_SECS: u64 = 3;

/// Minimum message timeout (seconds).
pub const MIN_DISMISS_SECS: u64 = 1;

/// Maximum message timeout (seconds).
pub const MAX_DISMISS_SECS: u64 = 120;
