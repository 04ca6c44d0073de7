// SPDX-License-Identifier: MPL-2.0
//! Simulated request tracking.
//!
//! There is no backend: any non-empty reference yields the same four-stage
//! sample timeline.

use crate::dom::escape_text;
use crate::i18n::{keys, Locale, TranslationTable};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrackingError {
    #[error("no reference number entered")]
    EmptyReference,
}

impl TrackingError {
    /// i18n key of the inline message shown for this error.
    #[must_use]
    pub fn message_key(&self) -> &'static str {
        match self {
            TrackingError::EmptyReference => keys::TRACKING_ERROR_EMPTY,
        }
    }

    /// Inline error markup for the tracking panel.
    #[must_use]
    pub fn render(&self, table: &TranslationTable, locale: Locale) -> String {
        format!(
            "<div class=\"error-message\">{}</div>",
            table.tr(locale, self.message_key(), &[])
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Submitted,
    Verified,
    Processing,
    Ready,
}

impl StageStatus {
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            StageStatus::Submitted => "stage-submitted-title",
            StageStatus::Verified => "stage-verified-title",
            StageStatus::Processing => "stage-processing-title",
            StageStatus::Ready => "stage-ready-title",
        }
    }

    #[must_use]
    pub fn description_key(self) -> &'static str {
        match self {
            StageStatus::Submitted => "stage-submitted-desc",
            StageStatus::Verified => "stage-verified-desc",
            StageStatus::Processing => "stage-processing-desc",
            StageStatus::Ready => "stage-ready-desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub status: StageStatus,
    /// Sample date and time, present only once the stage is completed.
    pub reached_at: Option<(&'static str, &'static str)>,
}

impl Stage {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.reached_at.is_some()
    }
}

const SAMPLE_STAGES: [Stage; 4] = [
    Stage {
        status: StageStatus::Submitted,
        reached_at: Some(("2024-10-25", "10:30")),
    },
    Stage {
        status: StageStatus::Verified,
        reached_at: Some(("2024-10-26", "14:20")),
    },
    Stage {
        status: StageStatus::Processing,
        reached_at: Some(("2024-10-27", "09:15")),
    },
    Stage {
        status: StageStatus::Ready,
        reached_at: None,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    reference: String,
    stages: [Stage; 4],
}

impl Timeline {
    /// The reference as the user typed it, trimmed.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Header plus stage list markup for `locale`.
    #[must_use]
    pub fn render(&self, table: &TranslationTable, locale: Locale) -> String {
        let reference = escape_text(&self.reference);
        let mut html = format!(
            "<h3>{}</h3><div class=\"status-timeline\">",
            table.tr(locale, keys::TRACKING_HEADER, &[("reference", &reference)])
        );

        for stage in &self.stages {
            let class = if stage.is_completed() {
                "status-item completed"
            } else {
                "status-item"
            };
            html.push_str(&format!(
                "<div class=\"{class}\"><h4>{}</h4><p>{}</p>",
                table.tr(locale, stage.status.title_key(), &[]),
                table.tr(locale, stage.status.description_key(), &[]),
            ));
            if let Some((date, time)) = stage.reached_at {
                html.push_str(&format!("<small class=\"status-date\">{date} {time}</small>"));
            }
            html.push_str("</div>");
        }

        html.push_str("</div>");
        html
    }
}

/// Looks up the status of a request.
///
/// Whitespace-only input is an error; anything else gets the sample timeline.
pub fn track(input: &str) -> Result<Timeline, TrackingError> {
    let reference = input.trim();
    if reference.is_empty() {
        return Err(TrackingError::EmptyReference);
    }

    tracing::debug!(reference, "tracking request");
    Ok(Timeline {
        reference: reference.to_string(),
        stages: SAMPLE_STAGES,
    })
}
