// SPDX-License-Identifier: MPL-2.0
//! Civil document requests and their submission receipts.

use super::reference::ReferenceNumber;
use crate::error::{Error, Result};
use crate::i18n::{keys, Locale, TranslationTable};
use chrono::{DateTime, Local};
use std::fmt;
use std::str::FromStr;

/// Kind of civil document a visitor can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    Birth,
    Marriage,
    Death,
    Family,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Birth,
        DocumentType::Marriage,
        DocumentType::Death,
        DocumentType::Family,
    ];

    /// Form value of the type, as used by the document type selector.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            DocumentType::Birth => "birth",
            DocumentType::Marriage => "marriage",
            DocumentType::Death => "death",
            DocumentType::Family => "family",
        }
    }

    /// Key of the service card heading for this type.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            DocumentType::Birth => keys::SERVICE_BIRTH_TITLE,
            DocumentType::Marriage => keys::SERVICE_MARRIAGE_TITLE,
            DocumentType::Death => keys::SERVICE_DEATH_TITLE,
            DocumentType::Family => keys::SERVICE_FAMILY_TITLE,
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.value().eq_ignore_ascii_case(value))
    }

    /// Maps a service card heading, in any loaded locale, to its type.
    #[must_use]
    pub fn from_heading(table: &TranslationTable, heading: &str) -> Option<Self> {
        let heading = heading.trim();
        let locales = table.locales();
        Self::ALL.into_iter().find(|kind| {
            locales
                .iter()
                .any(|&locale| table.get(locale, kind.title_key()).as_deref() == Some(heading))
        })
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for DocumentType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_value(s).ok_or_else(|| Error::Config(format!("unknown document type: {s}")))
    }
}

/// Data captured by the document request form.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRequest {
    pub document_type: DocumentType,
    pub copies: u32,
    pub full_name: String,
    pub birth_date: String,
    pub birth_place: String,
    pub father_name: String,
    pub mother_name: String,
    pub cin_number: String,
    pub email: String,
    pub phone: String,
    pub additional_info: String,
    pub locale: Locale,
    pub submitted_at: DateTime<Local>,
}

impl DocumentRequest {
    /// A request for one copy of `document_type`, stamped now.
    #[must_use]
    pub fn new(document_type: DocumentType, locale: Locale) -> Self {
        Self {
            document_type,
            copies: 1,
            full_name: String::new(),
            birth_date: String::new(),
            birth_place: String::new(),
            father_name: String::new(),
            mother_name: String::new(),
            cin_number: String::new(),
            email: String::new(),
            phone: String::new(),
            additional_info: String::new(),
            locale,
            submitted_at: Local::now(),
        }
    }
}

/// Outcome of a submitted request.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub reference: ReferenceNumber,
    pub request: DocumentRequest,
}

impl SubmissionReceipt {
    /// Success message markup in `locale`.
    #[must_use]
    pub fn render(&self, table: &TranslationTable, locale: Locale) -> String {
        format!(
            "<div class=\"success-message\">\
             <h3>{}</h3>\
             <p><strong>{}</strong> {}</p>\
             <p>{}</p>\
             <p>{}</p>\
             </div>",
            table.tr(locale, keys::REQUEST_SUCCESS_TITLE, &[]),
            table.tr(locale, keys::REQUEST_SUCCESS_REFERENCE_LABEL, &[]),
            self.reference,
            table.tr(locale, keys::REQUEST_SUCCESS_RECEIVED, &[]),
            table.tr(locale, keys::REQUEST_SUCCESS_TRACK_HINT, &[]),
        )
    }
}

/// Accepts a request and assigns it a fresh reference number.
///
/// Nothing is sent anywhere; the request is only logged.
pub fn submit(request: DocumentRequest) -> Result<SubmissionReceipt> {
    let reference = ReferenceNumber::generate()?;
    tracing::info!(
        %reference,
        document_type = %request.document_type,
        copies = request.copies,
        locale = %request.locale,
        submitted_at = %request.submitted_at.to_rfc3339(),
        "document request submitted"
    );
    Ok(SubmissionReceipt { reference, request })
}
