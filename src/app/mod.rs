// SPDX-License-Identifier: MPL-2.0
//! Page session state and orchestration between localization and the
//! request/tracking panels.
//!
//! The `Session` wires together the localization engine, the page document,
//! and the transient message manager, and translates user actions into
//! document updates. Everything runs synchronously inside the call that
//! triggered it.

pub mod page;
pub mod paths;
pub mod preferences;

use crate::config::Config;
use crate::dom::Document;
use crate::error::Result;
use crate::i18n::{handle_outside_click, toggle_locale_menu, Locale, LocalizationEngine, TranslationTable};
use crate::request::{self, contact, validation, DocumentRequest, DocumentType, FieldCue, SubmissionReceipt, Timeline, TrackingError};
use crate::ui::{self, notifications::Manager, request_form, tracking_panel};
use preferences::PreferenceStore;
use std::time::Instant;

/// Startup options from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale to switch to right after the stored preference is applied.
    pub lang: Option<String>,
    pub data_dir: Option<String>,
    pub config_dir: Option<String>,
}

pub struct Session<S: PreferenceStore, D: Document> {
    engine: LocalizationEngine<S>,
    document: D,
    notifications: Manager,
}

impl<S: PreferenceStore, D: Document> Session<S, D> {
    /// Opens a page session and renders the restored locale.
    ///
    /// A `lang` override is applied on top, exactly as if the visitor had
    /// picked it from the menu.
    pub fn new(config: &Config, store: S, document: D, lang: Option<&str>) -> Result<Self> {
        let profile = config.page_profile()?;
        let table = TranslationTable::embedded(&profile)?;
        let mut session = Self {
            engine: LocalizationEngine::new(profile, table, store),
            document,
            notifications: Manager::from_config(&config.messages),
        };
        session.engine.start(&mut session.document);

        if let Some(code) = lang {
            let locale: Locale = code.parse()?;
            session.switch_locale(locale);
        }
        Ok(session)
    }

    #[must_use]
    pub fn engine(&self) -> &LocalizationEngine<S> {
        &self.engine
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager {
        &self.notifications
    }

    #[must_use]
    pub fn active_locale(&self) -> Locale {
        self.engine.active_locale()
    }

    pub fn switch_locale(&mut self, locale: Locale) {
        self.engine.switch_locale(&mut self.document, locale);
    }

    /// Language button click.
    pub fn toggle_menu(&mut self) -> bool {
        toggle_locale_menu(&mut self.document)
    }

    /// Click anywhere on the page.
    pub fn click(&mut self, target: crate::dom::NodeId) {
        handle_outside_click(&mut self.document, target);
    }

    pub fn track_at(&mut self, input: &str, now: Instant) -> std::result::Result<Timeline, TrackingError> {
        tracking_panel::show_tracking(
            &mut self.document,
            &mut self.notifications,
            self.engine.table(),
            self.engine.active_locale(),
            input,
            now,
        )
    }

    pub fn track(&mut self, input: &str) -> std::result::Result<Timeline, TrackingError> {
        self.track_at(input, Instant::now())
    }

    /// Submits a request in the active locale and shows its confirmation.
    pub fn submit_at(&mut self, mut request: DocumentRequest, now: Instant) -> Result<SubmissionReceipt> {
        request.locale = self.engine.active_locale();
        let receipt = request::submit(request)?;
        request_form::show_receipt(
            &mut self.document,
            &mut self.notifications,
            self.engine.table(),
            self.engine.active_locale(),
            &receipt,
            now,
        );
        Ok(receipt)
    }

    pub fn submit(&mut self, request: DocumentRequest) -> Result<SubmissionReceipt> {
        self.submit_at(request, Instant::now())
    }

    /// Service card link: the document type a card heading stands for.
    #[must_use]
    pub fn document_type_for_heading(&self, heading: &str) -> Option<DocumentType> {
        DocumentType::from_heading(self.engine.table(), heading)
    }

    /// Contact form submission.
    #[must_use]
    pub fn contact(&self) -> String {
        contact::acknowledge(self.engine.table(), self.engine.active_locale())
    }

    /// Email and phone fields losing focus.
    pub fn check_contact_fields(&mut self) -> (FieldCue, FieldCue) {
        (
            request_form::check_field(&mut self.document, "email", validation::validate_email),
            request_form::check_field(&mut self.document, "phone", validation::validate_phone),
        )
    }

    /// Dismisses messages whose deadline has passed at `now`.
    pub fn tick_at(&mut self, now: Instant) -> usize {
        ui::dismiss_expired(&mut self.document, &mut self.notifications, now)
    }

    /// Ends the session, handing back the preference store.
    pub fn into_store(self) -> S {
        self.engine.into_store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;
    use crate::error::Error;
    use preferences::MemoryStore;
    use std::time::Duration;

    fn session(lang: Option<&str>) -> Result<Session<MemoryStore, MemoryDocument>> {
        Session::new(&Config::default(), MemoryStore::new(), page::skeleton(), lang)
    }

    #[test]
    fn new_session_renders_default_locale() {
        let session = session(None).unwrap();
        assert_eq!(session.active_locale(), Locale::En);
        let root = session.document().root();
        assert_eq!(session.document().attribute(root, "dir"), Some("ltr"));
    }

    #[test]
    fn lang_flag_overrides_and_persists() {
        let session = session(Some("ar")).unwrap();
        assert_eq!(session.active_locale(), Locale::Ar);
        assert_eq!(session.document().title(), "وثائق المغرب - الوثائق المدنية");
        let store = session.into_store();
        assert_eq!(store.get(preferences::PREFERRED_LANGUAGE_KEY).as_deref(), Some("ar"));
    }

    #[test]
    fn unknown_lang_flag_is_an_error() {
        assert!(matches!(session(Some("xx")), Err(Error::UnknownLocale(_))));
    }

    #[test]
    fn submission_uses_active_locale() {
        let mut session = session(Some("fr")).unwrap();
        let now = Instant::now();
        let receipt = session
            .submit_at(DocumentRequest::new(DocumentType::Death, Locale::En), now)
            .unwrap();
        assert_eq!(receipt.request.locale, Locale::Fr);

        let region = session.document().element_by_id("requestMessages").unwrap();
        assert!(session.document().inner_html(region).contains("Numéro de référence"));

        assert_eq!(session.tick_at(now + Duration::from_secs(10)), 1);
        assert_eq!(session.document().inner_html(region), "");
    }

    #[test]
    fn card_headings_map_after_switch() {
        let mut session = session(None).unwrap();
        session.switch_locale(Locale::Ber);
        let card = session.document().first_by_class("service-card").unwrap();
        let heading = session
            .document()
            .elements()
            .into_iter()
            .find(|&n| n != card && session.document().contains(card, n))
            .unwrap();
        let text = session.document().inner_html(heading).to_string();
        assert_eq!(session.document_type_for_heading(&text), Some(DocumentType::Birth));
    }

    #[test]
    fn menu_toggles_and_closes_on_outside_click() {
        let mut session = session(None).unwrap();
        assert!(session.toggle_menu());
        let hero = session.document().first_by_class("hero-title").unwrap();
        session.click(hero);
        let menu = session.document().element_by_id("langDropdown").unwrap();
        assert!(!session.document().has_class(menu, "show"));
    }

    #[test]
    fn click_on_node_from_another_page_closes_menu() {
        let mut other = page::skeleton();
        let body = other.body().unwrap();
        let mut foreign = body;
        for _ in 0..200 {
            foreign = other.append(body, crate::dom::Element::new("p"));
        }

        let mut session = session(None).unwrap();
        assert!(session.toggle_menu());
        session.click(foreign);
        let menu = session.document().element_by_id("langDropdown").unwrap();
        assert!(!session.document().has_class(menu, "show"));
    }

    #[test]
    fn contact_and_field_checks() {
        let mut session = session(None).unwrap();
        assert!(session.contact().starts_with("Thank you"));
        assert_eq!(session.check_contact_fields(), (FieldCue::Neutral, FieldCue::Neutral));
    }
}
