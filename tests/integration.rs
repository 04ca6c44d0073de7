// SPDX-License-Identifier: MPL-2.0
use morocco_docs::app::page;
use morocco_docs::app::preferences::{FileStore, PreferenceStore, PREFERRED_LANGUAGE_KEY};
use morocco_docs::app::Session;
use morocco_docs::config::{self, Config, GeneralConfig, PageConfig};
use morocco_docs::dom::{Document, Element, MemoryDocument};
use morocco_docs::i18n::{Locale, LocalizationEngine, PageProfile, TranslationTable};
use morocco_docs::request::{DocumentRequest, DocumentType, TrackingError};
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[test]
fn test_language_survives_reload_through_file_store() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let store_path = dir.path().join("storage.cbor");

    // First visit: nothing stored, default applies, visitor picks Arabic.
    let (store, warning) = FileStore::open_at(store_path.clone());
    assert!(warning.is_none());
    let mut session =
        Session::new(&Config::default(), store, page::skeleton(), None).expect("session");
    assert_eq!(session.active_locale(), Locale::En);

    session.switch_locale(Locale::Ar);
    let root = session.document().root();
    assert_eq!(session.document().attribute(root, "dir"), Some("rtl"));
    let indicator = session.document().first_by_class("current-lang").unwrap();
    assert_eq!(session.document().inner_html(indicator), "AR");
    drop(session);

    // Reload: a fresh store and page restore Arabic.
    let (store, warning) = FileStore::open_at(store_path);
    assert!(warning.is_none());
    assert_eq!(store.get(PREFERRED_LANGUAGE_KEY).as_deref(), Some("ar"));
    let session = Session::new(&Config::default(), store, page::skeleton(), None).expect("session");
    assert_eq!(session.active_locale(), Locale::Ar);
    let body = session.document().body().unwrap();
    assert!(session.document().has_class(body, "lang-ar"));
}

#[test]
fn test_corrupt_store_falls_back_to_default() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let store_path = dir.path().join("storage.cbor");
    std::fs::write(&store_path, b"definitely not cbor").unwrap();

    let (store, warning) = FileStore::open_at(store_path);
    assert!(warning.is_some());
    let session = Session::new(&Config::default(), store, page::skeleton(), None).expect("session");
    assert_eq!(session.active_locale(), Locale::En);
}

#[test]
fn test_config_file_drives_page_profile() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let config = Config {
        general: GeneralConfig {
            default_locale: Locale::Fr,
            detect_system_locale: Some(false),
        },
        page: PageConfig {
            supported_locales: vec![Locale::Fr, Locale::Ar],
            fallback_locale: Locale::Fr,
        },
        ..Config::default()
    };
    config::save_to_path(&config, &config_path).expect("Failed to write config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config file");
    assert_eq!(loaded, config);

    let session = Session::new(
        &loaded,
        morocco_docs::app::preferences::MemoryStore::new(),
        page::skeleton(),
        None,
    )
    .expect("session");
    assert_eq!(session.active_locale(), Locale::Fr);
    assert_eq!(session.document().title(), "Morocco Docs - Documents Civils");
    assert_eq!(session.engine().table().locales(), vec![Locale::Fr, Locale::Ar]);
}

#[test]
fn test_request_and_tracking_flow() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (store, _) = FileStore::open_in(Some(dir.path().to_path_buf()));
    let mut session =
        Session::new(&Config::default(), store, page::skeleton(), Some("fr")).expect("session");
    let start = Instant::now();

    let receipt = session
        .submit_at(DocumentRequest::new(DocumentType::Marriage, Locale::En), start)
        .expect("submission");
    let reference = receipt.reference.to_string();

    let timeline = session.track_at(&reference, start).expect("timeline");
    assert_eq!(timeline.reference(), reference);

    let panel = session.document().element_by_id("trackingResult").unwrap();
    let html = session.document().inner_html(panel).to_string();
    assert!(html.contains(&format!("Suivi de la demande : {reference}")));
    assert!(session.document().has_class(panel, "active"));

    assert_eq!(
        session.track_at("   ", start),
        Err(TrackingError::EmptyReference)
    );
    assert_eq!(session.tick_at(start + Duration::from_secs(3)), 1);
    assert!(!session.document().has_class(panel, "active"));

    assert_eq!(session.tick_at(start + Duration::from_secs(10)), 1);
    let messages = session.document().element_by_id("requestMessages").unwrap();
    assert_eq!(session.document().inner_html(messages), "");
}

#[test]
fn test_partially_translated_node_uses_fallback() {
    let mut doc = MemoryDocument::new();
    let body = doc.body().unwrap();
    let legacy = doc.append(
        body,
        Element::new("p")
            .attr("data-en", "Opening hours")
            .attr("data-fr", "Horaires")
            .html("Opening hours"),
    );

    let profile = PageProfile::default();
    let table = TranslationTable::embedded(&profile).unwrap();
    let mut engine = LocalizationEngine::new(
        profile,
        table,
        morocco_docs::app::preferences::MemoryStore::new(),
    );
    engine.start(&mut doc);

    engine.switch_locale(&mut doc, Locale::Ber);
    assert_eq!(doc.inner_html(legacy), "Opening hours");
    engine.switch_locale(&mut doc, Locale::Fr);
    assert_eq!(doc.inner_html(legacy), "Horaires");
}
