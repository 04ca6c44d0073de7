// SPDX-License-Identifier: MPL-2.0
//! The localization engine: owns the active locale and keeps a document in
//! sync with it.
//!
//! Rendering is best-effort. A node with no usable text for the requested
//! locale (or, for partially translated nodes, the fallback locale) keeps
//! whatever it showed before; a missing target element is skipped.

use super::fluent::TranslationTable;
use super::keys;
use super::locale::{Locale, PageProfile};
use crate::app::preferences::{PreferenceStore, PREFERRED_LANGUAGE_KEY};
use crate::dom::{Document, NodeId};

/// Root attribute carrying the language code.
const LANG_ATTR: &str = "lang";
/// Root attribute carrying the text direction.
const DIR_ATTR: &str = "dir";
/// Element showing the active locale's indicator.
const INDICATOR_CLASS: &str = "current-lang";
/// The language menu and the control that opens it.
const MENU_ID: &str = "langDropdown";
const MENU_BUTTON_ID: &str = "langBtn";
/// Class marking the menu as open.
const MENU_OPEN_CLASS: &str = "show";
/// Body classes marking the active language all share this prefix.
const BODY_CLASS_PREFIX: &str = "lang-";

/// Inputs whose placeholders come from the translation table by key.
const KEYED_PLACEHOLDERS: [(&str, &str); 2] = [
    ("trackingNumber", keys::TRACKING_PLACEHOLDER),
    ("additionalInfo", keys::ADDITIONAL_INFO_PLACEHOLDER),
];

/// Coverage of a node's per-locale attributes relative to the page profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coverage {
    None,
    Partial,
    Full,
}

pub struct LocalizationEngine<S: PreferenceStore> {
    profile: PageProfile,
    table: TranslationTable,
    store: S,
    active: Locale,
}

impl<S: PreferenceStore> LocalizationEngine<S> {
    /// Creates the engine for one page session.
    ///
    /// The active locale is restored from `store`; a missing, unknown, or
    /// unsupported stored value yields the profile's default. The document
    /// is not touched until [`start`](Self::start).
    pub fn new(profile: PageProfile, table: TranslationTable, store: S) -> Self {
        let active = restore_locale(&store, &profile);
        Self {
            profile,
            table,
            store,
            active,
        }
    }

    /// Applies the restored locale to a freshly loaded document.
    ///
    /// The stored preference is not rewritten, so a choice this page does
    /// not offer survives for pages that do.
    pub fn start(&mut self, document: &mut impl Document) {
        self.apply(document, self.active);
    }

    #[must_use]
    pub fn active_locale(&self) -> Locale {
        self.active
    }

    #[must_use]
    pub fn profile(&self) -> &PageProfile {
        &self.profile
    }

    #[must_use]
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the engine, handing back its preference store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Looks up a table message in the active locale.
    #[must_use]
    pub fn tr(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.table.tr(self.active, key, args)
    }

    /// Switches the page to `locale` and remembers the choice.
    ///
    /// A locale outside the page's supported set is still applied; nodes
    /// without text for it keep their content unless partial coverage lets
    /// the fallback locale fill in. Calling this twice with the same locale
    /// leaves the document unchanged the second time.
    pub fn switch_locale(&mut self, document: &mut impl Document, locale: Locale) {
        if !self.profile.supports(locale) {
            tracing::warn!(locale = %locale, "switching to a locale this page does not support");
        }
        self.apply(document, locale);

        if let Err(err) = self.store.set(PREFERRED_LANGUAGE_KEY, locale.code()) {
            tracing::warn!(locale = %locale, error = %err, "failed to persist language preference");
        }

        tracing::info!(locale = %locale, direction = locale.direction().as_attr(), "language switched");
    }

    /// Makes `locale` active and syncs the document to it, without
    /// persisting anything.
    fn apply(&mut self, document: &mut impl Document, locale: Locale) {
        self.active = locale;

        let root = document.root();
        document.set_attribute(root, LANG_ATTR, locale.code());
        document.set_attribute(root, DIR_ATTR, locale.direction().as_attr());

        if let Some(body) = document.body() {
            document.retain_classes(body, &|class| !class.starts_with(BODY_CLASS_PREFIX));
            document.add_class(body, locale.body_class());
        }

        if let Some(indicator) = document.first_by_class(INDICATOR_CLASS) {
            document.set_text_content(indicator, locale.indicator());
        }

        self.render_translatable_nodes(document, locale);
        self.render_placeholders(document, locale);

        dismiss_locale_menu(document);
    }

    /// Writes each translatable node's text for `locale`.
    ///
    /// Nodes translated into every supported locale use exactly the
    /// requested locale's text. Nodes translated into only some of them fall
    /// back to the fallback locale's text.
    // TODO: drop the partial-coverage fallback once every page ships all
    // four translations for each node.
    pub fn render_translatable_nodes(&self, document: &mut impl Document, locale: Locale) {
        let mut rendered = 0usize;
        for node in document.elements() {
            if let Some(text) = self.resolve(&*document, node, locale, Locale::text_attribute) {
                document.write_text(node, &text);
                rendered += 1;
            }
        }
        tracing::debug!(locale = %locale, rendered, "translatable nodes rendered");
    }

    /// Sets placeholders on the keyed inputs and on every input carrying
    /// per-locale placeholder attributes.
    ///
    /// Inputs missing from the page are skipped.
    pub fn render_placeholders(&self, document: &mut impl Document, locale: Locale) {
        for (element_id, key) in KEYED_PLACEHOLDERS {
            let Some(node) = document.element_by_id(element_id) else {
                continue;
            };
            if let Some(text) = self.table.get(locale, key) {
                document.set_placeholder(node, &text);
            }
        }

        for node in document.elements() {
            if let Some(text) = self.resolve(&*document, node, locale, Locale::placeholder_attribute) {
                document.set_placeholder(node, &text);
            }
        }
    }

    /// Picks the text a node should show for `locale`, reading attributes
    /// named by `attribute`. Empty values count as missing.
    fn resolve(
        &self,
        document: &impl Document,
        node: NodeId,
        locale: Locale,
        attribute: fn(Locale) -> &'static str,
    ) -> Option<String> {
        let lookup = move |l: Locale| {
            document
                .attribute(node, attribute(l))
                .filter(|value| !value.is_empty())
        };

        let text = match self.coverage(document, node, attribute) {
            Coverage::None => None,
            Coverage::Full => lookup(locale),
            Coverage::Partial => lookup(locale).or_else(|| lookup(self.profile.fallback_locale())),
        };
        text.map(str::to_string)
    }

    fn coverage(
        &self,
        document: &impl Document,
        node: NodeId,
        attribute: fn(Locale) -> &'static str,
    ) -> Coverage {
        let supported = self.profile.supported();
        let present = supported
            .iter()
            .filter(|&&l| document.attribute(node, attribute(l)).is_some())
            .count();

        if present == 0 {
            Coverage::None
        } else if present == supported.len() {
            Coverage::Full
        } else {
            Coverage::Partial
        }
    }
}

fn restore_locale(store: &impl PreferenceStore, profile: &PageProfile) -> Locale {
    let Some(raw) = store.get(PREFERRED_LANGUAGE_KEY) else {
        return profile.default_locale();
    };

    match raw.parse::<Locale>() {
        Ok(locale) if profile.supports(locale) => locale,
        Ok(locale) => {
            tracing::warn!(locale = %locale, "stored language not offered on this page, using default");
            profile.default_locale()
        }
        Err(err) => {
            tracing::warn!(error = %err, "stored language preference unreadable, using default");
            profile.default_locale()
        }
    }
}

/// Opens or closes the language menu, returning whether it is now open.
pub fn toggle_locale_menu(document: &mut impl Document) -> bool {
    match document.element_by_id(MENU_ID) {
        Some(menu) => document.toggle_class(menu, MENU_OPEN_CLASS),
        None => false,
    }
}

/// Closes the language menu if the page has one.
pub fn dismiss_locale_menu(document: &mut impl Document) {
    if let Some(menu) = document.element_by_id(MENU_ID) {
        document.remove_class(menu, MENU_OPEN_CLASS);
    }
}

/// Closes the language menu when a click lands outside both the menu and
/// its toggle control.
pub fn handle_outside_click(document: &mut impl Document, target: NodeId) {
    let inside = [MENU_ID, MENU_BUTTON_ID]
        .into_iter()
        .filter_map(|id| document.element_by_id(id))
        .any(|container| document.contains(container, target));
    if !inside {
        dismiss_locale_menu(document);
    }
}
