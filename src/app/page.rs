// SPDX-License-Identifier: MPL-2.0
//! The home page skeleton served to the CLI.
//!
//! Only the nodes the localization engine and the request/tracking panels
//! touch are modeled; layout and styling are out of scope.

use crate::dom::{Document, Element, MemoryDocument, NodeId};
use crate::i18n::Locale;

/// One translatable string, given for each locale.
type Texts = [(Locale, &'static str); 4];

const TITLE: Texts = [
    (Locale::En, "Morocco Docs - Civil Documents"),
    (Locale::Fr, "Morocco Docs - Documents Civils"),
    (Locale::Ar, "وثائق المغرب - الوثائق المدنية"),
    (Locale::Ber, "ⵉⵙⵎⵉⵍⵏ ⵏ ⵍⵎⵖⵔⵉⴱ"),
];

const HERO: Texts = [
    (Locale::En, "Your Moroccan civil documents, without the queue"),
    (Locale::Fr, "Vos documents civils marocains, sans file d'attente"),
    (Locale::Ar, "وثائقك المدنية المغربية بدون انتظار"),
    (Locale::Ber, "ⵉⵙⵎⵉⵍⵏ ⵏⵏⴽ ⵏ ⵍⵎⵖⵔⵉⴱ"),
];

const TRACK_HEADING: Texts = [
    (Locale::En, "Track your request"),
    (Locale::Fr, "Suivre votre demande"),
    (Locale::Ar, "تتبع طلبك"),
    (Locale::Ber, "ⴹⴼⵓⵕ ⴰⵙⵓⵜⵔ ⵏⵏⴽ"),
];

/// Service card headings. These match the `service-*-title` messages so a
/// card heading can be mapped back to its document type.
const SERVICE_CARDS: [Texts; 4] = [
    [
        (Locale::En, "Birth Certificate"),
        (Locale::Fr, "Acte de Naissance"),
        (Locale::Ar, "شهادة الميلاد"),
        (Locale::Ber, "ⴰⵙⵏⵓⴱⴳ ⵏ ⵜⵍⴰⵍⵉⵜ"),
    ],
    [
        (Locale::En, "Marriage Certificate"),
        (Locale::Fr, "Acte de Mariage"),
        (Locale::Ar, "عقد الزواج"),
        (Locale::Ber, "ⴰⵙⵏⵓⴱⴳ ⵏ ⵜⵉⵙⵙⵉ"),
    ],
    [
        (Locale::En, "Death Certificate"),
        (Locale::Fr, "Acte de Décès"),
        (Locale::Ar, "شهادة الوفاة"),
        (Locale::Ber, "ⴰⵙⵏⵓⴱⴳ ⵏ ⵜⴰⵎⵜⵜⴰⵏⵜ"),
    ],
    [
        (Locale::En, "Family Record Book"),
        (Locale::Fr, "Livret de Famille"),
        (Locale::Ar, "دفتر العائلة"),
        (Locale::Ber, "ⴰⴷⵍⵉⵙ ⵏ ⵜⴰⵡⴰⵛⵓⵍⵜ"),
    ],
];

fn translated(tag: &str, texts: &Texts) -> Element {
    texts
        .iter()
        .fold(Element::new(tag).html(texts[0].1), |element, &(locale, text)| {
            element.attr(locale.text_attribute(), text)
        })
}

/// Builds the home page as first served, in English.
#[must_use]
pub fn skeleton() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    let root = doc.root();
    doc.set_attribute(root, "lang", Locale::En.code());

    let head = doc.append(root, Element::new("head"));
    doc.append(head, translated("title", &TITLE));
    doc.set_title(TITLE[0].1);

    let Some(body) = doc.body() else {
        return doc;
    };
    build_nav(&mut doc, body);

    doc.append(body, translated("h1", &HERO).class("hero-title"));

    let services = doc.append(body, Element::new("section").id("services"));
    for texts in &SERVICE_CARDS {
        let card = doc.append(services, Element::new("div").class("service-card"));
        doc.append(card, translated("h3", texts));
    }

    let request = doc.append(body, Element::new("section").id("request").class("request-form"));
    let container = doc.append(request, Element::new("div").class("container"));
    doc.append(container, Element::new("div").id("requestMessages"));
    doc.append(container, Element::new("input").id("email").attr("type", "email"));
    doc.append(container, Element::new("input").id("phone").attr("type", "tel"));
    doc.append(container, Element::new("textarea").id("additionalInfo"));

    let track = doc.append(body, Element::new("section").id("track"));
    doc.append(track, translated("h2", &TRACK_HEADING));
    doc.append(track, Element::new("input").id("trackingNumber"));
    doc.append(track, Element::new("div").id("trackingResult").class("tracking-result"));

    doc
}

fn build_nav(doc: &mut MemoryDocument, body: NodeId) {
    let nav = doc.append(body, Element::new("nav").class("navbar"));
    let switcher = doc.append(nav, Element::new("div").class("language-switcher"));
    let button = doc.append(switcher, Element::new("button").id("langBtn"));
    doc.append(button, Element::new("span").class("current-lang").html("EN"));

    let menu = doc.append(switcher, Element::new("div").id("langDropdown").class("lang-dropdown"));
    for locale in Locale::ALL {
        doc.append(
            menu,
            Element::new("a")
                .class("lang-option")
                .attr("data-lang", locale.code())
                .html(locale.label()),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_has_every_engine_target() {
        let doc = skeleton();
        for id in [
            "langBtn",
            "langDropdown",
            "trackingNumber",
            "additionalInfo",
            "trackingResult",
            "requestMessages",
        ] {
            assert!(doc.element_by_id(id).is_some(), "{id}");
        }
        assert!(doc.first_by_class("current-lang").is_some());
        assert_eq!(doc.title(), "Morocco Docs - Civil Documents");
    }

    #[test]
    fn translated_nodes_cover_all_locales() {
        let doc = skeleton();
        let hero = doc.first_by_class("hero-title").unwrap();
        for locale in Locale::ALL {
            assert!(doc.attribute(hero, locale.text_attribute()).is_some());
        }
    }
}
