// SPDX-License-Identifier: MPL-2.0
//! Contact form acknowledgement.

use crate::i18n::{keys, Locale, TranslationTable};

/// Thank-you text shown after the contact form is sent.
#[must_use]
pub fn acknowledge(table: &TranslationTable, locale: Locale) -> String {
    tracing::debug!(%locale, "contact message acknowledged");
    table.tr(locale, keys::CONTACT_THANKS, &[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::PageProfile;

    #[test]
    fn acknowledgement_follows_locale() {
        let table = TranslationTable::embedded(&PageProfile::default()).unwrap();
        assert!(acknowledge(&table, Locale::En).starts_with("Thank you for your message!"));
        assert!(acknowledge(&table, Locale::Fr).starts_with("Merci pour votre message"));
        assert!(!acknowledge(&table, Locale::Ber).starts_with("MISSING"));
    }
}
