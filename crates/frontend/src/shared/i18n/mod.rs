//! UI string lookup.
//!
//! A missing key renders as the key itself so an untranslated label shows up
//! in the page instead of breaking it.

mod en;
mod fi;

use leptos::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::shared::config::LOCALE_KEY;

type Dictionary = HashMap<&'static str, &'static str>;

static EN: Lazy<Dictionary> = Lazy::new(|| en::ENTRIES.iter().copied().collect());
static FI: Lazy<Dictionary> = Lazy::new(|| fi::ENTRIES.iter().copied().collect());

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Fi,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fi => "fi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Locale::En),
            "fi" => Some(Locale::Fi),
            _ => None,
        }
    }

    /// Name of the language in itself, for the language picker
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Fi => "Suomi",
        }
    }

    pub fn decimal_separator(&self) -> char {
        match self {
            Locale::En => '.',
            Locale::Fi => ',',
        }
    }

    pub fn all() -> [Locale; 2] {
        [Locale::En, Locale::Fi]
    }

    fn dictionary(&self) -> &'static Dictionary {
        match self {
            Locale::En => &EN,
            Locale::Fi => &FI,
        }
    }
}

/// Look up `key`, falling back to English and then to the key itself
pub fn translate<'a>(locale: Locale, key: &'a str) -> &'a str {
    locale
        .dictionary()
        .get(key)
        .or_else(|| EN.get(key))
        .copied()
        .unwrap_or(key)
}

/// Reactive translator provided at the app root
#[derive(Clone, Copy)]
pub struct I18n {
    locale: RwSignal<Locale>,
}

impl I18n {
    /// Restores the locale saved in localStorage
    pub fn new() -> Self {
        let saved = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(LOCALE_KEY).ok().flatten())
            .and_then(|code| Locale::from_code(&code))
            .unwrap_or_default();
        Self {
            locale: RwSignal::new(saved),
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn set_locale(&self, locale: Locale) {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(LOCALE_KEY, locale.code());
        }
        self.locale.set(locale);
    }

    /// Translation of `key` in the current locale; tracks locale changes
    pub fn t(&self, key: &str) -> String {
        translate(self.locale.get(), key).to_string()
    }

    /// Same as [`I18n::t`] for event handlers and async continuations
    pub fn t_untracked(&self, key: &str) -> String {
        translate(self.locale.get_untracked(), key).to_string()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n not provided in context (provide it in app root)")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_missing_key_renders_key() {
        assert_eq!(translate(Locale::En, "no.such.key"), "no.such.key");
        assert_eq!(translate(Locale::Fi, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_known_key() {
        assert_eq!(translate(Locale::En, "nav.customers"), "Customers");
        assert_eq!(translate(Locale::Fi, "nav.customers"), "Asiakkaat");
    }

    #[test]
    fn test_finnish_covers_english_keys() {
        let fi: HashSet<_> = fi::ENTRIES.iter().map(|(k, _)| *k).collect();
        let missing: Vec<_> = en::ENTRIES
            .iter()
            .map(|(k, _)| *k)
            .filter(|k| !fi.contains(k))
            .collect();
        assert!(missing.is_empty(), "missing fi keys: {missing:?}");
    }

    #[test]
    fn test_no_duplicate_keys() {
        for entries in [en::ENTRIES, fi::ENTRIES] {
            let unique: HashSet<_> = entries.iter().map(|(k, _)| *k).collect();
            assert_eq!(unique.len(), entries.len());
        }
    }

    #[test]
    fn test_domain_label_keys_are_translated() {
        use contracts::domain::a001_customer::CustomerType;
        use contracts::domain::a002_rental::RentalStatus;
        use contracts::domain::a003_sales_target::TargetType;

        let keys = CustomerType::all()
            .iter()
            .map(|t| t.label_key())
            .chain(RentalStatus::all().iter().map(|s| s.label_key()))
            .chain(TargetType::all().iter().map(|t| t.label_key()))
            .collect::<Vec<_>>();
        for key in keys {
            assert_ne!(translate(Locale::En, key), key, "untranslated {key}");
        }
    }
}
