//! Arabic/English localization.
//!
//! The tables are plain static data wrapped in [`Translations`] and handed to
//! the UI through context; lookups fall back to the key itself.

mod tables;

use contracts::shared::validation::ValidationError;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

const LANGUAGE_KEY: &str = "language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Text direction for `<html dir>`
    pub fn dir(&self) -> &'static str {
        match self {
            Language::Ar => "rtl",
            Language::En => "ltr",
        }
    }

    /// Name of the language in itself, for the switcher
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::Ar => "العربية",
            Language::En => "English",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

/// Key/value tables for both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    ar: &'static [(&'static str, &'static str)],
    en: &'static [(&'static str, &'static str)],
}

impl Translations {
    pub const fn new(
        ar: &'static [(&'static str, &'static str)],
        en: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { ar, en }
    }

    /// Dashboard strings
    pub const fn bookbee() -> Self {
        Self::new(tables::AR, tables::EN)
    }

    /// Translation of `key`, or `key` itself when missing.
    pub fn lookup<'a>(&self, language: Language, key: &'a str) -> &'a str {
        let table = match language {
            Language::Ar => self.ar,
            Language::En => self.en,
        };
        table
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::bookbee()
    }
}

// ============================================================================
// Context
// ============================================================================

#[derive(Clone, Copy)]
pub struct I18n {
    pub language: RwSignal<Language>,
    translations: Translations,
}

impl I18n {
    pub fn new(language: Language, translations: Translations) -> Self {
        Self {
            language: RwSignal::new(language),
            translations,
        }
    }

    /// Reactive lookup; re-runs when the language changes.
    pub fn t(&self, key: &'static str) -> &'static str {
        self.translations.lookup(self.language.get(), key)
    }

    pub fn t_untracked(&self, key: &'static str) -> &'static str {
        self.translations
            .lookup(self.language.get_untracked(), key)
    }

    pub fn set_language(&self, language: Language) {
        self.language.set(language);
    }

    /// User-facing text for a form validation failure
    pub fn validation_message(&self, error: &ValidationError) -> String {
        let key = match error {
            ValidationError::Required("name") => "common.nameRequired",
            ValidationError::Required(_) => "common.requiredField",
            ValidationError::InvalidNumber { .. } => "common.invalidNumber",
            ValidationError::Negative(_) => "common.negativeNumber",
        };
        format!("{} ({})", self.t_untracked(key), error.field())
    }
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18nProvider not found in component tree")
}

fn load_language() -> Language {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(LANGUAGE_KEY).ok().flatten())
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

fn apply_language(language: Language) {
    let Some(w) = window() else {
        return;
    };
    if let Ok(Some(storage)) = w.local_storage() {
        let _ = storage.set_item(LANGUAGE_KEY, language.code());
    }
    if let Some(root) = w.document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("dir", language.dir());
        let _ = root.set_attribute("lang", language.code());
    }
}

/// Provides [`I18n`]; persists the choice and keeps `<html dir/lang>` in sync.
#[component]
pub fn I18nProvider(children: Children) -> impl IntoView {
    let i18n = I18n::new(load_language(), Translations::bookbee());

    Effect::new(move |_| {
        let language = i18n.language.get();
        log::debug!("language: {}", language.code());
        apply_language(language);
    });

    provide_context(i18n);

    children()
}

/// Toggle between the two languages
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <button
            class="button button--ghost language-switcher"
            on:click=move |_| i18n.set_language(i18n.language.get_untracked().other())
        >
            {move || i18n.language.get().other().native_name()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_both_languages() {
        let t = Translations::bookbee();
        assert_eq!(t.lookup(Language::En, "nav.smartSearch"), "Smart Search");
        assert_eq!(t.lookup(Language::Ar, "nav.smartSearch"), "البحث الذكي");
        assert_eq!(t.lookup(Language::En, "common.currency"), "EGP");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        let t = Translations::bookbee();
        assert_eq!(t.lookup(Language::Ar, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_tables_have_same_keys() {
        let ar: Vec<&str> = tables::AR.iter().map(|(k, _)| *k).collect();
        let en: Vec<&str> = tables::EN.iter().map(|(k, _)| *k).collect();
        assert_eq!(ar, en);
    }

    #[test]
    fn test_every_search_label_is_translated() {
        use contracts::shared::smart_search::{FieldCatalog, FilterOperator};

        let t = Translations::bookbee();
        for field in FieldCatalog::orders().fields() {
            assert_ne!(t.lookup(Language::En, field.label_key), field.label_key);
            for op in field.operators {
                assert_ne!(t.lookup(Language::Ar, op.label_key()), op.label_key());
            }
        }
        assert_eq!(
            t.lookup(Language::En, FilterOperator::Ilike.label_key()),
            "Contains (Case Insensitive)"
        );
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::default(), Language::Ar);
        assert_eq!(Language::from_code("en"), Some(Language::En));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.other(), Language::Ar);
    }
}
