// SPDX-License-Identifier: MPL-2.0
use super::catalog::{interpolate, lookup, Catalogs};
use super::locale::{Locale, FALLBACK_LOCALE};
use super::resolver;
use crate::error::Result;
use crate::storage::PreferenceStore;

/// Translation context owned by the application root and handed to every
/// render site.
///
/// Holds the catalogs and the active locale. The active locale only changes
/// through [`I18n::set_locale`], which persists the choice first.
#[derive(Debug, Clone)]
pub struct I18n {
    catalogs: Catalogs,
    current_locale: Locale,
    revision: u64,
}

impl I18n {
    /// Loads the bundled catalogs and resolves the startup locale from `store`.
    pub fn new<S: PreferenceStore + ?Sized>(store: &S) -> Result<Self> {
        Ok(Self::with_catalogs(Catalogs::embedded()?, store))
    }

    pub fn with_catalogs<S: PreferenceStore + ?Sized>(catalogs: Catalogs, store: &S) -> Self {
        let current_locale = resolver::resolve_startup_locale(store);
        Self {
            catalogs,
            current_locale,
            revision: 0,
        }
    }

    pub fn current_locale(&self) -> Locale {
        self.current_locale
    }

    pub fn fallback_locale(&self) -> Locale {
        FALLBACK_LOCALE
    }

    pub fn available_locales(&self) -> Vec<Locale> {
        self.catalogs.locales().collect()
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Number of effective locale switches since construction.
    ///
    /// Render code can compare this against a cached value to know when
    /// translated strings must be refreshed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Persists `candidate` and makes it the active locale.
    ///
    /// On error neither the store nor the active locale changes.
    pub fn set_locale<S: PreferenceStore + ?Sized>(
        &mut self,
        store: &mut S,
        candidate: &str,
    ) -> Result<Locale> {
        let locale = resolver::set_locale(store, candidate)?;
        if locale != self.current_locale {
            self.current_locale = locale;
            self.revision += 1;
        }
        Ok(locale)
    }

    pub fn tr(&self, key: &str) -> String {
        self.tr_with_args(key, &[])
    }

    /// Translates `key`, filling `{name}` placeholders from `args`.
    ///
    /// A key missing from both the active and fallback catalogs yields the
    /// key path itself so the gap stays visible in the UI.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        match lookup(&self.catalogs, self.current_locale, FALLBACK_LOCALE, key) {
            Some(template) => interpolate(template, args),
            None => {
                tracing::warn!(key, locale = %self.current_locale, "missing translation");
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::i18n::resolver::STORAGE_KEY;
    use crate::storage::MemoryStore;

    fn catalogs() -> Catalogs {
        Catalogs::from_sources(&[
            (Locale::Es, "[header]\ngreeting = \"¡Hola! Soy {name}\"\n"),
            (
                Locale::En,
                "[header]\ngreeting = \"Hi! I'm {name}\"\n[footer]\nrights = \"All rights reserved\"\n",
            ),
        ])
        .expect("valid sources")
    }

    #[test]
    fn new_context_starts_in_default_locale() {
        let i18n = I18n::with_catalogs(catalogs(), &MemoryStore::new());
        assert_eq!(i18n.current_locale(), Locale::Es);
        assert_eq!(i18n.fallback_locale(), Locale::En);
        assert_eq!(i18n.revision(), 0);
    }

    #[test]
    fn new_context_restores_persisted_locale() {
        let store = MemoryStore::new().with_entry(STORAGE_KEY, "en");
        let i18n = I18n::with_catalogs(catalogs(), &store);
        assert_eq!(i18n.current_locale(), Locale::En);
    }

    #[test]
    fn tr_uses_active_then_fallback() {
        let i18n = I18n::with_catalogs(catalogs(), &MemoryStore::new());
        assert_eq!(
            i18n.tr_with_args("header.greeting", &[("name", "Ana")]),
            "¡Hola! Soy Ana"
        );
        assert_eq!(i18n.tr("footer.rights"), "All rights reserved");
    }

    #[test]
    fn tr_returns_key_path_when_missing_everywhere() {
        let i18n = I18n::with_catalogs(catalogs(), &MemoryStore::new());
        assert_eq!(i18n.tr("projects.title"), "projects.title");
    }

    #[test]
    fn set_locale_switches_and_persists() {
        let mut store = MemoryStore::new();
        let mut i18n = I18n::with_catalogs(catalogs(), &store);

        assert_eq!(i18n.set_locale(&mut store, "en"), Ok(Locale::En));
        assert_eq!(i18n.current_locale(), Locale::En);
        assert_eq!(i18n.revision(), 1);
        assert_eq!(store.read(STORAGE_KEY).unwrap(), Some("en".to_string()));
        assert_eq!(i18n.tr_with_args("header.greeting", &[("name", "Ana")]), "Hi! I'm Ana");
    }

    #[test]
    fn set_locale_to_current_does_not_bump_revision() {
        let mut store = MemoryStore::new();
        let mut i18n = I18n::with_catalogs(catalogs(), &store);

        i18n.set_locale(&mut store, "es").unwrap();
        assert_eq!(i18n.revision(), 0);
        assert_eq!(store.read(STORAGE_KEY).unwrap(), Some("es".to_string()));
    }

    #[test]
    fn invalid_set_locale_changes_nothing() {
        let mut store = MemoryStore::new().with_entry(STORAGE_KEY, "en");
        let mut i18n = I18n::with_catalogs(catalogs(), &store);

        assert_eq!(
            i18n.set_locale(&mut store, "fr"),
            Err(Error::InvalidLocale("fr".to_string()))
        );
        assert_eq!(i18n.current_locale(), Locale::En);
        assert_eq!(i18n.revision(), 0);
        assert_eq!(store.read(STORAGE_KEY).unwrap(), Some("en".to_string()));
    }

    #[test]
    fn bundled_context_translates_error_keys() {
        let i18n = I18n::new(&MemoryStore::new()).expect("bundled catalogs");
        let err = Error::InvalidLocale("fr".to_string());
        assert_eq!(
            i18n.tr_with_args(err.i18n_key(), &[("locale", "fr")]),
            "Idioma no soportado: fr"
        );
        assert_eq!(i18n.available_locales(), Locale::ALL.to_vec());
    }
}
