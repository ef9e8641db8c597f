// SPDX-License-Identifier: MPL-2.0
//! Startup locale resolution and persistence of the user's choice.
//!
//! The choice is a single entry under [`STORAGE_KEY`]. Reading never fails:
//! an absent, unsupported or unreadable value resolves to
//! [`DEFAULT_LOCALE`]. Writing only ever stores a supported tag.

use super::locale::{Locale, DEFAULT_LOCALE};
use crate::error::{Error, Result};
use crate::storage::PreferenceStore;

/// Fixed key holding the persisted locale.
pub const STORAGE_KEY: &str = "portfolio-language";

/// Returns the persisted locale if it is supported, the default otherwise.
pub fn resolve_startup_locale<S: PreferenceStore + ?Sized>(store: &S) -> Locale {
    let saved = match store.read(STORAGE_KEY) {
        Ok(saved) => saved,
        Err(err) => {
            tracing::warn!(error = %err, "preference store unreadable, using default locale");
            return DEFAULT_LOCALE;
        }
    };

    match saved.as_deref().map(Locale::from_code) {
        Some(Some(locale)) => {
            tracing::debug!(%locale, "restored persisted locale");
            locale
        }
        Some(None) => {
            tracing::debug!(stored = ?saved, "ignoring unsupported persisted locale");
            DEFAULT_LOCALE
        }
        None => DEFAULT_LOCALE,
    }
}

/// Validates `candidate` and persists it.
///
/// An unsupported tag returns [`Error::InvalidLocale`] and leaves the store
/// untouched. This does not switch any active locale; see
/// [`I18n::set_locale`](super::context::I18n::set_locale) for that.
pub fn set_locale<S: PreferenceStore + ?Sized>(store: &mut S, candidate: &str) -> Result<Locale> {
    let locale = Locale::from_code(candidate)
        .ok_or_else(|| Error::InvalidLocale(candidate.to_string()))?;
    store.write(STORAGE_KEY, locale.code())?;
    tracing::info!(%locale, "persisted locale preference");
    Ok(locale)
}
