// SPDX-License-Identifier: MPL-2.0
//! Supported UI locales.
//!
//! The set is closed: a tag outside it is never stored or activated.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A language the portfolio ships a catalog for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Locale {
    /// Spanish, the primary audience.
    #[default]
    Es,
    /// English, for international visitors.
    En,
}

/// Locale used when nothing valid has been persisted.
pub const DEFAULT_LOCALE: Locale = Locale::Es;

/// Locale consulted when a key is missing from the active catalog.
pub const FALLBACK_LOCALE: Locale = Locale::En;

impl Locale {
    /// Every supported locale, default first.
    pub const ALL: [Locale; 2] = [Locale::Es, Locale::En];

    /// Canonical tag as persisted and used for catalog file names.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Matches a tag exactly against the supported codes.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|locale| locale.code() == code)
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s).ok_or_else(|| Error::InvalidLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
