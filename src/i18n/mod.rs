// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the portfolio.
//!
//! Two bundled language packs, Spanish (default) and English (fallback), and
//! a persisted choice between them.
//!
//! # Features
//!
//! - Startup locale restored from the preference store, defaulting to `es`
//! - Validated, persisted runtime language switching
//! - Dotted key-path lookup with fallback to `en`
//! - `{name}` variable interpolation

pub mod catalog;
pub mod context;
pub mod locale;
pub mod resolver;

pub use catalog::{Catalog, Catalogs, ParityReport};
pub use context::I18n;
pub use locale::{Locale, DEFAULT_LOCALE, FALLBACK_LOCALE};
pub use resolver::{resolve_startup_locale, set_locale, STORAGE_KEY};
