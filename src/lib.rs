// SPDX-License-Identifier: MPL-2.0
//! `portfolio_i18n` is the language layer of a bilingual portfolio.
//!
//! It bundles Spanish and English translation catalogs, remembers the
//! visitor's language choice across sessions and gives the rendering layer a
//! single [`i18n::I18n`] context to translate dotted key paths with.

pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod paths;
pub mod storage;
