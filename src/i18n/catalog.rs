// SPDX-License-Identifier: MPL-2.0
//! Translation catalogs and the key-path lookup policy.
//!
//! Each locale ships one TOML file under `assets/i18n/`, embedded into the
//! binary at compile time. Nested tables are flattened into dotted key paths,
//! so `[header] greeting = "..."` is looked up as `header.greeting`.
//!
//! Lookup is a plain ordered search: the active locale first, then the
//! fallback locale. Template strings may contain `{name}` placeholders that
//! [`interpolate`] fills from caller-supplied arguments.

use super::locale::Locale;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, BTreeSet};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Immutable map from dotted key path to template string for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// Parses a nested TOML document. Only string leaves are accepted.
    pub fn from_toml(source: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(source).map_err(|err| Error::Catalog(err.to_string()))?;
        let mut entries = BTreeMap::new();
        flatten("", &table, &mut entries)?;
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Dotted key paths in sorted order.
    pub fn key_paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut BTreeMap<String, String>) -> Result<()> {
    for (name, value) in table {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::String(template) => {
                if out.contains_key(&path) {
                    return Err(Error::Catalog(format!("duplicate key path `{path}`")));
                }
                out.insert(path, template.clone());
            }
            toml::Value::Table(nested) => flatten(&path, nested, out)?,
            other => {
                return Err(Error::Catalog(format!(
                    "`{path}` must be a string or table, found {}",
                    other.type_str()
                )));
            }
        }
    }
    Ok(())
}

/// The full set of catalogs, one per locale.
#[derive(Debug, Clone, Default)]
pub struct Catalogs {
    catalogs: BTreeMap<Locale, Catalog>,
}

impl Catalogs {
    /// Loads the catalogs bundled in `assets/i18n/`.
    ///
    /// Every supported locale must have a parseable `<code>.toml`.
    pub fn embedded() -> Result<Self> {
        let mut catalogs = BTreeMap::new();
        for locale in Locale::ALL {
            let filename = format!("{}.toml", locale.code());
            let file = Asset::get(&filename)
                .ok_or_else(|| Error::Catalog(format!("missing bundled catalog {filename}")))?;
            let source = std::str::from_utf8(file.data.as_ref())
                .map_err(|err| Error::Catalog(format!("{filename}: {err}")))?;
            let catalog = Catalog::from_toml(source)
                .map_err(|err| Error::Catalog(format!("{filename}: {err}")))?;
            catalogs.insert(locale, catalog);
        }
        Ok(Self { catalogs })
    }

    /// Builds catalogs from in-memory TOML sources.
    pub fn from_sources(sources: &[(Locale, &str)]) -> Result<Self> {
        let mut catalogs = BTreeMap::new();
        for (locale, source) in sources {
            catalogs.insert(*locale, Catalog::from_toml(source)?);
        }
        Ok(Self { catalogs })
    }

    pub fn get(&self, locale: Locale) -> Option<&Catalog> {
        self.catalogs.get(&locale)
    }

    /// Locales that have a catalog, in [`Locale`] order.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.catalogs.keys().copied()
    }

    /// Compares the key-path shape of every catalog against the union of all.
    pub fn parity_report(&self) -> ParityReport {
        let all_paths: BTreeSet<&str> = self
            .catalogs
            .values()
            .flat_map(Catalog::key_paths)
            .collect();

        let missing = self
            .catalogs
            .iter()
            .map(|(locale, catalog)| {
                let absent = all_paths
                    .iter()
                    .filter(|path| catalog.get(path).is_none())
                    .map(|path| path.to_string())
                    .collect();
                (*locale, absent)
            })
            .collect();

        ParityReport { missing }
    }
}

/// Key paths each locale lacks relative to the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParityReport {
    missing: BTreeMap<Locale, Vec<String>>,
}

impl ParityReport {
    pub fn is_consistent(&self) -> bool {
        self.missing.values().all(Vec::is_empty)
    }

    pub fn missing_in(&self, locale: Locale) -> &[String] {
        self.missing.get(&locale).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Looks `key` up in `active`, then in `fallback`.
///
/// Returns `None` when neither catalog has the key.
pub fn lookup<'a>(
    catalogs: &'a Catalogs,
    active: Locale,
    fallback: Locale,
    key: &str,
) -> Option<&'a str> {
    catalogs
        .get(active)
        .and_then(|catalog| catalog.get(key))
        .or_else(|| catalogs.get(fallback).and_then(|catalog| catalog.get(key)))
}

/// Replaces `{name}` placeholders with matching arguments.
///
/// Placeholders without a matching argument are kept verbatim. Substituted
/// values are never re-scanned.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    if args.is_empty() || !template.contains('{') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = &after_open[..close];
        match args.iter().find(|(arg, _)| *arg == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after_open[close + 1..];
    }
    out.push_str(rest);
    out
}
