//! Locale tables and the catalog that resolves keys against them.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::builtin;
use super::{interpolate, I18nError, I18nResult, Language, Resolution};

/// Key → display string for one language. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleTable {
    entries: BTreeMap<String, String>,
}

impl LocaleTable {
    /// Display string for `key`. Blank entries count as untranslated.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// True if `key` has a non-blank display string.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in sorted order, blank entries included.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Coverage of one locale against the union of all keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleCoverage {
    pub language: Language,
    /// Keys with text in this locale
    pub defined: usize,
    /// Keys defined by some locale but blank or absent here, sorted
    pub missing_keys: Vec<String>,
    /// defined / total, in [0, 100]
    pub coverage_percent: f64,
}

/// Key completeness across all locales.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Size of the union of all locales' key sets
    pub total_keys: usize,
    pub locales: Vec<LocaleCoverage>,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.locales.iter().all(|l| l.missing_keys.is_empty())
    }

    pub fn for_language(&self, language: Language) -> Option<&LocaleCoverage> {
        self.locales.iter().find(|l| l.language == language)
    }
}

/// All locale tables, one per supported language.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    tables: HashMap<Language, LocaleTable>,
}

impl Catalog {
    /// Catalog with the compiled-in English and Hindi strings.
    pub fn builtin() -> Self {
        Self::from_tables([
            (Language::En, builtin::EN.iter().copied().collect()),
            (Language::Hi, builtin::HI.iter().copied().collect()),
        ])
    }

    /// Build from explicit tables. Languages not supplied get an empty table.
    pub fn from_tables<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = (Language, LocaleTable)>,
    {
        let mut tables: HashMap<Language, LocaleTable> = tables.into_iter().collect();
        for language in Language::ALL {
            tables.entry(language).or_default();
        }
        Self { tables }
    }

    /// Parse `{ "en": { key: text, .. }, "hi": { .. } }`.
    pub fn from_json_str(json: &str) -> I18nResult<Self> {
        let raw: BTreeMap<String, LocaleTable> = serde_json::from_str(json)?;
        let tables = raw
            .into_iter()
            .map(|(tag, table)| Ok((Language::parse(&tag)?, table)))
            .collect::<I18nResult<Vec<_>>>()?;
        Ok(Self::from_tables(tables))
    }

    /// Load a JSON locale document from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> I18nResult<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "Loading locale tables");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn table(&self, language: Language) -> Option<&LocaleTable> {
        self.tables.get(&language)
    }

    /// Typed lookup: the translation, or `Missing(key)`.
    pub fn lookup<'a>(&'a self, language: Language, key: &'a str) -> Resolution<'a> {
        match self.table(language).and_then(|t| t.get(key)) {
            Some(text) => Resolution::Found(text),
            None => {
                tracing::debug!(language = language.code(), key, "Missing translation");
                Resolution::Missing(key)
            }
        }
    }

    /// Display string for `key`, falling back to the key itself.
    pub fn resolve<'a>(&'a self, language: Language, key: &'a str) -> &'a str {
        self.lookup(language, key).text()
    }

    /// Resolve against a language given by tag; unknown tags are rejected.
    pub fn resolve_tag<'a>(&'a self, tag: &str, key: &'a str) -> I18nResult<&'a str> {
        let language = Language::parse(tag)?;
        Ok(self.resolve(language, key))
    }

    /// Resolve then substitute `{name}` placeholders.
    pub fn format(&self, language: Language, key: &str, args: &[(&str, &str)]) -> String {
        interpolate(self.resolve(language, key), args)
    }

    /// Per-language report of keys another locale defines but this one lacks.
    pub fn coverage(&self) -> CoverageReport {
        let all_keys: BTreeSet<&str> = self.tables.values().flat_map(|t| t.keys()).collect();
        let total_keys = all_keys.len();

        let locales = Language::ALL
            .into_iter()
            .map(|language| {
                let table = self.table(language);
                let missing_keys: Vec<String> = all_keys
                    .iter()
                    .filter(|key| !table.is_some_and(|t| t.contains(key)))
                    .map(|key| key.to_string())
                    .collect();
                let defined = total_keys - missing_keys.len();
                let coverage_percent = if total_keys == 0 {
                    100.0
                } else {
                    defined as f64 * 100.0 / total_keys as f64
                };
                LocaleCoverage {
                    language,
                    defined,
                    missing_keys,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport {
            total_keys,
            locales,
        }
    }

    /// Fail if any locale lacks a key another locale defines.
    pub fn validate_complete(&self) -> I18nResult<()> {
        let report = self.coverage();
        match report.locales.into_iter().find(|l| !l.missing_keys.is_empty()) {
            Some(incomplete) => Err(I18nError::IncompleteLocale {
                language: incomplete.language.code().to_string(),
                missing: incomplete.missing_keys,
            }),
            None => Ok(()),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
