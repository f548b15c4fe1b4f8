//! Localization resolver.
//!
//! Maps a [`Language`] and a dot-namespaced locale key (`home.greeting`) to a
//! display string. A key missing from the active table resolves to the key
//! itself; lookups never fail.
//!
//! # Example
//!
//! ```
//! use nabha_health_core::i18n::{Catalog, Language, Resolution};
//!
//! let catalog = Catalog::builtin();
//! assert_eq!(catalog.resolve(Language::En, "home.title"), "Nabha Health");
//! assert_eq!(
//!     catalog.lookup(Language::Hi, "no.such.key"),
//!     Resolution::Missing("no.such.key")
//! );
//! ```

mod builtin;
mod catalog;

pub use catalog::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Localization errors.
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Locale '{}' is missing {} key(s): {}", .language, .missing.len(), .missing.join(", "))]
    IncompleteLocale {
        language: String,
        missing: Vec<String>,
    },

    #[error("Locale JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Locale file error: {0}")]
    Io(#[from] std::io::Error),
}

pub type I18nResult<T> = Result<T, I18nError>;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    /// Default for rural Punjab users
    #[default]
    Hi,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Hi];

    /// BCP 47 language tag.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// Parse a language tag. Unknown tags are an error, not a default.
    pub fn parse(tag: &str) -> I18nResult<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == tag)
            .ok_or_else(|| I18nError::UnsupportedLanguage(tag.to_string()))
    }

    /// The other language, as flipped by the header toggle.
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }

    /// Label of the toggle button: names the language it switches to.
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Language::En => "हिं",
            Language::Hi => "EN",
        }
    }

    /// Language name in its own script.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
        }
    }
}

/// Outcome of a locale lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Translation found in the active table
    Found(&'a str),
    /// No translation; carries the requested key
    Missing(&'a str),
}

impl<'a> Resolution<'a> {
    /// Display text: the translation, or the raw key when missing.
    pub fn text(&self) -> &'a str {
        match self {
            Resolution::Found(text) | Resolution::Missing(text) => *text,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Resolution::Missing(_))
    }
}

/// Substitute `{name}` placeholders in a single pass.
///
/// Placeholders without a matching argument are left as written, and
/// substituted values are never rescanned.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.iter().find(|(k, _)| *k == name) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_default_is_hindi() {
        assert_eq!(Language::default(), Language::Hi);
    }

    #[test]
    fn test_language_parse() {
        assert_eq!(Language::parse("en").unwrap(), Language::En);
        assert_eq!(Language::parse("hi").unwrap(), Language::Hi);
        assert!(matches!(
            Language::parse("pa"),
            Err(I18nError::UnsupportedLanguage(tag)) if tag == "pa"
        ));
        assert!(Language::parse("EN").is_err());
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Language::En.toggled(), Language::Hi);
        assert_eq!(Language::Hi.toggled().toggled(), Language::Hi);
        assert_eq!(Language::Hi.toggle_label(), "EN");
    }

    #[test]
    fn test_resolution_text() {
        assert_eq!(Resolution::Found("Home").text(), "Home");
        assert_eq!(Resolution::Missing("common.home").text(), "common.home");
        assert!(Resolution::Missing("x").is_missing());
    }

    #[test]
    fn test_interpolate() {
        assert_eq!(
            interpolate("\"{query}\" is not available", &[("query", "Omeprazole")]),
            "\"Omeprazole\" is not available"
        );
        assert_eq!(interpolate("{missing} stays", &[]), "{missing} stays");
        assert_eq!(interpolate("no placeholders", &[("a", "b")]), "no placeholders");
        assert_eq!(interpolate("open { brace", &[]), "open { brace");
        // No recursive substitution
        assert_eq!(interpolate("{a}", &[("a", "{b}"), ("b", "x")]), "{b}");
    }
}
