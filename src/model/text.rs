// ABOUTME: Localized text values attached to host application records
// ABOUTME: Resolves per-language string maps with an english-then-any fallback chain

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// A text value that may carry one string per language code.
///
/// The host application stores names and descriptions either as a plain
/// string or as a language-to-text mapping; both shapes deserialize here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslatedText {
    Plain(String),
    ByLanguage(IndexMap<String, String>),
}

impl TranslatedText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Build a value holding a single language entry.
    pub fn for_language(lang: impl Into<String>, text: impl Into<String>) -> Self {
        let mut map = IndexMap::new();
        map.insert(lang.into(), text.into());
        Self::ByLanguage(map)
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(text) => text.is_empty(),
            Self::ByLanguage(map) => map.values().all(|text| text.is_empty()),
        }
    }

    /// Resolve the text for a locale.
    ///
    /// Resolution order: exact language match, then english, then the first
    /// non-empty entry. Returns `None` when no usable text exists.
    pub fn resolve(&self, locale: &Locale) -> Option<String> {
        match self {
            Self::Plain(text) => {
                if text.is_empty() {
                    None
                } else {
                    Some(text.clone())
                }
            }
            Self::ByLanguage(map) => map
                .get(locale.as_str())
                .filter(|text| !text.is_empty())
                .or_else(|| map.get(Locale::FALLBACK).filter(|text| !text.is_empty()))
                .or_else(|| map.values().find(|text| !text.is_empty()))
                .cloned(),
        }
    }
}

impl Default for TranslatedText {
    fn default() -> Self {
        Self::ByLanguage(IndexMap::new())
    }
}

impl From<&str> for TranslatedText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}
