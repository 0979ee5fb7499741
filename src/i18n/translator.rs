// ABOUTME: Locale type and message catalog translation
// ABOUTME: Resolves interface strings for a locale with the source string as fallback

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::Result;

/// A BCP 47-style language code selecting the viewer's interface language.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    /// Language used when a locale has no entry of its own.
    pub const FALLBACK: &'static str = "en";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(Self::FALLBACK.to_string())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Injected translation collaborator for interface strings.
///
/// Keys are the english source strings; an unknown key translates to itself.
pub trait Translate {
    fn translate(&self, key: &str, locale: &Locale) -> String;
}

/// Message-catalog backed [`Translate`] implementation.
///
/// The catalog maps source string to a language-to-text table. An empty
/// catalog leaves every interface string in its source language.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    catalog: IndexMap<String, IndexMap<String, String>>,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog = serde_json::from_str(json)?;
        Ok(Self { catalog })
    }

    /// Add a translation for a single source string.
    pub fn add_message(
        &mut self,
        key: impl Into<String>,
        locale: &Locale,
        text: impl Into<String>,
    ) {
        self.catalog
            .entry(key.into())
            .or_default()
            .insert(locale.as_str().to_string(), text.into());
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

impl Translate for Translator {
    fn translate(&self, key: &str, locale: &Locale) -> String {
        self.catalog
            .get(key)
            .and_then(|texts| texts.get(locale.as_str()))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
