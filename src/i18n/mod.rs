// ABOUTME: Localization module for page rendering
// ABOUTME: Provides locale handling and message catalog translation

pub mod error;
pub mod translator;

pub use error::{CatalogError, Result};
pub use translator::{Locale, Translate, Translator};
