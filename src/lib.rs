// ABOUTME: Main library module for the locview rendering layer
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod i18n;
pub mod model;
pub mod routes;
pub mod view;

// Re-export commonly used types
pub use i18n::{Locale, Translate, Translator};
pub use model::{
    Component, Location, LocationsMap, LocationsTree, Permission, PermissionSet, TranslatedText,
};
pub use routes::Routes;
pub use view::{LocationView, PageRenderer};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
