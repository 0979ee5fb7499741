// ABOUTME: Read-only entity types consumed by the location page renderer
// ABOUTME: Mirrors the host application's location, federation and permission records

pub mod location;
pub mod permissions;
pub mod text;

pub use location::{Component, Location, LocationsMap, LocationsTree};
pub use permissions::{Permission, PermissionSet};
pub use text::TranslatedText;
