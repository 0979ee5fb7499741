// ABOUTME: URL building for the host application's named routes
// ABOUTME: Formats links for location, object listing, permission and component pages

use serde::{Deserialize, Serialize};

/// Builds URLs for routes owned by the host routing layer.
///
/// The renderer never dispatches these routes; it only formats links into
/// the page. A base path prefix supports applications mounted below the
/// server root.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Routes {
    base_path: String,
}

impl Routes {
    pub fn new(base_path: impl Into<String>) -> Self {
        let mut base_path = base_path.into();
        while base_path.ends_with('/') {
            base_path.pop();
        }
        Self { base_path }
    }

    /// Location detail page.
    pub fn location(&self, location_id: i64) -> String {
        format!("{}/locations/{}", self.base_path, location_id)
    }

    /// Location detail page in edit mode.
    pub fn location_edit(&self, location_id: i64) -> String {
        format!("{}/locations/{}?mode=edit", self.base_path, location_id)
    }

    /// Objects listing filtered to one location.
    pub fn objects_for_location(&self, location_id: i64) -> String {
        format!("{}/objects?location_ids={}", self.base_path, location_id)
    }

    /// Creation form for a new sub-location below a parent.
    pub fn new_location(&self, parent_location_id: i64) -> String {
        format!(
            "{}/locations/new?parent_location_id={}",
            self.base_path, parent_location_id
        )
    }

    /// Permission editing page for a location.
    pub fn location_permissions(&self, location_id: i64) -> String {
        format!("{}/locations/{}/permissions", self.base_path, location_id)
    }

    /// Detail page of a federation component.
    pub fn component(&self, component_id: i64) -> String {
        format!("{}/other-databases/{}", self.base_path, component_id)
    }
}
