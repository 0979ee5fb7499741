// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides builders for locations, permission sets and page renderers

#![allow(dead_code)]

use locview::{
    Location, LocationsMap, LocationsTree, Permission, PermissionSet, Routes, TranslatedText,
    Translator,
};
use locview::view::PageRenderer;
use uuid::Uuid;

pub const SERVICE_NAME: &str = "Sample Manager";

pub struct TestLocationBuilder {
    location: Location,
}

impl TestLocationBuilder {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            location: Location::new(id, TranslatedText::plain(name)),
        }
    }

    pub fn unnamed(id: i64) -> Self {
        Self {
            location: Location::new(id, TranslatedText::default()),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.location.description = Some(TranslatedText::plain(description));
        self
    }

    pub fn with_fed_id(mut self, fed_id: i64) -> Self {
        self.location.fed_id = Some(fed_id);
        self
    }

    pub fn with_component(mut self, component_id: i64, name: &str) -> Self {
        self.location.component = Some(locview::Component {
            id: component_id,
            uuid: Uuid::new_v4(),
            name: Some(name.to_string()),
            address: None,
        });
        self
    }

    pub fn build(self) -> Location {
        self.location
    }
}

pub fn permissions(flags: &[Permission]) -> PermissionSet {
    flags.iter().copied().collect()
}

pub fn test_renderer() -> PageRenderer {
    PageRenderer::new(SERVICE_NAME, Routes::default(), Translator::new())
        .expect("Failed to build renderer")
}

pub fn map_of(locations: Vec<Location>) -> LocationsMap {
    locations
        .into_iter()
        .map(|location| (location.id, location))
        .collect()
}

/// A flat tree with one node per given id, in the given order.
pub fn flat_tree(ids: &[i64]) -> LocationsTree {
    let mut tree = LocationsTree::new();
    for id in ids {
        tree.insert(*id);
    }
    tree
}

/// Count the action links in a rendered page.
pub fn action_link_count(html: &str) -> usize {
    html.matches("<a class=\"button\"").count()
}
