// ABOUTME: Location detail page rendering
// ABOUTME: Turns a pre-fetched view context into a complete HTML page

pub mod context;
pub mod engine;
pub mod error;
pub mod helpers;
pub mod templates;
pub mod tree;

use tracing::debug;

pub use context::{ActionLinks, Breadcrumb, ComponentRef, Labels, LocationPage};
pub use engine::PageEngine;
pub use error::{Result, ViewError};

use crate::i18n::{Locale, Translate, Translator};
use crate::model::{Location, LocationsMap, LocationsTree, PermissionSet};
use crate::routes::Routes;

/// Borrowed, caller-validated inputs for one location page render.
///
/// The caller fetches and authorizes everything before invoking the
/// renderer; rendering itself is a single stateless pass.
#[derive(Debug, Clone, Copy)]
pub struct LocationView<'a> {
    pub location: &'a Location,
    /// Ancestor chain ordered outermost to innermost, possibly empty.
    pub ancestors: &'a [Location],
    pub locations_tree: Option<&'a LocationsTree>,
    /// Required to resolve names whenever `locations_tree` is non-empty.
    pub locations_map: &'a LocationsMap,
    pub permissions: PermissionSet,
}

/// Renders location pages for one service instance.
pub struct PageRenderer {
    engine: PageEngine,
    translator: Translator,
    routes: Routes,
    service_name: String,
}

impl PageRenderer {
    pub fn new(service_name: impl Into<String>, routes: Routes, translator: Translator) -> Result<Self> {
        Ok(Self {
            engine: PageEngine::new()?,
            translator,
            routes,
            service_name: service_name.into(),
        })
    }

    /// Render the detail page for one location.
    pub fn render_location(&self, view: &LocationView<'_>, locale: &Locale) -> Result<String> {
        debug!(
            location_id = view.location.id,
            locale = %locale,
            "Rendering location page"
        );

        let page = LocationPage::build(
            view,
            &self.service_name,
            locale,
            &self.translator,
            &self.routes,
        )?;
        self.engine.render("location_page", &page)
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    pub fn translator(&self) -> &dyn Translate {
        &self.translator
    }
}
