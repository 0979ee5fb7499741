// ABOUTME: Serializable template context for the location detail page
// ABOUTME: Applies permission gating, the federation edit guard and label translation

use serde::Serialize;

use super::error::Result;
use super::tree::render_sub_locations;
use super::LocationView;
use crate::i18n::{Locale, Translate};
use crate::model::{Location, Permission};
use crate::routes::Routes;

/// Fully resolved context handed to the template engine.
///
/// Every conditional the page shows is decided here; the template only
/// tests which optional fields are present.
#[derive(Debug, Clone, Serialize)]
pub struct LocationPage {
    pub service_name: String,
    pub locale: String,
    pub location_id: i64,
    pub name: String,
    pub fed: bool,
    pub component_name: Option<String>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub sub_locations_html: Option<String>,
    pub description: Option<String>,
    pub component: Option<ComponentRef>,
    pub actions: ActionLinks,
    pub labels: Labels,
}

/// One clickable ancestor in the heading, outermost first.
#[derive(Debug, Clone, Serialize)]
pub struct Breadcrumb {
    pub url: String,
    pub name: String,
    pub fed: bool,
    pub component_name: Option<String>,
}

/// Link to the federation component a location was imported from.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentRef {
    pub url: String,
    pub name: String,
}

/// Action row links. `view_objects` is always present; the rest are
/// permission gated.
#[derive(Debug, Clone, Serialize)]
pub struct ActionLinks {
    pub view_objects: String,
    pub edit_location: Option<String>,
    pub create_sub_location: Option<String>,
    pub edit_permissions: Option<String>,
}

/// Translated interface strings used by the page templates.
#[derive(Debug, Clone, Serialize)]
pub struct Labels {
    pub location: String,
    pub sub_locations: String,
    pub imported_from: String,
    pub view_objects: String,
    pub edit_location: String,
    pub create_sub_location: String,
    pub edit_permissions: String,
}

impl Labels {
    fn resolve(translator: &dyn Translate, locale: &Locale) -> Self {
        Self {
            location: translator.translate("Location", locale),
            sub_locations: translator.translate("Sub-Locations", locale),
            imported_from: translator.translate("imported from", locale),
            view_objects: translator.translate("View Objects", locale),
            edit_location: translator.translate("Edit Location", locale),
            create_sub_location: translator.translate("Create Sub-Location", locale),
            edit_permissions: translator.translate("Edit Permissions", locale),
        }
    }
}

impl LocationPage {
    /// Build the page context from the caller-provided view inputs.
    pub fn build(
        view: &LocationView<'_>,
        service_name: &str,
        locale: &Locale,
        translator: &dyn Translate,
        routes: &Routes,
    ) -> Result<Self> {
        let location = view.location;

        let breadcrumbs = view
            .ancestors
            .iter()
            .map(|ancestor| Breadcrumb {
                url: routes.location(ancestor.id),
                name: ancestor.display_name(locale),
                fed: ancestor.is_federated(),
                component_name: component_display_name(ancestor),
            })
            .collect();

        let sub_locations_html = match view.locations_tree {
            Some(tree) => render_sub_locations(tree, view.locations_map, locale, routes)?,
            None => None,
        };

        let description = location
            .description
            .as_ref()
            .and_then(|description| description.resolve(locale));

        let component = location.component.as_ref().map(|component| ComponentRef {
            url: routes.component(component.id),
            name: component.display_name(),
        });

        let can_write = view.permissions.contains(Permission::Write);
        let actions = ActionLinks {
            view_objects: routes.objects_for_location(location.id),
            // Federated records are read-only locally, WRITE or not.
            edit_location: (can_write && !location.is_federated())
                .then(|| routes.location_edit(location.id)),
            create_sub_location: can_write.then(|| routes.new_location(location.id)),
            edit_permissions: view
                .permissions
                .contains(Permission::Grant)
                .then(|| routes.location_permissions(location.id)),
        };

        Ok(Self {
            service_name: service_name.to_string(),
            locale: locale.as_str().to_string(),
            location_id: location.id,
            name: location.display_name(locale),
            fed: location.is_federated(),
            component_name: component_display_name(location),
            breadcrumbs,
            sub_locations_html,
            description,
            component,
            actions,
            labels: Labels::resolve(translator, locale),
        })
    }
}

fn component_display_name(location: &Location) -> Option<String> {
    location
        .component
        .as_ref()
        .map(|component| component.display_name())
}
