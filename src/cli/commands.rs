// ABOUTME: Command implementations for the locview preview tool
// ABOUTME: Renders and validates location page fixtures against the configured service

use anyhow::{bail, Context as _, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use super::Config;
use crate::i18n::{Locale, Translator};
use crate::model::{Location, LocationsMap, LocationsTree, PermissionSet};
use crate::routes::Routes;
use crate::view::{LocationView, PageRenderer};

/// On-disk fixture describing one location page render request.
///
/// Mirrors the context contract the host application passes to the
/// renderer, in a form developers can keep next to their templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRequest {
    pub location: Location,

    #[serde(default)]
    pub ancestors: Vec<Location>,

    #[serde(default)]
    pub locations_tree: Option<LocationsTree>,

    #[serde(default)]
    pub locations_map: LocationsMap,

    #[serde(default)]
    pub permissions: PermissionSet,

    #[serde(default)]
    pub locale: Option<Locale>,
}

impl RenderRequest {
    pub fn as_view(&self) -> LocationView<'_> {
        LocationView {
            location: &self.location,
            ancestors: &self.ancestors,
            locations_tree: self.locations_tree.as_ref(),
            locations_map: &self.locations_map,
            permissions: self.permissions,
        }
    }
}

/// Render a fixture and write the page to stdout or a file.
pub async fn render_page(
    fixture: PathBuf,
    output: Option<PathBuf>,
    locale_override: Option<String>,
    config: &Config,
) -> Result<()> {
    let request = load_request(&fixture).await?;
    let renderer = build_renderer(config).await?;

    let locale = locale_override
        .map(Locale::new)
        .or_else(|| request.locale.clone())
        .unwrap_or_else(|| config.default_locale.clone());

    let html = renderer.render_location(&request.as_view(), &locale)?;

    match output {
        Some(path) => {
            fs::write(&path, &html)
                .await
                .with_context(|| format!("Failed to write output file {}", path.display()))?;
            info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            println!("{}", html);
        }
    }

    Ok(())
}

/// Validate a fixture without rendering output.
///
/// Checks that the fixture parses and that every tree id resolves through
/// the locations map, the same lookups rendering would perform.
pub async fn check_fixture(fixture: PathBuf, config: &Config) -> Result<()> {
    let request = load_request(&fixture).await?;

    if let Some(tree) = &request.locations_tree {
        let missing: Vec<i64> = tree
            .ids()
            .into_iter()
            .filter(|id| !request.locations_map.contains_key(id))
            .collect();
        if !missing.is_empty() {
            bail!(
                "Locations tree references ids missing from the locations map: {:?}",
                missing
            );
        }
    }

    // A dry-run render surfaces template-level problems as well.
    let renderer = build_renderer(config).await?;
    let locale = request
        .locale
        .clone()
        .unwrap_or_else(|| config.default_locale.clone());
    renderer.render_location(&request.as_view(), &locale)?;

    info!("Fixture {} is valid", fixture.display());
    println!("OK: {}", fixture.display());
    Ok(())
}

async fn load_request(fixture: &Path) -> Result<RenderRequest> {
    let content = fs::read_to_string(fixture)
        .await
        .with_context(|| format!("Failed to read fixture {}", fixture.display()))?;
    let request = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse fixture {}", fixture.display()))?;
    Ok(request)
}

async fn build_renderer(config: &Config) -> Result<PageRenderer> {
    let translator = match &config.message_catalog {
        Some(path) => {
            let content = fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read message catalog {}", path.display()))?;
            Translator::from_json(&content)
                .with_context(|| format!("Failed to parse message catalog {}", path.display()))?
        }
        None => Translator::new(),
    };

    let renderer = PageRenderer::new(
        config.service_name.clone(),
        Routes::new(config.base_path.clone()),
        translator,
    )?;
    Ok(renderer)
}
