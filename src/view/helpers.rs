// ABOUTME: Handlebars helper functions for location page rendering
// ABOUTME: Implements the federation indicator glyph shared by heading, breadcrumbs and tree entries

use handlebars::{html_escape, Context, Handlebars, Helper, Output, RenderContext, RenderError};

/// Markup for the federation provenance glyph.
///
/// Returns an empty string for locally owned records. The component name
/// lands in the title attribute, so it is escaped here; callers insert the
/// result unescaped.
pub fn indicator_html(federated: bool, component_name: Option<&str>) -> String {
    if !federated {
        return String::new();
    }

    let source = match component_name {
        Some(name) if !name.is_empty() => format!("imported from {}", name),
        _ => "imported from another database".to_string(),
    };

    format!(
        " <i class=\"fa fa-share-alt fed-indicator\" title=\"{}\"></i>",
        html_escape(&source)
    )
}

/// Federation indicator helper - renders the provenance glyph for a record
pub fn fed_indicator_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> std::result::Result<(), RenderError> {
    let federated = h
        .param(0)
        .and_then(|v| v.value().as_bool())
        .ok_or_else(|| RenderError::new("fed_indicator helper requires federated flag parameter"))?;

    let component_name = h.param(1).and_then(|v| v.value().as_str());

    out.write(&indicator_html(federated, component_name))?;
    Ok(())
}

/// Register all built-in helpers with a Handlebars instance
pub fn register_helpers(
    handlebars: &mut Handlebars,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    handlebars.register_helper("fed_indicator", Box::new(fed_indicator_helper));

    Ok(())
}
