// ABOUTME: Built-in page templates for the location detail view
// ABOUTME: Provides the base layout and content template registered with the engine

use handlebars::Handlebars;

use super::error::Result;

/// Shared page layout. Content templates fill the `page_title` and
/// `page_content` extension points through inline partials.
pub const BASE_LAYOUT: &str = r#"<!DOCTYPE html>
<html lang="{{locale}}">
<head>
<meta charset="utf-8">
<title>{{> page_title}}</title>
</head>
<body>
<main class="container">
{{> page_content}}
</main>
</body>
</html>
"#;

/// Location detail page content.
///
/// All policy decisions (permission gating, the federation edit guard,
/// sub-location ordering) are made while building the context; this
/// template only tests field presence. URL fields are emitted raw: they
/// are built by the routes module from numeric ids and the configured
/// base path, never from user text, and the default escape function
/// would mangle their query separators.
pub const LOCATION_PAGE: &str = r#"{{#> base}}
{{#*inline "page_title"}}{{service_name}} - {{labels.location}} #{{location_id}}{{/inline}}
{{#*inline "page_content"}}
<h1>{{labels.location}} #{{location_id}}: {{#each breadcrumbs}}<a href="{{{url}}}">{{name}}</a>{{fed_indicator fed component_name}} / {{/each}}{{name}}{{fed_indicator fed component_name}}</h1>
{{#if sub_locations_html}}
<h2>{{labels.sub_locations}}</h2>
{{{sub_locations_html}}}
{{/if}}
{{#if description}}
<pre class="location-description">{{description}}</pre>
{{/if}}
{{#if component}}
<p class="location-import">{{labels.imported_from}} <a href="{{{component.url}}}">{{component.name}}</a></p>
{{/if}}
<div class="location-actions">
<a class="button" href="{{{actions.view_objects}}}">{{labels.view_objects}}</a>
{{#if actions.edit_location}}
<a class="button" href="{{{actions.edit_location}}}">{{labels.edit_location}}</a>
{{/if}}
{{#if actions.create_sub_location}}
<a class="button" href="{{{actions.create_sub_location}}}">{{labels.create_sub_location}}</a>
{{/if}}
{{#if actions.edit_permissions}}
<a class="button" href="{{{actions.edit_permissions}}}">{{labels.edit_permissions}}</a>
{{/if}}
</div>
{{/inline}}
{{/base}}
"#;

/// Register the built-in templates with a Handlebars instance.
pub fn register_templates(handlebars: &mut Handlebars) -> Result<()> {
    handlebars.register_template_string("base", BASE_LAYOUT)?;
    handlebars.register_template_string("location_page", LOCATION_PAGE)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_parse() {
        let mut handlebars = Handlebars::new();
        register_templates(&mut handlebars).unwrap();

        assert!(handlebars.get_template("base").is_some());
        assert!(handlebars.get_template("location_page").is_some());
    }

    #[test]
    fn test_template_extension_points() {
        assert!(BASE_LAYOUT.contains("{{> page_title}}"));
        assert!(BASE_LAYOUT.contains("{{> page_content}}"));
        assert!(LOCATION_PAGE.contains("{{#> base}}"));
    }
}
