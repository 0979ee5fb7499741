// ABOUTME: Sub-location listing markup built from the locations tree
// ABOUTME: Walks the hierarchy iteratively and sorts every level by resolved display name

use handlebars::html_escape;

use super::error::{Result, ViewError};
use super::helpers::indicator_html;
use crate::i18n::Locale;
use crate::model::{LocationsMap, LocationsTree};
use crate::routes::Routes;

struct TreeEntry<'a> {
    location_id: i64,
    name: String,
    federated: bool,
    component_name: Option<String>,
    subtree: &'a LocationsTree,
}

/// Render the nested sub-location list for a tree.
///
/// Returns `None` for an empty tree. Traversal uses an explicit stack of
/// pending levels, so hierarchy depth never grows the call stack. Entries
/// at every level are ordered by resolved display name, with the id as
/// tiebreak; a tree id absent from the map is a rendering failure.
pub fn render_sub_locations(
    tree: &LocationsTree,
    locations_map: &LocationsMap,
    locale: &Locale,
    routes: &Routes,
) -> Result<Option<String>> {
    if tree.is_empty() {
        return Ok(None);
    }

    let mut html = String::from("<ul class=\"locations-tree\">\n");
    let mut pending: Vec<std::vec::IntoIter<TreeEntry>> = vec![sorted_entries(tree, locations_map, locale)?];

    while let Some(level) = pending.last_mut() {
        match level.next() {
            Some(entry) => {
                html.push_str("<li>");
                html.push_str(&format!(
                    "<a href=\"{}\">{}</a>{}",
                    routes.location(entry.location_id),
                    html_escape(&entry.name),
                    indicator_html(entry.federated, entry.component_name.as_deref()),
                ));
                if entry.subtree.is_empty() {
                    html.push_str("</li>\n");
                } else {
                    html.push_str("\n<ul>\n");
                    pending.push(sorted_entries(entry.subtree, locations_map, locale)?);
                }
            }
            None => {
                pending.pop();
                if pending.is_empty() {
                    html.push_str("</ul>\n");
                } else {
                    html.push_str("</ul>\n</li>\n");
                }
            }
        }
    }

    Ok(Some(html))
}

fn sorted_entries<'a>(
    tree: &'a LocationsTree,
    locations_map: &LocationsMap,
    locale: &Locale,
) -> Result<std::vec::IntoIter<TreeEntry<'a>>> {
    let mut entries = Vec::with_capacity(tree.len());
    for (location_id, subtree) in tree.children() {
        let location = locations_map
            .get(&location_id)
            .ok_or(ViewError::UnknownLocation(location_id))?;
        entries.push(TreeEntry {
            location_id,
            name: location.display_name(locale),
            federated: location.is_federated(),
            component_name: location
                .component
                .as_ref()
                .map(|component| component.display_name()),
            subtree,
        });
    }
    entries.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then(a.location_id.cmp(&b.location_id))
    });
    Ok(entries.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Location, TranslatedText};

    fn map_with(names: &[(i64, &str)]) -> LocationsMap {
        names
            .iter()
            .map(|(id, name)| (*id, Location::new(*id, TranslatedText::plain(*name))))
            .collect()
    }

    #[test]
    fn test_empty_tree_renders_nothing() {
        let rendered = render_sub_locations(
            &LocationsTree::new(),
            &LocationsMap::new(),
            &Locale::default(),
            &Routes::default(),
        )
        .unwrap();
        assert!(rendered.is_none());
    }

    #[test]
    fn test_entries_sorted_by_display_name() {
        let mut tree = LocationsTree::new();
        tree.insert(1);
        tree.insert(2);
        tree.insert(3);
        let map = map_with(&[(1, "Zebra Rack"), (2, "Attic"), (3, "middle shelf")]);

        let html = render_sub_locations(&tree, &map, &Locale::default(), &Routes::default())
            .unwrap()
            .unwrap();

        let attic = html.find("Attic").unwrap();
        let middle = html.find("middle shelf").unwrap();
        let zebra = html.find("Zebra Rack").unwrap();
        assert!(attic < middle);
        assert!(middle < zebra);
    }

    #[test]
    fn test_nested_levels_render_nested_lists() {
        let mut tree = LocationsTree::new();
        tree.insert(1).insert(2);
        let map = map_with(&[(1, "Basement"), (2, "Freezer")]);

        let html = render_sub_locations(&tree, &map, &Locale::default(), &Routes::default())
            .unwrap()
            .unwrap();

        assert!(html.contains("<a href=\"/locations/1\">Basement</a>"));
        assert!(html.contains("<a href=\"/locations/2\">Freezer</a>"));
        assert!(html.find("Basement").unwrap() < html.find("<ul>\n").unwrap());
        assert_eq!(html.matches("<ul").count(), html.matches("</ul>").count());
        assert_eq!(html.matches("<li>").count(), html.matches("</li>").count());
    }

    #[test]
    fn test_names_are_escaped() {
        let mut tree = LocationsTree::new();
        tree.insert(1);
        let map = map_with(&[(1, "<b>bold</b> shelf")]);

        let html = render_sub_locations(&tree, &map, &Locale::default(), &Routes::default())
            .unwrap()
            .unwrap();

        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; shelf"));
    }

    #[test]
    fn test_missing_map_entry_is_an_error() {
        let mut tree = LocationsTree::new();
        tree.insert(7);

        let result = render_sub_locations(
            &tree,
            &LocationsMap::new(),
            &Locale::default(),
            &Routes::default(),
        );
        assert!(matches!(result, Err(ViewError::UnknownLocation(7))));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut tree = LocationsTree::new();
        let mut map = LocationsMap::new();
        {
            let mut node = &mut tree;
            for id in 0..10_000 {
                map.insert(id, Location::new(id, TranslatedText::plain(format!("L{}", id))));
                node = node.insert(id);
            }
        }

        let html = render_sub_locations(&tree, &map, &Locale::default(), &Routes::default())
            .unwrap()
            .unwrap();
        assert!(html.contains("L9999"));
    }
}
