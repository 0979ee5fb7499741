// ABOUTME: Location, component and hierarchy records provided by the host application
// ABOUTME: Read-only inputs for rendering, fetched and validated upstream of this crate

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::text::TranslatedText;
use crate::i18n::Locale;

/// Lookup map from location id to the full record, used to resolve names
/// while walking a [`LocationsTree`].
pub type LocationsMap = IndexMap<i64, Location>;

/// A hierarchical placement record, e.g. a physical storage location.
///
/// A set `fed_id` marks the record as owned by a remote federation peer and
/// therefore read-only on this instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,

    #[serde(default)]
    pub name: TranslatedText,

    #[serde(default)]
    pub description: Option<TranslatedText>,

    #[serde(default)]
    pub component: Option<Component>,

    #[serde(default)]
    pub fed_id: Option<i64>,
}

impl Location {
    pub fn new(id: i64, name: TranslatedText) -> Self {
        Self {
            id,
            name,
            description: None,
            component: None,
            fed_id: None,
        }
    }

    /// Resolved display name, falling back to a numbered placeholder when
    /// the record carries no usable name.
    pub fn display_name(&self, locale: &Locale) -> String {
        self.name
            .resolve(locale)
            .unwrap_or_else(|| format!("Location #{}", self.id))
    }

    /// Whether the record originates from a remote federation peer.
    pub fn is_federated(&self) -> bool {
        self.fed_id.is_some()
    }
}

/// An external database instance from which records may have been imported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub id: i64,
    pub uuid: Uuid,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}

impl Component {
    /// Display name, falling back to the component uuid when unnamed.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => self.uuid.to_string(),
        }
    }
}

/// Nested mapping from location id to its own subtree of sub-locations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationsTree(IndexMap<i64, LocationsTree>);

impl LocationsTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert a child node, returning its (possibly pre-existing) subtree.
    pub fn insert(&mut self, location_id: i64) -> &mut LocationsTree {
        self.0.entry(location_id).or_default()
    }

    pub fn children(&self) -> impl Iterator<Item = (i64, &LocationsTree)> {
        self.0.iter().map(|(id, subtree)| (*id, subtree))
    }

    /// All location ids contained in the tree, gathered without recursion.
    pub fn ids(&self) -> Vec<i64> {
        let mut ids = Vec::new();
        let mut pending: Vec<&LocationsTree> = vec![self];
        while let Some(tree) = pending.pop() {
            for (id, subtree) in tree.children() {
                ids.push(id);
                pending.push(subtree);
            }
        }
        ids
    }
}

// The compiler-generated drop glue recurses once per tree level, which
// aborts on pathologically deep hierarchies. Drain descendants onto a flat
// worklist first, so every node is empty by the time it is dropped.
impl Drop for LocationsTree {
    fn drop(&mut self) {
        let mut pending = vec![std::mem::take(&mut self.0)];
        while let Some(level) = pending.pop() {
            for (_, mut subtree) in level {
                pending.push(std::mem::take(&mut subtree.0));
            }
        }
    }
}
