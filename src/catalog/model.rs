//! In-memory model of a configuration-property metadata catalogue.
//!
//! The types mirror the metadata document shape closely enough that the
//! loader can populate them without ad-hoc JSON handling, while staying
//! independent of any one document: a catalogue may be assembled from several
//! documents, or built by hand in tests. Group and property maps are
//! `BTreeMap`s so iteration is deterministic everywhere the model is read.

use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Reserved identifier for the pseudo-group holding properties that no named
/// group has claimed yet.
pub const ROOT_GROUP: &str = "_ROOT_GROUP_";

#[derive(Clone, Debug, Default)]
/// Full catalogue of property groups keyed by group identifier.
pub struct PropertyCatalog {
    groups: BTreeMap<String, PropertyGroup>,
}

impl PropertyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every group in the catalogue, keyed by identifier.
    pub fn all_groups(&self) -> &BTreeMap<String, PropertyGroup> {
        &self.groups
    }

    /// Look up a group by identifier, if present.
    pub fn group(&self, id: &str) -> Option<&PropertyGroup> {
        self.groups.get(id)
    }

    /// Mutable lookup, used by reconciliation to move properties between
    /// groups.
    pub fn group_mut(&mut self, id: &str) -> Option<&mut PropertyGroup> {
        self.groups.get_mut(id)
    }

    /// Fetch a group, creating an empty one under `id` when absent.
    pub fn ensure_group(&mut self, id: &str) -> &mut PropertyGroup {
        self.groups
            .entry(id.to_string())
            .or_insert_with(|| PropertyGroup::new(id))
    }

    /// Total number of properties across all groups.
    pub fn property_count(&self) -> usize {
        self.groups.values().map(|group| group.properties.len()).sum()
    }
}

#[derive(Clone, Debug)]
/// A named collection of related properties plus the source types that
/// declared them.
pub struct PropertyGroup {
    pub id: String,
    pub sources: BTreeSet<String>,
    pub properties: BTreeMap<String, Property>,
}

impl PropertyGroup {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            sources: BTreeSet::new(),
            properties: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Debug)]
/// One configuration property descriptor.
///
/// Immutable once loaded; only its group membership changes, and only during
/// reconciliation. `default_value` holds the raw JSON value (scalar or flat
/// array) so stringification stays a rendering concern.
pub struct Property {
    pub id: String,
    pub type_name: String,
    pub default_value: Option<Value>,
    pub description: Option<String>,
    pub deprecated: bool,
}

impl Property {
    /// Minimal descriptor with just an identifier; handy for tests and for
    /// callers assembling catalogues by hand.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            type_name: String::new(),
            default_value: None,
            description: None,
            deprecated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_group_is_idempotent() {
        let mut catalog = PropertyCatalog::new();
        catalog
            .ensure_group("server")
            .sources
            .insert("Alpha".to_string());
        catalog
            .ensure_group("server")
            .sources
            .insert("Beta".to_string());

        assert_eq!(catalog.all_groups().len(), 1);
        let group = catalog.group("server").expect("group present");
        assert_eq!(group.sources.len(), 2);
    }

    #[test]
    fn property_count_spans_groups() {
        let mut catalog = PropertyCatalog::new();
        catalog
            .ensure_group(ROOT_GROUP)
            .properties
            .insert("debug".to_string(), Property::new("debug"));
        catalog
            .ensure_group("server")
            .properties
            .insert("server.port".to_string(), Property::new("server.port"));

        assert_eq!(catalog.property_count(), 2);
        assert!(catalog.group("missing").is_none());
    }
}
