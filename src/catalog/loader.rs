//! Loads configuration metadata documents into a `PropertyCatalog`.
//!
//! A metadata document is the conventional JSON shape produced by build-time
//! annotation processors: a `groups` array and a `properties` array. The
//! loader performs no validation beyond JSON well-formedness; every declared
//! group is created up front, and every property lands on the root group so
//! that `attach_root_properties` decides final membership in one place.

use crate::catalog::model::{Property, PropertyCatalog, ROOT_GROUP};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
/// One metadata document as found on disk.
struct MetadataDocument {
    #[serde(default)]
    groups: Vec<GroupEntry>,
    #[serde(default)]
    properties: Vec<PropertyEntry>,
}

#[derive(Debug, Deserialize)]
struct GroupEntry {
    name: String,
    #[serde(default, rename = "sourceType")]
    source_type: Option<String>,
    #[serde(default, rename = "type")]
    type_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PropertyEntry {
    name: String,
    #[serde(default, rename = "type")]
    type_name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "defaultValue")]
    default_value: Option<Value>,
    // Older documents carry a boolean flag, newer ones a deprecation object;
    // either marks the property deprecated.
    #[serde(default)]
    deprecated: bool,
    #[serde(default)]
    deprecation: Option<Value>,
}

/// Parse one metadata document and fold it into `catalog`.
///
/// Property entries are keyed by identifier, so an entry seen in a later
/// document replaces an earlier one with the same name (plain map insert, no
/// merge).
pub fn merge_metadata_document(catalog: &mut PropertyCatalog, raw: &str) -> Result<()> {
    let document: MetadataDocument =
        serde_json::from_str(raw).context("parsing metadata document")?;

    for group in document.groups {
        let entry = catalog.ensure_group(&group.name);
        if let Some(source) = group.source_type.or(group.type_name) {
            entry.sources.insert(source);
        }
    }

    let root = catalog.ensure_group(ROOT_GROUP);
    for property in document.properties {
        let deprecated = property.deprecated || property.deprecation.is_some();
        let default_value = property.default_value.filter(|value| !value.is_null());
        root.properties.insert(
            property.name.clone(),
            Property {
                id: property.name,
                type_name: property.type_name.unwrap_or_default(),
                default_value,
                description: property.description,
                deprecated,
            },
        );
    }

    Ok(())
}

/// Parse a single metadata document into a fresh catalogue.
pub fn parse_metadata_document(raw: &str) -> Result<PropertyCatalog> {
    let mut catalog = PropertyCatalog::new();
    merge_metadata_document(&mut catalog, raw)?;
    Ok(catalog)
}

/// Read and parse a metadata document from disk, folding it into `catalog`.
pub fn load_metadata_from_path(catalog: &mut PropertyCatalog, path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    merge_metadata_document(catalog, &raw).with_context(|| format!("loading {}", path.display()))
}
