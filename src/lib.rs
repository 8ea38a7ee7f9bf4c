//! Shared library for the confmeta report tools.
//!
//! The crate turns an in-memory catalogue of configuration-property
//! descriptors into one of two textual reports: a per-group appendix listing
//! and a verbose console listing. The pipeline is fixed: a populated
//! catalogue goes through one reconciliation pass (`attach_root_properties`),
//! then `render` walks it in sorted order and builds the report text. Loading
//! metadata documents and printing the result are glue around that core; the
//! `render-metadata` binary is the reference wiring.

pub mod catalog;
pub mod order;
pub mod reconcile;
pub mod report;
pub mod text;

pub use catalog::{
    Property, PropertyCatalog, PropertyGroup, ROOT_GROUP, load_metadata_from_path,
    merge_metadata_document, parse_metadata_document,
};
pub use order::{sort_groups, sort_properties};
pub use reconcile::attach_root_properties;
pub use report::{ReportVariant, render};
pub use text::{TextError, clean_description, default_value_to_string, tag_line};
