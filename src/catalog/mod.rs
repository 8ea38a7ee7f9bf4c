//! Configuration-property catalogue wiring.
//!
//! This module holds the in-memory catalogue model plus the glue that parses
//! metadata documents into it. The rest of the crate treats the catalogue as
//! an already-populated value; how it got populated (documents on disk,
//! stdin, hand-built in tests) is confined to `loader`.

pub mod loader;
pub mod model;

pub use loader::{load_metadata_from_path, merge_metadata_document, parse_metadata_document};
pub use model::{Property, PropertyCatalog, PropertyGroup, ROOT_GROUP};
