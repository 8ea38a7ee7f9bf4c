//! Relocates root-group properties into matching named groups.
//!
//! Metadata documents leave a property on the root group whenever no declared
//! group claimed it. Reconciliation gives each such property one chance to
//! find a home: truncate its identifier at the last dot and look for a group
//! with exactly that identifier. There is deliberately no walk up further
//! ancestors; if `a.b.c` finds no group `a.b`, it stays in root even when a
//! group `a` exists.

use crate::catalog::{PropertyCatalog, ROOT_GROUP};

/// Move orphaned root properties into the group matching their identifier
/// truncated at the last dot, returning one advisory message per move.
///
/// Properties without a dot, or whose truncated prefix names no group, stay
/// in root; neither case is an error. Each move is atomic: the property is
/// inserted into the destination before it is removed from root. Running the
/// pass twice is a no-op the second time.
pub fn attach_root_properties(catalog: &mut PropertyCatalog) -> Vec<String> {
    let mut advisories = Vec::new();

    // Snapshot the root keys so removals cannot skip or revisit an entry.
    let root_ids: Vec<String> = match catalog.group(ROOT_GROUP) {
        Some(root) => root.properties.keys().cloned().collect(),
        None => return advisories,
    };

    for id in root_ids {
        let Some((group_id, _)) = id.rsplit_once('.') else {
            continue;
        };
        if group_id == ROOT_GROUP {
            continue;
        }
        let Some(property) = catalog
            .group(ROOT_GROUP)
            .and_then(|root| root.properties.get(&id))
            .cloned()
        else {
            continue;
        };
        let Some(group) = catalog.group_mut(group_id) else {
            continue;
        };
        group.properties.insert(id.clone(), property);
        if let Some(root) = catalog.group_mut(ROOT_GROUP) {
            root.properties.remove(&id);
        }
        advisories.push(format!(
            "Please consider moving property {id} to group {group_id} (currently on the root group)."
        ));
    }

    advisories
}
