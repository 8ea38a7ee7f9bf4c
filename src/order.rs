//! Deterministic presentation ordering for groups and properties.
//!
//! Both orderings are case-sensitive lexicographic over identifiers.
//! Identifiers are unique within their scope, so the comparison is a total
//! order with no ties to break. The functions borrow their inputs and return
//! fresh vectors; nothing is mutated.

use crate::catalog::{Property, PropertyGroup};

/// Order groups by identifier. The reserved root identifier is compared like
/// any other string.
pub fn sort_groups<'a, I>(groups: I) -> Vec<&'a PropertyGroup>
where
    I: IntoIterator<Item = &'a PropertyGroup>,
{
    let mut sorted: Vec<&PropertyGroup> = groups.into_iter().collect();
    sorted.sort_by(|left, right| left.id.cmp(&right.id));
    sorted
}

/// Order properties by identifier within one group.
pub fn sort_properties<'a, I>(properties: I) -> Vec<&'a Property>
where
    I: IntoIterator<Item = &'a Property>,
{
    let mut sorted: Vec<&Property> = properties.into_iter().collect();
    sorted.sort_by(|left, right| left.id.cmp(&right.id));
    sorted
}
