//! Appendix and console report rendering.
//!
//! Both reports share one skeleton: groups in sorted order, a header per
//! group, one line per property in sorted order. They differ in what a line
//! carries (full description vs. type plus tag line) and in whether
//! deprecated properties appear (the appendix drops them, the console keeps
//! them). Output is a single string; streaming it anywhere is the caller's
//! concern.

use crate::catalog::{Property, PropertyCatalog};
use crate::order::{sort_groups, sort_properties};
use crate::text::{TextError, clean_description, default_value_to_string, tag_line};

const BANNER: &str = "========================================";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// Which of the two report formats to produce.
pub enum ReportVariant {
    /// Per-group `key=default # description` listing, deprecated properties
    /// filtered out, blank line between groups.
    Appendix,
    /// Banner-decorated listing with type and tag line, deprecated
    /// properties included.
    Console,
}

/// Render the whole catalogue in the chosen format.
///
/// Fails only when a property's default value has a shape
/// `default_value_to_string` rejects; everything else (empty catalogue,
/// empty group, absent description) renders as empty output for that
/// element.
pub fn render(catalog: &PropertyCatalog, variant: ReportVariant) -> Result<String, TextError> {
    match variant {
        ReportVariant::Appendix => appendix(catalog),
        ReportVariant::Console => console(catalog),
    }
}

fn appendix(catalog: &PropertyCatalog) -> Result<String, TextError> {
    let mut out = String::new();
    for group in sort_groups(catalog.all_groups().values()) {
        out.push_str("# ");
        out.push_str(&group.id);
        out.push('\n');
        let active: Vec<&Property> = group
            .properties
            .values()
            .filter(|property| !property.deprecated)
            .collect();
        for property in sort_properties(active) {
            out.push_str(&property.id);
            out.push('=');
            if let Some(value) = &property.default_value {
                out.push_str(&default_value_to_string(value)?);
            }
            out.push_str(" # ");
            out.push_str(&clean_description(property.description.as_deref()));
            out.push('\n');
        }
        out.push('\n');
    }
    Ok(out)
}

fn console(catalog: &PropertyCatalog) -> Result<String, TextError> {
    let mut out = String::new();
    for group in sort_groups(catalog.all_groups().values()) {
        let sources: Vec<&str> = group.sources.iter().map(String::as_str).collect();
        out.push_str(BANNER);
        out.push('\n');
        out.push_str("Group --- ");
        out.push_str(&group.id);
        out.push('(');
        out.push_str(&sources.join(" "));
        out.push_str(")\n");
        out.push_str(BANNER);
        out.push('\n');
        for property in sort_properties(group.properties.values()) {
            out.push_str(&console_line(property)?);
            out.push('\n');
        }
    }
    Ok(out)
}

/// One console line: `<id>=<default> # (<type>) - <tag-line>`, with a
/// `--- NO DESCRIPTION` marker when the description is blank.
fn console_line(property: &Property) -> Result<String, TextError> {
    let mut line = String::new();
    line.push_str(&property.id);
    line.push('=');
    if let Some(value) = &property.default_value {
        line.push_str(&default_value_to_string(value)?);
    }
    line.push_str(" # (");
    line.push_str(&property.type_name);
    line.push(')');
    match property
        .description
        .as_deref()
        .filter(|text| !text.trim().is_empty())
    {
        Some(description) => {
            line.push_str(" - ");
            line.push_str(&tag_line(description));
        }
        None => line.push_str(" --- NO DESCRIPTION"),
    }
    Ok(line)
}
