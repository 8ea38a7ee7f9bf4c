use confmeta::{Property, PropertyCatalog, ROOT_GROUP};
use serde_json::{Value, json};

/// Build the fixture metadata document used across the suite: one declared
/// group (`server.tomcat`) plus a mix of grouped, orphaned, dotless, and
/// deprecated properties, all landing on the root group at load time.
pub fn fixture_document() -> Value {
    json!({
        "groups": [
            {
                "name": "server.tomcat",
                "type": "org.example.TomcatProperties",
                "sourceType": "org.example.TomcatProperties"
            }
        ],
        "properties": [
            {
                "name": "server.tomcat.max-threads",
                "type": "java.lang.Integer",
                "description": "maximum amount of worker threads",
                "defaultValue": 200
            },
            {
                "name": "server.port",
                "type": "java.lang.Integer",
                "description": "Server HTTP port. Randomized when set to 0.",
                "defaultValue": 8080
            },
            {
                "name": "server.tomcat.accesslog.enabled",
                "type": "java.lang.Boolean",
                "defaultValue": false,
                "deprecation": {"reason": "superseded"}
            },
            {
                "name": "debug",
                "type": "java.lang.Boolean",
                "defaultValue": false,
                "description": "enable debug logs"
            }
        ]
    })
}

/// Hand-built catalogue for tests that bypass the loader.
pub fn catalog_with(groups: &[&str], root_properties: Vec<Property>) -> PropertyCatalog {
    let mut catalog = PropertyCatalog::new();
    for group in groups {
        catalog.ensure_group(group);
    }
    let root = catalog.ensure_group(ROOT_GROUP);
    for property in root_properties {
        root.properties.insert(property.id.clone(), property);
    }
    catalog
}
