use relfinder::{LegacyKind, Options, RelationsFinder, SchemaSnapshot};
use serde_json::json;
use wasm_bindgen::prelude::*;

/// Returns `{paths, layers}` as JSON. `excluded_json` is a JSON array of view template names.
#[wasm_bindgen]
pub fn find_relations(
    schema_json: &str,
    source_table: &str,
    view_name: &str,
    excluded_json: &str,
    max_depth: Option<String>,
) -> Result<String, String> {
    let snapshot = SchemaSnapshot::from_json(schema_json).map_err(|e| e.to_string())?;
    let excluded: Vec<String> = if excluded_json.trim().is_empty() {
        vec![]
    } else {
        serde_json::from_str(excluded_json).map_err(|e| e.to_string())?
    };
    let options = Options::from_raw_max_depth(max_depth.as_deref());
    let finder = RelationsFinder::new(&snapshot, options);
    let relations = finder.find_relations(source_table, view_name, &excluded);
    let layers = finder
        .relation_layers(source_table, &relations)
        .map_err(|e| e.to_string())?;
    let result = json!({ "paths": relations, "layers": layers });
    Ok(result.to_string())
}

/// Returns the converted `{type, path}` as JSON, or `null` when nothing could be converted.
#[wasm_bindgen]
pub fn parse_legacy_relation(
    kind: &str,
    relation: Option<String>,
    parent_table: &str,
) -> Result<String, String> {
    let kind: LegacyKind = kind.parse().map_err(|e: relfinder::FinderError| e.to_string())?;
    let converted = relfinder::parse_legacy_relation(kind, relation.as_deref(), parent_table);
    serde_json::to_string(&converted).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"{
        "tables": [
            {"id": 1, "name": "users"},
            {"id": 2, "name": "messages", "foreign_keys": [
                {"id": 10, "name": "author", "table_id": 2, "reftable_name": "users"}
            ]}
        ],
        "views": [
            {"name": "show_user", "viewtemplate": "Show", "table_id": 1, "display_type": "ROW_REQUIRED"}
        ]
    }"#;

    #[test]
    fn test_find_relations() {
        let output = find_relations(SCHEMA, "messages", "show_user", "[]", None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["paths"][0]["type"], "PARENT_SHOW");
        assert_eq!(value["paths"][0]["relationString"], ".messages.author");
        assert_eq!(value["layers"]["fkeys"][0]["relPath"], ".messages.author");

        let excluded = find_relations(SCHEMA, "messages", "show_user", r#"["Show"]"#, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&excluded).unwrap();
        assert_eq!(value["paths"], json!([]));
    }

    #[test]
    fn test_find_relations_with_bad_input() {
        assert!(find_relations("{", "messages", "show_user", "[]", None).is_err());
        assert!(find_relations(SCHEMA, "messages", "show_user", "Show", None).is_err());
    }

    #[test]
    fn test_parse_legacy_relation() {
        let output =
            parse_legacy_relation("ParentShow", Some("show_user.users.author".to_string()), "messages")
                .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["type"], "PARENT_SHOW");
        assert_eq!(value["path"]["sourceTable"], "messages");
        assert_eq!(
            parse_legacy_relation("OneToOneShow", Some("a.b".to_string()), "x"),
            Ok("null".to_string())
        );
        assert!(parse_legacy_relation("Sideways", None, "messages").is_err());
    }
}
