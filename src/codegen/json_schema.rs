// ————————————————————————————————————————————————————————————————————————————
// JSON SCHEMA CG
// ————————————————————————————————————————————————————————————————————————————

use serde_json::{Map, Value};

use crate::ir::{Ty, TypeNode};

pub const DRAFT_07: &str = "http://json-schema.org/draft-07/schema#";

/// Render the root document: `$schema` + `title`, then the node's own schema.
pub fn render(type_name: &str, node: &TypeNode) -> String {
    let schema = to_schema(type_name, node);
    // a Map<String, Value> always serializes
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

pub fn to_schema(type_name: &str, node: &TypeNode) -> Value {
    let mut root = Map::new();
    root.insert("$schema".into(), Value::from(DRAFT_07));
    root.insert("title".into(), Value::from(type_name));
    if let Value::Object(body) = schema_of(node) {
        root.extend(body);
    }
    Value::Object(root)
}

/// Schema for one node, without document-level keys.
pub fn schema_of(node: &TypeNode) -> Value {
    let mut o = Map::new();
    o.insert("type".into(), Value::from(node.kind().as_str()));
    if let Some(desc) = &node.description {
        o.insert("description".into(), Value::from(desc.clone()));
    }
    match &node.ty {
        Ty::String | Ty::Number | Ty::Boolean | Ty::Null => {}
        Ty::Array { items } => {
            o.insert("items".into(), schema_of(items));
        }
        Ty::Object { properties, required } => {
            // omit empty containers entirely
            if !properties.is_empty() {
                let props = properties
                    .iter()
                    .map(|(k, v)| (k.clone(), schema_of(v)))
                    .collect::<Map<_, _>>();
                o.insert("properties".into(), Value::Object(props));
            }
            if !required.is_empty() {
                o.insert(
                    "required".into(),
                    Value::Array(required.iter().cloned().map(Value::from).collect()),
                );
            }
        }
    }
    Value::Object(o)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{infer, infer_from_examples};
    use serde_json::json;

    #[test]
    fn flat_object() {
        let node = infer(&json!({"name": "John", "age": 30, "active": true}));
        let schema = to_schema("User", &node);
        assert_eq!(schema, json!({
            "$schema": DRAFT_07,
            "title": "User",
            "type": "object",
            "properties": {
                "name": { "type": "string" },
                "age": { "type": "number" },
                "active": { "type": "boolean" }
            },
            "required": ["name", "age", "active"]
        }));
    }

    #[test]
    fn empty_object_omits_containers() {
        let schema = schema_of(&infer(&json!({})));
        assert_eq!(schema, json!({ "type": "object" }));
    }

    #[test]
    fn all_optional_omits_required() {
        let a = json!({"a": 1});
        let b = json!({"b": 1});
        let schema = schema_of(&infer_from_examples([&a, &b]));
        assert!(schema.get("required").is_none());
        assert_eq!(schema["properties"]["a"], json!({ "type": "number" }));
    }

    #[test]
    fn arrays_and_null() {
        let node = infer(&json!({"tags": [], "grid": [[1]], "gone": null}));
        let schema = schema_of(&node);
        assert_eq!(schema["properties"]["tags"], json!({ "type": "array", "items": { "type": "string" } }));
        assert_eq!(schema["properties"]["grid"]["items"]["items"], json!({ "type": "number" }));
        assert_eq!(schema["properties"]["gone"], json!({ "type": "null" }));
    }

    #[test]
    fn description_is_emitted() {
        let node = TypeNode::number().with_description("age in years");
        assert_eq!(schema_of(&node), json!({ "type": "number", "description": "age in years" }));
    }

    #[test]
    fn rendered_text_keeps_key_order() {
        let node = infer(&json!({"b": 1, "a": 2}));
        let text = render("Pair", &node);
        let b = text.find("\"b\"").unwrap();
        let a = text.find("\"a\"").unwrap();
        assert!(b < a);
        assert!(text.starts_with("{\n  \"$schema\""));
    }
}
