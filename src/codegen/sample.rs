use serde_json::{Map, Value};

use crate::ir::{Ty, TypeNode};

pub const SAMPLE_STRING: &str = "string";
pub const SAMPLE_NUMBER: i64 = 0;

/// Representative value for a node: one literal per kind, one item per array,
/// every property (required or not) per object.
pub fn sample_value(node: &TypeNode) -> Value {
    match &node.ty {
        Ty::String => Value::from(SAMPLE_STRING),
        Ty::Number => Value::from(SAMPLE_NUMBER),
        Ty::Boolean => Value::Bool(true),
        Ty::Null => Value::Null,
        Ty::Array { items } => Value::Array(vec![sample_value(items)]),
        Ty::Object { properties, .. } => Value::Object(
            properties
                .iter()
                .map(|(k, v)| (k.clone(), sample_value(v)))
                .collect::<Map<_, _>>(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::infer;
    use serde_json::json;

    #[test]
    fn sample_mirrors_shape() {
        let node = infer(&json!({
            "name": "x",
            "age": 12,
            "ok": false,
            "none": null,
            "tags": [],
            "owner": {"id": 9}
        }));
        assert_eq!(sample_value(&node), json!({
            "name": "string",
            "age": 0,
            "ok": true,
            "none": null,
            "tags": ["string"],
            "owner": {"id": 0}
        }));
    }

    #[test]
    fn sample_is_reinferred_to_same_shape() {
        let node = infer(&json!({"a": [{"b": [1]}], "c": "x"}));
        assert_eq!(infer(&sample_value(&node)), node);
    }
}
