//! Markdown reference page: property table plus an example payload.

use super::sample::sample_value;
use crate::ir::{Ty, TypeNode};

/// Row label used when the root is not an object.
pub const VALUE_ROW: &str = "(value)";

pub fn render(type_name: &str, node: &TypeNode) -> String {
    let mut out = format!("# {type_name}\n\n");
    if let Some(desc) = &node.description {
        out.push_str(desc.trim());
        out.push_str("\n\n");
    }

    out.push_str("## Properties\n\n");
    match &node.ty {
        Ty::Object { properties, .. } if properties.is_empty() => {
            out.push_str("_No fixed properties; any string key is accepted._\n\n");
        }
        Ty::Object { .. } => {
            out.push_str(TABLE_HEADER);
            for field in node.fields() {
                out.push_str(&row(Some(field.name), field.ty, field.required));
            }
            out.push('\n');
        }
        _ => {
            out.push_str(TABLE_HEADER);
            out.push_str(&row(None, node, true));
            out.push('\n');
        }
    }

    let example = serde_json::to_string_pretty(&sample_value(node)).unwrap_or_default();
    out.push_str("## Example\n\n```json\n");
    out.push_str(&example);
    out.push_str("\n```\n");
    out
}

const TABLE_HEADER: &str = "| Property | Type | Required | Description |\n| --- | --- | --- | --- |\n";

/// `name` is `None` for the synthetic row of a non-object root.
fn row(name: Option<&str>, node: &TypeNode, required: bool) -> String {
    let label = match name {
        Some(name) => code_span(name),
        None => VALUE_ROW.to_string(),
    };
    let description = match &node.description {
        Some(desc) => desc.trim().to_string(),
        None => default_description(node),
    };
    format!(
        "| {} | {} | {} | {} |\n",
        cell(&label),
        cell(&code_span(&display_name(node))),
        if required { "Yes" } else { "No" },
        cell(&description),
    )
}

/// Short human-readable type: `string`, `number[]`, `{ id, name }`, `object`.
pub fn display_name(node: &TypeNode) -> String {
    match &node.ty {
        Ty::Array { items } => format!("{}[]", display_name(items)),
        Ty::Object { properties, .. } if !properties.is_empty() => {
            let names = properties.keys().map(String::as_str).collect::<Vec<_>>();
            format!("{{ {} }}", names.join(", "))
        }
        _ => node.kind().as_str().to_string(),
    }
}

fn default_description(node: &TypeNode) -> String {
    match &node.ty {
        Ty::String => "A string value.".into(),
        Ty::Number => "A numeric value.".into(),
        Ty::Boolean => "A boolean flag.".into(),
        Ty::Null => "Always null.".into(),
        Ty::Array { items } => format!("A list of {} items.", display_name(items)),
        Ty::Object { properties, .. } if properties.is_empty() => "An object with arbitrary keys.".into(),
        Ty::Object { .. } => "A nested object.".into(),
    }
}

/// Inline code whose fence is longer than any backtick run inside `text`.
fn code_span(text: &str) -> String {
    let longest = text
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest + 1);
    let pad = if text.starts_with('`') || text.ends_with('`') { " " } else { "" };
    format!("{fence}{pad}{text}{pad}{fence}")
}

fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{infer, infer_from_examples};
    use serde_json::json;

    #[test]
    fn table_rows_follow_property_order() {
        let a = json!({"id": 1, "tags": ["x"], "owner": {"name": "n", "age": 3}});
        let b = json!({"id": 2});
        let node = infer_from_examples([&a, &b]);
        let text = render("Item", &node);
        let expected_rows = "\
| Property | Type | Required | Description |
| --- | --- | --- | --- |
| `id` | `number` | Yes | A numeric value. |
| `tags` | `string[]` | No | A list of string items. |
| `owner` | `{ name, age }` | No | A nested object. |
";
        assert!(text.starts_with("# Item\n\n## Properties\n\n"));
        assert!(text.contains(expected_rows), "{text}");
    }

    #[test]
    fn example_block_is_pretty_json() {
        let text = render("Pt", &infer(&json!({"x": 1.5})));
        assert!(text.ends_with("## Example\n\n```json\n{\n  \"x\": 0\n}\n```\n"));
    }

    #[test]
    fn non_object_root_gets_value_row() {
        let text = render("Ids", &infer(&json!([[1]])));
        assert!(text.contains("| (value) | `number[][]` | Yes | A list of number[] items. |\n"));
    }

    #[test]
    fn empty_object_root_has_note_instead_of_table() {
        let text = render("Bag", &infer(&json!({})));
        assert!(!text.contains("| Property |"));
        assert!(text.contains("_No fixed properties"));
        assert!(text.contains("```json\n{}\n```"));
    }

    #[test]
    fn display_names() {
        assert_eq!(display_name(&infer(&json!({}))), "object");
        assert_eq!(display_name(&infer(&json!([{"a": 1, "b": 2}]))), "{ a, b }[]");
        assert_eq!(display_name(&infer(&json!(null))), "null");
    }

    #[test]
    fn pipes_are_escaped() {
        let node = infer(&json!({"a|b": true}));
        let text = render("Odd", &node);
        assert!(text.contains("| `a\\|b` | `boolean` | Yes | A boolean flag. |"));
    }

    #[test]
    fn value_named_property_keeps_code_span() {
        let node = infer(&json!({"(value)": 1, "a`b": {"x`y": 1}}));
        let text = render("Odd", &node);
        assert!(text.contains("| `(value)` | `number` | Yes | A numeric value. |\n"), "{text}");
        assert!(text.contains("| ``a`b`` | ``{ x`y }`` | Yes | A nested object. |\n"), "{text}");
    }

    #[test]
    fn code_span_fences() {
        assert_eq!(code_span("id"), "`id`");
        assert_eq!(code_span("a``b"), "```a``b```");
        assert_eq!(code_span("`x"), "`` `x ``");
    }

    #[test]
    fn explicit_description_wins() {
        let mut props = indexmap::IndexMap::new();
        props.insert("n".to_string(), TypeNode::number().with_description("Count of things"));
        let node = TypeNode::object(props, Vec::<String>::new());
        let text = render("C", &node);
        assert!(text.contains("| `n` | `number` | No | Count of things |"));
    }
}
