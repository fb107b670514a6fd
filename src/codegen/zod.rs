//! Zod validators.

use super::{indent, property_key, type_ident};
use crate::ir::{Ty, TypeNode};

pub fn render(type_name: &str, node: &TypeNode) -> String {
    let name = type_ident(type_name);
    format!(
        "import {{ z }} from \"zod\";\n\nexport const {name}Schema = {};\n\nexport type {name} = z.infer<typeof {name}Schema>;\n",
        validator(node, 0),
    )
}

/// Validator expression whose first line starts at indent `level`.
pub fn validator(node: &TypeNode, level: usize) -> String {
    let mut out = match &node.ty {
        Ty::String => "z.string()".to_string(),
        Ty::Number => "z.number()".to_string(),
        Ty::Boolean => "z.boolean()".to_string(),
        Ty::Null => "z.null()".to_string(),
        Ty::Array { items } => {
            let elem = validator(items, level + 1);
            if elem.contains('\n') {
                format!("z.array(\n{}{elem}\n{})", indent(level + 1), indent(level))
            } else {
                format!("z.array({elem})")
            }
        }
        Ty::Object { properties, .. } if properties.is_empty() => {
            "z.record(z.string(), z.any())".to_string()
        }
        Ty::Object { .. } => {
            let pad = indent(level + 1);
            let mut s = String::from("z.object({\n");
            for field in node.fields() {
                let optional = if field.required { "" } else { ".optional()" };
                s.push_str(&format!(
                    "{pad}{}: {}{optional},\n",
                    property_key(field.name),
                    validator(field.ty, level + 1),
                ));
            }
            s.push_str(&indent(level));
            s.push_str("})");
            s
        }
    };
    if let Some(desc) = &node.description {
        out.push_str(&format!(".describe({})", serde_json::Value::from(desc.as_str())));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{infer, infer_from_examples};
    use serde_json::json;

    #[test]
    fn object_with_optional() {
        let a = json!({"a": 1, "b": "x"});
        let b = json!({"a": 2});
        let node = infer_from_examples([&a, &b]);
        let expected = "\
import { z } from \"zod\";

export const ThingSchema = z.object({
  a: z.number(),
  b: z.string().optional(),
});

export type Thing = z.infer<typeof ThingSchema>;
";
        assert_eq!(render("thing", &node), expected);
    }

    #[test]
    fn nested_blocks_are_reindented() {
        let node = infer(&json!({
            "rows": [{"id": 1, "cells": [[true]]}],
            "meta": {},
            "nil": null
        }));
        let expected = "\
z.object({
  rows: z.array(
    z.object({
      id: z.number(),
      cells: z.array(z.array(z.boolean())),
    })
  ),
  meta: z.record(z.string(), z.any()),
  nil: z.null(),
})";
        assert_eq!(validator(&node, 0), expected);
    }

    #[test]
    fn array_of_arrays_of_objects() {
        let node = infer(&json!([[{"k": "v"}]]));
        let expected = "\
z.array(
  z.array(
    z.object({
      k: z.string(),
    })
  )
)";
        assert_eq!(validator(&node, 0), expected);
    }

    #[test]
    fn primitive_root() {
        let text = render("Flag", &infer(&json!(true)));
        assert!(text.contains("export const FlagSchema = z.boolean();\n"));
    }

    #[test]
    fn description_uses_describe() {
        let node = TypeNode::string().with_description("a \"quoted\" note");
        assert_eq!(validator(&node, 0), "z.string().describe(\"a \\\"quoted\\\" note\")");
    }
}
