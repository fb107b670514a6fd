//! TypeScript declarations.
//!
//! Object roots become `export interface`, everything else an
//! `export type` alias. Nested objects are inlined as object literals.

use super::{indent, property_key, type_ident};
use crate::ir::{Ty, TypeNode};

pub fn render(type_name: &str, node: &TypeNode) -> String {
    let name = type_ident(type_name);
    let mut out = String::new();
    if let Some(desc) = &node.description {
        out.push_str(&doc_comment(desc, 0));
    }
    if node.has_properties() {
        out.push_str(&format!("export interface {name} {}\n", object_literal(node, 0)));
    } else {
        out.push_str(&format!("export type {name} = {};\n", type_expr(node, 0)));
    }
    out
}

/// Type expression for `node`, whose first line starts at indent `level`.
pub fn type_expr(node: &TypeNode, level: usize) -> String {
    match &node.ty {
        Ty::String => "string".into(),
        Ty::Number => "number".into(),
        Ty::Boolean => "boolean".into(),
        Ty::Null => "null".into(),
        Ty::Array { items } => {
            let elem = type_expr(items, level);
            if needs_generic_array(items) {
                format!("Array<{elem}>")
            } else {
                format!("{elem}[]")
            }
        }
        Ty::Object { properties, .. } if properties.is_empty() => "Record<string, unknown>".into(),
        Ty::Object { .. } => object_literal(node, level),
    }
}

// nested arrays and object literals read ambiguously with a `[]` suffix
fn needs_generic_array(items: &TypeNode) -> bool {
    matches!(items.ty, Ty::Array { .. }) || items.has_properties()
}

fn object_literal(node: &TypeNode, level: usize) -> String {
    let pad = indent(level + 1);
    let mut out = String::from("{\n");
    for field in node.fields() {
        if let Some(desc) = &field.ty.description {
            out.push_str(&doc_comment(desc, level + 1));
        }
        let marker = if field.required { "" } else { "?" };
        out.push_str(&format!(
            "{pad}{}{marker}: {};\n",
            property_key(field.name),
            type_expr(field.ty, level + 1),
        ));
    }
    out.push_str(&indent(level));
    out.push('}');
    out
}

fn doc_comment(desc: &str, level: usize) -> String {
    let text = desc.replace("*/", "*\\/");
    format!("{}/** {} */\n", indent(level), text.trim())
}
