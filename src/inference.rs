//! Structural inference from JSON examples.
//!
//! A single value maps onto exactly one [`TypeNode`]; several examples are
//! inferred independently and then unified:
//! - all objects → object-merge (required = present in every example),
//! - anything else → first non-null node (no union types).
//!
//! Known simplifications kept on purpose:
//! - arrays take their item type from the first element only,
//! - `[]` is typed as `string[]`,
//! - kind conflicts inside a merge collapse to `string`.
pub mod arr;
pub mod obj;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::ir::{Kind, Ty, TypeNode};

// ------------------------------ Observe ---------------------------------- //

pub fn infer(v: &Value) -> TypeNode {
    match v {
        Value::Null => TypeNode::null(),
        Value::Bool(_) => TypeNode::boolean(),
        Value::Number(_) => TypeNode::number(),
        Value::String(_) => TypeNode::string(),
        Value::Array(xs) => infer_array(xs),
        Value::Object(m) => infer_object(m),
    }
}

fn infer_array(xs: &[Value]) -> TypeNode {
    match xs.first() {
        Some(first) => TypeNode::array(infer(first)),
        None => TypeNode::array(TypeNode::string()),
    }
}

fn infer_object(map: &Map<String, Value>) -> TypeNode {
    let properties = map
        .iter()
        .map(|(k, v)| (k.clone(), infer(v)))
        .collect::<IndexMap<_, _>>();
    let required = map.keys().cloned().collect::<Vec<_>>();
    TypeNode::object(properties, required)
}

// ------------------------------ Examples --------------------------------- //

pub fn infer_from_examples<'a, I>(examples: I) -> TypeNode
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut inf = Inference::new();
    for v in examples {
        inf.observe_value(v);
    }
    inf.solve()
}

fn unify(nodes: &[TypeNode]) -> TypeNode {
    match nodes {
        [] => TypeNode::null(),
        [only] => only.clone(),
        _ => {
            let shapes = nodes
                .iter()
                .map(|n| match &n.ty {
                    Ty::Object { properties, .. } => Some(properties),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>();
            match shapes {
                Some(shapes) => obj::merge(&shapes),
                None => nodes
                    .iter()
                    .find(|n| n.kind() != Kind::Null)
                    .cloned()
                    .unwrap_or_else(TypeNode::null),
            }
        }
    }
}

// ------------------------------- Front API -------------------------------- //

/// Accumulates examples one at a time; [`Inference::solve`] unifies them.
#[derive(Debug, Default, Clone)]
pub struct Inference { observed: Vec<TypeNode> }

impl Inference {
    pub fn new() -> Self { Self::default() }

    pub fn observe_value(&mut self, v: &Value) {
        self.observed.push(infer(v));
    }

    pub fn len(&self) -> usize { self.observed.len() }

    pub fn is_empty(&self) -> bool { self.observed.is_empty() }

    pub fn solve(&self) -> TypeNode {
        let out = unify(&self.observed);
        tracing::debug!(examples = self.observed.len(), kind = %out.kind(), "inferred type");
        out
    }
}

// ------------------------------- Tests ------------------------------------ //
