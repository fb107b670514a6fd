use indexmap::{IndexMap, IndexSet};
use crate::ir::TypeNode;

/// Object-merge: union of property names in first-seen order; a property is
/// required only when every shape carries it. Each property's type is merged
/// across the shapes that actually define it.
pub(super) fn merge(shapes: &[&IndexMap<String, TypeNode>]) -> TypeNode {
    let total = shapes.len();

    // first-seen order across all shapes
    let names = shapes
        .iter()
        .flat_map(|shape| shape.keys().map(String::as_str))
        .collect::<IndexSet<&str>>();

    let mut properties = IndexMap::with_capacity(names.len());
    let mut required = Vec::new();
    for name in names {
        let present = shapes
            .iter()
            .filter_map(|shape| shape.get(name))
            .collect::<Vec<_>>();
        if present.len() == total {
            required.push(name.to_string());
        }
        properties.insert(name.to_string(), super::arr::merge(&present));
    }

    TypeNode::object(properties, required)
}
