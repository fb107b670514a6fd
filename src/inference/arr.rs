use crate::ir::{Ty, TypeNode};

/// Type-merge over sibling candidates (one property across examples, or the
/// item types of several arrays).
///
/// Differing kinds collapse to `string`; there is no union type.
pub(super) fn merge(candidates: &[&TypeNode]) -> TypeNode {
    let (first, rest) = match candidates {
        [] => return TypeNode::null(),
        [only] => return (*only).clone(),
        [first, rest @ ..] => (*first, rest),
    };

    if rest.iter().any(|c| c.kind() != first.kind()) {
        tracing::trace!(kinds = ?candidates.iter().map(|c| c.kind()).collect::<Vec<_>>(), "kind conflict, falling back to string");
        return TypeNode::string();
    }

    let description = candidates.iter().find_map(|c| c.description.clone());
    let mut merged = match &first.ty {
        Ty::Array { .. } => {
            let items = candidates
                .iter()
                .filter_map(|c| match &c.ty {
                    Ty::Array { items } => Some(items.as_ref()),
                    _ => None,
                })
                .collect::<Vec<_>>();
            TypeNode::array(merge(&items))
        }
        Ty::Object { .. } => {
            let shapes = candidates
                .iter()
                .filter_map(|c| match &c.ty {
                    Ty::Object { properties, .. } => Some(properties),
                    _ => None,
                })
                .collect::<Vec<_>>();
            super::obj::merge(&shapes)
        }
        // primitives of one kind are identical
        _ => first.clone(),
    };
    merged.description = description;
    merged
}
