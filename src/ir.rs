// Structural type model shared by inference and every renderer. No serde_json::Value here.

use std::fmt;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeNode {
    #[serde(flatten)]
    pub ty: Ty,
    /// Free-text annotation. Inference never sets this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Ty {
    String,
    Number,
    Boolean,
    Null,
    Array {
        items: Box<TypeNode>,             // arrays are monomorphic
    },
    Object {
        properties: IndexMap<String, TypeNode>, // insertion order = first-seen order
        required: IndexSet<String>,             // always ⊆ keys(properties)
    },
}

/// Discriminator of a [`TypeNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind { String, Number, Boolean, Null, Array, Object }

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TypeNode {
    pub fn new(ty: Ty) -> Self { Self { ty, description: None } }
    pub fn string() -> Self { Self::new(Ty::String) }
    pub fn number() -> Self { Self::new(Ty::Number) }
    pub fn boolean() -> Self { Self::new(Ty::Boolean) }
    pub fn null() -> Self { Self::new(Ty::Null) }

    pub fn array(items: TypeNode) -> Self {
        Self::new(Ty::Array { items: Box::new(items) })
    }

    /// Build an object node. Names in `required` that are not properties are dropped.
    pub fn object<R>(properties: IndexMap<String, TypeNode>, required: R) -> Self
    where
        R: IntoIterator<Item = String>,
    {
        let required = required
            .into_iter()
            .filter(|name| properties.contains_key(name))
            .collect();
        Self::new(Ty::Object { properties, required })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(&self) -> Kind {
        match &self.ty {
            Ty::String => Kind::String,
            Ty::Number => Kind::Number,
            Ty::Boolean => Kind::Boolean,
            Ty::Null => Kind::Null,
            Ty::Array { .. } => Kind::Array,
            Ty::Object { .. } => Kind::Object,
        }
    }

    /// Properties of an object node, in order, paired with their required flag.
    /// Empty for every other kind.
    pub fn fields(&self) -> impl Iterator<Item = Field<'_>> {
        let entries = match &self.ty {
            Ty::Object { properties, required } => Some((properties, required)),
            _ => None,
        };
        entries.into_iter().flat_map(|(properties, required)| {
            properties.iter().map(move |(name, ty)| Field {
                name,
                ty,
                required: required.contains(name),
            })
        })
    }

    /// True for objects that carry at least one property.
    pub fn has_properties(&self) -> bool {
        matches!(&self.ty, Ty::Object { properties, .. } if !properties.is_empty())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    pub name: &'a str,
    pub ty: &'a TypeNode,
    pub required: bool,
}
