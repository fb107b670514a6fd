//! Single entry point for callers: infer once, render many.

use indexmap::IndexMap;
use serde_json::Value;

use crate::codegen::Format;
use crate::error::{Error, Result};
use crate::inference::infer_from_examples;
use crate::ir::TypeNode;

/// Name used when the caller gives none, or only whitespace.
pub const DEFAULT_TYPE_NAME: &str = "Root";

/// Every artifact of one invocation, all rendered from the same `node`.
#[derive(Debug, Clone)]
pub struct Generated {
    pub type_name: String,
    pub node: TypeNode,
    pub outputs: IndexMap<Format, String>,
}

impl Generated {
    pub fn get(&self, format: Format) -> Option<&str> {
        self.outputs.get(&format).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Format, &str)> {
        self.outputs.iter().map(|(f, s)| (*f, s.as_str()))
    }

    /// `<type name><suffix>` for a format, e.g. `User.schema.json`.
    pub fn file_name(&self, format: Format) -> String {
        format!("{}{}", self.type_name, format.file_suffix())
    }
}

pub fn generate_all(examples: &[Value], type_name: &str) -> Result<Generated> {
    generate(examples, type_name, &Format::ALL)
}

/// Render `formats` in the given order; repeated formats are rendered once.
pub fn generate(examples: &[Value], type_name: &str, formats: &[Format]) -> Result<Generated> {
    if examples.is_empty() {
        return Err(Error::NoExamples);
    }
    let type_name = match type_name.trim() {
        "" => DEFAULT_TYPE_NAME,
        trimmed => trimmed,
    };

    let node = infer_from_examples(examples);

    let mut outputs = IndexMap::with_capacity(formats.len());
    for &format in formats {
        if outputs.contains_key(&format) {
            continue;
        }
        let text = format.render(type_name, &node);
        tracing::debug!(%format, bytes = text.len(), "rendered");
        outputs.insert(format, text);
    }

    Ok(Generated { type_name: type_name.to_string(), node, outputs })
}

/// Parse a comma separated list such as `"ts,zod"`. Empty input means every format.
pub fn parse_formats(list: &str) -> Result<Vec<Format>> {
    let names = list
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();
    if names.is_empty() {
        return Ok(Format::ALL.to_vec());
    }
    names
        .into_iter()
        .map(|name| name.parse::<Format>().map_err(Error::from))
        .collect()
}
