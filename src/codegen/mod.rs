//! Renderers: `TypeNode` + type name → text, one module per target notation.
//!
//! Every renderer is a pure function; none of them mutate the node or depend
//! on another renderer's output.
pub mod json_schema;
pub mod markdown;
pub mod sample;
pub mod typescript;
pub mod zod;

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ir::TypeNode;

// ————————————————————————————————————————————————————————————————————————————
// FORMATS
// ————————————————————————————————————————————————————————————————————————————

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    JsonSchema,
    Typescript,
    Zod,
    Markdown,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::JsonSchema, Format::Typescript, Format::Zod, Format::Markdown];

    pub fn name(self) -> &'static str {
        match self {
            Format::JsonSchema => "json-schema",
            Format::Typescript => "typescript",
            Format::Zod => "zod",
            Format::Markdown => "markdown",
        }
    }

    /// Fixed file-name suffix; downstream tooling relies on these never changing.
    pub fn file_suffix(self) -> &'static str {
        match self {
            Format::JsonSchema => ".schema.json",
            Format::Typescript => ".ts",
            Format::Zod => ".zod.ts",
            Format::Markdown => ".md",
        }
    }

    pub fn render(self, type_name: &str, node: &TypeNode) -> String {
        match self {
            Format::JsonSchema => json_schema::render(type_name, node),
            Format::Typescript => typescript::render(type_name, node),
            Format::Zod => zod::render(type_name, node),
            Format::Markdown => markdown::render(type_name, node),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format `{given}` (expected one of: json-schema, typescript, zod, markdown)")]
pub struct UnknownFormat {
    pub given: String,
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json-schema" | "jsonschema" | "schema" => Ok(Format::JsonSchema),
            "typescript" | "ts" => Ok(Format::Typescript),
            "zod" => Ok(Format::Zod),
            "markdown" | "md" | "docs" => Ok(Format::Markdown),
            _ => Err(UnknownFormat { given: s.to_string() }),
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// NAMING
// ————————————————————————————————————————————————————————————————————————————

static IDENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap()
});

static WORD_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^A-Za-z0-9]+").unwrap()
});

/// Whether `name` can be used as a bare TypeScript property key.
pub fn is_identifier(name: &str) -> bool {
    IDENT.is_match(name)
}

/// Property key as written in TS/Zod object literals.
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        // JSON string syntax is valid JS string syntax
        serde_json::Value::from(name).to_string()
    }
}

/// Normalize a user-given type name into a PascalCase identifier.
/// `"user profile"` → `UserProfile`, `"9lives"` → `_9lives`, `""` → `Root`.
pub fn type_ident(name: &str) -> String {
    let mut out = String::new();
    for word in WORD_SPLIT.split(name).filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    if out.is_empty() {
        return "Root".to_string();
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

pub(crate) fn indent(level: usize) -> String {
    "  ".repeat(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_round_trip() {
        for f in Format::ALL {
            assert_eq!(f.name().parse::<Format>().unwrap(), f);
        }
        assert_eq!("TS".parse::<Format>().unwrap(), Format::Typescript);
        let err = "yaml".parse::<Format>().unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn suffixes_are_distinct() {
        let mut suffixes = Format::ALL.map(Format::file_suffix).to_vec();
        suffixes.sort();
        suffixes.dedup();
        assert_eq!(suffixes.len(), 4);
    }

    #[test]
    fn type_idents() {
        assert_eq!(type_ident("User"), "User");
        assert_eq!(type_ident("user profile"), "UserProfile");
        assert_eq!(type_ident("api-response_v2"), "ApiResponseV2");
        assert_eq!(type_ident("9lives"), "_9lives");
        assert_eq!(type_ident("--"), "Root");
    }

    #[test]
    fn property_keys_quote_non_identifiers() {
        assert_eq!(property_key("name"), "name");
        assert_eq!(property_key("$ref"), "$ref");
        assert_eq!(property_key("first-name"), "\"first-name\"");
        assert_eq!(property_key("a\"b"), "\"a\\\"b\"");
    }
}
