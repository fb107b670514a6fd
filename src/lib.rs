//! Infer a structural type from JSON examples and render it as JSON Schema,
//! TypeScript, Zod and Markdown.
//!
//! ```
//! use serde_json::json;
//! use json_shape::{generate_all, Format};
//!
//! let out = generate_all(&[json!({"name": "John", "age": 30})], "User").unwrap();
//! assert!(out.get(Format::Typescript).unwrap().contains("age: number;"));
//! ```
pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod generate;
pub mod inference;
pub mod input;
pub mod ir;
pub mod jq_exec;
pub mod logging;
pub mod path_de;

pub use codegen::Format;
pub use error::{Error, InputError, Result};
pub use generate::{generate, generate_all, Generated, DEFAULT_TYPE_NAME};
pub use inference::{infer, infer_from_examples, Inference};
pub use ir::{Kind, Ty, TypeNode};
