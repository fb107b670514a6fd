//! Runs every fixture in a directory (default `samples/`) through the full
//! pipeline and checks that all formats agree on which properties are required.
//!
//! Fixture layout:
//! ```json
//! { "name": "User", "examples": [ {...}, {...} ], "required": ["id"] }
//! ```
//! `required` is optional; when present it must match the inferred type.

use std::path::{Path, PathBuf};

use json_shape::{generate_all, Format};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct Fixture {
    name: String,
    examples: Vec<Value>,
    #[serde(default)]
    required: Option<Vec<String>>,
}

fn load_fixture(path: &Path) -> Result<Fixture, String> {
    let src = std::fs::read_to_string(path).map_err(|e| format!("read failed: {e}"))?;
    let de = &mut serde_json::Deserializer::from_str(&src);
    serde_path_to_error::deserialize::<_, Fixture>(de)
        .map_err(|err| format!("at JSON path {} → {}", err.path(), err.inner()))
}

fn check(fixture: &Fixture) -> Result<(), String> {
    let out = generate_all(&fixture.examples, &fixture.name).map_err(|e| e.to_string())?;
    let model = out
        .node
        .fields()
        .filter(|f| f.required)
        .map(|f| f.name.to_string())
        .collect::<Vec<_>>();

    if let Some(expected) = &fixture.required {
        if expected != &model {
            return Err(format!("required {model:?}, fixture expects {expected:?}"));
        }
    }

    let schema: Value = serde_json::from_str(out.get(Format::JsonSchema).unwrap_or_default())
        .map_err(|e| format!("schema output is not JSON: {e}"))?;
    let from_schema = schema["required"]
        .as_array()
        .map(|xs| xs.iter().filter_map(Value::as_str).map(str::to_string).collect::<Vec<_>>())
        .unwrap_or_default();
    if from_schema != model {
        return Err(format!("json-schema required {from_schema:?} != {model:?}"));
    }

    if out.node.has_properties() {
        let row = Regex::new(r"(?m)^\| `(?P<name>[^`]+)` \| .* \| (?P<req>Yes|No) \| .* \|$")
            .map_err(|e| e.to_string())?;
        let markdown = out.get(Format::Markdown).unwrap_or_default();
        let from_docs = row
            .captures_iter(markdown)
            .filter(|c| &c["req"] == "Yes")
            .map(|c| c["name"].replace("\\|", "|"))
            .collect::<Vec<_>>();
        if from_docs != model {
            return Err(format!("markdown required {from_docs:?} != {model:?}"));
        }
    }
    Ok(())
}

fn fixtures(dir: &Path) -> Vec<PathBuf> {
    let mut paths = std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|e| e.path())
                .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();
    paths.sort();
    paths
}

fn main() {
    let dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("samples"));
    let paths = fixtures(&dir);
    if paths.is_empty() {
        eprintln!("no fixtures in {}", dir.display());
        std::process::exit(2);
    }

    let mut failed = 0;
    for path in &paths {
        let result = load_fixture(path).and_then(|fixture| check(&fixture));
        match result {
            Ok(()) => eprintln!("✅ {}", path.display()),
            Err(error) => {
                failed += 1;
                eprintln!("❌ {}: {error}", path.display());
            }
        }
    }
    eprintln!("{} passed, {failed} failed", paths.len() - failed);
    if failed > 0 {
        std::process::exit(1);
    }
}
