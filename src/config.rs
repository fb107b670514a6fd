//! Optional project defaults, read from `json-shape.json`.
//!
//! ```json
//! { "name": "User", "formats": ["typescript", "zod"], "outDir": "generated", "stdout": false }
//! ```
//! Command-line flags always win over values found here.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::codegen::Format;
use crate::path_de::{from_str_with_path, PathError};

pub const DEFAULT_CONFIG_FILE: &str = "json-shape.json";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    pub name: Option<String>,
    pub formats: Option<Vec<Format>>,
    pub out_dir: Option<PathBuf>,
    pub stdout: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: PathError,
    },
}

impl Config {
    pub fn from_json(src: &str) -> Result<Self, PathError> {
        from_str_with_path(src)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&src).map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load `explicit` if given (must exist), else `json-shape.json` in `dir` if present.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let implicit = dir.join(DEFAULT_CONFIG_FILE);
        if implicit.is_file() {
            Self::load(&implicit)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_fields() {
        let config = Config::from_json(
            r#"{"name": "User", "formats": ["json-schema", "zod"], "outDir": "gen", "stdout": true}"#,
        )
        .unwrap();
        assert_eq!(config.name.as_deref(), Some("User"));
        assert_eq!(config.formats, Some(vec![Format::JsonSchema, Format::Zod]));
        assert_eq!(config.out_dir, Some(PathBuf::from("gen")));
        assert_eq!(config.stdout, Some(true));
    }

    #[test]
    fn bad_format_reports_path() {
        let err = Config::from_json(r#"{"formats": ["zod", "yaml"]}"#).unwrap_err();
        assert_eq!(err.path, "formats[1]");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_json(r#"{"nmae": "X"}"#).is_err());
    }

    #[test]
    fn discover_without_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::discover(None, dir.path()).unwrap(), Config::default());
    }

    #[test]
    fn discover_reads_implicit_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), r#"{"name": "Cfg"}"#).unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.name.as_deref(), Some("Cfg"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            Config::discover(Some(&missing), dir.path()),
            Err(ConfigError::Read { .. })
        ));
    }
}
