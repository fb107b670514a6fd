use std::path::PathBuf;

use crate::codegen::UnknownFormat;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures of the generation facade. Inference itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no examples given; at least one JSON value is required")]
    NoExamples,
    #[error(transparent)]
    UnknownFormat(#[from] UnknownFormat),
}

/// Failures while turning raw inputs into example values.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {name} at line {line}, column {column} (offset {offset}): {source}")]
    Parse {
        name: String,
        line: usize,
        column: usize,
        /// Character offset into the document where parsing stopped.
        offset: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid glob pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("glob pattern matched no files: {0}")]
    NoMatches(String),
    #[error("cannot read glob match: {0}")]
    Glob(#[from] glob::GlobError),
    #[error("JSON pointer `{pointer}` does not resolve in {name}")]
    Pointer { pointer: String, name: String },
    #[error("jq filter failed on {name}: {message}")]
    Jq { name: String, message: String },
}
