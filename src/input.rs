//! Turns command-line inputs into example values.
//!
//! Inputs are literal paths, quoted glob patterns, or `-` for stdin. Each
//! document may be narrowed with a JSON Pointer and then fanned out through a
//! jq filter. Examples keep input order even though files are parsed in parallel.

use std::io::Read;
use std::path::PathBuf;

use rayon::prelude::*;
use serde_json::Value;

use crate::error::InputError;

#[derive(Debug, Clone, Default)]
pub struct InputOptions {
    /// Treat every non-blank line as its own document.
    pub ndjson: bool,
    /// Select a sub-node of each document (e.g. `/data/items/0`).
    pub json_pointer: Option<String>,
    /// jq filter run on each (selected) document.
    pub jq_expr: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn name(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    fn read(&self) -> Result<String, InputError> {
        match self {
            Source::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|source| InputError::Read { path: PathBuf::from("-"), source })?;
                Ok(buf)
            }
            Source::File(path) => std::fs::read_to_string(path)
                .map_err(|source| InputError::Read { path: path.clone(), source }),
        }
    }
}

impl InputOptions {
    /// Resolve, read and parse every input; one `Vec` of examples in input order.
    pub fn load_examples<I>(&self, patterns: I) -> Result<Vec<Value>, InputError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let sources = resolve_sources(patterns)?;
        tracing::debug!(count = sources.len(), "resolved inputs");
        let per_source = sources
            .par_iter()
            .map(|source| {
                let text = source.read()?;
                self.examples_from_text(&source.name(), &text)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(per_source.into_iter().flatten().collect())
    }

    /// Parse one input's text and apply pointer selection and the jq filter.
    pub fn examples_from_text(&self, name: &str, text: &str) -> Result<Vec<Value>, InputError> {
        let documents = if self.ndjson {
            parse_ndjson(name, text)?
        } else {
            vec![parse_document(name, text)?]
        };

        let mut out = Vec::with_capacity(documents.len());
        for doc in documents {
            let doc = match &self.json_pointer {
                Some(pointer) => doc.pointer(pointer).cloned().ok_or_else(|| InputError::Pointer {
                    pointer: pointer.clone(),
                    name: name.to_string(),
                })?,
                None => doc,
            };
            match &self.jq_expr {
                None => out.push(doc),
                Some(jq_expr) => {
                    let results = crate::jq_exec::run_jaq(jq_expr, &doc).map_err(|err| InputError::Jq {
                        name: name.to_string(),
                        message: format!("{err:#}"),
                    })?;
                    out.extend(results);
                }
            }
        }
        Ok(out)
    }
}

/// Parse a whole document, reporting line, column and character offset on failure.
pub fn parse_document(name: &str, text: &str) -> Result<Value, InputError> {
    serde_json::from_str::<Value>(text).map_err(|source| InputError::Parse {
        name: name.to_string(),
        line: source.line(),
        column: source.column(),
        offset: char_offset(text, source.line(), source.column()),
        source,
    })
}

fn parse_ndjson(name: &str, text: &str) -> Result<Vec<Value>, InputError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_document(&format!("{name} (line {})", i + 1), line))
        .collect()
}

/// Zero-based character offset of a 1-based (line, byte column) position.
pub fn char_offset(text: &str, line: usize, column: usize) -> usize {
    let mut offset = 0;
    for (i, l) in text.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            return offset + l.char_indices().take_while(|(b, _)| *b + 1 < column).count();
        }
        offset += l.chars().count();
    }
    offset
}

pub fn resolve_sources<I>(patterns: I) -> Result<Vec<Source>, InputError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<Source>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if pattern == "-" {
            out.push(Source::Stdin);
        } else if has_glob_chars(pattern) {
            let entries = glob::glob(pattern).map_err(|source| InputError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?;
            let before = out.len();
            for entry in entries {
                out.push(Source::File(entry?));
            }
            if out.len() == before {
                // explicit glob that matched nothing
                return Err(InputError::NoMatches(pattern.to_string()));
            }
        } else {
            out.push(Source::File(PathBuf::from(pattern)));
        }
    }

    Ok(out)
}
