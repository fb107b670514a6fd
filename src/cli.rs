//! CLI: read examples → infer → (json-schema | typescript | zod | markdown)
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use crate::codegen::Format;
use crate::config::Config;
use crate::generate::{generate, Generated, DEFAULT_TYPE_NAME};
use crate::input::InputOptions;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer a structural type from JSON examples and render it as JSON Schema, TypeScript, Zod and Markdown
#[derive(Parser, Debug)]
#[command(name = "json-shape", version)]
pub struct CommandLineInterface {
    /// more logging (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// config file (defaults to ./json-shape.json when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and write one file per format (or print them with --stdout)
    Generate(GenerateOut),
    /// infer and print the structural type model as JSON
    Infer(InferOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// treat input as newline-delimited JSON (NDJSON)
    #[arg(long, default_value_t = false)]
    ndjson: bool,

    /// JSON Pointer to select a subnode in each document (e.g. /data/items/0/payload)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter for each document.
    #[arg(long)]
    jq_expr: Option<String>,

    /// One or more inputs. May be literal paths or quoted glob patterns or '-' for stdin
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct GenerateOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// type name used for declarations and output file names [default: Root]
    #[arg(long, short)]
    name: Option<String>,

    /// formats to emit, repeatable or comma separated [default: all]
    #[arg(long, short, value_delimiter = ',')]
    format: Vec<Format>,

    /// directory for generated files (created if missing) [default: .]
    #[arg(long, short)]
    out_dir: Option<PathBuf>,

    /// print every artifact to stdout instead of writing files
    #[arg(long, overrides_with = "no_stdout")]
    stdout: bool,

    /// write files even when the config file sets `stdout`
    #[arg(long, overrides_with = "stdout")]
    no_stdout: bool,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct InferOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn load(&self) -> anyhow::Result<Vec<serde_json::Value>> {
        let options = InputOptions {
            ndjson: self.ndjson,
            json_pointer: self.json_pointer.clone(),
            jq_expr: self.jq_expr.clone(),
        };
        let examples = options.load_examples(&self.input)?;
        tracing::info!(examples = examples.len(), inputs = self.input.len(), "loaded examples");
        Ok(examples)
    }
}

impl GenerateOut {
    /// `--stdout` / `--no-stdout` (last one given) beat the config file.
    fn to_stdout(&self, config: &Config) -> bool {
        match (self.stdout, self.no_stdout) {
            (true, _) => true,
            (_, true) => false,
            _ => config.stdout.unwrap_or(false),
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let config = Config::discover(self.config.as_deref(), &cwd)?;
        match &self.cmd {
            Command::Generate(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }
                let examples = target.input_settings.load()?;
                let name = target
                    .name
                    .clone()
                    .or_else(|| config.name.clone())
                    .unwrap_or_else(|| DEFAULT_TYPE_NAME.to_string());
                let formats = if target.format.is_empty() {
                    config.formats.clone().unwrap_or_else(|| Format::ALL.to_vec())
                } else {
                    target.format.clone()
                };
                let generated = generate(&examples, &name, &formats)?;
                eprintln!(
                    "{} {} from {} example(s)",
                    "inferred".cyan(),
                    generated.node.kind().as_str().bold(),
                    examples.len(),
                );

                if target.to_stdout(&config) {
                    print!("{}", stdout_listing(&generated));
                } else {
                    let dir = target
                        .out_dir
                        .clone()
                        .or_else(|| config.out_dir.clone())
                        .unwrap_or_else(|| PathBuf::from("."));
                    for path in write_outputs(&generated, &dir)? {
                        eprintln!("{} wrote {}", "✔".green(), path.display());
                    }
                }
                Ok(())
            }
            Command::Infer(target) => {
                let examples = target.input_settings.load()?;
                if examples.is_empty() {
                    anyhow::bail!("no examples found in the given inputs");
                }
                let node = crate::inference::infer_from_examples(&examples);
                let src = serde_json::to_string_pretty(&node)?;
                match target.out.as_ref() {
                    Some(out) => {
                        write_file(out, &src)?;
                        eprintln!("{} wrote {}", "✔".green(), out.display());
                    }
                    None => println!("{src}"),
                }
                Ok(())
            }
        }
    }
}

/// Write `<name><suffix>` for every rendered format into `dir`, returning the paths.
pub fn write_outputs(generated: &Generated, dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (format, text) in generated.iter() {
        let path = dir.join(generated.file_name(format));
        write_file(&path, text)?;
        tracing::info!(%format, path = %path.display(), "wrote output");
        written.push(path);
    }
    Ok(written)
}

/// All artifacts concatenated, each under a `==> name <==` header.
pub fn stdout_listing(generated: &Generated) -> String {
    let mut out = String::new();
    for (i, (format, text)) in generated.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("==> {} ({format}) <==\n", generated.file_name(format)));
        out.push_str(text);
        if !text.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_all;
    use serde_json::json;

    #[test]
    fn parses_generate_flags() {
        let cli = CommandLineInterface::try_parse_from([
            "json-shape", "-vv", "generate", "-i", "a.json", "b.json",
            "--name", "User", "--format", "ts,zod", "--format", "md", "--stdout",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::Generate(target) = &cli.cmd else { panic!("expected generate") };
        assert_eq!(target.input_settings.input, vec!["a.json", "b.json"]);
        assert_eq!(target.format, vec![Format::Typescript, Format::Zod, Format::Markdown]);
        assert_eq!(target.name.as_deref(), Some("User"));
        assert!(target.stdout);
    }

    fn generate_args(extra: &[&str]) -> GenerateOut {
        let mut argv = vec!["json-shape", "generate", "-i", "a.json"];
        argv.extend_from_slice(extra);
        let cli = CommandLineInterface::try_parse_from(argv).unwrap();
        match cli.cmd {
            Command::Generate(target) => target,
            other => panic!("expected generate, got {other:?}"),
        }
    }

    #[test]
    fn stdout_flags_override_config() {
        let config = Config { stdout: Some(true), ..Config::default() };
        assert!(generate_args(&[]).to_stdout(&config));
        assert!(!generate_args(&["--no-stdout"]).to_stdout(&config));
        assert!(generate_args(&["--no-stdout", "--stdout"]).to_stdout(&config));
        assert!(!generate_args(&["--stdout", "--no-stdout"]).to_stdout(&config));

        let config = Config { stdout: Some(false), ..Config::default() };
        assert!(generate_args(&["--stdout"]).to_stdout(&config));
        assert!(!generate_args(&[]).to_stdout(&Config::default()));
    }

    #[test]
    fn unknown_format_is_rejected_by_parser() {
        let err = CommandLineInterface::try_parse_from([
            "json-shape", "generate", "-i", "a.json", "--format", "yaml",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn input_is_required() {
        assert!(CommandLineInterface::try_parse_from(["json-shape", "infer"]).is_err());
    }

    #[test]
    fn writes_one_file_per_format() {
        let dir = tempfile::tempdir().unwrap();
        let generated = generate_all(&[json!({"id": 1})], "Thing").unwrap();
        let nested = dir.path().join("out/types");
        let written = write_outputs(&generated, &nested).unwrap();
        let names = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Thing.schema.json", "Thing.ts", "Thing.zod.ts", "Thing.md"]);
        let ts = std::fs::read_to_string(nested.join("Thing.ts")).unwrap();
        assert_eq!(ts, generated.get(Format::Typescript).unwrap());
    }

    #[test]
    fn stdout_listing_has_headers() {
        let generated = generate(&[json!(1)], "N", &[Format::Typescript, Format::Zod]).unwrap();
        let text = stdout_listing(&generated);
        assert!(text.starts_with("==> N.ts (typescript) <==\nexport type N = number;\n\n==> N.zod.ts (zod) <==\n"));
    }
}
