//! jq pre-filter applied to each input document before inference.
use anyhow::{anyhow, Result};
use jaq_core::{compile::Undefined, load, Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;

/// Run `filter_src` over `input`; every value the filter yields becomes one example.
pub fn run_jaq(filter_src: &str, input: &Value) -> Result<Vec<Value>> {
    let loader = load::Loader::new(jaq_std::defs().chain(jaq_json::defs()));
    let arena = load::Arena::default();
    let program = load::File { code: filter_src, path: () };

    let modules = loader
        .load(&arena, program)
        .map_err(format_parse_errors)?;

    let filter = Compiler::default()
        .with_funs(jaq_std::funs().chain(jaq_json::funs()))
        .compile(modules)
        .map_err(format_undefined_errors)?;

    let inputs = RcIter::new(core::iter::empty());
    let mut it = filter.run((Ctx::new([], &inputs), Val::from(input.clone())));

    let mut out = Vec::new();
    while let Some(item) = it.next() {
        let v = item.map_err(|e| anyhow!("{e:?}"))?;
        // Val renders as JSON text; go back through serde_json to keep key order
        let text = format!("{v}");
        out.push(serde_json::from_str::<Value>(&text)?);
    }
    Ok(out)
}

fn format_parse_errors(
    errs: Vec<(load::File<&str, ()>, load::Error<&str>)>,
) -> anyhow::Error {
    let lines = errs
        .into_iter()
        .map(|(file, err)| format!("parse error: {err:?} in `{}`", file.code))
        .collect::<Vec<_>>();
    anyhow!(lines.join("\n"))
}

fn format_undefined_errors(
    errs: Vec<(load::File<&str, ()>, Vec<(&str, Undefined)>)>,
) -> anyhow::Error {
    let lines = errs
        .into_iter()
        .flat_map(|(file, list)| {
            list.into_iter()
                .map(move |(name, undef)| format!("undefined `{name}`: {undef:?} in `{}`", file.code))
        })
        .collect::<Vec<_>>();
    anyhow!(lines.join("\n"))
}
