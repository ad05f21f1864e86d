use jaq_core::{compile::Undefined, load, Compiler, Ctx, RcIter};
use jaq_json::Val;
use serde_json::Value;

use crate::error::{Error, Result};

/// Run a jq program over `input`, returning every output document.
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
    let outputs = filter.run((Ctx::new([], &inputs), Val::from(input.clone())));

    let mut out = Vec::new();
    for item in outputs {
        let v = item.map_err(|e| Error::Jq(format!("{e:?}")))?;
        out.push(parse_output(&v.to_string())?);
    }
    Ok(out)
}

/// Run a jq program that must yield exactly one schema document.
pub fn run_jaq_single(filter_src: &str, input: &Value) -> Result<Value> {
    let mut docs = run_jaq(filter_src, input)?;
    match docs.len() {
        1 => Ok(docs.remove(0)),
        n => Err(Error::JqOutput(n)),
    }
}

/// Val's Display is meant to be JSON text; anything else is the filter's fault.
fn parse_output(text: &str) -> Result<Value> {
    serde_json::from_str::<Value>(text)
        .map_err(|e| Error::Jq(format!("filter output is not JSON: {e}")))
}

fn format_parse_errors(errs: Vec<(load::File<&str, ()>, load::Error<&str>)>) -> Error {
    let mut s = String::new();
    for (file, err) in errs {
        s.push_str(&format!("parse error: {err:?} in `{}`\n", file.code));
    }
    Error::Jq(s)
}

fn format_undefined_errors(errs: Vec<(load::File<&str, ()>, Vec<(&str, Undefined)>)>) -> Error {
    let mut s = String::new();
    for (file, list) in errs {
        for (name, undef) in list {
            s.push_str(&format!("undefined `{name}`: {undef:?} in `{}`\n", file.code));
        }
    }
    Error::Jq(s)
}
