//! Minimal CLI: JSON Schema → Python TypedDicts
use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;

use crate::config::{CollisionPolicy, Options, RootAlias};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Convert a JSON schema to Python TypedDicts.
///
/// Examples:
///
///   json-typeddict --input schema.json --output schema.py
///
///   genson data.json | json-typeddict --output schema.py
#[derive(Parser, Debug)]
#[command(version, verbatim_doc_comment)]
pub struct CommandLineInterface {
    /// input JSON schema file ('-' or omitted for stdin)
    #[arg(long, short)]
    input: Option<PathBuf>,

    /// output .py file (stdout if omitted)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// JSON Pointer selecting the schema inside the input (e.g. /components/schemas/Pet)
    #[arg(long)]
    json_pointer: Option<String>,

    /// JQ pre-process filter; must yield exactly one document
    #[arg(long)]
    jq_expr: Option<String>,

    /// when to append the trailing `Root = ...` alias
    #[arg(long, value_enum, default_value_t = RootAlias::Bracket)]
    root_alias: RootAlias,

    /// property name used for the document root
    #[arg(long, default_value = "root")]
    root_name: String,

    /// fail instead of warning when two declarations share a name
    #[arg(long, default_value_t = false)]
    strict_names: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn options(&self) -> Options {
        Options {
            root_alias: self.root_alias,
            root_name: self.root_name.clone(),
            collisions: if self.strict_names { CollisionPolicy::Error } else { CollisionPolicy::Warn },
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        self.run_with(std::io::stdin().lock(), std::io::stdout().lock())
    }

    /// `stdin` is read when no input path (or `-`) is given; `stdout` receives
    /// the output when `--output` is absent.
    fn run_with(&self, stdin: impl Read, mut stdout: impl Write) -> anyhow::Result<()> {
        let source = self.read_source(stdin)?;
        let doc: Value = crate::path_de::from_str_with_path(&source)
            .with_context(|| format!("reading {}", self.input_label()))?;
        let doc = self.select(doc)?;

        let src = crate::codegen::schema_to_typeddicts(&doc, &self.options())
            .with_context(|| format!("converting {}", self.input_label()))?;

        match self.output.as_ref() {
            Some(out) => {
                if let Some(parent) = out.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
                std::fs::write(out, format!("{src}\n"))
                    .with_context(|| format!("writing {}", out.display()))?;
            }
            None => writeln!(stdout, "{src}")?,
        }
        Ok(())
    }

    fn read_source(&self, mut stdin: impl Read) -> anyhow::Result<String> {
        match self.input.as_ref().filter(|p| p.as_os_str() != "-") {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read source file {}", path.display())),
            None => {
                let mut buf = String::new();
                stdin.read_to_string(&mut buf).context("failed to read stdin")?;
                Ok(buf)
            }
        }
    }

    /// Apply `--json-pointer` then `--jq-expr`.
    fn select(&self, mut doc: Value) -> anyhow::Result<Value> {
        if let Some(pointer) = self.json_pointer.as_ref() {
            doc = doc
                .pointer_mut(pointer)
                .map(Value::take)
                .ok_or_else(|| crate::error::Error::Pointer(pointer.clone()))?;
        }
        if let Some(jq_expr) = self.jq_expr.as_ref() {
            doc = crate::jq_exec::run_jaq_single(jq_expr, &doc)
                .with_context(|| format!("applying jq expression `{jq_expr}`"))?;
        }
        Ok(doc)
    }

    fn input_label(&self) -> String {
        match self.input.as_ref() {
            Some(path) if path.as_os_str() != "-" => path.display().to_string(),
            _ => "<stdin>".to_string(),
        }
    }
}
