//! JSON Schema → Python `TypedDict` declarations.
//!
//! [`Codegen::emit`] walks one schema node and returns its type expression.
//! Composite nodes (objects, enums) also append a named [`Declaration`] to
//! the generator's sink. Children are always declared before their parent,
//! so the sink order is a valid definition order for everything except
//! `$ref` targets.
use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::Value;

use crate::config::{CollisionPolicy, Options, RootAlias};
use crate::error::{Error, Result};
use crate::ir::{DeclBody, Declaration, Field, Primitive, Shape, TypeExpr};
use crate::lower::classify;
use crate::path_de::{from_str_with_path, from_value_with_path};

/// Header block, emitted once before any declaration.
pub const PREAMBLE: [&str; 4] = [
    "from typing import Any, TypedDict, Union, Literal, List",
    "from typing_extensions import NotRequired",
    "",
    "",
];

// ————————————————————————————————————————————————————————————————————————————
// ENTRY POINTS
// ————————————————————————————————————————————————————————————————————————————

/// Parse `src` as JSON and convert it. Malformed input fails before anything
/// is generated.
pub fn convert_str(src: &str, options: &Options) -> Result<String> {
    let doc: Value = from_str_with_path(src)?;
    schema_to_typeddicts(&doc, options)
}

/// Convert a parsed schema document.
///
/// Definitions are emitted first, in reverse document order, then the root
/// node under `options.root_name`. Reversal puts dependencies first only when
/// the document lists them dependents-first; there is no topological sort.
pub fn schema_to_typeddicts(doc: &Value, options: &Options) -> Result<String> {
    if !doc.is_object() {
        return Err(Error::NotAnObject(json_kind(doc)));
    }
    let defs = definitions(doc)?;

    let mut cg = Codegen::new(options);
    for (key, node) in defs.iter().rev() {
        cg.emit(node, key)?;
    }
    let root = cg.emit(doc, &options.root_name)?;
    Ok(cg.into_string(&root))
}

// ————————————————————————————————————————————————————————————————————————————
// GENERATOR
// ————————————————————————————————————————————————————————————————————————————

/// Top-level named schemas. `definitions` wins over `$defs`; only the map
/// actually read has to be well formed.
fn definitions(doc: &Value) -> Result<IndexMap<String, Value>> {
    let found = ["definitions", "$defs"]
        .into_iter()
        .find_map(|key| doc.get(key).filter(|v| !v.is_null()).map(|v| (key, v)));
    let Some((key, node)) = found else {
        return Ok(IndexMap::new());
    };
    from_value_with_path::<IndexMap<String, Value>>(node).map_err(|err| match err {
        Error::Document { path, source } if path == "." => Error::Document { path: key.to_string(), source },
        Error::Document { path, source } => Error::Document { path: format!("{key}.{path}"), source },
        other => other,
    })
}

#[derive(Debug)]
pub struct Codegen<'o> {
    options: &'o Options,
    decls: Vec<Declaration>,
    names: HashSet<String>,
}

impl<'o> Codegen<'o> {
    pub fn new(options: &'o Options) -> Self {
        Self { options, decls: Vec::new(), names: HashSet::new() }
    }

    /// Declarations emitted so far, in emission order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.decls
    }

    /// Emit `node`, naming any synthesized declaration after `property_name`.
    pub fn emit(&mut self, node: &Value, property_name: &str) -> Result<TypeExpr> {
        match classify(node) {
            Shape::Empty => Ok(TypeExpr::Any),
            Shape::Enum(values) => {
                let name = capitalize(property_name);
                let values = values.iter().map(quote_literal).collect();
                self.declare(Declaration { name: name.clone(), body: DeclBody::Literal(values) })?;
                Ok(TypeExpr::Declared(name))
            }
            Shape::Reference(pointer) => Ok(TypeExpr::Ref(ref_name(pointer).to_string())),
            Shape::Object { properties, required } => {
                let name = capitalize(property_name);
                let mut fields = Vec::new();
                for (key, value) in properties.into_iter().flatten() {
                    let ty = self.emit(value, key)?;
                    fields.push(Field {
                        name: key.clone(),
                        ty,
                        required: required.contains(key.as_str()),
                    });
                }
                self.declare(Declaration { name: name.clone(), body: DeclBody::Record(fields) })?;
                Ok(TypeExpr::Declared(name))
            }
            // items inherit the array's own name: `pets: [{..}]` declares `Pets`
            Shape::Array { items } => {
                let item = match items {
                    Some(items) => self.emit(items, property_name)?,
                    None => TypeExpr::Any,
                };
                Ok(TypeExpr::List(Box::new(item)))
            }
            Shape::AnyOf(alternatives) => {
                let arms = alternatives
                    .iter()
                    .map(|alt| self.emit(alt, property_name))
                    .collect::<Result<Vec<_>>>()?;
                Ok(TypeExpr::Union(arms))
            }
            Shape::Primitive(p) => Ok(TypeExpr::Primitive(p)),
            Shape::Union(names) => {
                let arms = names
                    .iter()
                    .map(|n| match n.as_str().and_then(Primitive::from_name) {
                        Some(p) => TypeExpr::Primitive(p),
                        None => {
                            tracing::warn!(property = property_name, "unknown type name {n} in type list, using Any");
                            TypeExpr::Any
                        }
                    })
                    .collect();
                Ok(TypeExpr::Union(arms))
            }
            Shape::Unrecognized => {
                tracing::warn!(property = property_name, "unknown schema node {node}, using Any");
                Ok(TypeExpr::Any)
            }
        }
    }

    /// Render the preamble, every declaration, and the optional `Root` alias.
    pub fn into_string(self, root: &TypeExpr) -> String {
        let mut blocks = Vec::with_capacity(self.decls.len() + 1);
        blocks.push(PREAMBLE.join("\n"));
        blocks.extend(self.decls.iter().map(Declaration::render));
        let mut out = blocks.join("\n\n");

        let alias = match self.options.root_alias {
            RootAlias::Bracket => root.to_string().contains(']'),
            RootAlias::Shape => !root.is_declared(),
        };
        if alias {
            out.push_str(&format!("\n\nRoot = {root}"));
        }
        out
    }

    fn declare(&mut self, decl: Declaration) -> Result<()> {
        if !self.names.insert(decl.name.clone()) {
            match self.options.collisions {
                CollisionPolicy::Warn => {
                    tracing::warn!(name = %decl.name, "declaration name emitted more than once");
                }
                CollisionPolicy::Error => return Err(Error::DuplicateDeclaration(decl.name)),
            }
        }
        tracing::debug!(name = %decl.name, "declare");
        self.decls.push(decl);
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// First character title-cased, the rest lower-cased (`petName` → `Petname`,
/// `ßeta` → `Sseta`), as Python's `str.capitalize` does.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(name.len());
    match titlecase_digraph(first) {
        Some(title) => out.push(title),
        None => {
            // multi-char uppercase forms (`ß` → `SS`, `ﬁ` → `FI`) title-case as `Ss`, `Fi`
            let mut upper = first.to_uppercase();
            out.extend(upper.next());
            out.extend(upper.flat_map(char::to_lowercase));
        }
    }
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

/// Latin digraphs whose titlecase form differs from their uppercase form.
fn titlecase_digraph(c: char) -> Option<char> {
    match c {
        'Ǆ' | 'ǅ' | 'ǆ' => Some('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => Some('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => Some('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => Some('ǲ'),
        _ => None,
    }
}

/// `#/definitions/Widget` → `Widget`
fn ref_name(pointer: &str) -> &str {
    pointer.rsplit('/').next().unwrap_or(pointer)
}

/// Quote an enum value the way Python's `str()` prints it: `True`, `None`, `1.5`.
/// Arrays and objects keep their JSON text.
fn quote_literal(value: &Value) -> String {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    };
    format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
