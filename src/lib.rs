//! Convert JSON Schema documents into Python `TypedDict` declarations.
//!
//! ```
//! let src = r#"{"type": "object", "properties": {"name": {"type": "string"}}, "required": ["name"]}"#;
//! let out = json_typeddict::convert_str(src, &Default::default()).unwrap();
//! assert!(out.ends_with("class Root(TypedDict):\n    name: str"));
//! ```
pub mod cli;
pub mod codegen;
pub mod config;
pub mod error;
pub mod ir;
pub mod jq_exec;
pub mod lower;
pub mod path_de;

pub use codegen::{convert_str, schema_to_typeddicts, Codegen};
pub use config::{CollisionPolicy, Options, RootAlias};
pub use error::{Error, Result};
