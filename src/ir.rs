// Typed forms for codegen: classified schema shapes in, type expressions and
// declaration blocks out.
use std::fmt;

use indexmap::IndexSet;
use serde_json::{Map, Value};

// ————————————————————————————————————————————————————————————————————————————
// INPUT SIDE
// ————————————————————————————————————————————————————————————————————————————

/// JSON Schema primitive type names we know how to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Integer,
    Boolean,
    Number,
    Null,
}

impl Primitive {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "integer" => Some(Self::Integer),
            "boolean" => Some(Self::Boolean),
            "number" => Some(Self::Number),
            "null" => Some(Self::Null),
            _ => None,
        }
    }

    /// Python spelling of the primitive.
    pub fn python_name(self) -> &'static str {
        match self {
            Self::String => "str",
            Self::Integer => "int",
            Self::Boolean => "bool",
            Self::Number => "float",
            Self::Null => "None",
        }
    }
}

/// One schema node after classification. Borrows from the input document;
/// nothing here owns or mutates schema data.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<'a> {
    Empty,
    Enum(&'a [Value]),
    Reference(&'a str),
    Object {
        properties: Option<&'a Map<String, Value>>,
        required: IndexSet<&'a str>,
    },
    Array {
        items: Option<&'a Value>,
    },
    AnyOf(&'a [Value]),
    Primitive(Primitive),
    Union(&'a [Value]),
    Unrecognized,
}

// ————————————————————————————————————————————————————————————————————————————
// OUTPUT SIDE
// ————————————————————————————————————————————————————————————————————————————

/// Type expression returned by emitting a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    Any,
    Primitive(Primitive),
    /// Last segment of a `$ref`, declared elsewhere (or nowhere).
    Ref(String),
    /// Name of a declaration this run synthesized.
    Declared(String),
    List(Box<TypeExpr>),
    Union(Vec<TypeExpr>),
}

impl TypeExpr {
    pub fn is_declared(&self) -> bool {
        matches!(self, Self::Declared(_))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("Any"),
            Self::Primitive(p) => f.write_str(p.python_name()),
            Self::Ref(name) | Self::Declared(name) => f.write_str(name),
            Self::List(item) => write!(f, "List[{item}]"),
            Self::Union(arms) => {
                f.write_str("Union[")?;
                for (i, arm) in arms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{arm}")?;
                }
                f.write_str("]")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub ty: TypeExpr,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclBody {
    /// `Name = Literal[...]`, values already quoted.
    Literal(Vec<String>),
    /// `class Name(TypedDict):` with one line per field.
    Record(Vec<Field>),
}

/// One named declaration block in the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub body: DeclBody,
}

impl Declaration {
    pub fn lines(&self) -> Vec<String> {
        match &self.body {
            DeclBody::Literal(values) => {
                let mut out = Vec::with_capacity(values.len() + 2);
                out.push(format!("{} = Literal[", self.name));
                out.extend(values.iter().map(|v| format!("    {v},")));
                out.push("]".to_string());
                out
            }
            DeclBody::Record(fields) => {
                let mut out = Vec::with_capacity(fields.len() + 1);
                out.push(format!("class {}(TypedDict):", self.name));
                if fields.is_empty() {
                    out.push("    pass".to_string());
                }
                for field in fields {
                    if field.required {
                        out.push(format!("    {}: {}", field.name, field.ty));
                    } else {
                        out.push(format!("    {}: NotRequired[{}]", field.name, field.ty));
                    }
                }
                out
            }
        }
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}
