use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fatal conversion errors. Anything recoverable (odd schema nodes, unknown
/// type names) is logged and degraded to `Any` instead.
#[derive(Debug, Error)]
pub enum Error {
    /// Input text is not JSON.
    #[error("failed to parse JSON input: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("schema document must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// Input is JSON but not shaped like a schema document.
    #[error("invalid schema document at {path}: {source}")]
    Document {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON pointer `{0}` does not match any node")]
    Pointer(String),

    #[error("jq filter failed: {0}")]
    Jq(String),

    #[error("jq filter produced {0} documents, expected exactly one")]
    JqOutput(usize),

    #[error("declaration `{0}` is emitted more than once")]
    DuplicateDeclaration(String),
}
