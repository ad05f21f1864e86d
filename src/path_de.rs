use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Parse JSON text. Syntax errors carry line/column from serde_json.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(src);
    match serde_path_to_error::deserialize::<_, T>(de) {
        Ok(v) => Ok(v),
        Err(err) if err.inner().is_syntax() || err.inner().is_eof() => {
            Err(Error::Parse(err.into_inner()))
        }
        Err(err) => {
            let path = err.path().to_string();
            Err(Error::Document { path, source: err.into_inner() })
        }
    }
}

/// Deserialize a typed view of an already-parsed document, with JSON-path
/// context in error messages.
pub fn from_value_with_path<T: DeserializeOwned>(value: &Value) -> Result<T> {
    match serde_path_to_error::deserialize::<_, T>(value) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(Error::Document { path, source: err.into_inner() })
        }
    }
}
