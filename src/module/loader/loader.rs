//! Format loader implementation
//!
//! Parses JSON, TOML and plain text files into `serde_json::Value`.

use serde_json::{Map, Number, Value};
use std::path::Path;
use tracing::debug;

use crate::module::traits::{FileFormat, ImportError, Loader};

/// Default loader, dispatching on file extension
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatLoader;

impl FormatLoader {
    pub fn new() -> Self {
        Self
    }

    /// Parse already-read contents as the given format
    pub fn parse(path: &Path, format: FileFormat, contents: &str) -> Result<Value, ImportError> {
        let parse_error = |message: String| ImportError::Parse {
            path: path.to_path_buf(),
            format,
            message,
        };

        match format {
            FileFormat::Json => serde_json::from_str(contents).map_err(|e| parse_error(e.to_string())),
            FileFormat::Toml => {
                let table: toml::Value = toml::from_str(contents).map_err(|e| parse_error(e.to_string()))?;
                Ok(toml_to_json(table))
            }
            FileFormat::Text => Ok(Value::String(contents.to_string())),
        }
    }
}

impl Loader for FormatLoader {
    fn load(&self, path: &Path) -> Result<Value, ImportError> {
        let format = FileFormat::from_path(path)
            .ok_or_else(|| ImportError::UnsupportedFormat(path.to_path_buf()))?;

        debug!("Loading {} file {:?}", format, path);

        let contents = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, format, &contents)
    }

    fn supports(&self, extension: &str) -> bool {
        FileFormat::from_extension(extension).is_some()
    }
}

/// Convert a TOML value into the equivalent JSON value
///
/// Datetimes become their RFC 3339 string form; non-finite floats become null.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => {
            let map: Map<String, Value> = table
                .into_iter()
                .map(|(key, val)| (key, toml_to_json(val)))
                .collect();
            Value::Object(map)
        }
    }
}
