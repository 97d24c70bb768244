//! Payload input for the CLI

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::constants::STDIN_PATH;

/// Errors reading a payload
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("No payload provided")]
    Empty,
}

/// Read a payload from `path`, or stdin when `path` is `None` or `-`.
pub fn read_payload(path: Option<&Path>) -> Result<JsonValue, InputError> {
    let raw = match path.filter(|p| p.as_os_str() != STDIN_PATH) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Reading payload file");
            fs::read_to_string(path).map_err(|source| InputError::File {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => {
            tracing::debug!("Reading payload from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(InputError::Stdin)?;
            buf
        }
    };

    parse_payload(&raw)
}

/// Parse payload text. Text that is not JSON is kept as a bare string payload.
pub fn parse_payload(raw: &str) -> Result<JsonValue, InputError> {
    if raw.trim().is_empty() {
        return Err(InputError::Empty);
    }
    match serde_json::from_str(raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::debug!(error = %e, "Payload is not JSON, treating as plain text");
            Ok(JsonValue::String(raw.to_string()))
        }
    }
}
