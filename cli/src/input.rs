//! Reading JSON input documents

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{AppError, AppResult};

/// Read and parse a JSON document from `path`
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let text = fs::read_to_string(path).map_err(|source| AppError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| AppError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let result: AppResult<serde_json::Value> = read_json(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(AppError::InputUnreadable { .. })));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let result: AppResult<serde_json::Value> = read_json(file.path());
        assert!(matches!(result, Err(AppError::MalformedInput { .. })));
    }

    #[test]
    fn valid_json_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"crops": []}}"#).unwrap();
        let value: serde_json::Value = read_json(file.path()).unwrap();
        assert!(value["crops"].as_array().unwrap().is_empty());
    }
}
