//! Structured-text codec for non-tabular, non-native values.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value as Json;

use crate::error::{CodecError, CodecResult};
use crate::format::{ExchangeFormat, WireFormat};

fn encode_err(path: &Path, err: impl std::fmt::Display) -> CodecError {
    CodecError::Encode {
        format: ExchangeFormat::Structured,
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

/// Write a structured value to `path` as JSON.
///
/// Existing stored objects were produced by formatting the value as text
/// and re-parsing it before persisting. New writers must keep that exact
/// pipeline so the bytes stay compatible; the hop is confined to this
/// function so a future format version can replace it without touching
/// dispatch.
pub fn encode(value: &Json, path: &Path) -> CodecResult<()> {
    let text = value.to_string();
    let reparsed: Json = serde_json::from_str(&text).map_err(|e| encode_err(path, e))?;
    let file = File::create(path)?;
    serde_json::to_writer(file, &reparsed).map_err(|e| encode_err(path, e))?;
    Ok(())
}

/// Read a structured value back from `path`.
pub fn decode(path: &Path) -> CodecResult<Json> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| CodecError::Decode {
        format: WireFormat::Json,
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn roundtrip_object() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("value.json");
        let value = json!({"rows": 3, "tags": ["a", "b"], "nested": {"ok": true}});

        encode(&value, &path).unwrap();
        assert_eq!(decode(&path).unwrap(), value);
    }

    #[test]
    fn roundtrip_wrapped_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("number.json");
        let value = json!(42);

        encode(&value, &path).unwrap();
        assert_eq!(decode(&path).unwrap(), value);
    }

    #[test]
    fn persisted_bytes_are_compact_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compact.json");
        encode(&json!({"k": 1}), &path).unwrap();

        let bytes = std::fs::read_to_string(&path).unwrap();
        assert_eq!(bytes, r#"{"k":1}"#);
    }

    #[test]
    fn decode_garbage_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = decode(&path).unwrap_err();
        assert!(matches!(err, CodecError::Decode { .. }));
    }

    #[test]
    fn decode_missing_file_is_io_error() {
        let err = decode(Path::new("/nonexistent/value.json")).unwrap_err();
        assert!(matches!(err, CodecError::Io(_)));
    }
}
