use std::fmt;

use uuid::Uuid;

/// Directory prefix all externalized values are stored under.
pub const KEY_DIR: &str = "xcom/";

/// Bucket-relative key of an externalized value.
///
/// Keys have the shape `xcom/data_<uuid-v4><ext>`, where the extension
/// selects the codec used on read. A key is generated once per externalized
/// value and never changes afterward; its lifecycle is bound to the object
/// it names. Collisions are treated as negligible (random v4 identifiers).
///
/// Keys are stored without URL-encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Generate a fresh key with the given extension (e.g. `".parquet"`).
    pub fn generate(extension: &str) -> Self {
        Self(format!("{KEY_DIR}data_{}{extension}", Uuid::new_v4()))
    }

    /// Wrap an existing raw key.
    ///
    /// No validation is performed: a malformed key fails later, at codec
    /// dispatch or at download, not here.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The full bucket-relative key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The final path segment, used to name local staging files.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// The extension including the leading dot, if the key has one.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().rfind('.').map(|i| &self.file_name()[i..])
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_key_shape() {
        let key = ObjectKey::generate(".parquet");
        assert!(key.as_str().starts_with("xcom/data_"));
        assert!(key.as_str().ends_with(".parquet"));
    }

    #[test]
    fn generated_keys_embed_a_valid_uuid() {
        let key = ObjectKey::generate(".json");
        let middle = key
            .as_str()
            .strip_prefix("xcom/data_")
            .and_then(|s| s.strip_suffix(".json"))
            .unwrap();
        assert!(Uuid::parse_str(middle).is_ok());
    }

    #[test]
    fn generated_keys_are_unique() {
        let a = ObjectKey::generate(".json");
        let b = ObjectKey::generate(".json");
        assert_ne!(a, b);
    }

    #[test]
    fn file_name_strips_directory() {
        let key = ObjectKey::from_raw("xcom/data_abc.parquet");
        assert_eq!(key.file_name(), "data_abc.parquet");
    }

    #[test]
    fn extension_includes_dot() {
        let key = ObjectKey::from_raw("xcom/data_abc.csv");
        assert_eq!(key.extension(), Some(".csv"));
    }

    #[test]
    fn extension_missing() {
        let key = ObjectKey::from_raw("xcom/data_abc");
        assert_eq!(key.extension(), None);
    }

    #[test]
    fn display_is_full_key() {
        let key = ObjectKey::from_raw("xcom/data_abc.json");
        assert_eq!(format!("{key}"), "xcom/data_abc.json");
    }
}
