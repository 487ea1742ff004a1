//! The sentinel-prefixed pointer string that replaces an externalized value
//! in the primary metadata store.
//!
//! A reference is `xcom_s3://<bucket-relative-key>`, e.g.
//! `xcom_s3://xcom/data_78c30142-25b0-4b3b-bd71-70a777b5bba0.parquet`.
//! The prefix is a compile-time constant: existing stored references depend
//! on it, so it must never change.
//!
//! Known limitation: a task-level string value that happens to start with
//! the prefix is indistinguishable from a reference. This is accepted and
//! not enforced against.

use crate::key::ObjectKey;

/// Fixed sentinel prefix marking an externalized value.
pub const VALUE_PREFIX: &str = "xcom_s3://";

/// Build the reference string for an object key.
pub fn encode_reference(key: &ObjectKey) -> String {
    format!("{VALUE_PREFIX}{key}")
}

/// Returns `true` iff `value` carries the reference sentinel.
pub fn is_reference(value: &str) -> bool {
    value.starts_with(VALUE_PREFIX)
}

/// Strip the sentinel and recover the object key.
///
/// Returns `None` for non-references; callers check [`is_reference`] first
/// or match on the `Option`. The suffix is NOT validated: a prefixed string
/// with a malformed key passes through and fails downstream, at codec
/// dispatch or at download.
pub fn decode_reference(value: &str) -> Option<ObjectKey> {
    value.strip_prefix(VALUE_PREFIX).map(ObjectKey::from_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_prepends_prefix() {
        let key = ObjectKey::from_raw("xcom/data_abc.parquet");
        assert_eq!(encode_reference(&key), "xcom_s3://xcom/data_abc.parquet");
    }

    #[test]
    fn roundtrip() {
        let key = ObjectKey::generate(".json");
        let reference = encode_reference(&key);
        assert!(is_reference(&reference));
        assert_eq!(decode_reference(&reference), Some(key));
    }

    #[test]
    fn plain_strings_are_not_references() {
        assert!(!is_reference("hello"));
        assert!(!is_reference(""));
        assert!(!is_reference("s3://other-scheme"));
        assert!(decode_reference("hello").is_none());
    }

    #[test]
    fn prefix_alone_decodes_to_empty_key() {
        // Malformed suffixes pass through undisturbed.
        let key = decode_reference(VALUE_PREFIX).unwrap();
        assert_eq!(key.as_str(), "");
    }

    #[test]
    fn prefix_is_case_sensitive() {
        assert!(!is_reference("XCOM_S3://xcom/data_abc.json"));
    }
}
