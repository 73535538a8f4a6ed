//! Shared fixtures for integration tests.
//!
//! Provides the sample configuration tree used across the wrapper suites.

use attr_map::{Mapping, Value};
use rstest::fixture;
use serde_json::json;

/// A nested tree mixing mappings, sequences, reserved names and keys that
/// are not attribute-safe.
#[fixture]
pub fn sample() -> Mapping {
    let tree = json!({
        "foo": "bar",
        "lorem": {"ipsum": "dolor", "sit": ["amet", {"consectetur": true}]},
        "get": "reserved",
        "_private": 1,
        "with space": "spaced",
        "list": [{"alpha": "bravo"}, "charlie"],
    });
    let mapping = Mapping::try_from(tree).unwrap_or_default();
    mapping.insert(7, "seven");
    mapping.insert("bytes", Value::from(b"raw".as_slice()));
    mapping
}
