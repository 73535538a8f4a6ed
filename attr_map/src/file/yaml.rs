//! YAML decoding backed by `serde-saphyr`.

use serde_json::Value as JsonValue;
use serde_saphyr::Options;

use crate::{AttrError, AttrResult};

/// Parse YAML into a JSON value using strict boolean semantics, so `yes`
/// and `on` stay strings.
pub(super) fn parse(data: &str) -> AttrResult<JsonValue> {
    serde_saphyr::from_str_with_options(
        data,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
    .map_err(|err| AttrError::decode(format!("YAML error: {err}")))
}
