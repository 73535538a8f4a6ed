//! Format-specific decoding of configuration text.

use serde_json::Value as JsonValue;

#[cfg_attr(
    all(feature = "toml", feature = "yaml", feature = "json5"),
    expect(unused_imports, reason = "every optional format is enabled")
)]
use super::error::feature_disabled;
use super::options::Format;
use crate::{AttrResult, AttrResultExt};

/// Decode `data` as `format` into a JSON value.
///
/// # Errors
///
/// Returns [`crate::AttrError::Decode`] when the text is malformed or the cargo
/// feature for `format` is disabled.
pub(super) fn parse(format: Format, data: &str) -> AttrResult<JsonValue> {
    match format {
        Format::Json => serde_json::from_str(data).into_attr(),
        Format::Toml => {
            #[cfg(feature = "toml")]
            {
                toml::from_str::<JsonValue>(data).into_attr()
            }
            #[cfg(not(feature = "toml"))]
            {
                Err(feature_disabled("toml"))
            }
        }
        Format::Yaml => {
            #[cfg(feature = "yaml")]
            {
                super::yaml::parse(data)
            }
            #[cfg(not(feature = "yaml"))]
            {
                Err(feature_disabled("yaml"))
            }
        }
        Format::Json5 => {
            #[cfg(feature = "json5")]
            {
                json5::from_str::<JsonValue>(data)
                    .map_err(|err| crate::AttrError::decode(format!("JSON5 error: {err}")))
            }
            #[cfg(not(feature = "json5"))]
            {
                Err(feature_disabled("json5"))
            }
        }
    }
}
