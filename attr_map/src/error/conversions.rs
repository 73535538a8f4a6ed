//! Trait-based conversions between decoder error types and `AttrError`.

use super::AttrError;

/// Convert JSON decoding failures into [`AttrError::Decode`].
impl From<serde_json::Error> for AttrError {
    fn from(e: serde_json::Error) -> Self {
        Self::decode(format!(
            "JSON error: {} at line {}, column {}",
            e,
            e.line(),
            e.column()
        ))
    }
}

/// Convert TOML decoding failures into [`AttrError::Decode`].
#[cfg(feature = "toml")]
impl From<toml::de::Error> for AttrError {
    fn from(e: toml::de::Error) -> Self {
        Self::decode(e)
    }
}
