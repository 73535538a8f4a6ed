//! Error constructors shared by the file loading helpers.

use std::error::Error;
use std::path::Path;

use crate::AttrError;

/// Construct an [`AttrError::File`] for a configuration path.
pub(super) fn file_error(path: &Path, err: impl Into<Box<dyn Error + Send + Sync>>) -> AttrError {
    AttrError::File {
        path: path.to_path_buf(),
        source: err.into(),
    }
}

/// Decoding error for a format whose cargo feature is disabled.
#[cfg_attr(
    all(feature = "toml", feature = "yaml", feature = "json5"),
    expect(dead_code, reason = "every optional format is enabled")
)]
pub(super) fn feature_disabled(feature: &str) -> AttrError {
    AttrError::decode(format!(
        "{feature} feature disabled: enable the '{feature}' feature to support this file format"
    ))
}
