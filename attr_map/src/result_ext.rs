//! Extensions for mapping errors to `AttrResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| AttrError::from(e))`
//! patterns in decoders that convert external error types into the crate's
//! `AttrResult<T>` alias.
//!
//! # Examples
//!
//! ```
//! use attr_map::{AttrResult, AttrResultExt};
//!
//! fn decode(text: &str) -> AttrResult<serde_json::Value> {
//!     // serde_json::Error implements Into<AttrError>
//!     serde_json::from_str(text).into_attr()
//! }
//!
//! assert!(decode("{}").is_ok());
//! assert!(decode("{").is_err());
//! ```

use std::path::Path;

use crate::{AttrError, AttrResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<AttrError>`
/// into an `AttrResult<T>`.
pub trait AttrResultExt<T, E> {
    /// Convert `Result<T, E>` into `AttrResult<T>` using `Into<AttrError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into [`AttrError`].
    fn into_attr(self) -> AttrResult<T>;

    /// Convert as [`AttrResultExt::into_attr`] and attach the file `path`.
    ///
    /// # Errors
    ///
    /// Returns an [`AttrError::File`] naming `path` when the input is `Err`.
    fn in_file(self, path: &Path) -> AttrResult<T>;
}

impl<T, E> AttrResultExt<T, E> for Result<T, E>
where
    E: Into<AttrError>,
{
    fn into_attr(self) -> AttrResult<T> {
        self.map_err(Into::into)
    }

    fn in_file(self, path: &Path) -> AttrResult<T> {
        self.map_err(|e| e.into().in_file(path))
    }
}
