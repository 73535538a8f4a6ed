//! Constructors and classification helpers for `AttrError`.

use std::error::Error;
use std::path::Path;

use super::AttrError;
use crate::Key;

impl AttrError {
    /// Construct a [`AttrError::MissingKey`].
    #[must_use]
    pub fn missing_key(key: impl Into<Key>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    /// Construct a [`AttrError::MissingAttribute`] for a wrapper type.
    ///
    /// # Examples
    ///
    /// ```
    /// use attr_map::AttrError;
    /// let err = AttrError::missing_attribute("AttrDict", "fake");
    /// assert_eq!(err.to_string(), "'AttrDict' instance has no attribute 'fake'");
    /// ```
    #[must_use]
    pub fn missing_attribute(type_name: &'static str, name: impl Into<String>) -> Self {
        Self::MissingAttribute {
            type_name,
            name: name.into(),
        }
    }

    /// Construct an [`AttrError::InvalidAttribute`].
    #[must_use]
    pub fn invalid_attribute(name: impl Into<String>) -> Self {
        Self::InvalidAttribute { name: name.into() }
    }

    /// Construct an [`AttrError::Decode`] from any decoder error.
    #[must_use]
    pub fn decode(source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Decode {
            source: source.into(),
        }
    }

    /// Attach `path` to an error raised while loading a file.
    ///
    /// Errors that already carry a path are returned unchanged.
    #[must_use]
    pub fn in_file(self, path: &Path) -> Self {
        match self {
            file @ Self::File { .. } => file,
            other => Self::File {
                path: path.to_path_buf(),
                source: Box::new(other),
            },
        }
    }

    /// Whether this is a "key not found" error raised by item access.
    #[must_use]
    pub const fn is_lookup_error(&self) -> bool {
        matches!(self, Self::MissingKey { .. } | Self::EmptyMapping)
    }

    /// Whether this is an "attribute not found" error raised by attribute or
    /// callable access.
    #[must_use]
    pub const fn is_attribute_error(&self) -> bool {
        matches!(self, Self::MissingAttribute { .. })
    }

    /// Whether this is a "not permitted" error: an invalid mutation, an
    /// unsupported operand or unusable loader options.
    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAttribute { .. }
                | Self::UnsupportedOperand { .. }
                | Self::UnknownOptions { .. }
                | Self::InvalidOption { .. }
        )
    }
}
