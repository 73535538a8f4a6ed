//! Primary error enum for attribute mappings.

use std::path::PathBuf;

use thiserror::Error;

use crate::Key;

/// Convenience alias for results carrying an [`AttrError`].
pub type AttrResult<T> = Result<T, AttrError>;

/// Errors raised by attribute mappings and their collaborators.
///
/// Item-style lookups report [`AttrError::MissingKey`], while attribute and
/// callable lookups report [`AttrError::MissingAttribute`]. Callers that only
/// handle one of the two must be able to tell them apart, so they are never
/// folded together. See [`AttrError::is_lookup_error`] and friends.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AttrError {
    /// Item access on an absent key.
    #[error("key not found: {key}")]
    MissingKey {
        /// The key that was looked up.
        key: Key,
    },

    /// Attribute or callable access on an absent key, or on a name that
    /// cannot be used as an attribute.
    #[error("'{type_name}' instance has no attribute '{name}'")]
    MissingAttribute {
        /// Name of the wrapper type that was queried.
        type_name: &'static str,
        /// The attribute that was requested.
        name: String,
    },

    /// Assignment or deletion through an attribute-unsafe name.
    #[error("invalid attribute name: {name:?}")]
    InvalidAttribute {
        /// The rejected name.
        name: String,
    },

    /// An entry was requested from an empty mapping.
    #[error("cannot pop an item: mapping is empty")]
    EmptyMapping,

    /// A merge was attempted with an operand that is not mapping-shaped.
    #[error("unsupported operand type(s) for +: '{left}' and '{right}'")]
    UnsupportedOperand {
        /// Shape of the left operand.
        left: &'static str,
        /// Shape of the right operand.
        right: &'static str,
    },

    /// A document or value was expected to be a mapping.
    #[error("expected a mapping, found {found}")]
    NotAMapping {
        /// Shape of the value that was found instead.
        found: &'static str,
    },

    /// The loader received options it does not recognise.
    #[error("unknown load option(s): {}", names.join(", "))]
    UnknownOptions {
        /// Every unrecognised option name, sorted.
        names: Vec<String>,
    },

    /// The loader received a recognised option with an unusable value.
    #[error("invalid value for load option '{name}': {message}")]
    InvalidOption {
        /// Option name.
        name: String,
        /// Why the value was rejected.
        message: String,
    },

    /// A decoder failed to parse configuration text.
    #[error("failed to decode configuration: {source}")]
    Decode {
        /// Underlying decoder error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Error originating from a configuration file.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying error reported while reading or decoding the file.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
