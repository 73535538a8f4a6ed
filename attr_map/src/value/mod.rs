//! Dynamic values stored in a backing mapping.
//!
//! [`Value`] models the shapes a parsed configuration tree can take. Its
//! `Serialize`/`Deserialize` implementation is *tagged*, so list/tuple and
//! byte-string distinctions survive a round trip; use the `serde_json`
//! conversions in [`json`] for the natural, untagged form.

mod cycle;
mod display;
pub mod json;
mod key;
mod mapping;

use serde::{Deserialize, Serialize};

pub use key::Key;
pub use mapping::Mapping;

/// The two sequence shapes a value can take.
///
/// This is also the "sequence container" a wrapper rebuilds sequences into
/// when they are read through attribute-style access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
    /// A growable list.
    List,
    /// A fixed tuple. The default container for wrapped sequences.
    #[default]
    Tuple,
}

/// A value held by a [`Mapping`].
///
/// Equality is structural and follows nested mappings, including mappings
/// that contain themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
    /// A string. Never treated as a sequence.
    Str(String),
    /// A byte string. Never treated as a sequence.
    Bytes(Vec<u8>),
    /// A list of values.
    List(Vec<Value>),
    /// A tuple of values.
    Tuple(Vec<Value>),
    /// A nested mapping, sharing storage with whoever else holds it.
    Map(Mapping),
}

impl Value {
    /// Build a [`Value::List`] from anything convertible into values.
    pub fn list<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a [`Value::Tuple`] from anything convertible into values.
    pub fn tuple<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Build a [`Value::Map`] over a fresh mapping of `pairs`.
    pub fn map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Self>,
    {
        Self::Map(Mapping::from_pairs(pairs))
    }

    /// Short name of the value's shape, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Map(_) => "map",
        }
    }

    /// The sequence shape of the value, if it has one.
    #[must_use]
    pub const fn sequence_kind(&self) -> Option<SequenceKind> {
        match self {
            Self::List(_) => Some(SequenceKind::List),
            Self::Tuple(_) => Some(SequenceKind::Tuple),
            _ => None,
        }
    }

    /// Borrow the nested mapping, if this is one.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Map(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Borrow the string, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Borrow the elements, if this is a list or a tuple.
    #[must_use]
    pub fn as_slice(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) | Self::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Whether the value is [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Duplicate the value, detaching every nested mapping.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        cycle::copy_value(self, &mut cycle::CopyMemo::new())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        cycle::values_eq(self, other, &mut cycle::EqMemo::new())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Mapping> for Value {
    fn from(value: Mapping) -> Self {
        Self::Map(value)
    }
}

impl From<&Mapping> for Value {
    fn from(value: &Mapping) -> Self {
        Self::Map(value.clone())
    }
}

impl From<Key> for Value {
    fn from(value: Key) -> Self {
        match value {
            Key::Str(text) => Self::Str(text),
            Key::Int(number) => Self::Int(number),
            Key::Bool(flag) => Self::Bool(flag),
        }
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Self::Int(number) if number == other)
    }
}

impl PartialEq<Mapping> for Value {
    fn eq(&self, other: &Mapping) -> bool {
        self.as_mapping() == Some(other)
    }
}
