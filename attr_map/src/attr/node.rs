//! The build/wrap rule and the wrapped values it produces.

use crate::{AttrError, AttrMapping, AttrResult, Key, SequenceKind, Value, WrapConfig};

/// A value read through attribute-style or callable access.
///
/// Mappings come back wrapped in the same wrapper type `W` they were read
/// from, sequences are rebuilt into the configured container with every
/// element wrapped the same way, and everything else is passed through.
/// Nodes are views: a wrapped mapping shares storage with the mapping it
/// was read from, and re-reading rebuilds the node from scratch.
#[derive(Debug, Clone)]
pub enum Node<W> {
    /// A nested mapping, wrapped.
    Map(W),
    /// A sequence rebuilt into the configured container.
    Sequence {
        /// Container the elements were collected into.
        kind: SequenceKind,
        /// The wrapped elements.
        items: Vec<Node<W>>,
    },
    /// Any other value, unchanged.
    Value(Value),
}

impl<W: AttrMapping> Node<W> {
    /// Apply the build/wrap rule to `value` under `config`.
    pub(crate) fn build(value: Value, config: &WrapConfig) -> Self {
        match (value, config.sequence_type) {
            (Value::Map(mapping), _) => Self::Map(W::construct(mapping, config.clone())),
            (Value::List(items) | Value::Tuple(items), Some(kind)) => Self::Sequence {
                kind,
                items: items
                    .into_iter()
                    .map(|item| Self::build(item, config))
                    .collect(),
            },
            (other, _) => Self::Value(other),
        }
    }

    /// Short name of the node's shape, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Map(_) => W::TYPE_NAME,
            Self::Sequence {
                kind: SequenceKind::List,
                ..
            } => "list",
            Self::Sequence {
                kind: SequenceKind::Tuple,
                ..
            } => "tuple",
            Self::Value(value) => value.type_name(),
        }
    }

    /// Attribute access on a wrapped mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::MissingAttribute`] when the node is not a
    /// mapping, or when the mapping itself rejects the lookup.
    pub fn attr(&self, name: &str) -> AttrResult<Self> {
        match self {
            Self::Map(wrapper) => wrapper.attr(name),
            _ => Err(AttrError::missing_attribute(self.type_name(), name)),
        }
    }

    /// Callable access on a wrapped mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::MissingAttribute`] when the node is not a
    /// mapping or the key is absent.
    pub fn call(&self, key: impl Into<Key>) -> AttrResult<Self> {
        let key = key.into();
        match self {
            Self::Map(wrapper) => wrapper.call(key),
            _ => Err(AttrError::missing_attribute(self.type_name(), key.label())),
        }
    }

    /// Element `index` of a rebuilt sequence.
    #[must_use]
    pub fn index(&self, index: usize) -> Option<&Self> {
        match self {
            Self::Sequence { items, .. } => items.get(index),
            _ => None,
        }
    }

    /// The wrapper, if this node is a mapping.
    #[must_use]
    pub const fn as_map(&self) -> Option<&W> {
        match self {
            Self::Map(wrapper) => Some(wrapper),
            _ => None,
        }
    }

    /// Take the wrapper out, if this node is a mapping.
    #[must_use]
    pub fn into_map(self) -> Option<W> {
        match self {
            Self::Map(wrapper) => Some(wrapper),
            _ => None,
        }
    }

    /// The container kind and elements, if this node is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<(SequenceKind, &[Self])> {
        match self {
            Self::Sequence { kind, items } => Some((*kind, items)),
            _ => None,
        }
    }

    /// The pass-through value, if this node is neither a mapping nor a
    /// rebuilt sequence.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Unwrap back into a plain [`Value`]. Mappings keep sharing storage.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Map(wrapper) => wrapper.to_value(),
            Self::Sequence { kind, items } => {
                let items = items.iter().map(Self::to_value).collect();
                match kind {
                    SequenceKind::List => Value::List(items),
                    SequenceKind::Tuple => Value::Tuple(items),
                }
            }
            Self::Value(value) => value.clone(),
        }
    }
}

impl<W: AttrMapping> PartialEq for Node<W> {
    fn eq(&self, other: &Self) -> bool {
        self.to_value() == other.to_value()
    }
}

impl<W: AttrMapping> PartialEq<Value> for Node<W> {
    fn eq(&self, other: &Value) -> bool {
        self.to_value() == *other
    }
}

impl<W: AttrMapping> PartialEq<&str> for Node<W> {
    fn eq(&self, other: &&str) -> bool {
        self.as_value().and_then(Value::as_str) == Some(*other)
    }
}
