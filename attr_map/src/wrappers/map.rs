//! The plain mutable wrapper.

use std::fmt;

use crate::{
    AttrMapping, BASE_RESERVED_NAMES, Key, MUTABLE_RESERVED_NAMES, Mapping, MutableAttrMapping,
    SequenceKind, Slots, Value, WrapConfig,
};

/// A mutable attribute mapping without a default factory.
#[derive(Debug, Clone, Default)]
pub struct AttrMap {
    slots: Slots,
}

impl AttrMap {
    /// Wrap `mapping` without copying it.
    #[must_use]
    pub fn new(mapping: Mapping) -> Self {
        Self::from(mapping)
    }

    /// Wrap a new mapping built from `pairs`.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        Self::new(Mapping::from_pairs(pairs))
    }

    /// Replace the container sequences are rebuilt into.
    #[must_use]
    pub fn with_sequence_type(mut self, sequence_type: Option<SequenceKind>) -> Self {
        self.slots.config_mut().sequence_type = sequence_type;
        self
    }
}

impl AttrMapping for AttrMap {
    const TYPE_NAME: &'static str = "AttrMap";
    const RESERVED_NAMES: &'static [&'static [&'static str]] = &[
        BASE_RESERVED_NAMES,
        MUTABLE_RESERVED_NAMES,
        &["from_pairs", "new", "with_sequence_type"],
    ];

    fn slots(&self) -> &Slots {
        &self.slots
    }

    fn from_slots(slots: Slots) -> Self {
        Self { slots }
    }

    fn construct(mapping: Mapping, config: WrapConfig) -> Self {
        Self::from_slots(Slots::new(
            mapping,
            WrapConfig::new().with_sequence_type(config.sequence_type),
        ))
    }
}

impl MutableAttrMapping for AttrMap {
    fn slots_mut(&mut self) -> &mut Slots {
        &mut self.slots
    }
}

wrapper_common!(AttrMap);

impl fmt::Display for AttrMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}", self.slots.mapping())
    }
}
