//! The canonical mutable wrapper.

use std::fmt;

use crate::{
    AttrMapping, BASE_RESERVED_NAMES, DefaultFactory, Key, MUTABLE_RESERVED_NAMES, Mapping,
    MutableAttrMapping, Slots, Value, WrapConfig,
};

/// The general-purpose mutable attribute mapping.
///
/// Supports every access style, mutation through item and attribute
/// syntax, an optional default factory, merging and serialisation.
///
/// # Examples
///
/// ```
/// use attr_map::{AttrDict, AttrMapping, MutableAttrMapping, Value};
///
/// let mut dict = AttrDict::with_overrides([("a", 1), ("b", 2)], [("b", 3)]);
/// dict.set_attr("c", Value::map([("d", "e")]))?;
/// assert_eq!(dict.item("b")?, Value::Int(3));
/// assert_eq!(dict.attr("c")?.attr("d")?, "e");
/// assert_eq!(dict.to_string(), r#"AttrDict({"a": 1, "b": 3, "c": {"d": "e"}})"#);
/// # Ok::<_, attr_map::AttrError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttrDict {
    slots: Slots,
}

impl AttrDict {
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

    /// Wrap a new mapping built from `pairs`, then apply `overrides` on
    /// top, the way keyword arguments override positional pairs.
    pub fn with_overrides<I, K, V, O, OK, OV>(pairs: I, overrides: O) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
        O: IntoIterator<Item = (OK, OV)>,
        OK: Into<Key>,
        OV: Into<Value>,
    {
        let mut dict = Self::from_pairs(pairs);
        dict.update_pairs(overrides);
        dict
    }

    /// Map every key in `keys` to its own deep copy of `value`.
    ///
    /// The keys never share a nested mapping, so writing through one key
    /// leaves the others untouched. Insert the same [`Value::Map`] under
    /// each key with [`crate::MutableAttrMapping::set_item`] to share it instead.
    pub fn from_keys<I, K>(keys: I, value: impl Into<Value>) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        let value = value.into();
        Self::from_pairs(keys.into_iter().map(|key| (key, value.deep_copy())))
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: WrapConfig) -> Self {
        *self.slots.config_mut() = config;
        self
    }

    /// Install a default factory for missing keys.
    #[must_use]
    pub fn with_default_factory(mut self, factory: DefaultFactory, pass_key: bool) -> Self {
        let config = self.slots.config_mut();
        config.default_factory = Some(factory);
        config.pass_key = pass_key;
        self
    }

    /// A new wrapper over a copy of the top level of the backing mapping.
    ///
    /// Adding or removing keys on the copy does not affect `self`, but
    /// nested mappings are still shared. Use [`AttrMapping::deep_copy`] for
    /// full independence, or `clone` to share everything.
    #[must_use]
    pub fn copy(&self) -> Self {
        let top_level = self.slots.mapping().items().into_iter().collect();
        Self::from_slots(self.slots.with_mapping(top_level))
    }
}

impl AttrMapping for AttrDict {
    const TYPE_NAME: &'static str = "AttrDict";
    const RESERVED_NAMES: &'static [&'static [&'static str]] = &[
        BASE_RESERVED_NAMES,
        MUTABLE_RESERVED_NAMES,
        &[
            "copy",
            "from_keys",
            "from_pairs",
            "new",
            "with_config",
            "with_default_factory",
            "with_overrides",
        ],
    ];

    fn slots(&self) -> &Slots {
        &self.slots
    }

    fn from_slots(slots: Slots) -> Self {
        Self { slots }
    }
}

impl MutableAttrMapping for AttrDict {
    fn slots_mut(&mut self) -> &mut Slots {
        &mut self.slots
    }
}

wrapper_common!(AttrDict);

impl fmt::Display for AttrDict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttrDict({})", self.slots.mapping())
    }
}
