//! The wrapper built around a default factory.

use std::fmt;

use crate::{
    AttrMapping, BASE_RESERVED_NAMES, DefaultFactory, Key, MUTABLE_RESERVED_NAMES, Mapping,
    MutableAttrMapping, SequenceKind, Slots, Value, WrapConfig,
};

/// A mutable attribute mapping that fills in missing keys on read.
///
/// Reading an absent key through item, callable or attribute access calls
/// the factory, stores its result and returns it. With `pass_key` set, a
/// callback factory receives the missing key. Without a factory it behaves
/// like [`crate::AttrMap`]. Nested mappings inherit the factory.
///
/// # Examples
///
/// ```
/// use attr_map::{AttrDefault, AttrMapping, DefaultFactory, Key, Value};
///
/// let shout =
///     DefaultFactory::callback(|key| Value::from(key.map(|key| key.label().to_uppercase())));
/// let defaults = AttrDefault::new(Some(shout)).with_pass_key(true);
/// assert_eq!(defaults.attr("hello")?, "HELLO");
/// assert_eq!(defaults.get("other"), None);
/// assert_eq!(defaults.to_string(), r#"AttrDefault(<callback>, true, {"hello": "HELLO"})"#);
/// # Ok::<_, attr_map::AttrError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttrDefault {
    slots: Slots,
}

impl AttrDefault {
    /// An empty mapping with `factory` for missing keys.
    #[must_use]
    pub fn new(factory: Option<DefaultFactory>) -> Self {
        let config = WrapConfig::new().with_default_factory(factory);
        Self::construct(Mapping::new(), config)
    }

    /// Replace the backing mapping with a new one built from `items`.
    #[must_use]
    pub fn with_items<I, K, V>(self, items: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        self.with_mapping(Mapping::from_pairs(items))
    }

    /// Wrap `mapping` instead, without copying it.
    #[must_use]
    pub fn with_mapping(self, mapping: Mapping) -> Self {
        Self::from_slots(self.slots.with_mapping(mapping))
    }

    /// Replace the container sequences are rebuilt into.
    #[must_use]
    pub fn with_sequence_type(mut self, sequence_type: Option<SequenceKind>) -> Self {
        self.slots.config_mut().sequence_type = sequence_type;
        self
    }

    /// Set whether the factory receives the missing key.
    #[must_use]
    pub fn with_pass_key(mut self, pass_key: bool) -> Self {
        self.slots.config_mut().pass_key = pass_key;
        self
    }

    /// The factory, if any.
    #[must_use]
    pub fn default_factory(&self) -> Option<&DefaultFactory> {
        self.config().default_factory.as_ref()
    }

    /// Whether the factory receives the missing key.
    #[must_use]
    pub fn pass_key(&self) -> bool {
        self.config().pass_key
    }
}

impl AttrMapping for AttrDefault {
    const TYPE_NAME: &'static str = "AttrDefault";
    const RESERVED_NAMES: &'static [&'static [&'static str]] = &[
        BASE_RESERVED_NAMES,
        MUTABLE_RESERVED_NAMES,
        &[
            "default_factory",
            "new",
            "pass_key",
            "with_items",
            "with_mapping",
            "with_pass_key",
            "with_sequence_type",
        ],
    ];

    fn slots(&self) -> &Slots {
        &self.slots
    }

    fn from_slots(slots: Slots) -> Self {
        Self { slots }
    }
}

impl MutableAttrMapping for AttrDefault {
    fn slots_mut(&mut self) -> &mut Slots {
        &mut self.slots
    }
}

wrapper_common!(AttrDefault);

impl fmt::Display for AttrDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AttrDefault(")?;
        match self.default_factory() {
            Some(factory) => write!(f, "{factory}")?,
            None => f.write_str("None")?,
        }
        write!(f, ", {}, {})", self.pass_key(), self.slots.mapping())
    }
}
