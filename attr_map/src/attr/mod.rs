//! The read-only attribute-mapping core.
//!
//! [`AttrMapping`] exposes a backing [`Mapping`] through three access
//! styles that all funnel through one read primitive:
//!
//! - [`AttrMapping::item`] returns the raw stored value.
//! - [`AttrMapping::call`] applies the build/wrap rule to the stored value
//!   and accepts any key.
//! - [`AttrMapping::attr`] applies the build/wrap rule and only accepts
//!   attribute-safe names.
//!
//! Iteration (`keys`, `values`, `items`) and [`AttrMapping::get`] return raw
//! values, so nested mappings come back as plain [`Mapping`]s rather than
//! wrappers.

mod name;
mod node;
pub(crate) mod slots;

use tracing::trace;

pub use name::is_attribute_safe;
pub use node::Node;
pub use slots::Slots;

use crate::merge::{AsMapping, merge_mappings};
use crate::{AttrError, AttrResult, Key, Mapping, SequenceKind, Value, WrapConfig, WrapperState};

/// Method names every wrapper reserves. Keys with these names are only
/// reachable through item access, [`AttrMapping::call`] and
/// [`AttrMapping::get`].
pub const BASE_RESERVED_NAMES: &[&str] = &[
    "attr",
    "build",
    "call",
    "checked_add",
    "checked_radd",
    "config",
    "construct",
    "contains_key",
    "deep_copy",
    "from_slots",
    "from_state",
    "get",
    "get_or",
    "is_empty",
    "is_valid_name",
    "item",
    "items",
    "iter",
    "keys",
    "len",
    "mapping",
    "merged",
    "merged_into",
    "read",
    "sequence_type",
    "slots",
    "state",
    "to_value",
    "values",
];

/// A mapping that also offers attribute-style access to its values.
///
/// Concrete wrappers provide their storage through [`AttrMapping::slots`]
/// and a constructor through [`AttrMapping::from_slots`]; everything else
/// is derived. Wrapping never copies: a wrapper is a view over the mapping
/// it was given, and external writes to that mapping are visible through
/// it.
///
/// Wrappers provide no internal locking and are neither `Send` nor `Sync`.
///
/// # Examples
///
/// ```
/// use attr_map::{Attr, AttrMapping, Value};
/// use serde_json::json;
///
/// let config = Attr::try_from(json!({"server": {"port": 8080}, "get": "data"}))?;
/// assert_eq!(config.attr("server")?.attr("port")?, Value::Int(8080));
///
/// // Names shadowed by methods stay reachable through item access only.
/// assert!(config.attr("get").is_err());
/// assert_eq!(config.item("get")?, "data");
/// # Ok::<_, attr_map::AttrError>(())
/// ```
pub trait AttrMapping: Sized + Clone {
    /// Name reported in attribute errors.
    const TYPE_NAME: &'static str;

    /// Names that can never be used as attributes on this type, grouped by
    /// the trait or type that defines them.
    const RESERVED_NAMES: &'static [&'static [&'static str]];

    /// The wrapper's state.
    fn slots(&self) -> &Slots;

    /// Build a wrapper around existing state.
    fn from_slots(slots: Slots) -> Self;

    /// Wrap `mapping` with `config`. Used by the build/wrap rule, so nested
    /// mappings come back as the same concrete type.
    #[must_use]
    fn construct(mapping: Mapping, config: WrapConfig) -> Self {
        Self::from_slots(Slots::new(mapping, config))
    }

    /// The backing mapping.
    fn mapping(&self) -> &Mapping {
        self.slots().mapping()
    }

    /// The wrapper configuration.
    fn config(&self) -> &WrapConfig {
        self.slots().config()
    }

    /// The container sequences are rebuilt into, if any.
    fn sequence_type(&self) -> Option<SequenceKind> {
        self.config().sequence_type
    }

    /// Whether `name` is attribute-safe for this type. Evaluated against
    /// [`AttrMapping::RESERVED_NAMES`] on every call.
    #[must_use]
    fn is_valid_name(name: &str) -> bool {
        is_attribute_safe(name, &[])
            && !Self::RESERVED_NAMES
                .iter()
                .any(|group| group.contains(&name))
    }

    /// Read `key`, synthesising it through the default factory when absent.
    ///
    /// Synthesis stores the new value in the backing mapping, so this read
    /// can mutate.
    fn read(&self, key: &Key) -> Option<Value> {
        if let Some(value) = self.mapping().get(key) {
            return Some(value);
        }
        let config = self.config();
        let factory = config.default_factory.as_ref()?;
        let value = factory.produce(key, config.pass_key);
        trace!(wrapper = Self::TYPE_NAME, %key, "synthesised default value");
        self.mapping().insert(key.clone(), value.clone());
        Some(value)
    }

    /// The raw value at `key`, or `None`. Never consults the default
    /// factory and never wraps.
    fn get(&self, key: impl Into<Key>) -> Option<Value> {
        self.mapping().get(&key.into())
    }

    /// The raw value at `key`, or `default`.
    fn get_or(&self, key: impl Into<Key>, default: impl Into<Value>) -> Value {
        self.get(key).unwrap_or_else(|| default.into())
    }

    /// Item access: the raw value at `key`, exactly as stored.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::MissingKey`] when `key` is absent and no default
    /// factory is configured.
    fn item(&self, key: impl Into<Key>) -> AttrResult<Value> {
        let key = key.into();
        self.read(&key).ok_or_else(|| AttrError::missing_key(key))
    }

    /// Callable access: the value at `key` with the build/wrap rule applied.
    /// Works for keys that are not attribute-safe.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::MissingAttribute`] when `key` is absent and no
    /// default factory is configured.
    fn call(&self, key: impl Into<Key>) -> AttrResult<Node<Self>> {
        let key = key.into();
        match self.read(&key) {
            Some(value) => Ok(self.build(value)),
            None => Err(AttrError::missing_attribute(Self::TYPE_NAME, key.label())),
        }
    }

    /// Attribute access: the value at `name` with the build/wrap rule
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::MissingAttribute`] when `name` is not
    /// attribute-safe, or is absent and no default factory is configured.
    fn attr(&self, name: &str) -> AttrResult<Node<Self>> {
        if let Some(value) = self.slots().private().values.get(name) {
            return Ok(Node::Value(value.clone()));
        }
        if !Self::is_valid_name(name) {
            return Err(AttrError::missing_attribute(Self::TYPE_NAME, name));
        }
        self.read(&Key::from(name))
            .map(|value| self.build(value))
            .ok_or_else(|| AttrError::missing_attribute(Self::TYPE_NAME, name))
    }

    /// Apply the build/wrap rule with this wrapper's configuration.
    fn build(&self, value: Value) -> Node<Self> {
        Node::build(value, self.config())
    }

    /// Number of entries.
    fn len(&self) -> usize {
        self.mapping().len()
    }

    /// Whether there are no entries.
    fn is_empty(&self) -> bool {
        self.mapping().is_empty()
    }

    /// Whether `key` is present.
    fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.mapping().contains_key(&key.into())
    }

    /// Snapshot of the keys.
    fn keys(&self) -> Vec<Key> {
        self.mapping().keys()
    }

    /// Snapshot of the raw values.
    fn values(&self) -> Vec<Value> {
        self.mapping().values()
    }

    /// Snapshot of the raw entries.
    fn items(&self) -> Vec<(Key, Value)> {
        self.mapping().items()
    }

    /// Iterate over a snapshot of the raw entries.
    fn iter(&self) -> std::vec::IntoIter<(Key, Value)> {
        self.items().into_iter()
    }

    /// The backing mapping as a [`Value`], sharing storage.
    fn to_value(&self) -> Value {
        Value::Map(self.mapping().clone())
    }

    /// A wrapper over a deep copy of the backing mapping, with the same
    /// configuration.
    #[must_use]
    fn deep_copy(&self) -> Self {
        Self::from_slots(self.slots().with_mapping(self.mapping().deep_copy()))
    }

    /// Snapshot of the data and configuration, for serialisation.
    fn state(&self) -> WrapperState {
        WrapperState::capture(self.slots())
    }

    /// Rebuild a wrapper from a snapshot.
    #[must_use]
    fn from_state(state: WrapperState) -> Self {
        Self::from_slots(state.into_slots())
    }

    /// Merge `other` over `self` into a new wrapper of this type.
    ///
    /// The result keeps this wrapper's configuration. When `other` is a
    /// wrapper whose sequence type differs, the result falls back to tuples.
    #[must_use]
    fn merged<M: AsMapping + ?Sized>(&self, other: &M) -> Self {
        let mut slots = Slots::new(
            merge_mappings(self.mapping(), other.as_mapping()),
            self.config().clone(),
        );
        reconcile_sequence_type(slots.config_mut(), other);
        Self::from_slots(slots)
    }

    /// Merge `self` over `other` into a new wrapper of this type.
    #[must_use]
    fn merged_into<M: AsMapping + ?Sized>(&self, other: &M) -> Self {
        let mut slots = Slots::new(
            merge_mappings(other.as_mapping(), self.mapping()),
            self.config().clone(),
        );
        reconcile_sequence_type(slots.config_mut(), other);
        Self::from_slots(slots)
    }

    /// `self + other` against a dynamically typed operand.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::UnsupportedOperand`] unless `other` is a mapping.
    fn checked_add(&self, other: &Value) -> AttrResult<Self> {
        match other {
            Value::Map(mapping) => Ok(self.merged(mapping)),
            _ => Err(AttrError::UnsupportedOperand {
                left: Self::TYPE_NAME,
                right: other.type_name(),
            }),
        }
    }

    /// `other + self` against a dynamically typed operand.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::UnsupportedOperand`] unless `other` is a mapping.
    fn checked_radd(&self, other: &Value) -> AttrResult<Self> {
        match other {
            Value::Map(mapping) => Ok(self.merged_into(mapping)),
            _ => Err(AttrError::UnsupportedOperand {
                left: other.type_name(),
                right: Self::TYPE_NAME,
            }),
        }
    }
}

fn reconcile_sequence_type<M: AsMapping + ?Sized>(config: &mut WrapConfig, other: &M) {
    if let Some(other_config) = other.wrap_config() {
        if other_config.sequence_type != config.sequence_type {
            config.sequence_type = Some(SequenceKind::Tuple);
        }
    }
}
