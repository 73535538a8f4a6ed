//! Mutation for attribute mappings.

use tracing::trace;

use crate::merge::AsMapping;
use crate::{AttrError, AttrMapping, AttrResult, Key, Slots, Value};

/// Method names reserved by [`MutableAttrMapping`], on top of
/// [`crate::BASE_RESERVED_NAMES`].
pub const MUTABLE_RESERVED_NAMES: &[&str] = &[
    "clear",
    "del_attr",
    "del_item",
    "force_remove_attribute",
    "pop",
    "pop_or",
    "popitem",
    "set_allow_invalid_attributes",
    "set_attr",
    "set_item",
    "setdefault",
    "slots_mut",
    "update",
    "update_pairs",
];

/// An [`AttrMapping`] whose entries can be created and removed through both
/// item and attribute syntax.
///
/// Every write lands in the backing mapping, so attribute and item access
/// always agree: a key set through [`MutableAttrMapping::set_attr`] is
/// visible to [`AttrMapping::item`] and vice versa, and after
/// [`MutableAttrMapping::clear`] nothing previously stored is reachable
/// either way.
///
/// # Examples
///
/// ```
/// use attr_map::{AttrDict, AttrMapping, MutableAttrMapping};
///
/// let mut config = AttrDict::default();
/// config.set_attr("name", "demo")?;
/// config.set_item("not-an-identifier", 1);
/// assert_eq!(config.item("name")?, "demo");
/// assert_eq!(config.call("not-an-identifier")?.to_value(), 1);
///
/// // Names that are not attribute-safe cannot be written as attributes.
/// assert!(config.set_attr("keys", 1).is_err());
/// # Ok::<_, attr_map::AttrError>(())
/// ```
pub trait MutableAttrMapping: AttrMapping {
    /// Mutable access to the wrapper's state.
    fn slots_mut(&mut self) -> &mut Slots;

    /// Store `value` at `key`.
    fn set_item(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        self.mapping().insert(key, value);
    }

    /// Store `value` under the attribute `name`.
    ///
    /// When invalid attributes are allowed, a name that is not
    /// attribute-safe is stored as a private attribute instead: it is
    /// reachable through [`AttrMapping::attr`] but never written to the
    /// backing mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::InvalidAttribute`] when `name` is not
    /// attribute-safe and invalid attributes are not allowed.
    fn set_attr(&mut self, name: &str, value: impl Into<Value>) -> AttrResult<()> {
        if Self::is_valid_name(name) {
            self.set_item(name, value);
            return Ok(());
        }
        let private = self.slots_mut().private_mut();
        if !private.allow_invalid {
            return Err(AttrError::invalid_attribute(name));
        }
        trace!(wrapper = Self::TYPE_NAME, name, "stored private attribute");
        private.values.insert(name.to_owned(), value.into());
        Ok(())
    }

    /// Remove `key`.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::MissingKey`] when `key` is absent.
    fn del_item(&mut self, key: impl Into<Key>) -> AttrResult<()> {
        let key = key.into();
        match self.mapping().remove(&key) {
            Some(_) => Ok(()),
            None => Err(AttrError::missing_key(key)),
        }
    }

    /// Remove the attribute `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::InvalidAttribute`] when `name` is not
    /// attribute-safe or not present.
    fn del_attr(&mut self, name: &str) -> AttrResult<()> {
        let key = Key::from(name);
        if !Self::is_valid_name(name) || !self.mapping().contains_key(&key) {
            return Err(AttrError::invalid_attribute(name));
        }
        self.mapping().remove(&key);
        Ok(())
    }

    /// Remove `key` and return its value. Only the backing mapping is
    /// consulted; the default factory is not.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::MissingKey`] when `key` is absent.
    fn pop(&mut self, key: impl Into<Key>) -> AttrResult<Value> {
        let key = key.into();
        self.mapping()
            .remove(&key)
            .ok_or_else(|| AttrError::missing_key(key))
    }

    /// Remove `key` and return its value, or `default` when absent.
    fn pop_or(&mut self, key: impl Into<Key>, default: impl Into<Value>) -> Value {
        self.mapping()
            .remove(&key.into())
            .unwrap_or_else(|| default.into())
    }

    /// Remove and return the most recently inserted entry.
    ///
    /// # Errors
    ///
    /// Returns [`AttrError::EmptyMapping`] when there are no entries.
    fn popitem(&mut self) -> AttrResult<(Key, Value)> {
        self.mapping().pop_last().ok_or(AttrError::EmptyMapping)
    }

    /// Remove every entry.
    fn clear(&mut self) {
        self.mapping().clear();
    }

    /// Copy every entry of `other` in, overwriting existing keys. Nested
    /// values are not merged; use [`AttrMapping::merged`] for that.
    fn update<M: AsMapping + ?Sized>(&mut self, other: &M) {
        self.update_pairs(other.as_mapping().items());
    }

    /// Store each pair in order.
    fn update_pairs<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        for (key, value) in pairs {
            self.set_item(key, value);
        }
    }

    /// The value at `key`, storing `default` there first if it is absent.
    /// The default factory is not consulted.
    fn setdefault(&mut self, key: impl Into<Key>, default: impl Into<Value>) -> Value {
        let key = key.into();
        if let Some(existing) = self.mapping().get(&key) {
            return existing;
        }
        let value = default.into();
        self.mapping().insert(key, value.clone());
        value
    }

    /// Allow or forbid storing attribute-unsafe names as private
    /// attributes. See [`MutableAttrMapping::set_attr`].
    fn set_allow_invalid_attributes(&mut self, allow: bool) {
        self.slots_mut().private_mut().allow_invalid = allow;
    }

    /// Remove a private attribute, returning its value.
    fn force_remove_attribute(&mut self, name: &str) -> Option<Value> {
        self.slots_mut().private_mut().values.shift_remove(name)
    }
}
