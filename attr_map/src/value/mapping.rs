//! The shared backing store behind every wrapper.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cycle::{self, CopyMemo, EqMemo, RECURSION_MARKER, Visit};
use super::{Key, Value};

/// An insertion-ordered key/value store behind a shared handle.
///
/// Cloning a `Mapping` yields a second handle onto the *same* store, so a
/// write through one handle is visible through every other. This is what
/// lets a wrapper act as a view over the mapping it was given, and what
/// makes nested wrappers write through to their parent. Use
/// [`Mapping::deep_copy`] for an independent duplicate.
///
/// The handle is neither `Send` nor `Sync`. Sharing a mapping across
/// threads requires the caller to copy it out first.
///
/// Iteration methods return snapshots taken at the time of the call, so a
/// loop may freely mutate the mapping it iterates over.
///
/// A mapping may be stored inside itself. Deep copies reproduce the cycle,
/// equality treats a revisited pair as equal, and text output prints
/// `{...}` at the point of re-entry. Serializing such a mapping fails.
/// Reference counting cannot free a cycle: clear one of the mappings in it
/// to release the memory.
#[derive(Clone, Default)]
pub struct Mapping(Rc<RefCell<IndexMap<Key, Value>>>);

impl Mapping {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from key/value pairs. Later pairs overwrite earlier
    /// ones with the same key.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<Key>,
        V: Into<Value>,
    {
        let map = pairs
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self(Rc::new(RefCell::new(map)))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Whether the mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// The value stored at `key`. Nested mappings in the result share
    /// storage with this mapping.
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Store `value` at `key`, returning the previous value.
    pub fn insert(&self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().insert(key.into(), value.into())
    }

    /// Remove `key`, preserving the order of the remaining entries.
    pub fn remove(&self, key: &Key) -> Option<Value> {
        self.0.borrow_mut().shift_remove(key)
    }

    /// Remove and return the most recently inserted entry.
    pub fn pop_last(&self) -> Option<(Key, Value)> {
        self.0.borrow_mut().pop()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Snapshot of the keys in insertion order.
    #[must_use]
    pub fn keys(&self) -> Vec<Key> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Snapshot of the values in insertion order.
    #[must_use]
    pub fn values(&self) -> Vec<Value> {
        self.0.borrow().values().cloned().collect()
    }

    /// Snapshot of the entries in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<(Key, Value)> {
        self.0
            .borrow()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Whether both handles point at the same store.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> *const () {
        Rc::as_ptr(&self.0).cast()
    }

    /// Duplicate the mapping and every mapping nested inside it, so the
    /// result shares no storage with `self` at any depth. A store reached
    /// twice is copied once, so shared and self-containing structures keep
    /// their shape.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        cycle::copy_mapping(self, &mut CopyMemo::new())
    }
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        cycle::mappings_eq(self, other, &mut EqMemo::new())
    }
}

impl fmt::Debug for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(_visit) = Visit::enter(self) else {
            return f.write_str(RECURSION_MARKER);
        };
        f.debug_map().entries(self.items()).finish()
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(_visit) = Visit::enter(self) else {
            return f.write_str(RECURSION_MARKER);
        };
        f.write_str("{")?;
        for (index, (key, value)) in self.items().iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<Key>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

// Entries are written as `[key, value]` pairs so non-string keys survive
// formats whose maps only accept string keys.
impl Serialize for Mapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Some(_visit) = Visit::enter(self) else {
            return Err(S::Error::custom("mapping contains itself"));
        };
        serializer.collect_seq(self.items())
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<(Key, Value)>::deserialize(deserializer).map(Self::from_pairs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_storage() {
        let original = Mapping::from_pairs([("foo", "bar")]);
        let alias = original.clone();
        alias.insert("lorem", "ipsum");
        assert!(original.contains_key(&Key::from("lorem")));
        assert!(original.ptr_eq(&alias));
    }

    #[test]
    fn deep_copy_detaches_nested_mappings() {
        let inner = Mapping::from_pairs([("bar", "baz")]);
        let outer = Mapping::from_pairs([("foo", Value::Map(inner.clone()))]);
        let copy = outer.deep_copy();
        let Some(Value::Map(copied_inner)) = copy.get(&Key::from("foo")) else {
            panic!("expected nested mapping");
        };
        copied_inner.insert("lorem", "ipsum");
        assert_eq!(inner.len(), 1);
        assert_ne!(outer, copy);
    }

    #[test]
    fn self_containing_mappings_print_a_marker() {
        let mapping = Mapping::from_pairs([("a", 1)]);
        mapping.insert("me", mapping.clone());
        assert_eq!(mapping.to_string(), "{\"a\": 1, \"me\": {...}}");
        assert_eq!(format!("{mapping:?}"), "{Str(\"a\"): Int(1), Str(\"me\"): Map({...})}");
        assert!(serde_json::to_string(&mapping).is_err());
        mapping.clear();
    }

    #[test]
    fn deep_copy_keeps_shared_stores_shared() {
        let inner = Mapping::from_pairs([("x", 1)]);
        let outer = Mapping::from_pairs([("left", inner.clone()), ("right", inner)]);
        let copy = outer.deep_copy();
        let (Some(Value::Map(left)), Some(Value::Map(right))) =
            (copy.get(&Key::from("left")), copy.get(&Key::from("right")))
        else {
            panic!("expected nested mappings");
        };
        assert!(left.ptr_eq(&right));
    }

    #[test]
    fn remove_preserves_order() {
        let mapping = Mapping::from_pairs([("a", 1), ("b", 2), ("c", 3)]);
        mapping.remove(&Key::from("b"));
        assert_eq!(mapping.keys(), vec![Key::from("a"), Key::from("c")]);
        assert_eq!(mapping.pop_last(), Some((Key::from("c"), Value::Int(3))));
    }

    #[test]
    fn later_pairs_overwrite_earlier_ones() {
        let mapping = Mapping::from_pairs([("alpha", "bravo"), ("alpha", "beta")]);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get(&Key::from("alpha")), Some(Value::from("beta")));
    }
}
