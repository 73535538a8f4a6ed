//! Bookkeeping for mappings that contain themselves.
//!
//! A [`Mapping`] is a shared handle, so a mapping can be stored inside
//! itself. Every recursive walk goes through one of the helpers here: the
//! explicit memos for copying and comparing, or [`Visit`] for trait impls
//! whose signatures cannot carry extra state.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::{Mapping, Value};

thread_local! {
    static ACTIVE: RefCell<Vec<*const ()>> = const { RefCell::new(Vec::new()) };
}

/// Placeholder written where a walk re-enters a mapping it is already inside.
pub(crate) const RECURSION_MARKER: &str = "{...}";

/// Marks a mapping as being walked on this thread until dropped.
pub(crate) struct Visit(*const ());

impl Visit {
    /// Enter `mapping`, or `None` when the current walk is already inside it.
    pub(crate) fn enter(mapping: &Mapping) -> Option<Self> {
        let addr = mapping.addr();
        ACTIVE.with_borrow_mut(|active| {
            if active.contains(&addr) {
                None
            } else {
                active.push(addr);
                Some(Self(addr))
            }
        })
    }
}

impl Drop for Visit {
    fn drop(&mut self) {
        ACTIVE.with_borrow_mut(|active| {
            if let Some(pos) = active.iter().rposition(|addr| *addr == self.0) {
                active.remove(pos);
            }
        });
    }
}

/// Stores already copied during one deep copy, keyed by source address.
pub(crate) type CopyMemo = HashMap<*const (), Mapping>;

pub(crate) fn copy_mapping(mapping: &Mapping, memo: &mut CopyMemo) -> Mapping {
    if let Some(copy) = memo.get(&mapping.addr()) {
        return copy.clone();
    }
    let copy = Mapping::new();
    memo.insert(mapping.addr(), copy.clone());
    for (key, value) in mapping.items() {
        let copied = copy_value(&value, memo);
        copy.insert(key, copied);
    }
    copy
}

pub(crate) fn copy_value(value: &Value, memo: &mut CopyMemo) -> Value {
    match value {
        Value::Map(mapping) => Value::Map(copy_mapping(mapping, memo)),
        Value::List(items) => Value::List(copy_items(items, memo)),
        Value::Tuple(items) => Value::Tuple(copy_items(items, memo)),
        other => other.clone(),
    }
}

fn copy_items(items: &[Value], memo: &mut CopyMemo) -> Vec<Value> {
    items.iter().map(|item| copy_value(item, memo)).collect()
}

/// Pairs of stores currently being compared. A pair met again is assumed
/// equal; any real difference is found elsewhere in the walk.
pub(crate) type EqMemo = Vec<(*const (), *const ())>;

pub(crate) fn mappings_eq(left: &Mapping, right: &Mapping, memo: &mut EqMemo) -> bool {
    if left.ptr_eq(right) {
        return true;
    }
    let pair = (left.addr(), right.addr());
    if memo.contains(&pair) {
        return true;
    }
    if left.len() != right.len() {
        return false;
    }
    memo.push(pair);
    let equal = left.items().into_iter().all(|(key, value)| {
        right
            .get(&key)
            .is_some_and(|other| values_eq(&value, &other, memo))
    });
    memo.pop();
    equal
}

pub(crate) fn values_eq(left: &Value, right: &Value, memo: &mut EqMemo) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => a.partial_cmp(b) == Some(Ordering::Equal),
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Bytes(a), Value::Bytes(b)) => a == b,
        (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| values_eq(x, y, memo))
        }
        (Value::Map(a), Value::Map(b)) => mappings_eq(a, b, memo),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Key;

    fn self_containing() -> Mapping {
        let mapping = Mapping::from_pairs([("name", "loop")]);
        mapping.insert("me", mapping.clone());
        mapping
    }

    #[test]
    fn visits_nest_and_unwind() {
        let mapping = Mapping::new();
        {
            let outer = Visit::enter(&mapping);
            assert!(outer.is_some());
            assert!(Visit::enter(&mapping).is_none());
        }
        assert!(Visit::enter(&mapping).is_some());
    }

    #[test]
    fn copies_keep_the_cycle_shape() {
        let original = self_containing();
        let copy = copy_mapping(&original, &mut CopyMemo::new());
        assert!(!copy.ptr_eq(&original));
        let Some(Value::Map(inner)) = copy.get(&Key::from("me")) else {
            panic!("expected the copied self reference");
        };
        assert!(inner.ptr_eq(&copy));
        original.clear();
        copy.clear();
    }

    #[test]
    fn distinct_cycles_compare_equal() {
        let left = self_containing();
        let right = self_containing();
        assert!(mappings_eq(&left, &right, &mut EqMemo::new()));
        right.insert("name", "other");
        assert!(!mappings_eq(&left, &right, &mut EqMemo::new()));
        left.clear();
        right.clear();
    }
}
