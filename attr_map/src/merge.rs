//! Recursive, right-biased merging of mappings.

use std::collections::HashMap;

use tracing::debug;

use crate::{AttrDict, Mapping, Value, WrapConfig};

/// Anything that is mapping-shaped.
///
/// Implemented by [`Mapping`] and by every wrapper type, so merges and `+`
/// accept either interchangeably.
pub trait AsMapping {
    /// The backing mapping.
    fn as_mapping(&self) -> &Mapping;

    /// The wrapper configuration, when this is a wrapper.
    fn wrap_config(&self) -> Option<&WrapConfig> {
        None
    }
}

impl AsMapping for Mapping {
    fn as_mapping(&self) -> &Mapping {
        self
    }
}

/// Merge `right` over `left` into a new mapping.
///
/// Behaviour:
/// - Keys present on one side only are copied as-is. Nested mappings copied
///   this way keep sharing storage with their source.
/// - Keys present on both sides merge recursively when both values are
///   mappings.
/// - Otherwise the right-hand value wins, whatever its type.
///
/// Neither input is modified. The result lists `left`'s keys first, then the
/// keys only `right` has; callers should not rely on that order.
///
/// # Examples
///
/// ```rust
/// use attr_map::{Mapping, merge_mappings};
/// use serde_json::json;
///
/// let left = Mapping::try_from(json!({"a": {"x": 1, "y": 2}}))?;
/// let right = Mapping::try_from(json!({"a": {"y": 3, "z": 4}}))?;
/// let merged = merge_mappings(&left, &right);
/// assert_eq!(merged.to_json(), json!({"a": {"x": 1, "y": 3, "z": 4}}));
/// # Ok::<_, attr_map::AttrError>(())
/// ```
#[must_use]
pub fn merge_mappings(left: &Mapping, right: &Mapping) -> Mapping {
    merge_tracked(left, right, &mut HashMap::new())
}

/// Results keyed by the pair of stores they merge, so a pair reached again
/// through a self-containing mapping reuses the result being built.
type MergeMemo = HashMap<(*const (), *const ()), Mapping>;

fn merge_tracked(left: &Mapping, right: &Mapping, memo: &mut MergeMemo) -> Mapping {
    let pair = (left.addr(), right.addr());
    if let Some(merged) = memo.get(&pair) {
        return merged.clone();
    }
    let merged = Mapping::new();
    memo.insert(pair, merged.clone());

    for (key, left_value) in left.items() {
        let value = match (left_value, right.get(&key)) {
            (Value::Map(left_map), Some(Value::Map(right_map))) => {
                Value::Map(merge_tracked(&left_map, &right_map, memo))
            }
            (_, Some(right_value)) => right_value,
            (left_value, None) => left_value,
        };
        merged.insert(key, value);
    }

    for (key, right_value) in right.items() {
        if !left.contains_key(&key) {
            merged.insert(key, right_value);
        }
    }

    merged
}

/// Merge two mapping-shaped values into a new [`AttrDict`].
///
/// Not commutative: on conflicting non-mapping values the right-hand side
/// wins. See [`merge_mappings`] for the full rules.
///
/// # Examples
///
/// ```rust
/// use attr_map::{AttrDict, AttrMapping, merge};
/// use serde_json::json;
///
/// let left = AttrDict::try_from(json!({"a": {"x": 1}}))?;
/// let right = AttrDict::try_from(json!({"a": {"y": 2, "x": 9}}))?;
/// assert_eq!(merge(&left, &right).attr("a")?.attr("x")?, attr_map::Value::Int(9));
/// assert_eq!(merge(&right, &left).attr("a")?.attr("x")?, attr_map::Value::Int(1));
/// # Ok::<_, attr_map::AttrError>(())
/// ```
#[must_use]
pub fn merge<L, R>(left: &L, right: &R) -> AttrDict
where
    L: AsMapping + ?Sized,
    R: AsMapping + ?Sized,
{
    AttrDict::new(merge_mappings(left.as_mapping(), right.as_mapping()))
}

/// Fold `mappings` together left to right with [`merge_mappings`].
///
/// An empty input yields an empty [`AttrDict`].
#[must_use]
pub fn merge_all<I, M>(mappings: I) -> AttrDict
where
    I: IntoIterator<Item = M>,
    M: AsMapping,
{
    let merged = mappings.into_iter().fold(Mapping::new(), |acc, next| {
        merge_mappings(&acc, next.as_mapping())
    });
    debug!(keys = merged.len(), "merged mappings");
    AttrDict::new(merged)
}
