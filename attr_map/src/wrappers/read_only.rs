//! The read-only wrapper.

use std::fmt;

use crate::{AttrMapping, BASE_RESERVED_NAMES, Mapping, SequenceKind, Slots, WrapConfig};

/// A read-only attribute mapping.
///
/// `Attr` has no mutation API at all, so attempts to assign or delete
/// through it are rejected at compile time. It is still a view: writes made
/// to the backing mapping by its owner show up through the wrapper.
/// Merging with [`AttrMapping::merged`] or `+` produces a new `Attr`.
///
/// # Examples
///
/// ```
/// use attr_map::{Attr, AttrMapping, Mapping, Node, SequenceKind, Value};
///
/// let backing = Mapping::from_pairs([("items", Value::list([Value::map([("id", 1)])]))]);
/// let attr = Attr::new(backing.clone()).with_sequence_type(Some(SequenceKind::List));
/// let items = attr.attr("items")?;
/// let first = items.index(0).and_then(Node::as_map);
/// assert_eq!(first.map(|item| item.item("id")).transpose()?, Some(Value::Int(1)));
///
/// backing.insert("late", true);
/// assert_eq!(attr.item("late")?, Value::Bool(true));
/// # Ok::<_, attr_map::AttrError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Attr {
    slots: Slots,
}

impl Attr {
    /// Wrap `mapping` without copying it. Sequences are rebuilt into tuples.
    #[must_use]
    pub fn new(mapping: Mapping) -> Self {
        Self::from(mapping)
    }

    /// Replace the container sequences are rebuilt into.
    #[must_use]
    pub fn with_sequence_type(self, sequence_type: Option<SequenceKind>) -> Self {
        let config = WrapConfig::new().with_sequence_type(sequence_type);
        Self::construct(self.slots.mapping().clone(), config)
    }
}

impl AttrMapping for Attr {
    const TYPE_NAME: &'static str = "Attr";
    const RESERVED_NAMES: &'static [&'static [&'static str]] =
        &[BASE_RESERVED_NAMES, &["new", "with_sequence_type"]];

    fn slots(&self) -> &Slots {
        &self.slots
    }

    fn from_slots(slots: Slots) -> Self {
        Self { slots }
    }
}

wrapper_common!(Attr);

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}", self.slots.mapping())
    }
}
