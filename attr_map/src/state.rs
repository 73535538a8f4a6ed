//! Serialisable snapshots of wrappers.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::attr::slots::PrivateAttributes;
use crate::{DefaultFactory, Key, Mapping, SequenceKind, Slots, Value, WrapConfig};

/// Everything needed to rebuild a wrapper: its data and its configuration.
///
/// Items are kept as ordered `[key, value]` pairs so non-string keys
/// survive formats such as JSON, and values use a tagged encoding so lists,
/// tuples and byte strings come back as what they were. Private attributes
/// are carried too.
///
/// A wrapper whose default factory is a callback cannot be serialised.
///
/// # Examples
///
/// ```
/// use attr_map::{AttrDict, AttrMapping, SequenceKind, WrapConfig};
///
/// let dict = AttrDict::from_pairs([("a", 1)])
///     .with_config(WrapConfig::new().with_sequence_type(Some(SequenceKind::List)));
/// let text = serde_json::to_string(&dict.state())?;
/// let back = AttrDict::from_state(serde_json::from_str(&text)?);
/// assert_eq!(back, dict);
/// assert_eq!(back.sequence_type(), Some(SequenceKind::List));
/// # Ok::<_, serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrapperState {
    /// The entries, in order.
    pub items: Vec<(Key, Value)>,
    /// Container sequences are rebuilt into.
    pub sequence_type: Option<SequenceKind>,
    /// Factory for missing keys.
    #[serde(default)]
    pub default_factory: Option<DefaultFactory>,
    /// Whether the factory receives the missing key.
    #[serde(default)]
    pub pass_key: bool,
    /// Whether attribute-unsafe names may be stored as private attributes.
    #[serde(default)]
    pub allow_invalid_attributes: bool,
    /// Private attributes, by name.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub private_attributes: IndexMap<String, Value>,
}

impl WrapperState {
    /// Snapshot `slots`. The items share nested storage with the wrapper
    /// until the state is serialised.
    pub(crate) fn capture(slots: &Slots) -> Self {
        let config = slots.config();
        let private = slots.private();
        Self {
            items: slots.mapping().items(),
            sequence_type: config.sequence_type,
            default_factory: config.default_factory.clone(),
            pass_key: config.pass_key,
            allow_invalid_attributes: private.allow_invalid,
            private_attributes: private.values.clone(),
        }
    }

    /// Turn the snapshot back into wrapper state over a fresh mapping.
    pub(crate) fn into_slots(self) -> Slots {
        let config = WrapConfig {
            sequence_type: self.sequence_type,
            default_factory: self.default_factory,
            pass_key: self.pass_key,
        };
        let mut slots = Slots::new(Mapping::from_pairs(self.items), config);
        *slots.private_mut() = PrivateAttributes {
            allow_invalid: self.allow_invalid_attributes,
            values: self.private_attributes,
        };
        slots
    }
}
