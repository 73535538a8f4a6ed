//! Storage shared by every wrapper type.

use indexmap::IndexMap;

use crate::{Mapping, Value, WrapConfig};

/// Real attributes stored outside the backing mapping.
///
/// Only populated when a mutable wrapper opts in through
/// [`crate::MutableAttrMapping::set_allow_invalid_attributes`]; never
/// mirrored into the backing mapping and never compared for equality.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PrivateAttributes {
    pub(crate) allow_invalid: bool,
    pub(crate) values: IndexMap<String, Value>,
}

/// The state behind a wrapper: its backing mapping, its configuration and
/// any private attributes.
///
/// Implementors of [`crate::AttrMapping`] hold one of these and hand it out
/// through [`crate::AttrMapping::slots`]. Cloning `Slots` shares the backing
/// mapping.
#[derive(Debug, Clone, Default)]
pub struct Slots {
    mapping: Mapping,
    config: WrapConfig,
    private: PrivateAttributes,
}

impl Slots {
    /// Slots over `mapping` with `config` and no private attributes.
    #[must_use]
    pub fn new(mapping: Mapping, config: WrapConfig) -> Self {
        Self {
            mapping,
            config,
            private: PrivateAttributes::default(),
        }
    }

    /// The backing mapping.
    #[must_use]
    pub const fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// The wrapper configuration.
    #[must_use]
    pub const fn config(&self) -> &WrapConfig {
        &self.config
    }

    pub(crate) const fn config_mut(&mut self) -> &mut WrapConfig {
        &mut self.config
    }

    pub(crate) const fn private(&self) -> &PrivateAttributes {
        &self.private
    }

    pub(crate) const fn private_mut(&mut self) -> &mut PrivateAttributes {
        &mut self.private
    }

    /// Same configuration and private attributes over a different mapping.
    pub(crate) fn with_mapping(&self, mapping: Mapping) -> Self {
        Self {
            mapping,
            config: self.config.clone(),
            private: self.private.clone(),
        }
    }
}
