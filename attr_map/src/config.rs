//! Per-wrapper configuration propagated to every nested wrapper.

use crate::{DefaultFactory, SequenceKind};

/// Configuration carried by a wrapper and handed down to the wrappers it
/// builds for nested mappings.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapConfig {
    /// Container that sequences are rebuilt into on attribute-style reads.
    /// `None` leaves sequences untouched.
    pub sequence_type: Option<SequenceKind>,
    /// Factory consulted when a missing key is read.
    pub default_factory: Option<DefaultFactory>,
    /// Whether the factory receives the missing key.
    pub pass_key: bool,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            sequence_type: Some(SequenceKind::Tuple),
            default_factory: None,
            pass_key: false,
        }
    }
}

impl WrapConfig {
    /// The default configuration: tuples for sequences, no factory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the sequence container.
    #[must_use]
    pub fn with_sequence_type(mut self, sequence_type: Option<SequenceKind>) -> Self {
        self.sequence_type = sequence_type;
        self
    }

    /// Replace the default factory.
    #[must_use]
    pub fn with_default_factory(mut self, factory: Option<DefaultFactory>) -> Self {
        self.default_factory = factory;
        self
    }

    /// Set whether the factory receives the missing key.
    #[must_use]
    pub fn with_pass_key(mut self, pass_key: bool) -> Self {
        self.pass_key = pass_key;
        self
    }
}
