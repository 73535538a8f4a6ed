//! Mappings with attribute-style access.
//!
//! This crate wraps an insertion-ordered [`Mapping`] so its values can be
//! reached three ways: as raw items ([`AttrMapping::item`]), through
//! callable access for any key ([`AttrMapping::call`]), and as attributes
//! for identifier-shaped keys ([`AttrMapping::attr`]). Attribute and
//! callable reads wrap nested mappings in the same wrapper type and rebuild
//! nested sequences, so deep configuration trees can be walked with chained
//! calls while the data itself stays a plain mapping.
//!
//! Four wrappers are provided: [`Attr`] (read-only), [`AttrMap`],
//! [`AttrDict`] and [`AttrDefault`] (filling in missing keys from a
//! [`DefaultFactory`]). Mappings merge recursively with [`merge`] or `+`,
//! and [`load`] reads JSON, TOML, YAML or JSON5 files into an [`AttrDict`].
//!
//! ```
//! use attr_map::{AttrDict, AttrMapping, MutableAttrMapping, Value};
//! use serde_json::json;
//!
//! let mut config = AttrDict::try_from(json!({"server": {"host": "localhost"}}))?;
//! config.set_attr("debug", true)?;
//! let overrides = AttrDict::try_from(json!({"server": {"port": 8080}}))?;
//!
//! let merged = &config + &overrides;
//! assert_eq!(merged.attr("server")?.attr("host")?, "localhost");
//! assert_eq!(merged.attr("server")?.attr("port")?, Value::Int(8080));
//! # Ok::<_, attr_map::AttrError>(())
//! ```
//!
//! Wrappers share storage rather than copying it and provide no locking;
//! they are neither `Send` nor `Sync`.

mod attr;
mod config;
mod error;
mod factory;
mod file;
mod merge;
mod mutable;
mod result_ext;
mod state;
mod value;
mod wrappers;

pub use attr::{AttrMapping, BASE_RESERVED_NAMES, Node, Slots, is_attribute_safe};
pub use config::WrapConfig;
pub use error::{AttrError, AttrResult};
pub use factory::DefaultFactory;
pub use file::{Decoder, FileLayer, Format, LoadOptions, load, load_layers};
pub use merge::{AsMapping, merge, merge_all, merge_mappings};
pub use mutable::{MUTABLE_RESERVED_NAMES, MutableAttrMapping};
pub use result_ext::AttrResultExt;
pub use state::WrapperState;
pub use value::{Key, Mapping, SequenceKind, Value};
pub use wrappers::{Attr, AttrDefault, AttrDict, AttrMap};

/// Re-export of `serde_json` so callers can build values for
/// [`AttrDict::try_from`] and decoders without a separate dependency.
pub use serde_json;
