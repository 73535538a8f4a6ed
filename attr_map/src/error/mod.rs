//! Error types produced by wrappers, merges and the file loader.

mod constructors;
mod conversions;
mod types;

pub use types::{AttrError, AttrResult};
