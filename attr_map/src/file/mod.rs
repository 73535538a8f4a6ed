//! Loading configuration files into attribute mappings.
//!
//! This is the only part of the crate that touches the filesystem. Each
//! file is decoded into a plain mapping and the results are folded together
//! with [`crate::merge_mappings`], so later files win.

mod error;
mod loader;
mod options;
mod parser;
#[cfg(feature = "yaml")]
mod yaml;

pub use loader::{FileLayer, load, load_layers};
pub use options::{Decoder, Format, LoadOptions};

#[cfg(test)]
mod tests;
