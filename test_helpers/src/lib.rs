//! Test helpers shared across crates.
//!
//! This crate currently provides scratch directories for configuration
//! files.

pub mod config_dir;

pub use config_dir::ConfigDir;
