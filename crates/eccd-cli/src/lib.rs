//! eccd-cli library root.
//!
//! Exposes the config, input and output modules so integration tests can
//! exercise them without going through the binary.

pub mod config;
pub mod input;
pub mod output;
