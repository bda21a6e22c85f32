//! kognit-cli
//!
//! Library half of the `kognit` binary: persisted configuration and the
//! file formats the commands read.

pub mod config;
pub mod script;
