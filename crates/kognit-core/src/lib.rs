//! kognit-core
//!
//! Pure domain types and export naming conventions. No scoring logic lives
//! here; this is the shared vocabulary of the kognit workspace.

pub mod error;
pub mod export_keys;
pub mod models;
