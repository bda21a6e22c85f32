//! kognit-session
//!
//! Drives one assessment run: plans the step list from the subject profile,
//! owns the active subtest runner and the raw score store, and derives the
//! normalized view and export on demand.

pub mod config;
pub mod error;
pub mod sequencer;
pub mod session;
pub mod store;

pub use session::{AssessmentView, Session};
