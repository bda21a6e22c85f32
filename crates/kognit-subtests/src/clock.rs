//! Time as seen by runners.
//!
//! Runners never read a clock themselves; every call receives a `now` from
//! whoever drives the session.

/// Milliseconds since an arbitrary, fixed origin.
pub type Millis = u64;
