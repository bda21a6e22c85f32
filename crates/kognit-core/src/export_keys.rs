//! File naming conventions for exported assessments.
//!
//! Pure string functions. The presentation layer decides where the file
//! ends up; these only define what it is called.

use jiff::Timestamp;

pub const EXPORT_PREFIX: &str = "assessment_";

pub const EXPORT_EXTENSION: &str = "json";

/// `assessment_<unix-millis>.json`
pub fn assessment_export(generated_at: Timestamp) -> String {
    format!(
        "{EXPORT_PREFIX}{}.{EXPORT_EXTENSION}",
        generated_at.as_millisecond()
    )
}

pub const CONFIG_FILE: &str = "config.json";

pub const CONFIG_DIR: &str = "kognit";
