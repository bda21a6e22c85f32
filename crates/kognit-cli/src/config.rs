use std::path::{Path, PathBuf};

use kognit_core::export_keys::{CONFIG_DIR, CONFIG_FILE};
use kognit_session::config::AdministrationTable;
use kognit_session::session::DEFAULT_BATTERY;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KognitConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Normative battery used for scoring.
    #[serde(default = "default_battery")]
    pub battery: String,
    /// Fixed seed for reproducible stimulus generation.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Where exports go when `--out` is not given.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
    #[serde(default)]
    pub administration: AdministrationTable,
}

fn default_battery() -> String {
    DEFAULT_BATTERY.to_string()
}

impl Default for KognitConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            battery: default_battery(),
            seed: None,
            export_dir: None,
            administration: AdministrationTable::default(),
        }
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config at `path`, or the built-in defaults when there is none.
pub fn load_or_default(path: &Path) -> eyre::Result<KognitConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(KognitConfig::default());
    }
    load_config(path)
}

pub fn load_config(path: &Path) -> eyre::Result<KognitConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: KognitConfig = serde_json::from_value(migrated)?;
    config.administration.validate()?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update kognit."
        ));
    }

    // v0 → v1: first versioned format, nothing to rewrite
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(path: &Path, config: &KognitConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
