use kognit_cli::config::{KognitConfig, load_config, load_or_default, save_config};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_or_default(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, KognitConfig::default());
    assert_eq!(config.battery, "standard");
}

#[test]
fn save_then_load_keeps_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kognit").join("config.json");

    let mut config = KognitConfig::default();
    config.seed = Some(99);
    config.administration.adult.tapping_seconds = 15;
    save_config(&path, &config).unwrap();

    assert!(!path.with_extension("json.tmp").exists());
    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn pre_versioned_config_is_migrated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "seed": 7 }"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.battery, "standard");
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.administration, KognitConfig::default().administration);
}

#[test]
fn newer_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "config_version": 99, "battery": "standard" }"#).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "[1, 2]").unwrap();
    assert!(load_config(&path).is_err());
}

#[test]
fn oversized_grid_in_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut config = serde_json::to_value(KognitConfig::default()).unwrap();
    config["administration"]["senior"]["search_grid"] = 70_000.into();
    std::fs::write(&path, config.to_string()).unwrap();

    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("search_grid"));
}
