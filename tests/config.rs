use confirm_modal::config::Config;
use confirm_modal::options::Focus;
use std::path::PathBuf;

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("confirm-modal-test-{}", uuid::Uuid::new_v4().simple()))
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.defaults.title, "Are you sure?");
    assert_eq!(config.defaults.z_index, 1050);
    assert_eq!(config.defaults.focus, Focus::Commit);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    config.defaults.elements.clear();
    assert!(config.validate().is_err());

    config.defaults.elements = vec!["a[data-confirm".to_string()];
    assert!(config.validate().is_err());

    config = Config::default();
    config.defaults.commit = "  ".to_string();
    assert!(config.validate().is_err());

    config = Config::default();
    config.defaults.z_index = -1;
    assert!(config.validate().is_err());

    config = Config::default();
    config.logging.level = "verbose".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("[defaults]"));
    assert!(toml_str.contains("z_index = 1050"));
    assert!(toml_str.contains("focus = \"commit\""));
    assert!(!toml_str.contains("modal_class"));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[defaults]
commit = "Delete"
focus = "cancel"
modal_class = "modal-sm"

[logging]
level = "debug"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.defaults.commit, "Delete");
    assert_eq!(config.defaults.focus, Focus::Cancel);
    assert_eq!(config.defaults.modal_class.as_deref(), Some("modal-sm"));
    assert_eq!(config.logging.level_filter().unwrap(), log::LevelFilter::Debug);

    // Unspecified values use defaults
    assert_eq!(config.defaults.cancel, "Cancel");
    assert_eq!(config.defaults.elements.len(), 3);
    assert!(!config.logging.enabled);
}

#[test]
fn test_unknown_keys_are_kept() {
    let config: Config = toml::from_str("[defaults]\nanimation_ms = 300\n").unwrap();
    assert_eq!(config.defaults.extra.get("animation_ms"), Some(&serde_json::json!(300)));
}

#[test]
fn test_generate_and_load_default_config() {
    let dir = scratch_dir();
    let path = dir.join("nested").join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# confirm-modal configuration file"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.defaults, Config::default().defaults);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_load_from_file_errors() {
    let dir = scratch_dir();
    std::fs::create_dir_all(&dir).unwrap();

    let missing = Config::load_from_file(dir.join("missing.toml")).unwrap_err();
    assert!(missing.to_string().contains("Failed to read config file"));

    let invalid = dir.join("invalid.toml");
    std::fs::write(&invalid, "[defaults]\nz_index = -5\n").unwrap();
    let err = Config::load_from_file(&invalid).unwrap_err();
    assert!(err.to_string().contains("z_index"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_default_config_path() {
    if let Ok(path) = Config::get_default_config_path() {
        assert!(path.ends_with("confirm-modal/config.toml"));
    }
}
