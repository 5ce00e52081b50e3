use par_shot_config::{Config, ConfigError, LogLevel};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert!(config.include_gutter);
    assert!(config.clipboard);
    assert!(config.save);
    assert!(config.trim_indent);
    assert!(config.diff_divider_overlay);
    assert_eq!(config.selection_padding, 24);
    assert_eq!(config.default_tab_size, 4);
    assert_eq!(config.output_dir, "~/Downloads/screenshot");
    assert_eq!(config.file_timestamp_format, "%Y%m%d%H%M%S");
    assert_eq!(config.log_level, LogLevel::Off);
}

#[test]
fn test_config_builders() {
    let config = Config::new()
        .with_include_gutter(false)
        .with_clipboard(false)
        .with_output_dir("/tmp/shots")
        .with_selection_padding(8);
    assert!(!config.include_gutter);
    assert!(!config.clipboard);
    assert!(config.save);
    assert_eq!(config.output_dir, "/tmp/shots");
    assert_eq!(config.selection_padding, 8);
}

#[test]
fn test_delivery_enabled_needs_one_destination() {
    assert!(Config::default().is_delivery_enabled());
    assert!(Config::default().with_save(false).is_delivery_enabled());
    assert!(Config::default().with_clipboard(false).is_delivery_enabled());
    assert!(
        !Config::default()
            .with_clipboard(false)
            .with_save(false)
            .is_delivery_enabled()
    );
}

#[test]
fn test_config_yaml_partial_deserialization() {
    let yaml = r#"
include_gutter: false
selection_padding: 10
log_level: debug
diff_colors:
  inserted: [1, 2, 3]
"#;
    let config: Config = serde_yaml_ng::from_str(yaml).unwrap();
    assert!(!config.include_gutter);
    assert_eq!(config.selection_padding, 10);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.diff_colors.inserted, [1, 2, 3]);
    // Unspecified fields keep their defaults
    assert!(config.clipboard);
    assert_eq!(
        config.diff_colors.deleted,
        par_shot_config::defaults::diff_deleted_color()
    );
}

#[test]
fn test_save_and_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("config.yaml");

    let config = Config::default()
        .with_save(false)
        .with_output_dir("/tmp/elsewhere")
        .with_log_level(LogLevel::Info);
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert!(!path.with_extension("yaml.tmp").exists());

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_from_normalizes_blank_output_dir() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "output_dir: \"\"\n").unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.output_dir, "~/Downloads/screenshot");
}

#[test]
fn test_load_from_reports_parse_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "selection_padding: [not, a, number]\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_from_reports_validation_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yaml");
    fs::write(&path, "default_tab_size: 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(_))
    ));
}

#[test]
fn test_load_from_missing_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = Config::load_from(&temp_dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Io(_))
    ));
}

#[test]
fn test_resolved_output_dir_expands_home() {
    let config = Config::default();
    if let Some(home) = dirs::home_dir() {
        assert_eq!(
            config.resolved_output_dir(),
            home.join("Downloads").join("screenshot")
        );
    }
}

#[test]
fn test_resolved_output_dir_blank_falls_back_to_default() {
    let config = Config::default().with_output_dir("  ");
    assert_eq!(
        config.resolved_output_dir(),
        Config::default().resolved_output_dir()
    );
}

#[test]
fn test_config_path_layout() {
    let path = Config::config_path();
    assert!(path.ends_with("config.yaml"));
    assert_eq!(path.parent(), Some(Config::config_dir().as_path()));
}
