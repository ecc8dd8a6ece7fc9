//! Integration Tests for configuration loading
//!
//! Config files on disk drive the copy behavior and the initial document.

use std::fs;
use std::time::Duration;

use chromatext::config::loader::{ConfigLoader, LoadOptions};
use chromatext::{init_with_config, Config, Error};
use tempfile::TempDir;

#[test]
fn test_toml_config_overrides_copy_settings() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        r#"
[copy]
fence_language = "ansi"
status_duration_ms = 750
success_label = "Done!"

[editor]
initial_markup = 'Hi <span class="ansi-32">there</span>'
"#,
    )
    .unwrap();

    let mut loader = ConfigLoader::with_search_paths(vec![dir.path().join("config")]);
    let config = loader.load_with_options(LoadOptions::default()).unwrap();

    assert_eq!(config.copy.status_duration(), Duration::from_millis(750));
    assert_eq!(config.copy.labels().success, "Done!");
    assert_eq!(config.copy.labels().failure, "Failed to copy!");
    let doc = config.editor.initial_document().unwrap();
    assert_eq!(doc.plain_text(), "Hi there");
    assert!(doc.is_styled());
}

#[test]
fn test_search_path_priority() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    fs::write(second.path().join("config.toml"), "[ui]\nfont_size = 18.0\n").unwrap();

    let mut loader = ConfigLoader::with_search_paths(vec![
        first.path().join("config"),
        second.path().join("config"),
    ]);
    let config = loader.load_with_options(LoadOptions::default()).unwrap();
    assert_eq!(config.ui.font_size, 18.0);

    fs::write(first.path().join("config.json"), r#"{"ui": {"font_size": 12.0}}"#).unwrap();
    let config = loader.load_with_options(LoadOptions::default()).unwrap();
    assert_eq!(config.ui.font_size, 12.0);
    assert_eq!(
        loader.current_path(),
        Some(first.path().join("config.json").as_path())
    );
}

#[test]
fn test_invalid_values_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[copy]\nstatus_duration_ms = 5\n").unwrap();

    assert!(matches!(
        ConfigLoader::load_from_path(&path),
        Err(Error::ConfigValidationFailed { .. })
    ));

    let mut loader = ConfigLoader::with_search_paths(vec![dir.path().join("config")]);
    assert!(loader.load_with_options(LoadOptions::default()).is_err());

    let relaxed = loader
        .load_with_options(LoadOptions {
            create_default: true,
            validate: false,
        })
        .unwrap();
    assert_eq!(relaxed.copy.status_duration_ms, 5);
}

#[test]
fn test_broken_markup_in_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[editor]\ninitial_markup = \"<span class=\\\"ansi-31\\\">x\"\n").unwrap();

    let result = init_with_config(&path);
    assert!(matches!(
        result,
        Err(Error::ConfigValidationFailed { field, .. }) if field == "editor.initial_markup"
    ));
}

#[test]
fn test_parse_errors_name_the_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        ConfigLoader::load_from_path(&path),
        Err(Error::ConfigParseFailed { format, .. }) if format == "JSON"
    ));
}

#[test]
fn test_saved_config_is_found_again() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.ui.window_width = 900.0;
    config.copy.idle_label = "Copy".to_string();

    let path = dir.path().join("config.toml");
    assert_eq!(ConfigLoader::write_config(&config, Some(&path), false).unwrap(), path);

    let mut loader = ConfigLoader::with_search_paths(vec![dir.path().join("config")]);
    let loaded = loader.load_with_options(LoadOptions::default()).unwrap();
    assert_eq!(loaded, config);
    assert!(ConfigLoader::write_config(&loaded, Some(&path), false).is_err());
}
