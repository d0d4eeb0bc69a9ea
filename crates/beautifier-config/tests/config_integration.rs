use beautifier_config::{AppConfig, HexColor};

#[test]
fn test_load_creates_default_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beautifier.json");
    assert!(!path.exists());

    let config = AppConfig::load_or_create(&path);
    assert!(path.exists());
    assert_eq!(config.default_padding, 60);

    // File should contain valid JSON
    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert!(parsed.is_object());
}

#[test]
fn test_load_existing_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beautifier.json");
    let json = r#"{
        "default_padding": 24,
        "default_aspect_ratio": "16/9",
        "default_language": "python",
        "reveal_after_export": true
    }"#;
    std::fs::write(&path, json).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.default_padding, 24);
    assert_eq!(config.default_aspect_ratio, "16/9");
    assert_eq!(config.default_language, "python");
    assert!(config.reveal_after_export);
}

#[test]
fn test_broken_json_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beautifier.json");
    std::fs::write(&path, "{ this is not valid json }}}").unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.default_padding, 60);
    assert_eq!(config.default_language, "javascript");

    // Broken file is left untouched
    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "{ this is not valid json }}}");
}

#[test]
fn test_custom_token_color_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beautifier.json");
    let json = r##"{
        "snippet_theme": {
            "tokens": {
                "string": { "color": "#00FF00", "italic": true }
            }
        }
    }"##;
    std::fs::write(&path, json).unwrap();

    let config = AppConfig::load_or_create(&path);
    let string = config.snippet_theme.tokens.string;
    assert_eq!(string.color, HexColor::rgb(0, 255, 0));
    assert!(string.italic);
    assert!(!string.bold);
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beautifier.json");

    let config = AppConfig {
        default_shadow: 0,
        default_background: "linear-gradient(45deg, #000000 0%, #ffffff 100%)".to_string(),
        export_folder: "/tmp/exports".to_string(),
        ..Default::default()
    };
    config.save(&path).unwrap();

    let loaded = AppConfig::load_or_create(&path);
    assert_eq!(loaded.default_shadow, 0);
    assert_eq!(
        loaded.default_background,
        "linear-gradient(45deg, #000000 0%, #ffffff 100%)"
    );
    assert_eq!(loaded.export_folder, "/tmp/exports");
}

#[test]
fn test_sanitize_runs_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("beautifier.json");
    let json = r#"{
        "default_padding": 9000,
        "default_rounding": 80,
        "default_aspect_ratio": "bogus"
    }"#;
    std::fs::write(&path, json).unwrap();

    let config = AppConfig::load_or_create(&path);
    assert_eq!(config.default_padding, 150);
    assert_eq!(config.default_rounding, 50);
    assert_eq!(config.default_aspect_ratio, "auto");
}
