//! Configuration loading and validation errors.

use navmorph_ui::{NavConfig, NavError};

#[test]
fn test_duplicate_nav_id() {
    let source = r#"
        [[nav]]
        id = "home"
        title = "Home"
        path = "/"

        [[nav]]
        id = "home"
        title = "Start"
        path = "/start"
    "#;
    let err = NavConfig::from_toml_str(source).unwrap_err();
    assert!(matches!(err, NavError::DuplicateId { list: "nav", ref id } if id == "home"));
}

#[test]
fn test_duplicate_social_id() {
    let source = r#"
        [[social]]
        id = "yt"
        title = "YouTube"
        url = "https://www.youtube.com/"

        [[social]]
        id = "yt"
        title = "YouTube Music"
        url = "https://music.youtube.com/"
    "#;
    let err = NavConfig::from_toml_str(source).unwrap_err();
    assert!(matches!(err, NavError::DuplicateId { list: "social", .. }));
}

#[test]
fn test_empty_title() {
    let source = r#"
        [[nav]]
        id = "about"
        title = "  "
        path = "/about"
    "#;
    let err = NavConfig::from_toml_str(source).unwrap_err();
    assert!(matches!(
        err,
        NavError::EmptyField {
            list: "nav",
            index: 0,
            field: "title"
        }
    ));
    assert_eq!(err.to_string(), "nav entry 0 has an empty title");
}

#[test]
fn test_missing_field_is_parse_error() {
    let source = r#"
        [[nav]]
        id = "about"
        title = "About"
    "#;
    let err = NavConfig::from_toml_str(source).unwrap_err();
    assert!(matches!(err, NavError::Parse(_)));
}

#[test]
fn test_missing_file() {
    let path = std::env::temp_dir().join("navmorph_missing_config_test.toml");
    std::fs::remove_file(&path).ok();
    let err = NavConfig::from_path(&path).unwrap_err();
    assert!(matches!(err, NavError::Io { .. }));
    assert!(err.to_string().contains("navmorph_missing_config_test.toml"));
}

#[test]
fn test_load_from_file() {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("navmorph_config_{id}.toml"));
    let source = r#"
        compact_ids = ["tour"]

        [[nav]]
        id = "tour"
        title = "Tour"
        path = "/tour"

        [viewport]
        width = 800.0
    "#;
    std::fs::write(&path, source).unwrap();

    let config = NavConfig::from_path(&path).unwrap();
    assert!(config.is_compact(&config.nav[0]));
    assert_eq!(config.viewport.width, 800.0);
    assert_eq!(config.viewport.height, 900.0);

    std::fs::remove_file(&path).ok();
}
