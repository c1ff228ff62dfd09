use std::fs;

use super::LoadError;
use super::config_loader::{ConfigFile, Overrides, build_config, load_config};

#[test]
fn parses_camel_case_keys() {
    let file = ConfigFile::parse(
        "gots.json",
        r#"{ "indent": "  ", "typeMappings": { "time.Time": "string" } }"#,
    )
    .unwrap();
    assert_eq!(file.indent.as_deref(), Some("  "));
    assert_eq!(
        file.type_mappings.get("time.Time").map(String::as_str),
        Some("string")
    );
}

#[test]
fn missing_keys_use_defaults() {
    let file = ConfigFile::parse("gots.json", "{}").unwrap();
    assert_eq!(file, ConfigFile::default());
}

#[test]
fn unknown_keys_are_rejected() {
    let err = ConfigFile::parse("gots.json", r#"{ "indnet": "  " }"#).unwrap_err();
    assert!(matches!(err, LoadError::Config { .. }));
    assert!(err.to_string().starts_with("gots.json: invalid config: "));
}

#[test]
fn no_config_path_gives_defaults() {
    assert_eq!(load_config(None).unwrap(), ConfigFile::default());
}

#[test]
fn loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gots.json");
    fs::write(&path, r#"{ "typeMappings": { "uuid.UUID": "string" } }"#).unwrap();

    let file = load_config(Some(&path)).unwrap();
    assert_eq!(file.type_mappings.len(), 1);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(Some(&dir.path().join("absent.json"))).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
}

#[test]
fn command_line_overrides_file() {
    let file = ConfigFile::parse(
        "gots.json",
        r#"{ "indent": "    ", "typeMappings": { "time.Time": "string", "uuid.UUID": "string" } }"#,
    )
    .unwrap();
    let config = build_config(
        file,
        Overrides {
            indent: Some("  ".to_string()),
            type_mappings: vec![("time.Time".to_string(), "Date".to_string())],
            colored: false,
        },
    );
    assert_eq!(config.get_indent(), "  ");
    assert_eq!(config.mapped_type("time.Time"), Some("Date"));
    assert_eq!(config.mapped_type("uuid.UUID"), Some("string"));
}

#[test]
fn file_indent_applies_without_override() {
    let file = ConfigFile::parse("gots.json", r#"{ "indent": "  " }"#).unwrap();
    let config = build_config(file, Overrides::default());
    assert_eq!(config.get_indent(), "  ");

    let config = build_config(ConfigFile::default(), Overrides::default());
    assert_eq!(config.get_indent(), "\t");
}
