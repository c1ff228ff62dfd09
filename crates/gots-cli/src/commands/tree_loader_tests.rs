use std::fs;

use super::LoadError;
use super::tree_loader::{load_tree, parse_tree};

const TREE: &str = r#"{
  "package": "models",
  "decls": [
    {
      "kind": "gen",
      "token": "type",
      "specs": [{ "kind": "type", "name": "ID", "type": { "kind": "ident", "name": "string" } }]
    }
  ]
}"#;

#[test]
fn parses_tree_text() {
    let tree = parse_tree("models.json".to_string(), TREE).unwrap();
    assert_eq!(tree.name, "models.json");
    assert_eq!(tree.file.package, "models");
    assert_eq!(tree.file.decls.len(), 1);
}

#[test]
fn invalid_tree_names_the_input() {
    let err = parse_tree("bad.json".to_string(), r#"{ "decls": 3 }"#).unwrap_err();
    assert!(matches!(err, LoadError::Tree { .. }));
    assert!(
        err.to_string()
            .starts_with("bad.json: invalid declaration tree: ")
    );
}

#[test]
fn loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("models.json");
    fs::write(&path, TREE).unwrap();

    let tree = load_tree(&path).unwrap();
    assert!(tree.name.ends_with("models.json"));
    assert_eq!(tree.file.decls.len(), 1);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_tree(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LoadError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read '"));
}
