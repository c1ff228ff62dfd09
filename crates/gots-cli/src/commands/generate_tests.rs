use std::fs;
use std::path::{Path, PathBuf};

use super::check::{CheckArgs, check, is_valid};
use super::generate::{GenerateArgs, generate};

const TREE: &str = r#"{
  "package": "models",
  "decls": [
    {
      "kind": "gen",
      "token": "type",
      "specs": [
        {
          "kind": "type",
          "name": "Event",
          "type": {
            "kind": "struct",
            "fields": [
              { "names": ["At"], "type": { "kind": "selector", "pkg": "time", "name": "Time" } },
              {
                "names": ["Feed"],
                "type": { "kind": "chan", "dir": "both", "elem": { "kind": "ident", "name": "int" } }
              }
            ]
          }
        }
      ]
    }
  ]
}"#;

const BROKEN: &str = r#"{
  "decls": [
    { "kind": "gen", "token": "var", "specs": [{ "kind": "value", "names": ["Untyped"] }] },
    {
      "kind": "gen",
      "token": "type",
      "specs": [{ "kind": "type", "name": "Ok", "type": { "kind": "ident", "name": "bool" } }]
    }
  ]
}"#;

fn write(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).unwrap();
    path
}

fn generate_args(tree_path: PathBuf) -> GenerateArgs {
    GenerateArgs {
        tree_path,
        config_path: None,
        indent: Some("  ".to_string()),
        type_mappings: Vec::new(),
        output: None,
        strict: false,
        color: false,
    }
}

fn check_args(tree_path: PathBuf, strict: bool) -> CheckArgs {
    CheckArgs {
        tree_path,
        config_path: None,
        type_mappings: Vec::new(),
        strict,
        color: false,
    }
}

#[test]
fn generates_with_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write(dir.path(), "models.json", TREE);

    let generated = generate(&generate_args(tree)).unwrap();
    assert!(!generated.failed);
    insta::assert_snapshot!(generated.translation.output, @r"
    export interface Event {
      At: any /* time.Time */;
      Feed: any;
    }
    ");
    assert_eq!(generated.translation.diagnostics.warning_count(), 1);
    assert!(generated.tree_name.ends_with("models.json"));
}

#[test]
fn config_file_and_flags_combine() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write(dir.path(), "models.json", TREE);
    let config = write(
        dir.path(),
        "gots.json",
        r#"{ "indent": "    ", "typeMappings": { "time.Time": "Date" } }"#,
    );

    let mut args = generate_args(tree);
    args.config_path = Some(config);
    args.indent = None;
    args.type_mappings = vec![("time.Time".to_string(), "string".to_string())];

    let generated = generate(&args).unwrap();
    insta::assert_snapshot!(generated.translation.output, @r"
    export interface Event {
        At: string;
        Feed: any;
    }
    ");
}

#[test]
fn output_file_is_never_colored() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write(dir.path(), "models.json", TREE);

    let mut args = generate_args(tree);
    args.color = true;
    args.output = Some(dir.path().join("models.d.ts"));

    let generated = generate(&args).unwrap();
    assert!(!generated.translation.output.contains('\x1b'));
}

#[test]
fn strict_fails_only_on_errors() {
    let dir = tempfile::tempdir().unwrap();
    let warned = write(dir.path(), "models.json", TREE);
    let broken = write(dir.path(), "broken.json", BROKEN);

    let mut args = generate_args(warned);
    args.strict = true;
    assert!(!generate(&args).unwrap().failed);

    let mut args = generate_args(broken);
    args.strict = true;
    let generated = generate(&args).unwrap();
    assert!(generated.failed);
    assert_eq!(generated.translation.output, "export type Ok = boolean;\n");
}

#[test]
fn invalid_tree_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let tree = write(dir.path(), "bad.json", r#"{ "decls": 3 }"#);
    assert!(generate(&generate_args(tree)).is_err());
}

#[test]
fn check_reports_diagnostics() {
    let dir = tempfile::tempdir().unwrap();
    let broken = write(dir.path(), "broken.json", BROKEN);

    let (name, diagnostics) = check(&check_args(broken, false)).unwrap();
    assert!(!is_valid(&diagnostics, false));
    let rendered = diagnostics.printer().path(&name).render();
    assert!(rendered.starts_with("error: `Untyped` has no type and is skipped\n"));
    assert!(rendered.contains(&format!("{name}: Untyped")));
    assert!(rendered.contains("help: give the variable an explicit type"));
    insta::assert_snapshot!(diagnostics.printer().render_plain(), @"error at Untyped: `Untyped` has no type and is skipped (hint: give the variable an explicit type)");
}

#[test]
fn check_strict_fails_on_warnings() {
    let dir = tempfile::tempdir().unwrap();
    let warned = write(dir.path(), "models.json", TREE);

    let (_, diagnostics) = check(&check_args(warned.clone(), false)).unwrap();
    assert!(is_valid(&diagnostics, false));
    assert!(!is_valid(&diagnostics, true));

    let mut args = check_args(warned, true);
    args.type_mappings = vec![("time.Time".to_string(), "string".to_string())];
    let (_, diagnostics) = check(&args).unwrap();
    assert_eq!(diagnostics.warning_count(), 1);
}
