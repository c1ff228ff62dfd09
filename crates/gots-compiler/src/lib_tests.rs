use gots_core::{ChanDir, Decl, Expr, Field, File, TypeSpec, ValueSpec};

use crate::test_utils::test_config;
use crate::{DiagnosticKind, Error, translate, translate_json};

#[test]
fn invalid_json_is_rejected() {
    let err = translate_json("{ \"decls\": [{ \"kind\": \"macro\" }] }", &test_config())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTree(_)));
    assert!(err.to_string().starts_with("invalid declaration tree: "));

    let err = translate_json("not json", &test_config()).unwrap_err();
    assert!(matches!(err, Error::InvalidTree(_)));
}

#[test]
fn errors_fail_the_translation() {
    let file = File::new(vec![
        Decl::vars(vec![ValueSpec::new(["Untyped"]).value(Expr::int(1))]),
        Decl::types(vec![TypeSpec::new("Ok", Expr::ident("int"))]),
    ]);
    let res = translate(&file, &test_config());
    assert_eq!(res.output, "export type Ok = number;\n");

    let Err(Error::TranslationFailed(diagnostics)) = res.into_result() else {
        panic!("expected TranslationFailed");
    };
    assert_eq!(diagnostics.error_count(), 1);
    let msg = diagnostics.iter().next().unwrap();
    assert_eq!(msg.kind(), DiagnosticKind::MissingType);
    assert_eq!(
        Error::TranslationFailed(diagnostics).to_string(),
        "translation failed with 1 errors"
    );
}

#[test]
fn warnings_do_not_fail() {
    let file = File::new(vec![Decl::types(vec![TypeSpec::new(
        "Feed",
        Expr::structure(vec![Field::named(
            ["C"],
            Expr::chan(ChanDir::Recv, Expr::ident("int")),
        )]),
    )])]);
    let res = translate(&file, &test_config());
    assert!(res.diagnostics.has_warnings());

    let output = res.into_result().unwrap();
    assert_eq!(output, "export interface Feed {\n  C: any;\n}\n");
}

#[test]
fn empty_tree_translates_to_nothing() {
    let res = translate_json("{}", &test_config()).unwrap();
    assert_eq!(res.output, "");
    assert!(res.diagnostics.is_empty());
}
