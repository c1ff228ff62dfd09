use super::*;

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::MissingValue, "Answer")
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics.has_errors());
    assert!(!diagnostics.has_warnings());
    let msg = diagnostics.iter().next().unwrap();
    assert_eq!(msg.message(), "constant has no value");
    assert_eq!(msg.location(), "Answer");
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnsupportedExpression, "Config.Events")
        .message("channel type")
        .emit();

    assert_eq!(diagnostics.warning_count(), 1);
    assert_eq!(diagnostics.error_count(), 0);
    let plain = diagnostics.printer().render_plain();
    insta::assert_snapshot!(plain, @"warning at Config.Events: channel type; emitted as `any`");
}

#[test]
fn rendered_report_carries_title_location_and_hint() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::MissingType, "Counter")
        .message("Counter")
        .emit();

    let result = diagnostics.render();
    let first = result.lines().next().unwrap();
    assert_eq!(first, "error: `Counter` has no type and is skipped");
    assert!(result.contains("Counter\n") || result.ends_with("Counter"));
    assert!(result.contains("help: give the variable an explicit type"));
    assert!(result.ends_with('\n'));
}

#[test]
fn printer_with_path_and_extra_hint() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnsupportedEmbed, "User")
        .message("sql.NullString")
        .hint("or tag the field with a json name")
        .emit();

    let result = diagnostics.printer().path("models.json").render();
    assert!(result.starts_with("error: embedded `sql.NullString` cannot be extended and is skipped"));
    assert!(result.contains("models.json: User"));
    assert!(result.contains("help: add a type mapping for the embedded type"));
    assert!(result.contains("help: or tag the field with a json name"));
}

#[test]
fn printer_separates_messages() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnsupportedValue, "Z")
        .message("imaginary literal `2i`")
        .emit();
    diagnostics
        .report(DiagnosticKind::MissingValue, "")
        .emit();

    let result = diagnostics.render();
    let titles: Vec<_> = result
        .lines()
        .filter(|l| l.starts_with("error"))
        .collect();
    assert_eq!(
        titles,
        vec![
            "error: value has no TypeScript equivalent: imaginary literal `2i`",
            "error: constant has no value",
        ]
    );
    assert!(result.contains("\nerror: constant has no value"));
}

#[test]
fn plain_listing_is_one_line_per_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnsupportedValue, "Z")
        .message("imaginary literal `2i`")
        .emit();
    diagnostics
        .report(DiagnosticKind::MissingValue, "")
        .emit();

    insta::assert_snapshot!(diagnostics.printer().render_plain(), @r"
    error at Z: value has no TypeScript equivalent: imaginary literal `2i`
    error: constant has no value
    ");
}

#[test]
fn printer_colored() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::MissingValue, "A")
        .emit();

    let result = diagnostics.render_colored(true);
    assert!(result.contains("constant has no value"));
    assert!(result.contains('\x1b'));
    assert!(!diagnostics.render().contains('\x1b'));
}

#[test]
fn printer_empty_diagnostics() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.render().is_empty());
    assert!(diagnostics.printer().render_plain().is_empty());
}

#[test]
fn sorted_puts_dropped_declarations_first() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnsupportedExpression, "A.B")
        .emit();
    diagnostics
        .report(DiagnosticKind::MalformedMetadata, "A.C")
        .emit();
    diagnostics.report(DiagnosticKind::MissingType, "V").emit();

    let kinds: Vec<_> = diagnostics.sorted().iter().map(|m| m.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::MissingType,
            DiagnosticKind::MalformedMetadata,
            DiagnosticKind::UnsupportedExpression,
        ]
    );
}

#[test]
fn display_is_single_line() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::MalformedMetadata, "User.Name")
        .message("missing closing quote")
        .emit();

    let msg = diagnostics.iter().next().unwrap();
    insta::assert_snapshot!(
        msg.to_string(),
        @r#"error at User.Name: malformed struct tag, field is skipped: missing closing quote (hint: tags are written as `key:"value" key2:"value2"`)"#
    );
}

#[test]
fn extend_merges() {
    let mut a = Diagnostics::new();
    a.report(DiagnosticKind::MissingValue, "A").emit();
    let mut b = Diagnostics::new();
    b.report(DiagnosticKind::UnsupportedExpression, "B").emit();
    a.extend(b);
    assert_eq!(a.len(), 2);
    assert!(a.has_errors());
    assert!(a.has_warnings());
}
