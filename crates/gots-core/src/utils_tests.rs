use crate::utils::{is_blank, is_exported, is_valid_js_identifier, is_visible, property_key};

#[test]
fn exported_names() {
    assert!(is_exported("Foo"));
    assert!(is_exported("X"));
    assert!(is_exported("Ärger"));
    assert!(!is_exported("foo"));
    assert!(!is_exported("_Foo"));
    assert!(!is_exported(""));
}

#[test]
fn blank_is_never_visible() {
    assert!(is_blank("_"));
    assert!(!is_blank("__"));
    assert!(!is_visible("_"));
    assert!(!is_visible("lower"));
    assert!(is_visible("Upper"));
}

#[test]
fn js_identifiers() {
    assert!(is_valid_js_identifier("name"));
    assert!(is_valid_js_identifier("_private"));
    assert!(is_valid_js_identifier("camelCase2"));
    assert!(is_valid_js_identifier("名前"));
    assert!(!is_valid_js_identifier(""));
    assert!(!is_valid_js_identifier("2fa"));
    assert!(!is_valid_js_identifier("content-type"));
    assert!(!is_valid_js_identifier("a b"));
}

#[test]
fn property_keys_are_quoted_when_needed() {
    assert_eq!(property_key("id"), "id");
    assert_eq!(property_key("content-type"), "'content-type'");
    assert_eq!(property_key("it's"), "'it\\'s'");
}
