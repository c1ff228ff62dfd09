/// Whether a Go identifier is exported (starts with an uppercase letter).
///
/// # Examples
/// ```
/// use gots_core::utils::is_exported;
/// assert!(is_exported("Name"));
/// assert!(!is_exported("name"));
/// assert!(!is_exported("_"));
/// ```
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Whether a name is the blank identifier `_`.
pub fn is_blank(name: &str) -> bool {
    name == "_"
}

/// The name is emitted: exported and not blank.
pub fn is_visible(name: &str) -> bool {
    !is_blank(name) && is_exported(name)
}

/// Whether `name` can be used as a bare JavaScript property key.
///
/// Letters or `_` first, then letters, digits or `_`.
///
/// # Examples
/// ```
/// use gots_core::utils::is_valid_js_identifier;
/// assert!(is_valid_js_identifier("userId"));
/// assert!(!is_valid_js_identifier("user-id"));
/// assert!(!is_valid_js_identifier("1st"));
/// ```
pub fn is_valid_js_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Render a property key, single-quoting it when it is not a valid identifier.
pub fn property_key(name: &str) -> String {
    if is_valid_js_identifier(name) {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}
