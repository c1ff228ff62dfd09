//! Builtin Go type names and their TypeScript counterparts.

/// TypeScript name for a builtin Go type; other identifiers pass through.
///
/// # Examples
/// ```
/// use gots_compiler::typegen::typescript::map_ident;
/// assert_eq!(map_ident("uint16"), "number");
/// assert_eq!(map_ident("error"), "Error");
/// assert_eq!(map_ident("User"), "User");
/// ```
pub fn map_ident(name: &str) -> &str {
    match name {
        "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16" | "uint32"
        | "uint64" | "uintptr" | "byte" | "float32" | "float64" | "complex64" | "complex128" => {
            "number"
        }
        "bool" => "boolean",
        "rune" | "string" => "string",
        "error" => "Error",
        "any" | "comparable" => "any",
        other => other,
    }
}

/// Whether `name` is a predeclared Go type rather than a declared one.
pub(crate) fn is_builtin(name: &str) -> bool {
    map_ident(name) != name || matches!(name, "string" | "any")
}

/// Whether `name` is the byte alias, which collapses `[]byte` to `string`.
pub(crate) fn is_byte(name: &str) -> bool {
    matches!(name, "byte" | "uint8")
}
