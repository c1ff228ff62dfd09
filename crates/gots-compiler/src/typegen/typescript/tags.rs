//! Struct tag interpretation.
//!
//! Tags follow Go's `reflect.StructTag` convention: space-separated
//! `key:"value"` pairs. Two keys matter here:
//! - `tstype:"Type,required"` overrides the emitted type; `-` omits the field
//! - `json:"name,omitempty"` renames the field and marks it optional; `-` omits it

use super::error::{TranslateError, TranslateResult};

/// Parsed `key:"value"` pairs in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructTag {
    entries: Vec<(String, String)>,
}

impl StructTag {
    /// Parse a raw tag literal: backtick-quoted, double-quoted or bare.
    pub fn parse(raw: &str) -> TranslateResult<Self> {
        let body = unquote_literal(raw)?;
        let mut entries = Vec::new();
        let mut rest = body.as_str();

        loop {
            rest = rest.trim_start_matches(' ');
            if rest.is_empty() {
                break;
            }

            let key_len = rest
                .bytes()
                .position(|b| b <= b' ' || b == b':' || b == b'"' || b == 0x7f)
                .unwrap_or(rest.len());
            if key_len == 0 {
                return Err(TranslateError::malformed(format!("expected key in `{body}`")));
            }
            let key = &rest[..key_len];
            rest = &rest[key_len..];

            let Some(after_colon) = rest.strip_prefix(':') else {
                return Err(TranslateError::malformed(format!(
                    "expected `:` after key `{key}`"
                )));
            };
            let Some(quoted) = after_colon.strip_prefix('"') else {
                return Err(TranslateError::malformed(format!(
                    "value of `{key}` must be double-quoted"
                )));
            };

            let (value, remainder) = scan_quoted(quoted).ok_or_else(|| {
                TranslateError::malformed(format!("unterminated value for `{key}`"))
            })?;
            entries.push((key.to_string(), value));
            rest = remainder;
        }

        Ok(Self { entries })
    }

    /// Value of the first entry for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// How one named struct field is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldShape {
    /// Property name as written in the output (before quoting).
    pub key: String,
    /// Emit `key?:`.
    pub optional: bool,
    /// `tstype` type text, written verbatim instead of the translated type.
    pub type_override: Option<String>,
    /// Translate the pointee instead of the pointer.
    pub strip_pointer: bool,
}

/// Decide how a field is emitted. `Ok(None)` means the field is omitted.
pub fn interpret(
    tag: Option<&str>,
    field_name: &str,
    is_pointer: bool,
) -> TranslateResult<Option<FieldShape>> {
    let tag = match tag {
        Some(raw) => StructTag::parse(raw)?,
        None => StructTag::default(),
    };

    let mut shape = FieldShape {
        key: field_name.to_string(),
        optional: is_pointer,
        type_override: None,
        strip_pointer: false,
    };

    if let Some(tstype) = tag.get("tstype") {
        if tstype == "-" {
            return Ok(None);
        }
        let mut parts = tstype.split(',');
        let ty = parts.next().unwrap_or_default();
        if !ty.is_empty() {
            shape.type_override = Some(ty.to_string());
        }
        if parts.any(|opt| opt == "required") {
            shape.optional = false;
            shape.strip_pointer = is_pointer;
        }
    }

    if let Some(json) = tag.get("json") {
        if json == "-" {
            return Ok(None);
        }
        let mut parts = json.split(',');
        let name = parts.next().unwrap_or_default();
        if !name.is_empty() {
            shape.key = name.to_string();
        }
        if parts.any(|opt| opt == "omitempty" || opt == "omitzero") {
            shape.optional = true;
        }
    }

    Ok(Some(shape))
}

/// Name an embedded field takes when its `json` tag renames it.
///
/// Go's encoder flattens embedded structs unless the tag gives a name.
pub fn embedded_json_name(tag: Option<&str>) -> TranslateResult<Option<String>> {
    let Some(raw) = tag else {
        return Ok(None);
    };
    let tag = StructTag::parse(raw)?;
    Ok(tag
        .get("json")
        .and_then(|v| v.split(',').next())
        .filter(|name| !name.is_empty() && *name != "-")
        .map(str::to_string))
}

/// Whether an embedded field is dropped by its tags (`json:"-"` or `tstype:"-"`).
pub fn embedded_is_omitted(tag: Option<&str>) -> TranslateResult<bool> {
    let Some(raw) = tag else {
        return Ok(false);
    };
    let tag = StructTag::parse(raw)?;
    Ok(tag.get("json") == Some("-") || tag.get("tstype") == Some("-"))
}

fn unquote_literal(raw: &str) -> TranslateResult<String> {
    if let Some(inner) = raw.strip_prefix('`') {
        return inner
            .strip_suffix('`')
            .map(str::to_string)
            .ok_or_else(|| TranslateError::malformed("unterminated raw tag literal"));
    }
    if let Some(inner) = raw.strip_prefix('"') {
        let (value, rest) = scan_quoted(inner)
            .ok_or_else(|| TranslateError::malformed("unterminated tag literal"))?;
        if !rest.is_empty() {
            return Err(TranslateError::malformed("trailing text after tag literal"));
        }
        return Ok(value);
    }
    Ok(raw.to_string())
}

/// Read an escaped string up to its closing quote.
///
/// `input` starts just after the opening `"`. Returns the unescaped value and
/// the text following the closing quote.
fn scan_quoted(input: &str) -> Option<(String, &str)> {
    let mut value = String::new();
    let mut chars = input.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some((value, &input[i + 1..])),
            '\\' => {
                let (_, escaped) = chars.next()?;
                value.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    other => other,
                });
            }
            other => value.push(other),
        }
    }
    None
}
