//! Constant expressions in value position.

use gots_core::{BinaryOp, Expr, LitKind, UnaryOp};

use super::error::{TranslateError, TranslateResult};

/// Render a constant expression as TypeScript source.
///
/// When `iota` is given, the `iota` identifier is replaced by that number.
pub fn render_value(expr: &Expr, iota: Option<i64>) -> TranslateResult<String> {
    match expr {
        Expr::Ident { name } => match (name.as_str(), iota) {
            ("iota", Some(n)) => Ok(n.to_string()),
            ("nil", _) => Ok("null".to_string()),
            _ => Ok(name.clone()),
        },
        Expr::BasicLit { kind, value } => render_literal(*kind, value),
        Expr::Paren { x } => Ok(format!("({})", render_value(x, iota)?)),
        Expr::Unary { op, x } => {
            let operand = render_value(x, iota)?;
            match op {
                UnaryOp::Xor => Ok(format!("~{operand}")),
                UnaryOp::Neg | UnaryOp::Pos | UnaryOp::Not => {
                    Ok(format!("{}{operand}", op.as_str()))
                }
                UnaryOp::Tilde | UnaryOp::And | UnaryOp::Arrow => Err(
                    TranslateError::unsupported(format!("operator `{}`", op.as_str())),
                ),
            }
        }
        Expr::Binary { op, x, y } => {
            if *op == BinaryOp::AndNot {
                return Err(TranslateError::unsupported("operator `&^`"));
            }
            Ok(format!(
                "{} {} {}",
                render_value(x, iota)?,
                op.as_str(),
                render_value(y, iota)?
            ))
        }
        Expr::Selector { pkg, name } => Err(TranslateError::unsupported(format!(
            "reference to `{pkg}.{name}`"
        ))),
        Expr::Call { .. } => Err(TranslateError::unsupported("function call")),
        Expr::CompositeLit { .. } => Err(TranslateError::unsupported("composite literal")),
        Expr::FuncLit => Err(TranslateError::unsupported("function literal")),
        _ => Err(TranslateError::unsupported("type expression in value position")),
    }
}

fn render_literal(kind: LitKind, value: &str) -> TranslateResult<String> {
    match kind {
        LitKind::Int => Ok(normalize_int(value)),
        LitKind::String if value.starts_with('`') => Ok(escape_raw(value)),
        LitKind::Float | LitKind::String => Ok(value.to_string()),
        LitKind::Char => Ok(requote_char(value)),
        LitKind::Imag => Err(TranslateError::unsupported(format!(
            "imaginary literal `{value}`"
        ))),
    }
}

/// A Go raw string kept as a template literal, where backslashes and `${`
/// would otherwise be interpreted.
fn escape_raw(value: &str) -> String {
    value.replace('\\', "\\\\").replace("${", "\\${")
}

/// Go's legacy octal form `0755` is a syntax error in TypeScript.
fn normalize_int(value: &str) -> String {
    match value.strip_prefix('0') {
        Some(rest) if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit() || b == b'_') => {
            format!("0o{}", rest.trim_start_matches('_'))
        }
        _ => value.to_string(),
    }
}

/// `'x'` becomes `"x"`; escapes are kept, quotes are adjusted.
fn requote_char(value: &str) -> String {
    let inner = value
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .unwrap_or(value);
    match inner {
        "\\'" => "\"'\"".to_string(),
        "\"" => "\"\\\"\"".to_string(),
        other => format!("\"{other}\""),
    }
}

/// Numeric value of a Go integer literal.
pub(crate) fn parse_int(value: &str) -> Option<i64> {
    let digits: String = value.chars().filter(|c| *c != '_').collect();
    let lower = digits.to_ascii_lowercase();
    if let Some(hex) = lower.strip_prefix("0x") {
        i64::from_str_radix(hex, 16).ok()
    } else if let Some(bin) = lower.strip_prefix("0b") {
        i64::from_str_radix(bin, 2).ok()
    } else if let Some(oct) = lower.strip_prefix("0o") {
        i64::from_str_radix(oct, 8).ok()
    } else if lower.len() > 1 && lower.starts_with('0') {
        i64::from_str_radix(&lower[1..], 8).ok()
    } else {
        lower.parse().ok()
    }
}

/// Code point of a single-character rune literal like `'a'`.
pub(crate) fn parse_char(value: &str) -> Option<i64> {
    let inner = value.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut chars = inner.chars();
    let c = chars.next()?;
    if c == '\\' || chars.next().is_some() {
        return None;
    }
    Some(i64::from(u32::from(c)))
}
