//! State shared by the specs of one `const` / `var` group.
//!
//! Go repeats the previous expression list for specs that omit their values,
//! and `iota` counts every name in the group, emitted or not.

use gots_core::{BinaryOp, Expr, LitKind, UnaryOp};

use super::error::{TranslateError, TranslateResult};
use super::values::{parse_char, parse_int, render_value};

/// Value a spec without explicit values inherits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupValue {
    /// Rendered text reused verbatim.
    Literal(String),
    /// Expression mentioning `iota`, re-evaluated for every name.
    Sequence(Expr),
    /// The source value could not be rendered; inheriting names fail too.
    Unsupported(String),
}

impl GroupValue {
    /// Classify an explicit value expression.
    pub fn from_expr(expr: &Expr) -> Self {
        if expr.mentions("iota") {
            return Self::Sequence(expr.clone());
        }
        match render_value(expr, None) {
            Ok(text) => Self::Literal(text),
            Err(err) => Self::Unsupported(err.to_string()),
        }
    }

    /// Render for the name at position `iota` in the group.
    pub fn render(&self, iota: i64) -> TranslateResult<String> {
        match self {
            Self::Literal(text) => Ok(text.clone()),
            Self::Sequence(expr) => match eval_iota(expr, iota) {
                Ok(n) => Ok(n.to_string()),
                Err(_) => render_value(expr, Some(iota)),
            },
            Self::Unsupported(reason) => Err(TranslateError::unsupported(reason.clone())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GroupState {
    counter: i64,
    current_type: Option<String>,
    /// Failure behind a `current_type` of `any`, not yet reported.
    type_error: Option<TranslateError>,
    current_values: Vec<GroupValue>,
}

impl Default for GroupState {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupState {
    pub fn new() -> Self {
        Self {
            counter: -1,
            current_type: None,
            type_error: None,
            current_values: Vec::new(),
        }
    }

    /// Advance the counter for the next name and return its `iota`.
    pub fn advance(&mut self) -> i64 {
        self.counter += 1;
        self.counter
    }

    pub fn iota(&self) -> i64 {
        self.counter
    }

    /// Record an explicit type written on a spec.
    pub fn set_type(&mut self, ty: String) {
        self.current_type = Some(ty);
        self.type_error = None;
    }

    /// Record an explicit type that could not be translated and was not
    /// reported yet; names inheriting it see `any`.
    pub fn fail_type(&mut self, err: TranslateError) {
        self.current_type = Some("any".to_string());
        self.type_error = Some(err);
    }

    /// The pending type failure, handed out once.
    pub fn take_type_error(&mut self) -> Option<TranslateError> {
        self.type_error.take()
    }

    /// An explicit value without an explicit type resets the inherited type.
    pub fn reset_type(&mut self) {
        self.current_type = None;
        self.type_error = None;
    }

    pub fn current_type(&self) -> Option<&str> {
        self.current_type.as_deref()
    }

    /// Record a spec's explicit value list.
    pub fn set_values(&mut self, values: &[Expr]) {
        self.current_values = values.iter().map(GroupValue::from_expr).collect();
    }

    /// Inherited value for the name at `index` within its spec.
    ///
    /// Falls back to the last inherited value when the previous list was
    /// shorter.
    pub fn current_value(&self, index: usize) -> Option<&GroupValue> {
        self.current_values
            .get(index)
            .or_else(|| self.current_values.last())
    }
}

/// Evaluate an integer constant expression with `iota` bound.
pub fn eval_iota(expr: &Expr, iota: i64) -> TranslateResult<i64> {
    let overflow = || TranslateError::unsupported("constant overflows 64 bits");
    match expr {
        Expr::Ident { name } if name == "iota" => Ok(iota),
        Expr::Ident { name } => Err(TranslateError::unsupported(format!(
            "`{name}` in iota expression"
        ))),
        Expr::BasicLit {
            kind: LitKind::Int,
            value,
        } => parse_int(value)
            .ok_or_else(|| TranslateError::unsupported(format!("integer literal `{value}`"))),
        Expr::BasicLit {
            kind: LitKind::Char,
            value,
        } => parse_char(value)
            .ok_or_else(|| TranslateError::unsupported(format!("rune literal `{value}`"))),
        Expr::Paren { x } => eval_iota(x, iota),
        Expr::Unary { op, x } => {
            let v = eval_iota(x, iota)?;
            match op {
                UnaryOp::Neg => v.checked_neg().ok_or_else(overflow),
                UnaryOp::Pos => Ok(v),
                UnaryOp::Xor => Ok(!v),
                _ => Err(TranslateError::unsupported(format!(
                    "operator `{}` in iota expression",
                    op.as_str()
                ))),
            }
        }
        Expr::Binary { op, x, y } => {
            let a = eval_iota(x, iota)?;
            let b = eval_iota(y, iota)?;
            let shift = || {
                u32::try_from(b)
                    .map_err(|_| TranslateError::unsupported("negative shift count"))
            };
            match op {
                BinaryOp::Add => a.checked_add(b).ok_or_else(overflow),
                BinaryOp::Sub => a.checked_sub(b).ok_or_else(overflow),
                BinaryOp::Mul => a.checked_mul(b).ok_or_else(overflow),
                BinaryOp::Quo => a
                    .checked_div(b)
                    .ok_or_else(|| TranslateError::unsupported("division by zero")),
                BinaryOp::Rem => a
                    .checked_rem(b)
                    .ok_or_else(|| TranslateError::unsupported("division by zero")),
                BinaryOp::Shl => {
                    let s = shift()?;
                    let shifted = a.checked_shl(s).ok_or_else(overflow)?;
                    if shifted >> s != a {
                        return Err(overflow());
                    }
                    Ok(shifted)
                }
                BinaryOp::Shr => Ok(a.checked_shr(shift()?).unwrap_or(if a < 0 { -1 } else { 0 })),
                BinaryOp::And => Ok(a & b),
                BinaryOp::Or => Ok(a | b),
                BinaryOp::Xor => Ok(a ^ b),
                BinaryOp::AndNot => Ok(a & !b),
                _ => Err(TranslateError::unsupported(format!(
                    "operator `{}` in iota expression",
                    op.as_str()
                ))),
            }
        }
        _ => Err(TranslateError::unsupported("non-integer iota expression")),
    }
}
