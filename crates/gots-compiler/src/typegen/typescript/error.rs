use thiserror::Error;

/// Failure to translate one construct.
///
/// Propagated with `?` inside the translator and turned into a diagnostic by
/// the smallest enclosing unit that can degrade (a field, a parameter, a
/// declaration).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The construct has no TypeScript representation.
    #[error("{0}")]
    UnsupportedExpression(String),

    /// A struct tag could not be parsed.
    #[error("{0}")]
    MalformedMetadata(String),

    /// A variable has no explicit type.
    #[error("`{0}` has no type")]
    MissingType(String),

    /// A constant has neither an explicit nor an inherited value.
    #[error("`{0}` has no value")]
    MissingValue(String),
}

impl TranslateError {
    pub(crate) fn unsupported(what: impl Into<String>) -> Self {
        Self::UnsupportedExpression(what.into())
    }

    pub(crate) fn malformed(what: impl Into<String>) -> Self {
        Self::MalformedMetadata(what.into())
    }

    /// The payload alone, without the variant's wording.
    pub(crate) fn detail(&self) -> &str {
        match self {
            Self::UnsupportedExpression(s)
            | Self::MalformedMetadata(s)
            | Self::MissingType(s)
            | Self::MissingValue(s) => s,
        }
    }
}

pub type TranslateResult<T> = std::result::Result<T, TranslateError>;
