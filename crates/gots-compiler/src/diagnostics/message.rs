/// Diagnostic kinds ordered by priority (highest priority first).
///
/// Lower discriminants describe larger losses: a whole declaration is dropped
/// before a single field is, and a field is dropped before a type degrades to
/// `any`. Sorting by kind therefore lists the most damaging problems first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Declaration dropped
    MissingType,
    MissingValue,
    UnsupportedValue,

    // Field dropped
    MalformedMetadata,
    UnsupportedEmbed,

    // Emitted, but degraded to `any`
    UnsupportedExpression,
}

impl DiagnosticKind {
    /// Default severity for this kind.
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::UnsupportedExpression => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingType => Some("give the variable an explicit type"),
            Self::MalformedMetadata => Some(r#"tags are written as `key:"value" key2:"value2"`"#),
            Self::UnsupportedEmbed => Some("add a type mapping for the embedded type"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::MissingType => "declaration has no type",
            Self::MissingValue => "constant has no value",
            Self::UnsupportedValue => "value has no TypeScript equivalent",
            Self::MalformedMetadata => "malformed struct tag",
            Self::UnsupportedEmbed => "embedded type cannot be extended",
            Self::UnsupportedExpression => "type has no TypeScript equivalent",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::MissingType => "`{}` has no type and is skipped".to_string(),
            Self::MissingValue => "`{}` has no value and is skipped".to_string(),
            Self::UnsupportedValue => "value has no TypeScript equivalent: {}".to_string(),
            Self::MalformedMetadata => "malformed struct tag, field is skipped: {}".to_string(),
            Self::UnsupportedEmbed => "embedded `{}` cannot be extended and is skipped".to_string(),
            Self::UnsupportedExpression => "{}; emitted as `any`".to_string(),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// Dotted path to the offending construct, e.g. `User.Email` or `Run(param 2)`.
    pub(crate) location: String,
    pub(crate) message: String,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(
        kind: DiagnosticKind,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            location: location.into(),
            message: message.into(),
            hints: kind.default_hint().map(str::to_string).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, location: impl Into<String>) -> Self {
        Self::new(kind, location, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub(crate) fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub(crate) fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.severity())?;
        if !self.location.is_empty() {
            write!(f, " at {}", self.location)?;
        }
        write!(f, ": {}", self.message)?;
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
