//! Diagnostics collected while translating a declaration tree.
//!
//! The translator never sees source text, so diagnostics carry a dotted
//! location (`User.Email`, `Run(param 2)`) instead of a span.

mod message;
mod printer;

#[cfg(test)]
mod diagnostics_tests;

pub use message::{DiagnosticKind, DiagnosticMessage, Severity};
pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind and location.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(
        &mut self,
        kind: DiagnosticKind,
        location: impl Into<String>,
    ) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, location),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    /// Messages ordered by priority, most damaging first; emission order
    /// is kept within one kind.
    pub fn sorted(&self) -> Vec<DiagnosticMessage> {
        let mut messages = self.messages.clone();
        messages.sort_by_key(|m| m.kind);
        messages
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }

    pub fn render(&self) -> String {
        self.printer().render()
    }

    pub fn render_colored(&self, colored: bool) -> String {
        self.printer().colored(colored).render()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    pub fn emit(self) {
        tracing::debug!(
            kind = ?self.message.kind,
            location = %self.message.location,
            "{}",
            self.message.message
        );
        self.diagnostics.messages.push(self.message);
    }
}
