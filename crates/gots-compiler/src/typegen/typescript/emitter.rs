//! Core emitter struct and main emit logic.

use gots_core::{Colors, File};

use crate::Translation;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

use super::Config;
use super::error::TranslateError;

/// TypeScript emitter for one declaration tree.
///
/// Holds the output buffer, collected diagnostics and the location of the
/// construct currently being translated. Nothing is shared between runs.
pub struct Emitter<'a> {
    pub(super) config: &'a Config,
    pub(super) diagnostics: Diagnostics,
    /// Location segments, joined to form `User.Email` or `Run(param 2)`
    pub(super) scope: Vec<String>,
    /// Output buffer
    pub(super) output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            diagnostics: Diagnostics::new(),
            scope: Vec::new(),
            output: String::new(),
        }
    }

    pub(super) fn c(&self) -> Colors {
        self.config.colors
    }

    pub(super) fn indent(&self, depth: usize) -> String {
        self.config.indent.repeat(depth)
    }

    /// Emit TypeScript for every declaration in `file`.
    pub fn emit(mut self, file: &File) -> Translation {
        for decl in &file.decls {
            let mark = self.output.len();
            self.emit_decl(decl);
            // Blank line between top-level declaration blocks
            if mark > 0 && self.output.len() > mark {
                self.output.insert(mark, '\n');
            }
        }

        // Ensure exactly one trailing newline
        self.output.truncate(self.output.trim_end().len());
        if !self.output.is_empty() {
            self.output.push('\n');
        }

        Translation {
            output: self.output,
            diagnostics: self.diagnostics,
        }
    }

    /// Run `f` with `segment` appended to the current location.
    pub(super) fn scoped<T>(
        &mut self,
        segment: impl Into<String>,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        self.scope.push(segment.into());
        let result = f(self);
        self.scope.pop();
        result
    }

    pub(super) fn location(&self) -> String {
        self.scope.concat()
    }

    /// Report a failed translation at the current location.
    pub(super) fn report(&mut self, kind: DiagnosticKind, err: &TranslateError) {
        let location = self.location();
        self.diagnostics
            .report(kind, location)
            .message(err.detail())
            .emit();
    }

    /// Report a type that cannot be expressed and stand in `any` for it.
    pub(super) fn degrade(&mut self, err: TranslateError) -> String {
        let kind = match err {
            TranslateError::MalformedMetadata(_) => DiagnosticKind::MalformedMetadata,
            TranslateError::MissingType(_) => DiagnosticKind::MissingType,
            TranslateError::MissingValue(_) => DiagnosticKind::MissingValue,
            TranslateError::UnsupportedExpression(_) => DiagnosticKind::UnsupportedExpression,
        };
        self.report(kind, &err);
        "any".to_string()
    }
}
