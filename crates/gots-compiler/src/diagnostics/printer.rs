//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{Group, Level, Origin, Renderer};

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            path: None,
            colored: false,
        }
    }

    /// Input file name shown in front of each location.
    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            let origin = self.origin(diag);

            let title = severity_to_level(diag.severity()).primary_title(diag.message());
            let mut group = Group::with_title(title);
            if let Some(origin) = &origin {
                group = group.element(Origin::path(origin.as_str()));
            }
            for hint in &diag.hints {
                group = group.element(Level::HELP.message(hint.as_str()));
            }
            let report: Vec<Group> = vec![group];

            if i > 0 {
                w.write_char('\n')?;
            }
            writeln!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    /// One-line listing without layout or color, one message per line.
    pub fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for diag in self.diagnostics.iter() {
            writeln!(w, "{}", diag)?;
        }
        Ok(())
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        let _ = self.format_plain(&mut out);
        out
    }

    /// `tree.json: User.Email`, or whichever half is known.
    fn origin(&self, diag: &DiagnosticMessage) -> Option<String> {
        match (self.path, diag.location()) {
            (None, "") => None,
            (None, loc) => Some(loc.to_string()),
            (Some(path), "") => Some(path.to_string()),
            (Some(path), loc) => Some(format!("{path}: {loc}")),
        }
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}
