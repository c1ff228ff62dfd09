//! gots compiler: Go declaration trees to TypeScript declarations.
//!
//! This crate provides the translation engine:
//! - `typegen::typescript` - identifier mapping, type translation, struct tags,
//!   constant groups and declaration rendering
//! - `diagnostics` - per-construct problems found while translating
//!
//! Translation never stops at a bad construct. Each problem degrades the
//! smallest enclosing unit (a field, a parameter, a declaration) and is
//! recorded as a diagnostic; only an unreadable tree is a hard error.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod typegen;

#[cfg(test)]
mod lib_tests;
#[cfg(test)]
pub mod test_utils;

pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use typegen::typescript::Config;

use gots_core::File;

/// Errors that stop a translation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not a declaration tree.
    #[error("invalid declaration tree: {0}")]
    InvalidTree(#[from] serde_json::Error),

    #[error("translation failed with {} errors", .0.error_count())]
    TranslationFailed(Diagnostics),
}

/// Result type for translation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// TypeScript output together with everything that was degraded or dropped.
#[derive(Debug, Clone, Default)]
pub struct Translation {
    pub output: String,
    pub diagnostics: Diagnostics,
}

impl Translation {
    /// The output, or `TranslationFailed` if any error was reported.
    ///
    /// Warnings (constructs emitted as `any`) do not fail.
    pub fn into_result(self) -> Result<String> {
        if self.diagnostics.has_errors() {
            return Err(Error::TranslationFailed(self.diagnostics));
        }
        Ok(self.output)
    }
}

/// Translate a declaration tree.
pub fn translate(file: &File, config: &Config) -> Translation {
    tracing::debug!(
        package = %file.package,
        decls = file.decls.len(),
        "translating declarations"
    );
    typegen::typescript::emit(file, config)
}

/// Decode a JSON declaration tree and translate it.
pub fn translate_json(json: &str, config: &Config) -> Result<Translation> {
    let file = gots_core::parse_file(json)?;
    Ok(translate(&file, config))
}
