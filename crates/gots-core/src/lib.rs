#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for gots.
//!
//! Two layers:
//! - **Tree layer** (`tree`): the Go declaration tree as produced by the
//!   external parser, deserialized 1:1 from its JSON encoding
//! - **Naming layer** (`utils`, `comments`): pure helpers shared by the
//!   translator (export rules, identifier validity, comment text)

mod colors;
pub mod comments;
pub mod tree;
pub mod utils;

#[cfg(test)]
mod utils_tests;

pub use colors::Colors;
pub use comments::{Comment, CommentGroup};
pub use tree::{
    BinaryOp, ChanDir, Decl, DeclToken, Expr, Field, FieldList, File, FuncDecl, GenDecl,
    ImportSpec, LitKind, Spec, TypeSpec, UnaryOp, ValueSpec,
};

/// Parse the JSON encoding of a declaration tree.
pub fn parse_file(json: &str) -> Result<File, serde_json::Error> {
    serde_json::from_str(json)
}
