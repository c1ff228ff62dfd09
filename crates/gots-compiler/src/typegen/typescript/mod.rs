//! TypeScript declaration emitter.
//!
//! Translates a Go declaration tree into `.d.ts`-style declarations:
//! structs become interfaces, other types become aliases, functions become
//! callable type aliases and constants keep their values.

mod comments;
mod config;
mod emitter;
mod error;
mod group;
mod idents;
mod render;
mod tags;
mod types;
mod values;

#[cfg(test)]
mod group_tests;

pub use config::Config;
pub use emitter::Emitter;
pub use error::{TranslateError, TranslateResult};
pub use group::{GroupState, GroupValue, eval_iota};
pub use idents::map_ident;
pub use tags::{FieldShape, StructTag, interpret as interpret_tag};
pub use values::render_value;

use gots_core::File;

use crate::Translation;

/// Translate a declaration tree with the given configuration.
pub fn emit(file: &File, config: &Config) -> Translation {
    Emitter::new(config).emit(file)
}
