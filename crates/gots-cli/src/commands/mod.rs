pub mod check;
pub mod config_loader;
pub mod generate;
pub mod tree_loader;

#[cfg(test)]
mod config_loader_tests;
#[cfg(test)]
mod generate_tests;
#[cfg(test)]
mod tree_loader_tests;

use std::io;

/// Failure to read the inputs of a run.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("{path}: invalid declaration tree: {source}")]
    Tree {
        path: String,
        source: serde_json::Error,
    },

    #[error("{path}: invalid config: {source}")]
    Config {
        path: String,
        source: serde_json::Error,
    },
}
