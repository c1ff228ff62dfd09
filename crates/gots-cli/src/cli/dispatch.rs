//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` pulls the relevant fields, ignoring hidden ones
//! - `Into<*Args>` impls bridge dispatch and command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub tree_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub indent: Option<String>,
    pub type_mappings: Vec<(String, String)>,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub color: ColorChoice,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            // Input
            tree_path: tree_path(m),
            config_path: m.get_one::<PathBuf>("config").cloned(),

            // Config overrides
            indent: m.get_one::<String>("indent").cloned(),
            type_mappings: type_mappings(m),

            // Output
            output: m.get_one::<PathBuf>("output").cloned(),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            tree_path: p.tree_path,
            config_path: p.config_path,
            indent: p.indent,
            type_mappings: p.type_mappings,
            output: p.output,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub tree_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub type_mappings: Vec<(String, String)>,
    pub strict: bool,
    pub color: ColorChoice,
    // Note: output and indent are accepted but not extracted
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: tree_path(m),
            config_path: m.get_one::<PathBuf>("config").cloned(),
            type_mappings: type_mappings(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            tree_path: p.tree_path,
            config_path: p.config_path,
            type_mappings: p.type_mappings,
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

/// The tree positional is required, so clap has always filled it.
fn tree_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("tree_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn type_mappings(m: &ArgMatches) -> Vec<(String, String)> {
    m.get_many::<(String, String)>("type_mapping")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
