//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands,
//! visible or hidden (via `.hide(true)`).

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Declaration tree file, or `-` for stdin (positional).
pub fn tree_path_arg() -> Arg {
    Arg::new("tree_path")
        .value_name("TREE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON declaration tree, or - for stdin")
}

/// Config file (-c/--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON config file with `indent` and `typeMappings`")
}

/// Indentation string (--indent).
pub fn indent_arg() -> Arg {
    Arg::new("indent")
        .long("indent")
        .value_name("STR")
        .help("Indentation per nesting level (default: tab)")
}

/// Qualified type mapping (--type-mapping KEY=VALUE), repeatable.
pub fn type_mapping_arg() -> Arg {
    Arg::new("type_mapping")
        .long("type-mapping")
        .value_name("KEY=VALUE")
        .action(ArgAction::Append)
        .value_parser(parse_type_mapping)
        .help("Map a qualified Go type to a TypeScript type, e.g. time.Time=string")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Fail on any diagnostic (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Fail on errors; `check` also fails on warnings")
}

pub(super) fn parse_type_mapping(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, ts)) if !key.is_empty() && !ts.is_empty() => {
            Ok((key.to_string(), ts.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got `{value}`")),
    }
}
