//! Command builders for the CLI.
//!
//! `check` accepts `generate`'s output flags, hidden from `--help`, so the
//! same invocation can be switched between the two.

use clap::Command;

use super::args::*;

/// Add hidden output args (for commands that print no TypeScript).
fn with_hidden_output_args(cmd: Command) -> Command {
    cmd.arg(output_file_arg().hide(true))
        .arg(indent_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("gots")
        .about("TypeScript declarations from Go declaration trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
}

/// Translate a tree and print or write TypeScript.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Translate a declaration tree to TypeScript")
        .override_usage(
            "\
  gots generate <TREE>
  gots generate <TREE> -o <FILE>
  gots generate - < tree.json",
        )
        .after_help(
            r#"EXAMPLES:
  gots generate models.json                          # print to stdout
  gots generate models.json -o models.d.ts           # write to file
  gots generate models.json -c gots.json             # config file
  gots generate models.json --type-mapping time.Time=string
  gots generate models.json --indent '  ' --strict   # fail on errors"#,
        )
        .arg(tree_path_arg())
        .arg(config_arg())
        .arg(indent_arg())
        .arg(type_mapping_arg())
        .arg(output_file_arg())
        .arg(color_arg())
        .arg(strict_arg())
}

/// Translate a tree and report diagnostics only.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report what would be dropped or degraded")
        .override_usage(
            "\
  gots check <TREE>
  gots check <TREE> --strict",
        )
        .after_help(
            r#"EXAMPLES:
  gots check models.json              # fail on errors
  gots check models.json --strict     # fail on warnings too"#,
        )
        .arg(tree_path_arg())
        .arg(config_arg())
        .arg(type_mapping_arg())
        .arg(color_arg())
        .arg(strict_arg());

    with_hidden_output_args(cmd)
}
