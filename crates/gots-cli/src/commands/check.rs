use std::path::PathBuf;

use gots_compiler::Diagnostics;

use super::LoadError;
use super::config_loader::{Overrides, build_config, load_config};
use super::tree_loader::load_tree;

pub struct CheckArgs {
    pub tree_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub type_mappings: Vec<(String, String)>,
    pub strict: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let (tree_name, diagnostics) = check(&args).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    if !diagnostics.is_empty() {
        eprint!(
            "{}",
            diagnostics
                .printer()
                .path(&tree_name)
                .colored(args.color)
                .render()
        );
    }
    if !is_valid(&diagnostics, args.strict) {
        std::process::exit(1);
    }

    // Silent on a clean tree (like cargo check)
}

/// Translate and keep only the diagnostics.
pub fn check(args: &CheckArgs) -> Result<(String, Diagnostics), LoadError> {
    let config = build_config(
        load_config(args.config_path.as_deref())?,
        Overrides {
            type_mappings: args.type_mappings.clone(),
            ..Overrides::default()
        },
    );
    let tree = load_tree(&args.tree_path)?;
    let translation = gots_compiler::translate(&tree.file, &config);
    Ok((tree.name, translation.diagnostics))
}

pub fn is_valid(diagnostics: &Diagnostics, strict: bool) -> bool {
    if strict {
        diagnostics.is_empty()
    } else {
        !diagnostics.has_errors()
    }
}
