use std::fs;
use std::path::PathBuf;

use gots_compiler::Translation;

use super::LoadError;
use super::config_loader::{Overrides, build_config, load_config};
use super::tree_loader::load_tree;

pub struct GenerateArgs {
    pub tree_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub indent: Option<String>,
    pub type_mappings: Vec<(String, String)>,
    pub output: Option<PathBuf>,
    pub strict: bool,
    pub color: bool,
}

/// Result of a run, before anything is printed.
pub struct Generated {
    pub tree_name: String,
    pub translation: Translation,
    /// Strict mode and at least one error.
    pub failed: bool,
}

pub fn run(args: GenerateArgs) {
    let generated = generate(&args).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    let diagnostics = &generated.translation.diagnostics;
    if !diagnostics.is_empty() {
        eprint!(
            "{}",
            diagnostics
                .printer()
                .path(&generated.tree_name)
                .colored(args.color)
                .render()
        );
    }
    if generated.failed {
        std::process::exit(1);
    }

    let output = &generated.translation.output;
    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, output) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        }
        None => print!("{}", output),
    }
}

/// Load inputs and translate.
pub fn generate(args: &GenerateArgs) -> Result<Generated, LoadError> {
    let file_config = load_config(args.config_path.as_deref())?;
    let config = build_config(
        file_config,
        Overrides {
            indent: args.indent.clone(),
            type_mappings: args.type_mappings.clone(),
            // Escape codes never go into files
            colored: args.color && args.output.is_none(),
        },
    );

    let tree = load_tree(&args.tree_path)?;
    let translation = gots_compiler::translate(&tree.file, &config);
    let failed = args.strict && translation.diagnostics.has_errors();

    Ok(Generated {
        tree_name: tree.name,
        translation,
        failed,
    })
}
