use std::fs;
use std::io::{self, Read};
use std::path::Path;

use gots_core::File;

use super::LoadError;

/// A decoded tree with the name diagnostics refer to it by.
#[derive(Debug)]
pub struct TreeInput {
    pub name: String,
    pub file: File,
}

pub fn load_tree(path: &Path) -> Result<TreeInput, LoadError> {
    let (name, text) = if path.as_os_str() == "-" {
        ("<stdin>".to_string(), read_stdin()?)
    } else {
        let name = path.to_string_lossy().into_owned();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: name.clone(),
            source,
        })?;
        (name, text)
    };
    parse_tree(name, &text)
}

pub fn parse_tree(name: String, text: &str) -> Result<TreeInput, LoadError> {
    match gots_core::parse_file(text) {
        Ok(file) => {
            tracing::debug!(path = %name, decls = file.decls.len(), "loaded tree");
            Ok(TreeInput { name, file })
        }
        Err(source) => Err(LoadError::Tree { path: name, source }),
    }
}

fn read_stdin() -> Result<String, LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| LoadError::Read {
            path: "<stdin>".to_string(),
            source,
        })?;
    Ok(buf)
}
