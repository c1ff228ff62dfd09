//! Config file loading and command-line overrides.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use gots_compiler::Config;
use serde::Deserialize;

use super::LoadError;

/// On-disk config, e.g. `{ "indent": "  ", "typeMappings": { "time.Time": "string" } }`.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub indent: Option<String>,
    #[serde(default)]
    pub type_mappings: BTreeMap<String, String>,
}

impl ConfigFile {
    pub fn parse(name: &str, text: &str) -> Result<Self, LoadError> {
        serde_json::from_str(text).map_err(|source| LoadError::Config {
            path: name.to_string(),
            source,
        })
    }
}

/// Read the config file, or the defaults when none was given.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, LoadError> {
    let Some(path) = path else {
        return Ok(ConfigFile::default());
    };
    let name = path.to_string_lossy();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: name.to_string(),
        source,
    })?;
    ConfigFile::parse(&name, &text)
}

/// Values given on the command line, applied over the file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub indent: Option<String>,
    pub type_mappings: Vec<(String, String)>,
    pub colored: bool,
}

pub fn build_config(file: ConfigFile, overrides: Overrides) -> Config {
    let mut config = Config::new()
        .type_mappings(file.type_mappings)
        .type_mappings(overrides.type_mappings)
        .colored(overrides.colored);
    if let Some(indent) = overrides.indent.or(file.indent) {
        config = config.indent(indent);
    }
    config
}
