//! Test utilities.

use gots_core::File;

use crate::{Config, Translation, translate};

/// Config used by snapshot tests: two-space indent keeps snapshots readable.
pub fn test_config() -> Config {
    Config::new().indent("  ")
}

/// Translate `decls` as one file with [`test_config`].
pub fn run(decls: Vec<gots_core::Decl>) -> Translation {
    translate(&File::new(decls), &test_config())
}

/// Translate and return the output, asserting no diagnostics were produced.
pub fn expect_clean(decls: Vec<gots_core::Decl>) -> String {
    let res = run(decls);
    assert!(
        res.diagnostics.is_empty(),
        "unexpected diagnostics:\n{}",
        res.diagnostics.printer().render_plain()
    );
    res.output
}

/// Output followed by rendered diagnostics, for snapshotting both at once.
pub fn with_diagnostics(res: &Translation) -> String {
    format!(
        "{}---\n{}",
        res.output,
        res.diagnostics.printer().render_plain()
    )
}

/// Translate a JSON-encoded tree; output and diagnostics for snapshotting.
pub fn shot_json(json: &str) -> String {
    let res = crate::translate_json(json, &test_config()).expect("valid tree");
    with_diagnostics(&res)
}
