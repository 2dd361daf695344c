pub mod checks;
pub mod config;
pub mod reporter;
pub mod walker;

use config::LintConfig;
use std::io::{self, Write};
use std::path::Path;

/// Check every source file name under `root` and print the outcome.
/// Returns true iff no file violates the naming convention.
pub fn validate<W: Write + ?Sized>(root: &Path, out: &mut W) -> io::Result<bool> {
    let config = LintConfig::from_root(root);
    let result = checks::file_names::check(&config);
    reporter::print_result(out, &result)
}
