use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Directories that are never traversed. Pruned before descent, so their
/// contents are never read.
pub const SKIP_DIRS: &[&str] = &["node_modules", ".git", "dist"];

/// Extensions of the markup, script and style sources whose names are checked.
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "js", "jsx", "mjs", "cjs", "ts", "tsx", "json", "css", "scss", "html",
];

/// Marker file that identifies the project root during discovery.
pub const ROOT_MARKER: &str = "package.json";

pub fn skip_dirs() -> HashSet<&'static str> {
    SKIP_DIRS.iter().copied().collect()
}

pub fn source_extensions() -> HashSet<&'static str> {
    SOURCE_EXTENSIONS.iter().copied().collect()
}

#[derive(Debug, Clone)]
pub struct LintConfig {
    pub root_dir: PathBuf,
}

impl LintConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
        }
    }

    /// Walk up from cwd to the first directory holding `package.json`.
    pub fn discover() -> Option<Self> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_from(&cwd)
    }

    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            if dir.join(ROOT_MARKER).is_file() {
                return Some(Self::from_root(&dir));
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Discovered root, falling back to the current directory.
    pub fn discover_or_cwd() -> std::io::Result<Self> {
        match Self::discover() {
            Some(config) => Ok(config),
            None => Ok(Self::from_root(&std::env::current_dir()?)),
        }
    }
}
