use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Recursively collect files whose extension is in `extensions`, never
/// descending into directories named in `skip_dirs`. Results are sorted.
pub fn collect_source_files(
    dir: &Path,
    extensions: &HashSet<&str>,
    skip_dirs: &HashSet<&str>,
) -> Vec<PathBuf> {
    walk_source_files(dir, extensions, skip_dirs, &mut |_| {})
}

/// Same as [`collect_source_files`], calling `on_read_dir` for every
/// directory whose entries are listed.
pub fn walk_source_files(
    dir: &Path,
    extensions: &HashSet<&str>,
    skip_dirs: &HashSet<&str>,
    on_read_dir: &mut dyn FnMut(&Path),
) -> Vec<PathBuf> {
    let mut results = Vec::new();
    collect_inner(dir, extensions, skip_dirs, on_read_dir, &mut results);
    results.sort();
    results
}

fn collect_inner(
    dir: &Path,
    extensions: &HashSet<&str>,
    skip_dirs: &HashSet<&str>,
    on_read_dir: &mut dyn FnMut(&Path),
    results: &mut Vec<PathBuf>,
) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };
    on_read_dir(dir);

    for entry in entries.flatten() {
        // Symlinks are not followed into directories.
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        let path = entry.path();

        if file_type.is_dir() {
            let name = entry.file_name();
            let skipped = name.to_str().is_some_and(|n| skip_dirs.contains(n));
            if !skipped {
                collect_inner(&path, extensions, skip_dirs, on_read_dir, results);
            }
        } else if (file_type.is_file() || (file_type.is_symlink() && path.is_file()))
            && has_source_extension(&path, extensions)
        {
            results.push(path);
        }
    }
}

fn has_source_extension(path: &Path, extensions: &HashSet<&str>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(ext))
}
