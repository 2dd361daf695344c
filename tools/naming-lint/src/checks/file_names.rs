use crate::checks::CheckResult;
use crate::config::{self, LintConfig};
use crate::walker;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static KEBAB_CASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:[.-][a-z0-9]+)*$").unwrap()
});

pub fn check(config: &LintConfig) -> CheckResult {
    let name = "Kebab-case file names".to_string();
    let files = walker::collect_source_files(
        &config.root_dir,
        &config::source_extensions(),
        &config::skip_dirs(),
    );
    let mut violations = Vec::new();

    for file in &files {
        let stem = base_name(file);
        if stem.is_some_and(is_kebab_case) {
            continue;
        }

        let rel_path = file.strip_prefix(&config.root_dir).unwrap_or(file);
        let fix = match stem.and_then(suggest_kebab_case) {
            Some(suggestion) => format!("Rename the file to {suggestion}.<ext>"),
            None => "Rename the file using lowercase letters, digits, '-' and '.'".to_string(),
        };
        violations.push(format!(
            "{} is not kebab-case.\n\
             \x20   Rule: Source file names must match [a-z0-9]+ segments joined by '-' or '.'.\n\
             \x20   Fix: {}",
            rel_path.display(),
            fix,
        ));
    }

    CheckResult {
        passed: violations.is_empty(),
        name,
        violations,
    }
}

/// File name without its final extension; `None` when it is not valid UTF-8.
pub fn base_name(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

pub fn is_kebab_case(name: &str) -> bool {
    KEBAB_CASE.is_match(name)
}

/// Best-effort kebab-case spelling of `name`, splitting camel humps and
/// turning any other separator into '-'.
pub fn suggest_kebab_case(name: &str) -> Option<String> {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c.is_ascii_uppercase() {
            if prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit()) {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-' {
            out.push(c);
        } else {
            out.push('-');
        }
        prev = Some(c);
    }

    let mut collapsed = String::with_capacity(out.len());
    for c in out.chars() {
        let is_sep = c == '-' || c == '.';
        let last_is_sep = collapsed.ends_with('-') || collapsed.ends_with('.');
        if is_sep && (collapsed.is_empty() || last_is_sep) {
            continue;
        }
        collapsed.push(c);
    }
    while collapsed.ends_with('-') || collapsed.ends_with('.') {
        collapsed.pop();
    }

    if is_kebab_case(&collapsed) {
        Some(collapsed)
    } else {
        None
    }
}
