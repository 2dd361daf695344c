use std::fs;
use std::path::Path;
use std::process::Command;

fn naming_lint_binary() -> &'static str {
    env!("CARGO_BIN_EXE_naming-lint")
}

fn run_naming_lint(root: &Path) -> (String, i32) {
    let output = Command::new(naming_lint_binary())
        .args(["--root-dir", root.to_str().unwrap()])
        .output()
        .expect("failed to run naming-lint");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let code = output.status.code().unwrap_or(1);
    (stdout, code)
}

#[test]
fn exits_zero_for_clean_tree() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("src")).unwrap();
    fs::write(root.path().join("src/use-config.ts"), "").unwrap();

    let (stdout, code) = run_naming_lint(root.path());

    assert_eq!(code, 0);
    assert!(stdout.contains("kebab-case"));
}

#[test]
fn exits_one_and_names_offending_file() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("src")).unwrap();
    fs::write(root.path().join("src/App.test.jsx"), "").unwrap();

    let (stdout, code) = run_naming_lint(root.path());

    assert_eq!(code, 1);
    assert!(stdout.contains("App.test.jsx"));
}
