use crate::runner::{self, CommandCall, CommandRunner};
use naming_lint::config::LintConfig;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Directory under the project root that holds per-check output logs.
pub const LOG_DIR_NAME: &str = ".ci-check";

/// In-process check: receives the project root and the report stream.
pub type ValidatorFn = fn(&Path, &mut dyn Write) -> io::Result<bool>;

#[derive(Debug, Clone)]
pub enum Action {
    Command(CommandCall),
    Validator { label: &'static str, run: ValidatorFn },
}

#[derive(Debug, Clone)]
pub struct Check {
    pub name: String,
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub descriptor: String,
    pub passed: bool,
    pub elapsed_secs: u64,
    /// Captured output of a command check, relative to the project root.
    pub log_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct CheckContext {
    pub root_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl CheckContext {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            log_dir: root.join(LOG_DIR_NAME),
        }
    }

    pub fn current() -> io::Result<Self> {
        let config = LintConfig::discover_or_cwd()?;
        Ok(Self::from_root(&config.root_dir))
    }
}

impl Check {
    pub fn command(name: &str, program: &str, args: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            action: Action::Command(CommandCall::new(
                program,
                args.iter().map(|a| a.to_string()).collect(),
            )),
        }
    }

    pub fn validator(name: &str, label: &'static str, run: ValidatorFn) -> Self {
        Self {
            name: name.to_string(),
            action: Action::Validator { label, run },
        }
    }

    pub fn descriptor(&self) -> String {
        match &self.action {
            Action::Command(call) => call.display(),
            Action::Validator { label, .. } => label.to_string(),
        }
    }

    /// Lowercased name with spaces turned into '-'; names the log file.
    pub fn slug(&self) -> String {
        self.name
            .trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }
}

pub fn default_checks() -> Vec<Check> {
    vec![
        Check::command("Format", "npm", &["run", "format:check"]),
        Check::command("Lint", "npm", &["run", "lint"]),
        Check::command("Typecheck", "npm", &["run", "typecheck"]),
        Check::command("Test", "npm", &["run", "test"]),
        Check::validator("File names", "kebab-case file names", check_file_names),
    ]
}

fn check_file_names(root: &Path, out: &mut dyn Write) -> io::Result<bool> {
    naming_lint::validate(root, out)
}

/// Run every check in order. A failing check never stops the ones after it.
pub fn run_checks<R, W>(
    checks: &[Check],
    context: &CheckContext,
    runner: &R,
    out: &mut W,
) -> Vec<CheckResult>
where
    R: CommandRunner + ?Sized,
    W: Write,
{
    checks
        .iter()
        .map(|check| run_check(check, context, runner, &mut *out))
        .collect()
}

fn run_check<R, W>(check: &Check, context: &CheckContext, runner: &R, out: &mut W) -> CheckResult
where
    R: CommandRunner + ?Sized,
    W: Write,
{
    let start = Instant::now();
    let (passed, log_path) = match &check.action {
        Action::Command(call) => {
            let call = match call.current_dir {
                Some(_) => call.clone(),
                None => call.clone().in_dir(&context.root_dir),
            };
            let result = runner.run(&call);
            let log_path = match runner::write_log(&context.log_dir, &check.slug(), &result.output) {
                Ok(path) => Some(path.strip_prefix(&context.root_dir).unwrap_or(&path).to_path_buf()),
                Err(err) => {
                    eprintln!("warning: could not write log for {}: {err}", check.name);
                    None
                }
            };
            (result.success(), log_path)
        }
        Action::Validator { run, .. } => match run(&context.root_dir, &mut *out) {
            Ok(passed) => (passed, None),
            Err(err) => {
                eprintln!("warning: {} could not report: {err}", check.name);
                (false, None)
            }
        },
    };

    CheckResult {
        name: check.name.clone(),
        descriptor: check.descriptor(),
        passed,
        elapsed_secs: start.elapsed().as_secs(),
        log_path,
    }
}

/// Overall outcome: true iff every check passed.
pub fn all_passed(results: &[CheckResult]) -> bool {
    results.iter().all(|r| r.passed)
}
