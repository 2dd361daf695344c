use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandCall {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub status: i32,
    /// Merged stdout and stderr, or the launch error when the process never started.
    pub output: String,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

pub trait CommandRunner {
    fn run(&self, command: &CommandCall) -> CommandResult;
}

#[derive(Debug, Default)]
pub struct RealCommandRunner;

impl CommandRunner for RealCommandRunner {
    fn run(&self, command: &CommandCall) -> CommandResult {
        let mut process = Command::new(&command.program);
        process
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(current_dir) = command.current_dir.as_deref() {
            process.current_dir(current_dir);
        }

        match process.output() {
            Ok(output) => {
                let mut merged = String::new();
                merged.push_str(&String::from_utf8_lossy(&output.stdout));
                merged.push_str(&String::from_utf8_lossy(&output.stderr));
                CommandResult {
                    status: output.status.code().unwrap_or(1),
                    output: merged,
                }
            }
            Err(error) => CommandResult {
                status: 1,
                output: format!("Failed to execute {}: {error}\n", command.display()),
            },
        }
    }
}

impl CommandCall {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            current_dir: None,
        }
    }

    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.current_dir = Some(dir.to_path_buf());
        self
    }

    pub fn to_vec(&self) -> Vec<String> {
        let mut parts = Vec::with_capacity(1 + self.args.len());
        parts.push(self.program.clone());
        parts.extend(self.args.iter().cloned());
        parts
    }

    /// Space-joined command line, as shown in the report.
    pub fn display(&self) -> String {
        self.to_vec().join(" ")
    }
}

/// Remove and recreate the log directory so each run starts empty.
pub fn reset_log_dir(log_dir: &Path) -> io::Result<()> {
    if log_dir.exists() {
        fs::remove_dir_all(log_dir)?;
    }
    fs::create_dir_all(log_dir)
}

/// Write captured command output to `<log_dir>/<slug>.log`.
pub fn write_log(log_dir: &Path, slug: &str, output: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(log_dir)?;
    let path = log_dir.join(format!("{slug}.log"));
    fs::write(&path, output)?;
    Ok(path)
}
