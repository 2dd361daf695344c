use crate::checks::CheckResult;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io::{self, Write};

/// Print one row per check, names padded to the longest one, then a
/// PASS/FAIL summary line. Returns true if all passed.
pub fn print_report<W: Write>(out: &mut W, results: &[CheckResult], total_elapsed_secs: u64) -> io::Result<bool> {
    let width = results
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0);
    let failed = results.iter().filter(|r| !r.passed).count();

    writeln!(out)?;
    for result in results {
        if result.passed {
            writeln!(
                out,
                "  {} {:<width$}  {}  {}  {}",
                "\u{2713}".if_supports_color(Stdout, |s| s.green()),
                result.name,
                "PASSED".if_supports_color(Stdout, |s| s.green()),
                result.descriptor,
                format!("{}s", result.elapsed_secs).if_supports_color(Stdout, |s| s.dimmed()),
                width = width,
            )?;
        } else {
            let hint = match &result.log_path {
                Some(path) => format!("{}s  \u{2192} {}", result.elapsed_secs, path.display()),
                None => format!("{}s", result.elapsed_secs),
            };
            writeln!(
                out,
                "  {} {:<width$}  {}  {}  {}",
                "\u{2717}".if_supports_color(Stdout, |s| s.red()),
                result.name,
                "FAILED".if_supports_color(Stdout, |s| s.red()),
                result.descriptor,
                hint.if_supports_color(Stdout, |s| s.dimmed()),
                width = width,
            )?;
        }
    }

    writeln!(out)?;
    if failed == 0 {
        writeln!(
            out,
            "  {}  {}",
            "PASS".if_supports_color(Stdout, |s| s.green()),
            format!("({}s)  all {} check(s) passed", total_elapsed_secs, results.len())
                .if_supports_color(Stdout, |s| s.dimmed()),
        )?;
    } else {
        writeln!(
            out,
            "  {}  {}",
            "FAIL".if_supports_color(Stdout, |s| s.red()),
            format!("({}s)  {} of {} check(s) failed", total_elapsed_secs, failed, results.len())
                .if_supports_color(Stdout, |s| s.dimmed()),
        )?;
    }
    writeln!(out)?;

    Ok(failed == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn result(name: &str, descriptor: &str, passed: bool, log: Option<&str>) -> CheckResult {
        CheckResult {
            name: name.to_string(),
            descriptor: descriptor.to_string(),
            passed,
            elapsed_secs: 1,
            log_path: log.map(PathBuf::from),
        }
    }

    fn render(results: &[CheckResult]) -> (bool, String) {
        let mut out = Vec::new();
        let passed = print_report(&mut out, results, 3).unwrap();
        (passed, strip_ansi(&String::from_utf8(out).unwrap()))
    }

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for next in chars.by_ref() {
                    if next == 'm' {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn all_passing_returns_true() {
        let (passed, text) = render(&[
            result("Format", "npm run format:check", true, Some(".ci-check/format.log")),
            result("Lint", "npm run lint", true, Some(".ci-check/lint.log")),
        ]);
        assert!(passed);
        assert!(text.contains("PASS"));
        assert!(text.contains("all 2 check(s) passed"));
        assert!(!text.contains("format.log"), "passing rows do not point at logs");
    }

    #[test]
    fn any_failure_returns_false_and_points_at_log() {
        let (passed, text) = render(&[
            result("Format", "npm run format:check", true, Some(".ci-check/format.log")),
            result("Lint", "npm run lint", false, Some(".ci-check/lint.log")),
        ]);
        assert!(!passed);
        assert!(text.contains("FAILED  npm run lint"));
        assert!(text.contains("\u{2192} .ci-check/lint.log"));
        assert!(text.contains("1 of 2 check(s) failed"));
    }

    #[test]
    fn empty_results_returns_true() {
        let (passed, _) = render(&[]);
        assert!(passed);
    }

    #[test]
    fn rows_align_to_longest_name() {
        let (_, text) = render(&[
            result("Lint", "npm run lint", true, None),
            result("File names", "kebab-case file names", false, None),
        ]);
        let rows: Vec<&str> = text.lines().filter(|l| l.contains("npm") || l.contains("kebab")).collect();
        assert_eq!(rows.len(), 2);
        let status_col: Vec<usize> = rows
            .iter()
            .map(|row| row.find("PASSED").or_else(|| row.find("FAILED")).unwrap())
            .collect();
        assert_eq!(status_col[0], status_col[1]);
        assert!(rows[0].contains("Lint        PASSED"));
    }
}
