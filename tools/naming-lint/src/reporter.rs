use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::io::{self, Write};

use crate::checks::CheckResult;

pub const SUCCESS_MESSAGE: &str = "all source file names are kebab-case";

/// Print each violation on its own, or a single confirmation when clean.
/// Returns the check's pass flag.
pub fn print_result<W: Write + ?Sized>(out: &mut W, result: &CheckResult) -> io::Result<bool> {
    if result.passed {
        writeln!(
            out,
            "{} {}: {}",
            "\u{2713}".if_supports_color(Stdout, |s| s.green()),
            result.name,
            SUCCESS_MESSAGE.if_supports_color(Stdout, |s| s.green()),
        )?;
        return Ok(true);
    }

    writeln!(
        out,
        "{} {}: {}",
        "\u{2717}".if_supports_color(Stdout, |s| s.red()),
        result.name,
        format!("{} violation(s)", result.violations.len())
            .if_supports_color(Stdout, |s| s.red()),
    )?;
    writeln!(out)?;
    for v in &result.violations {
        writeln!(out, "  {}", v.if_supports_color(Stdout, |s| s.dimmed()))?;
    }
    writeln!(out)?;

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(result: &CheckResult) -> (bool, String) {
        let mut out = Vec::new();
        let passed = print_result(&mut out, result).unwrap();
        (passed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn clean_result_prints_single_confirmation() {
        let (passed, text) = render(&CheckResult {
            name: "Kebab-case file names".to_string(),
            passed: true,
            violations: vec![],
        });
        assert!(passed);
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains(SUCCESS_MESSAGE));
    }

    #[test]
    fn failing_result_lists_every_violation() {
        let (passed, text) = render(&CheckResult {
            name: "Kebab-case file names".to_string(),
            passed: false,
            violations: vec![
                "src/MyComponent.ts is not kebab-case.".to_string(),
                "src/my_component.ts is not kebab-case.".to_string(),
            ],
        });
        assert!(!passed);
        assert!(text.contains("2 violation(s)"));
        assert!(text.contains("src/MyComponent.ts"));
        assert!(text.contains("src/my_component.ts"));
        assert!(!text.contains(SUCCESS_MESSAGE));
    }
}
