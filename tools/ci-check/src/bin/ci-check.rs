use ci_check::checks::{self, CheckContext};
use ci_check::{reporter, runner, RealCommandRunner};
use std::io::{self, Write};
use std::process;
use std::time::Instant;

fn main() {
    let context = match CheckContext::current() {
        Ok(context) => context,
        Err(err) => {
            eprintln!("Error: could not determine project root: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = runner::reset_log_dir(&context.log_dir) {
        eprintln!("warning: could not reset {}: {err}", context.log_dir.display());
    }

    let total_start = Instant::now();
    let mut stdout = io::stdout().lock();
    let results = checks::run_checks(&checks::default_checks(), &context, &RealCommandRunner, &mut stdout);

    let total_elapsed = total_start.elapsed().as_secs();
    let code = match reporter::print_report(&mut stdout, &results, total_elapsed) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    };
    stdout.flush().ok();

    process::exit(code);
}
