use std::path::PathBuf;
use std::process;

use naming_lint::config::LintConfig;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let mut root_dir: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        if args[i] == "--root-dir" && i + 1 < args.len() {
            root_dir = Some(PathBuf::from(&args[i + 1]));
            i += 2;
            continue;
        }
        i += 1;
    }

    let config = match root_dir {
        Some(dir) => LintConfig::from_root(&dir),
        None => match LintConfig::discover_or_cwd() {
            Ok(c) => c,
            Err(err) => {
                eprintln!("Error: could not determine project root: {err}");
                process::exit(1);
            }
        },
    };

    let mut stdout = std::io::stdout().lock();
    let code = match naming_lint::validate(&config.root_dir, &mut stdout) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    };

    process::exit(code);
}
