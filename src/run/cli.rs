use anyhow::Result;

use crate::logging;

/// Handle command-line arguments. Returns `true` when the TUI should start.
pub(crate) fn as_cli(args: &[String]) -> Result<bool> {
    let mut rest = args.iter().skip(1);
    let mut launch = true;

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--help" | "-h" | "help" => {
                print_usage();
                launch = false;
            }
            "--version" | "-V" | "version" => {
                println!("pocketplan {}", env!("CARGO_PKG_VERSION"));
                launch = false;
            }
            "--log-file" => {
                let Some(path) = rest.next() else {
                    print_usage();
                    anyhow::bail!("--log-file requires a path");
                };
                logging::init_file(&shellexpand(path))?;
            }
            other => {
                print_usage();
                anyhow::bail!("Unknown command: {other}");
            }
        }
    }

    Ok(launch)
}

fn print_usage() {
    println!("PocketPlan — personal expense tracker");
    println!();
    println!("Usage: pocketplan [options]");
    println!();
    println!("Options:");
    println!("  (none)                        Launch interactive TUI");
    println!("  --log-file <path>             Write debug logs to a file");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Nothing is saved between sessions.");
}

fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("pocketplan")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_no_args_launches_tui() {
        assert!(as_cli(&args(&[])).unwrap());
    }

    #[test]
    fn test_help_and_version_do_not_launch() {
        assert!(!as_cli(&args(&["--help"])).unwrap());
        assert!(!as_cli(&args(&["-V"])).unwrap());
    }

    #[test]
    fn test_unknown_argument_fails() {
        let err = as_cli(&args(&["export"])).unwrap_err();
        assert_eq!(err.to_string(), "Unknown command: export");
    }

    #[test]
    fn test_log_file_requires_path() {
        assert!(as_cli(&args(&["--log-file"])).is_err());
    }

    #[test]
    fn test_shellexpand() {
        assert_eq!(shellexpand("/tmp/x.log"), "/tmp/x.log");
        assert!(!shellexpand("~/x.log").starts_with('~'));
    }
}
