//! CLI argument parsing.
//!
//! Hand-rolled parser over any iterator of strings so the parsing logic is
//! fully testable without touching `std::env`.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run a kernel and print its report
    Run {
        /// Kernel name (`nbody` or `pidigits`).
        kernel: String,
        /// Optional YAML configuration file.
        config_path: Option<PathBuf>,
    },
    /// Run a kernel and check its output against reference values
    Verify {
        /// Kernel name.
        kernel: String,
        /// Optional YAML configuration file.
        config_path: Option<PathBuf>,
    },
    /// List available kernels
    List,
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_kernel_command(&args[2..], false),
            "verify" => Self::parse_kernel_command(&args[2..], true),
            "list" => Command::List,
            "version" | "--version" | "-V" => Command::Version,
            _ => Command::Help,
        };

        Self { command }
    }

    fn parse_kernel_command(rest: &[String], verify: bool) -> Command {
        let Some(kernel) = rest.first() else {
            return Command::Help;
        };
        let kernel = kernel.clone();

        let mut config_path = None;
        let mut index = 1;
        while index < rest.len() {
            if rest[index] == "--config" {
                if let Some(path) = rest.get(index + 1) {
                    config_path = Some(PathBuf::from(path));
                    index += 2;
                    continue;
                }
                return Command::Help;
            }
            return Command::Help;
        }

        if verify {
            Command::Verify {
                kernel,
                config_path,
            }
        } else {
            Command::Run {
                kernel,
                config_path,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Command {
        Args::parse_from(args.iter().copied()).command
    }

    #[test]
    fn test_no_args_shows_help() {
        assert_eq!(parse(&["numbench"]), Command::Help);
    }

    #[test]
    fn test_run_kernel() {
        assert_eq!(
            parse(&["numbench", "run", "nbody"]),
            Command::Run {
                kernel: "nbody".to_string(),
                config_path: None,
            }
        );
    }

    #[test]
    fn test_run_with_config() {
        assert_eq!(
            parse(&["numbench", "run", "pidigits", "--config", "bench.yaml"]),
            Command::Run {
                kernel: "pidigits".to_string(),
                config_path: Some(PathBuf::from("bench.yaml")),
            }
        );
    }

    #[test]
    fn test_run_without_kernel_shows_help() {
        assert_eq!(parse(&["numbench", "run"]), Command::Help);
    }

    #[test]
    fn test_run_with_dangling_config_flag_shows_help() {
        assert_eq!(parse(&["numbench", "run", "nbody", "--config"]), Command::Help);
    }

    #[test]
    fn test_run_with_unknown_flag_shows_help() {
        assert_eq!(parse(&["numbench", "run", "nbody", "--fast"]), Command::Help);
    }

    #[test]
    fn test_verify_kernel() {
        assert_eq!(
            parse(&["numbench", "verify", "nbody"]),
            Command::Verify {
                kernel: "nbody".to_string(),
                config_path: None,
            }
        );
    }

    #[test]
    fn test_list() {
        assert_eq!(parse(&["numbench", "list"]), Command::List);
    }

    #[test]
    fn test_version_variants() {
        assert_eq!(parse(&["numbench", "version"]), Command::Version);
        assert_eq!(parse(&["numbench", "--version"]), Command::Version);
        assert_eq!(parse(&["numbench", "-V"]), Command::Version);
    }

    #[test]
    fn test_unknown_command_shows_help() {
        assert_eq!(parse(&["numbench", "frobnicate"]), Command::Help);
    }
}
