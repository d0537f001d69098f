//! CLI command handlers.

use std::path::Path;
use std::process::ExitCode;

use crate::config::BenchConfig;
use crate::error::BenchResult;
use crate::kernels;

use super::output::{
    print_help, print_kernel_list, print_report, print_verification, print_version,
};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            kernel,
            config_path,
        } => run_kernel(&kernel, config_path.as_deref()),
        Command::Verify {
            kernel,
            config_path,
        } => verify_kernel(&kernel, config_path.as_deref()),
        Command::List => list_kernels(),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

fn load_config(path: Option<&Path>) -> BenchResult<BenchConfig> {
    match path {
        Some(path) => BenchConfig::load(path),
        None => Ok(BenchConfig::default()),
    }
}

/// Run a kernel and print its report in the reference format.
fn run_kernel(name: &str, config_path: Option<&Path>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match kernels::lookup(name, &config) {
        Ok(kernel) => {
            log::info!("running kernel '{name}'");
            let output = kernel.run();
            print_report(&output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Run a kernel and check its result against reference values.
fn verify_kernel(name: &str, config_path: Option<&Path>) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match kernels::lookup(name, &config) {
        Ok(kernel) => {
            log::info!("verifying kernel '{name}'");
            let status = kernel.verify();
            print_verification(&status);
            if status.verified {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// List the available kernels.
fn list_kernels() -> ExitCode {
    let config = BenchConfig::default();
    let kernels: Vec<_> = kernels::kernel_names()
        .iter()
        .filter_map(|name| kernels::lookup(name, &config).ok())
        .collect();
    print_kernel_list(&kernels);
    ExitCode::SUCCESS
}
