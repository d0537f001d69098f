//! numbench CLI - benchmark harness entry point.

use std::process::ExitCode;

use numbench::cli::{run_cli, Args};

fn main() -> ExitCode {
    env_logger::init();
    run_cli(Args::parse())
}
