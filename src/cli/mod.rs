//! CLI for the numbench harness.
//!
//! All CLI logic lives here rather than in `main.rs` so command dispatch
//! and output formatting are reachable from tests. The fixed-scenario
//! `nbody` and `pidigits` binaries do not go through this module.

mod args;
mod commands;
mod output;

pub use args::{Args, Command};
pub use commands::run_cli;
pub use output::{format_report, print_help, print_kernel_list, print_report, print_verification, print_version};
