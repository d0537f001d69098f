//! CLI output formatting.
//!
//! All user-facing report lines live here so they can be exercised from
//! tests. The kernel report format mirrors the reference implementations:
//! a `Time:` line, an optional `Initial:` line, and a `Result:` line.

use crate::kernels::{Kernel, KernelOutput, VerificationStatus};

/// Print version information.
pub fn print_version() {
    println!("numbench {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"numbench - deterministic numeric micro-benchmarks

USAGE:
    numbench <COMMAND> [OPTIONS]

COMMANDS:
    run <kernel>                Run a kernel and print its report
        --config <file.yaml>    Override step/digit counts from YAML

    verify <kernel>             Run a kernel and check the result against
                                published reference values
        --config <file.yaml>    Override step/digit counts from YAML

    list                        List available kernels

    help                        Show this help message
    version                     Show version information

KERNELS:
    nbody                       Five-body gravitational simulation
    pidigits                    Spigot extraction of pi digits

EXAMPLES:
    numbench run nbody
    numbench verify pidigits --config bench.yaml
"
    );
}

/// Render a kernel report in the reference output format.
#[must_use]
pub fn format_report(output: &KernelOutput) -> String {
    let mut report = format!("Time: {} ms\n", output.elapsed_ms);
    if let Some(initial) = &output.initial {
        report.push_str(&format!("Initial: {initial}\n"));
        // Two spaces after the colon keep the values column-aligned with
        // the Initial line, exactly as the reference output prints them.
        report.push_str(&format!("Result:  {}\n", output.result));
    } else {
        report.push_str(&format!("Result: {}\n", output.result));
    }
    report
}

/// Print a kernel report.
pub fn print_report(output: &KernelOutput) {
    print!("{}", format_report(output));
}

/// Print a verification report.
pub fn print_verification(status: &VerificationStatus) {
    println!("{}", status.message);
    for criterion in &status.criteria {
        let symbol = if criterion.passed { "✓" } else { "✗" };
        println!(
            "  {symbol} [{}] {} (value {:.3e}, threshold {:.3e})",
            criterion.id, criterion.name, criterion.value, criterion.threshold
        );
    }
}

/// Print the kernel list.
pub fn print_kernel_list(kernels: &[Box<dyn Kernel>]) {
    println!("Available kernels:");
    for kernel in kernels {
        println!("  {:<10} {}", kernel.name(), kernel.description());
    }
}
