//! Benchmark kernels.
//!
//! Two self-contained numeric kernels, each a pure function of compiled-in
//! constants:
//!
//! 1. [`nbody`] — five-body gravitational simulation, fixed pairwise
//!    interaction schedule, total-energy observable.
//! 2. [`pidigits`] — streaming spigot extraction of pi digits over
//!    arbitrary-precision integers.
//!
//! The [`Kernel`] trait gives the harness CLI a uniform way to run a kernel
//! and verify its output against published reference values; the typed
//! entry points (`nbody::simulate`, `pidigits::pi_digit`) remain the
//! primary API.

pub mod nbody;
pub mod pidigits;

pub use nbody::NbodyKernel;
pub use pidigits::PidigitsKernel;

use serde::{Deserialize, Serialize};

use crate::config::BenchConfig;
use crate::error::{BenchError, BenchResult};

/// Common trait for benchmark kernels.
pub trait Kernel {
    /// Kernel name for display and CLI lookup.
    fn name(&self) -> &'static str;

    /// One-line description of what the kernel computes.
    fn description(&self) -> &'static str;

    /// Run the kernel to completion and return its rendered output.
    fn run(&self) -> KernelOutput;

    /// Run the kernel and check the result against reference values.
    fn verify(&self) -> VerificationStatus;
}

/// Rendered result of a kernel run.
///
/// Values are carried as their exact printed form so the harness reproduces
/// the reference output byte for byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelOutput {
    /// Elapsed wall-clock time in milliseconds.
    pub elapsed_ms: u128,
    /// Initial observable, where the kernel reports one (n-body energy).
    pub initial: Option<String>,
    /// Final observable.
    pub result: String,
}

/// Verification outcome for a kernel run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationStatus {
    /// Whether every criterion passed.
    pub verified: bool,
    /// Individual criteria and their status.
    pub criteria: Vec<CriterionStatus>,
    /// Overall message.
    pub message: String,
}

/// Status of a single verification criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionStatus {
    /// Criterion ID (e.g., "NB-ENERGY-FINAL").
    pub id: String,
    /// Criterion name.
    pub name: String,
    /// Whether it passed.
    pub passed: bool,
    /// Observed value (deviation for tolerance checks).
    pub value: f64,
    /// Threshold for passing.
    pub threshold: f64,
}

/// Look up a kernel by name, configured from `config`.
///
/// # Errors
///
/// Returns [`BenchError::UnknownKernel`] for any name other than
/// `nbody` or `pidigits`.
pub fn lookup(name: &str, config: &BenchConfig) -> BenchResult<Box<dyn Kernel>> {
    match name {
        "nbody" => Ok(Box::new(NbodyKernel::new(config.nbody.clone()))),
        "pidigits" => Ok(Box::new(PidigitsKernel::new(config.pidigits.clone()))),
        other => Err(BenchError::unknown_kernel(other)),
    }
}

/// Names of all available kernels, in display order.
#[must_use]
pub fn kernel_names() -> &'static [&'static str] {
    &["nbody", "pidigits"]
}
