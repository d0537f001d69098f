//! # numbench
//!
//! Two deterministic numeric micro-benchmarks from the cross-language
//! benchmarks game lineage:
//!
//! - [`kernels::nbody`] — five-body gravitational simulation with a fixed
//!   pairwise interaction schedule, reporting total system energy.
//! - [`kernels::pidigits`] — streaming spigot extraction of pi digits over
//!   arbitrary-precision integers.
//!
//! Each kernel is a pure function of compiled-in constants: same input,
//! same output, bit for bit, every run. The crate ships two fixed-scenario
//! binaries (`nbody`, `pidigits`) plus a `numbench` harness CLI that can
//! run either kernel and verify results against published reference values.
//!
//! ## Example
//!
//! ```rust
//! use numbench::kernels::nbody;
//!
//! // Energy of the untouched initial system.
//! let e0 = nbody::simulate(0);
//! assert!((e0 - -0.169_075_164).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::suboptimal_flops,  // Operation order is load-bearing in the kernels
    clippy::imprecise_flops,   // Numerical code choices are intentional
    clippy::missing_const_for_fn,
    clippy::many_single_char_names  // Spigot accumulators follow the published recurrence
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod kernels;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::BenchConfig;
    pub use crate::error::{BenchError, BenchResult};
    pub use crate::kernels::{CriterionStatus, Kernel, KernelOutput, VerificationStatus};
}

/// Re-export for public API
pub use error::{BenchError, BenchResult};
