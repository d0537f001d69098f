//! End-to-end checks against the published reference values.
//!
//! The n-body energies come from the Computer Language Benchmarks Game
//! reference output for the five-body scenario; the pi digits are checked
//! against the known decimal expansion.

use num_bigint::BigInt;
use num_traits::Zero;

use numbench::config::BenchConfig;
use numbench::kernels::nbody::{self, SolarSystem};
use numbench::kernels::pidigits::pi_digit;
use numbench::kernels;

// Absolute tolerance for energy comparisons. Reference values are published
// to nine decimal places; bit-exact agreement across languages is not
// guaranteed, closeness is.
const ENERGY_TOLERANCE: f64 = 1e-9;

#[test]
fn nbody_initial_energy_matches_published_value() {
    let energy = nbody::simulate(0);
    assert!(
        (energy - nbody::INITIAL_ENERGY_REF).abs() < ENERGY_TOLERANCE,
        "initial energy {energy} vs published {}",
        nbody::INITIAL_ENERGY_REF
    );
}

#[test]
fn nbody_momentum_is_zero_after_initialization() {
    let (px, py, pz) = SolarSystem::initial().momentum();
    assert!(px.abs() < 1e-12 && py.abs() < 1e-12 && pz.abs() < 1e-12);
}

#[test]
fn nbody_energy_after_1000_steps_matches_published_value() {
    let energy = nbody::simulate(1000);
    assert!(
        (energy - nbody::ENERGY_REF_1000).abs() < ENERGY_TOLERANCE,
        "energy after 1000 steps {energy} vs published {}",
        nbody::ENERGY_REF_1000
    );
}

// The full fixed scenario: 100 000 steps, then compare both reported
// energies against the published output. Slow in debug builds but still
// well under a minute.
#[test]
fn nbody_full_scenario_matches_published_output() {
    let initial = nbody::simulate(0);
    let result = nbody::simulate(nbody::STEPS);
    assert!((initial - nbody::INITIAL_ENERGY_REF).abs() < ENERGY_TOLERANCE);
    assert!(
        (result - nbody::FINAL_ENERGY_REF).abs() < ENERGY_TOLERANCE,
        "final energy {result} vs published {}",
        nbody::FINAL_ENERGY_REF
    );
}

#[test]
fn nbody_is_idempotent() {
    assert_eq!(nbody::simulate(200).to_bits(), nbody::simulate(200).to_bits());
}

#[test]
fn pidigits_zero_returns_zero_without_iterating() {
    assert_eq!(pi_digit(0), BigInt::zero());
}

#[test]
fn pidigits_emits_known_digits_of_pi() {
    // 3.141592653...
    assert_eq!(pi_digit(1), BigInt::from(3));
    assert_eq!(pi_digit(2), BigInt::from(1));
    assert_eq!(pi_digit(3), BigInt::from(4));
    assert_eq!(pi_digit(10), BigInt::from(3));
}

#[test]
fn pidigits_is_idempotent() {
    assert_eq!(pi_digit(64), pi_digit(64));
}

#[test]
fn harness_verifies_both_kernels_with_small_scenarios() {
    let yaml = r"
nbody:
  steps: 100
pidigits:
  digits: 25
";
    let config = BenchConfig::from_yaml(yaml).expect("valid config");
    for name in kernels::kernel_names() {
        let kernel = kernels::lookup(name, &config).expect("known kernel");
        let status = kernel.verify();
        assert!(status.verified, "{name}: {}", status.message);
    }
}

#[test]
fn harness_reports_reference_output_shape() {
    let yaml = r"
nbody:
  steps: 10
pidigits:
  digits: 10
";
    let config = BenchConfig::from_yaml(yaml).expect("valid config");

    let nbody_kernel = kernels::lookup("nbody", &config).expect("nbody");
    let output = nbody_kernel.run();
    assert!(output.initial.is_some());

    let pidigits_kernel = kernels::lookup("pidigits", &config).expect("pidigits");
    let output = pidigits_kernel.run();
    assert!(output.initial.is_none());
    assert_eq!(output.result, "3");
}
