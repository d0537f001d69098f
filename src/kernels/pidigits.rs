//! Pi-digit benchmark kernel.
//!
//! Streaming spigot extraction of decimal digits of pi, run over
//! arbitrary-precision integers. The recurrence walks a linear fraction
//! transformation; whenever the accumulated state pins down the next digit
//! it is extracted and the state is rescaled by ten.
//!
//! ```text
//! per iteration:  k += 1;  t = 2n;  n *= k;  a = (a + t)(l + 2);  d *= l
//! extraction:     q, r = divmod(3n + a, d)  when a ≥ n
//!                 digit accepted when d > r + n, then a = 10(a − d·q), n = 10n
//! ```
//!
//! The final `t` accumulator is the requested digit itself — the reference
//! implementations print that raw integer, not a formatted digit string,
//! and this kernel preserves that output exactly.
//!
//! Fixed-width integers overflow silently long before the fixed scenario's
//! 10 000-digit iteration count; `BigInt` is the correctness-critical
//! requirement here. Out-of-memory at extreme digit counts aborts rather
//! than being caught.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::{CriterionStatus, Kernel, KernelOutput, VerificationStatus};
use crate::config::PidigitsConfig;

/// Number of digits in the fixed scenario.
pub const DIGITS: u64 = 10_000;

/// Extract the `digits`-th decimal digit of pi.
///
/// Returns the raw final `t` accumulator, which for `digits >= 1` is the
/// digit itself (pi = 3.14159…, so `pi_digit(1) == 3`, `pi_digit(2) == 1`).
/// With `digits == 0` the loop never runs and the initial `t = 0` comes
/// back unchanged.
#[must_use]
pub fn pi_digit(digits: u64) -> BigInt {
    let mut i = digits;
    let mut k: u64 = 0;
    let mut l: u64 = 1;
    let mut n = BigInt::one();
    let mut a = BigInt::zero();
    let mut d = BigInt::one();
    let mut t = BigInt::zero();
    let mut u = BigInt::zero();

    while i != 0 {
        k += 1;
        t = &n << 1;
        n *= k;
        a += &t;
        l += 2;
        a *= l;
        d *= l;

        if a >= n {
            // 3n + a pins the candidate digit q with remainder r.
            let three_n_plus_a = &n * 3u32 + &a;
            let q = &three_n_plus_a / &d;
            let r = three_n_plus_a % &d;
            u = r + &n;
            t = q;
            if d > u {
                // Digit accepted: strip it out and rescale by ten.
                i -= 1;
                a = (a - &d * &t) * 10;
                n *= 10u32;
            }
        }
    }

    t
}

/// Pi-digit kernel wrapper for the harness CLI.
#[derive(Debug, Clone)]
pub struct PidigitsKernel {
    config: PidigitsConfig,
}

impl PidigitsKernel {
    #[must_use]
    pub const fn new(config: PidigitsConfig) -> Self {
        Self { config }
    }
}

impl Kernel for PidigitsKernel {
    fn name(&self) -> &'static str {
        "pidigits"
    }

    fn description(&self) -> &'static str {
        "Streaming spigot extraction of pi digits over arbitrary-precision integers"
    }

    fn run(&self) -> KernelOutput {
        let start = std::time::Instant::now();
        let result = pi_digit(self.config.digits);
        let elapsed_ms = start.elapsed().as_millis();

        log::debug!("pidigits: {} digits -> {result}", self.config.digits);

        KernelOutput {
            elapsed_ms,
            initial: None,
            result: result.to_string(),
        }
    }

    fn verify(&self) -> VerificationStatus {
        // The known digit prefix of pi; every configured digit count in this
        // range can be checked exactly, larger counts fall back to checking
        // that the result is a single decimal digit.
        const PI_PREFIX: &str = "31415926535897932384626433832795028841971693993751";

        let result = pi_digit(self.config.digits);
        let digits = self.config.digits;

        let criterion = if digits == 0 {
            let passed = result.is_zero();
            CriterionStatus {
                id: "PI-ZERO".to_string(),
                name: "Zero digits returns initial accumulator".to_string(),
                passed,
                value: if passed { 0.0 } else { 1.0 },
                threshold: 0.5,
            }
        } else if digits <= PI_PREFIX.len() as u64 {
            let expected = PI_PREFIX.as_bytes()[(digits - 1) as usize] - b'0';
            let passed = result == BigInt::from(expected);
            CriterionStatus {
                id: "PI-DIGIT".to_string(),
                name: format!("Digit {digits} of pi equals {expected}"),
                passed,
                value: if passed { 0.0 } else { 1.0 },
                threshold: 0.5,
            }
        } else {
            let passed = result >= BigInt::zero() && result <= BigInt::from(9);
            CriterionStatus {
                id: "PI-RANGE".to_string(),
                name: "Extracted value is a single decimal digit".to_string(),
                passed,
                value: if passed { 0.0 } else { 1.0 },
                threshold: 0.5,
            }
        };

        let verified = criterion.passed;
        VerificationStatus {
            verified,
            message: if verified {
                format!("pidigits verified for {digits} digits")
            } else {
                format!("pidigits FAILED verification for {digits} digits")
            },
            criteria: vec![criterion],
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Boundary and known-digit cases
    // =========================================================================

    #[test]
    fn test_zero_digits_skips_loop() {
        assert_eq!(pi_digit(0), BigInt::zero());
    }

    #[test]
    fn test_first_digit_is_three() {
        assert_eq!(pi_digit(1), BigInt::from(3));
    }

    #[test]
    fn test_known_digit_prefix() {
        // pi = 3.141592653...
        let expected = [3u8, 1, 4, 1, 5, 9, 2, 6, 5, 3];
        for (index, digit) in expected.iter().enumerate() {
            let n = index as u64 + 1;
            assert_eq!(
                pi_digit(n),
                BigInt::from(*digit),
                "digit {n} of pi should be {digit}"
            );
        }
    }

    #[test]
    fn test_hundredth_digit() {
        // The 100th digit of pi counting the leading 3: …828034825342117067
        assert_eq!(pi_digit(100), BigInt::from(7));
    }

    // =========================================================================
    // Purity and determinism
    // =========================================================================

    #[test]
    fn test_idempotent() {
        assert_eq!(pi_digit(50), pi_digit(50));
    }

    #[test]
    fn test_result_is_single_digit() {
        for n in 1..=30u64 {
            let digit = pi_digit(n);
            assert!(digit >= BigInt::zero() && digit <= BigInt::from(9));
        }
    }

    // =========================================================================
    // Kernel trait wrapper
    // =========================================================================

    #[test]
    fn test_kernel_run_small_scenario() {
        let kernel = PidigitsKernel::new(crate::config::PidigitsConfig { digits: 5 });
        let output = kernel.run();
        assert!(output.initial.is_none());
        assert_eq!(output.result, "5");
    }

    #[test]
    fn test_kernel_verify_known_digit() {
        let kernel = PidigitsKernel::new(crate::config::PidigitsConfig { digits: 2 });
        let status = kernel.verify();
        assert!(status.verified, "{}", status.message);
        assert_eq!(status.criteria[0].id, "PI-DIGIT");
    }

    #[test]
    fn test_kernel_verify_zero_digits() {
        let kernel = PidigitsKernel::new(crate::config::PidigitsConfig { digits: 0 });
        let status = kernel.verify();
        assert!(status.verified);
        assert_eq!(status.criteria[0].id, "PI-ZERO");
    }

    #[test]
    fn test_kernel_name_and_description() {
        let kernel = PidigitsKernel::new(crate::config::PidigitsConfig::default());
        assert_eq!(kernel.name(), "pidigits");
        assert!(!kernel.description().is_empty());
    }
}
