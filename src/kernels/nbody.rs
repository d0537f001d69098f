//! N-body gravitational benchmark kernel.
//!
//! Advances the sun and the four gas giants under pairwise Newtonian
//! gravity for a fixed number of timesteps and reports total system energy
//! before and after.
//!
//! # Governing Equations
//!
//! ```text
//! Impulse per pair:  Δv₁ = -m₂·dt/d³ · r₁₂,  Δv₂ = +m₁·dt/d³ · r₁₂
//! Position update:   x += dt · v
//! Total energy:      E = Σ ½mᵢvᵢ² − Σ mᵢmⱼ/dᵢⱼ  (over the ten pairs)
//! ```
//!
//! The ten body pairs are processed in a fixed order, each pair observing
//! the most recently updated velocities. Floating-point addition is not
//! associative, so that order is part of the kernel's contract: reordering
//! pairs changes the trajectory and breaks reproducibility against the
//! published reference energies.

use serde::{Deserialize, Serialize};

use super::{CriterionStatus, Kernel, KernelOutput, VerificationStatus};
use crate::config::NbodyConfig;

/// Mass of the sun in the benchmark's unit system (G folded in).
pub const SOLAR_MASS: f64 = 4.0 * std::f64::consts::PI * std::f64::consts::PI;

/// Days per year; raw planet velocities are given in AU/year.
pub const DAYS_PER_YEAR: f64 = 365.24;

/// Integration timestep in days.
pub const DT: f64 = 0.01;

/// Number of simulation steps in the fixed scenario.
pub const STEPS: u64 = 100_000;

/// Published reference energy of the initial system.
pub const INITIAL_ENERGY_REF: f64 = -0.169_075_164;

/// Reference energy after 100 000 steps, computed by the reference
/// implementations of this scenario.
pub const FINAL_ENERGY_REF: f64 = -0.169_079_859;

/// Published reference energy after 1 000 steps (regression checkpoint).
pub const ENERGY_REF_1000: f64 = -0.169_087_605;

/// A point mass: position (AU), velocity (AU/day), mass (solar units).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    pub mass: f64,
}

impl Body {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64, vx: f64, vy: f64, vz: f64, mass: f64) -> Self {
        Self {
            x,
            y,
            z,
            vx,
            vy,
            vz,
            mass,
        }
    }

    /// Kinetic energy: ½·m·|v|².
    #[must_use]
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * (self.vx * self.vx + self.vy * self.vy + self.vz * self.vz)
    }

    /// Advance position by one timestep at the current velocity.
    fn integrate(&mut self, dt: f64) {
        self.x += dt * self.vx;
        self.y += dt * self.vy;
        self.z += dt * self.vz;
    }
}

/// Euclidean norm of a separation vector.
#[must_use]
pub fn distance(dx: f64, dy: f64, dz: f64) -> f64 {
    (dx * dx + dy * dy + dz * dz).sqrt()
}

fn jupiter() -> Body {
    Body::new(
        4.841_431_442_464_720_90,
        -1.160_320_044_027_428_39,
        -0.103_622_044_471_123_109,
        0.001_660_076_642_744_036_94 * DAYS_PER_YEAR,
        0.007_699_011_184_197_404_25 * DAYS_PER_YEAR,
        -0.000_069_046_001_697_206_302_3 * DAYS_PER_YEAR,
        0.000_954_791_938_424_326_609 * SOLAR_MASS,
    )
}

fn saturn() -> Body {
    Body::new(
        8.343_366_718_244_579_87,
        4.124_798_564_124_304_79,
        -0.403_523_417_114_321_381,
        -0.002_767_425_107_268_624_11 * DAYS_PER_YEAR,
        0.004_998_528_012_349_172_38 * DAYS_PER_YEAR,
        0.000_023_041_729_757_376_392_9 * DAYS_PER_YEAR,
        0.000_285_885_980_666_130_812 * SOLAR_MASS,
    )
}

fn uranus() -> Body {
    Body::new(
        12.894_369_562_139_131_0,
        -15.111_151_401_698_631_2,
        -0.223_307_578_892_655_734,
        0.002_964_601_375_647_616_18 * DAYS_PER_YEAR,
        0.002_378_471_739_594_809_50 * DAYS_PER_YEAR,
        -0.000_029_658_956_854_023_755_6 * DAYS_PER_YEAR,
        0.000_043_662_440_433_515_629_8 * SOLAR_MASS,
    )
}

fn neptune() -> Body {
    Body::new(
        15.379_697_114_850_916_5,
        -25.919_314_609_987_964_1,
        0.179_258_772_950_371_181,
        0.002_680_677_724_903_893_22 * DAYS_PER_YEAR,
        0.001_628_241_700_382_422_95 * DAYS_PER_YEAR,
        -0.000_095_159_225_451_971_587_0 * DAYS_PER_YEAR,
        0.000_051_513_890_204_661_145_1 * SOLAR_MASS,
    )
}

fn sun() -> Body {
    Body::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0, SOLAR_MASS)
}

/// The five-body system, in the fixed interaction order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarSystem {
    pub sun: Body,
    pub jupiter: Body,
    pub saturn: Body,
    pub uranus: Body,
    pub neptune: Body,
}

impl SolarSystem {
    /// Construct the initial system with net momentum zeroed.
    ///
    /// The sun's velocity is set to cancel the planets' total momentum so
    /// the system does not drift over the simulation.
    #[must_use]
    pub fn initial() -> Self {
        let mut system = Self {
            sun: sun(),
            jupiter: jupiter(),
            saturn: saturn(),
            uranus: uranus(),
            neptune: neptune(),
        };
        let (px, py, pz) = system.momentum();
        system.sun.vx = -px / SOLAR_MASS;
        system.sun.vy = -py / SOLAR_MASS;
        system.sun.vz = -pz / SOLAR_MASS;
        system
    }

    /// Total momentum Σ mᵢ·vᵢ, per axis.
    #[must_use]
    pub fn momentum(&self) -> (f64, f64, f64) {
        let px = self.sun.vx * self.sun.mass
            + self.jupiter.vx * self.jupiter.mass
            + self.saturn.vx * self.saturn.mass
            + self.uranus.vx * self.uranus.mass
            + self.neptune.vx * self.neptune.mass;
        let py = self.sun.vy * self.sun.mass
            + self.jupiter.vy * self.jupiter.mass
            + self.saturn.vy * self.saturn.mass
            + self.uranus.vy * self.uranus.mass
            + self.neptune.vy * self.neptune.mass;
        let pz = self.sun.vz * self.sun.mass
            + self.jupiter.vz * self.jupiter.mass
            + self.saturn.vz * self.saturn.mass
            + self.uranus.vz * self.uranus.mass
            + self.neptune.vz * self.neptune.mass;
        (px, py, pz)
    }

    /// Apply the gravitational impulse for one body pair.
    ///
    /// Equal and opposite: each body's velocity changes by the *other*
    /// body's mass times dt/d³ along the separation vector.
    fn interact(b1: &mut Body, b2: &mut Body, dt: f64) {
        let dx = b1.x - b2.x;
        let dy = b1.y - b2.y;
        let dz = b1.z - b2.z;
        let d = distance(dx, dy, dz);
        let mag = dt / (d * d * d);
        let delta1 = -b2.mass * mag;
        let delta2 = b1.mass * mag;
        b1.vx += dx * delta1;
        b1.vy += dy * delta1;
        b1.vz += dz * delta1;
        b2.vx += dx * delta2;
        b2.vy += dy * delta2;
        b2.vz += dz * delta2;
    }

    /// Advance the system by one timestep.
    ///
    /// All ten pairwise velocity updates run first, in the fixed order,
    /// each observing the velocities left by the previous pair; positions
    /// are integrated afterwards.
    pub fn advance(&mut self, dt: f64) {
        Self::interact(&mut self.sun, &mut self.jupiter, dt);
        Self::interact(&mut self.sun, &mut self.saturn, dt);
        Self::interact(&mut self.sun, &mut self.uranus, dt);
        Self::interact(&mut self.sun, &mut self.neptune, dt);
        Self::interact(&mut self.jupiter, &mut self.saturn, dt);
        Self::interact(&mut self.jupiter, &mut self.uranus, dt);
        Self::interact(&mut self.jupiter, &mut self.neptune, dt);
        Self::interact(&mut self.saturn, &mut self.uranus, dt);
        Self::interact(&mut self.saturn, &mut self.neptune, dt);
        Self::interact(&mut self.uranus, &mut self.neptune, dt);

        self.sun.integrate(dt);
        self.jupiter.integrate(dt);
        self.saturn.integrate(dt);
        self.uranus.integrate(dt);
        self.neptune.integrate(dt);
    }

    /// Potential energy term for one pair: m₁·m₂/d.
    fn pair_energy(b1: &Body, b2: &Body) -> f64 {
        let dx = b1.x - b2.x;
        let dy = b1.y - b2.y;
        let dz = b1.z - b2.z;
        (b1.mass * b2.mass) / distance(dx, dy, dz)
    }

    /// Total system energy: kinetic minus pairwise potential, summed over
    /// the same ten pairs in the same order as [`Self::advance`].
    #[must_use]
    pub fn energy(&self) -> f64 {
        let kinetic = self.sun.kinetic_energy()
            + self.jupiter.kinetic_energy()
            + self.saturn.kinetic_energy()
            + self.uranus.kinetic_energy()
            + self.neptune.kinetic_energy();
        let potential = Self::pair_energy(&self.sun, &self.jupiter)
            + Self::pair_energy(&self.sun, &self.saturn)
            + Self::pair_energy(&self.sun, &self.uranus)
            + Self::pair_energy(&self.sun, &self.neptune)
            + Self::pair_energy(&self.jupiter, &self.saturn)
            + Self::pair_energy(&self.jupiter, &self.uranus)
            + Self::pair_energy(&self.jupiter, &self.neptune)
            + Self::pair_energy(&self.saturn, &self.uranus)
            + Self::pair_energy(&self.saturn, &self.neptune)
            + Self::pair_energy(&self.uranus, &self.neptune);
        kinetic - potential
    }
}

/// Run the simulation for `steps` steps with timestep `dt` and return the
/// final total energy.
///
/// Energy is recomputed after every step; with `steps == 0` the initial
/// system's energy is returned untouched. The work profile (one energy
/// evaluation per step) is part of the benchmark.
#[must_use]
pub fn simulate_with(steps: u64, dt: f64) -> f64 {
    let mut system = SolarSystem::initial();
    let mut energy = system.energy();
    for _ in 0..steps {
        system.advance(dt);
        energy = system.energy();
    }
    energy
}

/// Run the fixed scenario for `steps` steps with the standard timestep.
#[must_use]
pub fn simulate(steps: u64) -> f64 {
    simulate_with(steps, DT)
}

/// N-body kernel wrapper for the harness CLI.
#[derive(Debug, Clone)]
pub struct NbodyKernel {
    config: NbodyConfig,
}

impl NbodyKernel {
    #[must_use]
    pub const fn new(config: NbodyConfig) -> Self {
        Self { config }
    }
}

impl Kernel for NbodyKernel {
    fn name(&self) -> &'static str {
        "nbody"
    }

    fn description(&self) -> &'static str {
        "Five-body gravitational simulation reporting total system energy"
    }

    fn run(&self) -> KernelOutput {
        let start = std::time::Instant::now();
        let initial = simulate_with(0, self.config.dt);
        let result = simulate_with(self.config.steps, self.config.dt);
        let elapsed_ms = start.elapsed().as_millis();

        log::debug!(
            "nbody: {} steps, dt={}, energy {initial} -> {result}",
            self.config.steps,
            self.config.dt
        );

        KernelOutput {
            elapsed_ms,
            initial: Some(format!("{initial}")),
            result: format!("{result}"),
        }
    }

    fn verify(&self) -> VerificationStatus {
        let tolerance = self.config.energy_tolerance;
        let system = SolarSystem::initial();
        let (px, py, pz) = system.momentum();
        let momentum_max = px.abs().max(py.abs()).max(pz.abs());
        let momentum_passed = momentum_max < 1e-12;

        let initial = system.energy();
        let initial_dev = (initial - INITIAL_ENERGY_REF).abs();
        let initial_passed = initial_dev < tolerance;

        let mut criteria = vec![
            CriterionStatus {
                id: "NB-MOMENTUM".to_string(),
                name: "Total momentum zero after initialization".to_string(),
                passed: momentum_passed,
                value: momentum_max,
                threshold: 1e-12,
            },
            CriterionStatus {
                id: "NB-ENERGY-INITIAL".to_string(),
                name: "Initial energy matches reference".to_string(),
                passed: initial_passed,
                value: initial_dev,
                threshold: tolerance,
            },
        ];

        // The published final energy only applies to the fixed scenario.
        if self.config.steps == STEPS && (self.config.dt - DT).abs() < f64::EPSILON {
            let final_energy = simulate_with(self.config.steps, self.config.dt);
            let final_dev = (final_energy - FINAL_ENERGY_REF).abs();
            criteria.push(CriterionStatus {
                id: "NB-ENERGY-FINAL".to_string(),
                name: "Final energy matches reference".to_string(),
                passed: final_dev < tolerance,
                value: final_dev,
                threshold: tolerance,
            });
        }

        let verified = criteria.iter().all(|c| c.passed);
        VerificationStatus {
            verified,
            message: if verified {
                format!("nbody verified: {} criteria passed", criteria.len())
            } else {
                "nbody FAILED verification against reference values".to_string()
            },
            criteria,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
