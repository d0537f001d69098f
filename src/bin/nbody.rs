//! N-body benchmark, fixed scenario.
//!
//! Advances the five-body solar system for 100 000 steps and prints the
//! elapsed time plus the system energy before and after, in the reference
//! output format. No arguments, no configuration.

use std::time::Instant;

use numbench::kernels::nbody::{simulate, STEPS};

fn main() {
    env_logger::init();

    let start = Instant::now();
    let initial = simulate(0);
    let result = simulate(STEPS);
    let elapsed = start.elapsed().as_millis();

    println!("Time: {elapsed} ms");
    println!("Initial: {initial}");
    println!("Result:  {result}");
}
