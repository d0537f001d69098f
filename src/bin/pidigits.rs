//! Pi-digit benchmark, fixed scenario.
//!
//! Extracts the 10 000th digit of pi with the streaming spigot and prints
//! the elapsed time plus the raw final accumulator, in the reference
//! output format. No arguments, no configuration.

use std::time::Instant;

use numbench::kernels::pidigits::{pi_digit, DIGITS};

fn main() {
    env_logger::init();

    let start = Instant::now();
    let result = pi_digit(DIGITS);
    let elapsed = start.elapsed().as_millis();

    println!("Time: {elapsed} ms");
    println!("Result: {result}");
}
