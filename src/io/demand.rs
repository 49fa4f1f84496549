// src/io/demand.rs

use rand::thread_rng;
use rand_distr::{Distribution, Normal};

/// A forecast where every period demands the same amount. Useful as a
/// stability baseline: the optimal plan is a regular ordering rhythm.
pub fn constant_forecast(periods: usize, value: u32) -> Vec<u32> {
    vec![value; periods]
}

/// A forecast sampled from a Normal distribution.
///
/// Samples are rounded to the nearest unit and clamped at zero, since
/// demand cannot be negative.
///
/// # Arguments
/// * `periods` - Length of the planning horizon.
/// * `mean` - Average demand per period.
/// * `std_dev` - Demand volatility.
pub fn normal_forecast(periods: usize, mean: f64, std_dev: f64) -> Vec<u32> {
    let mut rng = thread_rng();
    let normal = Normal::new(mean, std_dev).expect("std_dev must be finite and non-negative");

    (0..periods)
        .map(|_| {
            let sample: f64 = normal.sample(&mut rng);
            if sample < 0.0 {
                0
            } else {
                sample.round() as u32
            }
        })
        .collect()
}

/// A flat forecast with a single demand spike in one period.
///
/// The scenario that stresses big-M sizing: a spike larger than any
/// plausible single order must be caught by input validation, not silently
/// truncated by the linking constraint.
pub fn spike_forecast(periods: usize, base: u32, spike_period: usize, spike_value: u32) -> Vec<u32> {
    let mut schedule = vec![base; periods];
    if spike_period >= 1 && spike_period <= periods {
        schedule[spike_period - 1] = spike_value;
    }
    schedule
}
