//! Monte Carlo integration.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{Error, Result};
use crate::math::quadrature::check_interval;

/// Estimates the definite integral of `f` over `[a, b]` as the mean of
/// `samples` uniform draws scaled by the interval width.
///
/// The estimate converges as O(1/√samples) regardless of the smoothness
/// of `f`.
///
/// # Errors
///
/// * [`Error::NoSamples`] if `samples` is zero
/// * [`Error::InvalidInterval`] if `a >= b` or a bound is not finite
pub fn monte_carlo<F>(f: F, a: f64, b: f64, samples: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    estimate(f, a, b, samples, &mut rand::thread_rng())
}

/// Deterministic variant of [`monte_carlo`] driven by a fixed seed.
pub fn monte_carlo_seeded<F>(f: F, a: f64, b: f64, samples: usize, seed: u64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    estimate(f, a, b, samples, &mut StdRng::seed_from_u64(seed))
}

fn estimate<F, R>(f: F, a: f64, b: f64, samples: usize, rng: &mut R) -> Result<f64>
where
    F: Fn(f64) -> f64,
    R: Rng,
{
    check_interval(a, b)?;
    if samples == 0 {
        return Err(Error::NoSamples);
    }

    let mut sum = 0.0;
    for _ in 0..samples {
        sum += f(rng.gen_range(a..b));
    }
    Ok((b - a) * sum / samples as f64)
}
