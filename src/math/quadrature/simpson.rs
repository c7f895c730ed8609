//! Composite Simpson's rule.
//!
//! Fits a quadratic through each consecutive triple of sample points and
//! sums the exact integrals of those parabolas, which gives O(h⁴)
//! accuracy for smooth integrands.

use log::debug;

use crate::error::{Error, Result};
use crate::math::quadrature::{check_interval, linspace, QuadratureResult};

/// Approximates the definite integral of `f` over `[a, b]` using
/// composite Simpson's rule with `n` subintervals.
///
/// The interval is partitioned into `n` equal subintervals of width
/// `h = (b - a) / n`. Endpoint values are weighted by 1, odd-indexed
/// interior nodes by 4, even-indexed interior nodes by 2, and the
/// weighted sum is scaled by `h / 3`.
///
/// # Arguments
///
/// * `f` - The integrand
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration, must exceed `a`
/// * `n` - Number of subintervals, must be even and at least 2
///
/// # Returns
///
/// A [`QuadratureResult`] carrying the approximation together with the
/// `n + 1` sample nodes and their function values.
///
/// # Errors
///
/// * [`Error::OddSubintervals`] if `n` is odd
/// * [`Error::TooFewSubintervals`] if `n` is zero
/// * [`Error::InvalidInterval`] if `a >= b` or a bound is not finite
///
/// # Examples
///
/// ```
/// use quadviz::simpson;
///
/// // ∫₀¹ 1 / (1 + x²) dx = π/4
/// let result = simpson(|x| 1.0 / (1.0 + x * x), 0.0, 1.0, 4).unwrap();
/// assert!((result.integral - std::f64::consts::FRAC_PI_4).abs() < 1e-4);
/// assert_eq!(result.nodes.len(), 5);
/// ```
pub fn simpson<F>(f: F, a: f64, b: f64, n: usize) -> Result<QuadratureResult>
where
    F: Fn(f64) -> f64,
{
    check_interval(a, b)?;
    if n % 2 == 1 {
        return Err(Error::OddSubintervals(n));
    }
    if n < 2 {
        return Err(Error::TooFewSubintervals { min: 2, got: n });
    }

    let h = (b - a) / n as f64;
    let nodes = linspace(a, b, n + 1);
    let values: Vec<f64> = nodes.iter().map(|&x| f(x)).collect();

    let mut sum = values[0] + values[n];
    for i in (1..n).step_by(2) {
        sum += 4.0 * values[i];
    }
    for i in (2..n).step_by(2) {
        sum += 2.0 * values[i];
    }
    let integral = h / 3.0 * sum;
    debug!("simpson: n = {n}, h = {h}, integral = {integral}");

    Ok(QuadratureResult {
        integral,
        nodes,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_4, PI};

    fn witch(x: f64) -> f64 {
        1.0 / (1.0 + x * x)
    }

    #[test]
    fn test_simpson_witch_of_agnesi_n4() {
        // ∫₀¹ 1 / (1 + x²) dx = arctan(1) = π/4
        let result = simpson(witch, 0.0, 1.0, 4).unwrap();
        assert!((result.integral - FRAC_PI_4).abs() < 1e-4);
    }

    #[test]
    fn test_simpson_node_sequence_spans_interval() {
        for n in [2, 4, 10, 100] {
            let result = simpson(witch, 0.0, 1.0, n).unwrap();
            assert_eq!(result.nodes.len(), n + 1);
            assert_eq!(result.values.len(), n + 1);
            assert_eq!(result.nodes[0], 0.0);
            assert_eq!(result.nodes[n], 1.0);
        }
    }

    #[test]
    fn test_simpson_rejects_odd_subintervals() {
        for n in [1, 3, 7, 101] {
            match simpson(witch, 0.0, 1.0, n) {
                Err(Error::OddSubintervals(got)) => assert_eq!(got, n),
                other => panic!("expected OddSubintervals, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_simpson_rejects_zero_subintervals() {
        assert!(matches!(
            simpson(witch, 0.0, 1.0, 0),
            Err(Error::TooFewSubintervals { min: 2, got: 0 })
        ));
    }

    #[test]
    fn test_simpson_rejects_reversed_interval() {
        assert!(matches!(
            simpson(witch, 1.0, 0.0, 4),
            Err(Error::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_simpson_error_shrinks_with_refinement() {
        let coarse = simpson(witch, 0.0, 1.0, 2).unwrap().abs_error(FRAC_PI_4);
        let fine = simpson(witch, 0.0, 1.0, 10).unwrap().abs_error(FRAC_PI_4);
        assert!(fine < coarse, "fine = {fine}, coarse = {coarse}");
    }

    #[test]
    fn test_simpson_exact_for_cubics() {
        // Simpson's rule integrates polynomials up to degree 3 exactly.
        let result = simpson(|x| x * x * x - 2.0 * x + 1.0, 0.0, 2.0, 2).unwrap();
        assert_relative_eq!(result.integral, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_simpson_sine_half_period() {
        let result = simpson(f64::sin, 0.0, PI, 100).unwrap();
        assert_relative_eq!(result.integral, 2.0, epsilon = 1e-7);
    }
}
