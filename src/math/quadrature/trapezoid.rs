//! Composite trapezoidal rule.

use crate::error::{Error, Result};
use crate::math::quadrature::{check_interval, linspace, QuadratureResult};

/// Approximates the definite integral of `f` over `[a, b]` using the
/// composite trapezoidal rule with `n` subintervals.
///
/// Interior nodes are weighted by 2, the endpoints by 1, and the sum is
/// scaled by `h / 2`. Unlike Simpson's rule there is no parity
/// requirement on `n`.
///
/// # Errors
///
/// * [`Error::TooFewSubintervals`] if `n` is zero
/// * [`Error::InvalidInterval`] if `a >= b` or a bound is not finite
pub fn trapezoid<F>(f: F, a: f64, b: f64, n: usize) -> Result<QuadratureResult>
where
    F: Fn(f64) -> f64,
{
    check_interval(a, b)?;
    if n < 1 {
        return Err(Error::TooFewSubintervals { min: 1, got: n });
    }

    let h = (b - a) / n as f64;
    let nodes = linspace(a, b, n + 1);
    let values: Vec<f64> = nodes.iter().map(|&x| f(x)).collect();

    let mut sum = values[0] + values[n];
    for &v in &values[1..n] {
        sum += 2.0 * v;
    }

    Ok(QuadratureResult {
        integral: h / 2.0 * sum,
        nodes,
        values,
    })
}
