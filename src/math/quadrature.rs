//! Composite quadrature rules over evenly spaced sample nodes.

pub mod monte_carlo;
pub mod simpson;
pub mod trapezoid;

use crate::error::{Error, Result};

/// The outcome of a composite quadrature rule: the scalar approximation
/// together with the sample nodes and function values it was built from.
#[derive(Debug, Clone)]
pub struct QuadratureResult {
    /// Approximate value of the definite integral.
    pub integral: f64,
    /// The `n + 1` evenly spaced nodes, spanning `[a, b]` inclusive.
    pub nodes: Vec<f64>,
    /// Function values at `nodes`, in the same order.
    pub values: Vec<f64>,
}

impl QuadratureResult {
    /// Absolute error against a known closed-form value.
    #[must_use]
    pub fn abs_error(&self, exact: f64) -> f64 {
        (self.integral - exact).abs()
    }
}

/// Returns `len` evenly spaced points from `a` to `b` inclusive.
///
/// The endpoints are pinned exactly rather than accumulated, so
/// `linspace(a, b, len)` always starts at `a` and ends at `b`.
#[must_use]
pub fn linspace(a: f64, b: f64, len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![a],
        _ => {
            let step = (b - a) / (len - 1) as f64;
            (0..len)
                .map(|i| if i == len - 1 { b } else { a + i as f64 * step })
                .collect()
        }
    }
}

/// Shared argument validation for the composite rules.
fn check_interval(a: f64, b: f64) -> Result<()> {
    if a >= b || !a.is_finite() || !b.is_finite() {
        return Err(Error::InvalidInterval { a, b });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linspace_endpoints_exact() {
        let xs = linspace(0.0, 1.0, 11);
        assert_eq!(xs.len(), 11);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[10], 1.0);
        assert_relative_eq!(xs[5], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_linspace_degenerate_lengths() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn test_check_interval_rejects_reversed_bounds() {
        assert!(check_interval(1.0, 0.0).is_err());
        assert!(check_interval(1.0, 1.0).is_err());
        assert!(check_interval(0.0, f64::INFINITY).is_err());
        assert!(check_interval(0.0, 1.0).is_ok());
    }
}
