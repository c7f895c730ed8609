//! Quadratic interpolation through 3-point groups.
//!
//! Simpson's rule is equivalent to integrating the parabola through each
//! consecutive node triple; this module recovers those parabolas so they
//! can be drawn.

use num_traits::Float;

use crate::error::{Error, Result};

/// A parabola `a2·x² + a1·x + a0` in monomial form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic<T: Float> {
    /// Coefficient of the x² term.
    pub a2: T,
    /// Coefficient of the x term.
    pub a1: T,
    /// Constant term.
    pub a0: T,
}

impl<T: Float> Quadratic<T> {
    /// Evaluates the parabola at `x` using Horner's scheme.
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        (self.a2 * x + self.a1) * x + self.a0
    }
}

/// Fits the unique parabola through three points with distinct
/// abscissae, expanding the Lagrange basis into monomial coefficients.
///
/// # Errors
///
/// Returns [`Error::CoincidentNodes`] when two abscissae coincide.
///
/// # Examples
///
/// ```
/// use quadviz::fit_quadratic;
///
/// let p = fit_quadratic(&[0.0_f64, 1.0, 2.0], &[1.0, 0.0, 1.0]).unwrap();
/// assert!((p.eval(1.0) - 0.0).abs() < 1e-12);
/// assert!((p.a2 - 1.0).abs() < 1e-12);
/// ```
pub fn fit_quadratic<T: Float>(xs: &[T; 3], ys: &[T; 3]) -> Result<Quadratic<T>> {
    let [x0, x1, x2] = *xs;
    let [y0, y1, y2] = *ys;

    let d0 = (x0 - x1) * (x0 - x2);
    let d1 = (x1 - x0) * (x1 - x2);
    let d2 = (x2 - x0) * (x2 - x1);
    if d0.is_zero() || d1.is_zero() || d2.is_zero() {
        return Err(Error::CoincidentNodes);
    }

    // Each Lagrange basis term y_i (x - x_j)(x - x_k) / d_i contributes
    // w_i to a2, -w_i (x_j + x_k) to a1 and w_i x_j x_k to a0.
    let w0 = y0 / d0;
    let w1 = y1 / d1;
    let w2 = y2 / d2;

    Ok(Quadratic {
        a2: w0 + w1 + w2,
        a1: -(w0 * (x1 + x2) + w1 * (x0 + x2) + w2 * (x0 + x1)),
        a0: w0 * x1 * x2 + w1 * x0 * x2 + w2 * x0 * x1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fit_reproduces_input_points() {
        let xs = [0.25, 0.5, 0.75];
        let ys: [f64; 3] = xs.map(|x| 1.0 / (1.0 + x * x));
        let p = fit_quadratic(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(p.eval(*x), *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fit_recovers_known_coefficients() {
        // y = 2x² - 3x + 1 sampled at three points
        let xs = [-1.0, 0.0, 2.0];
        let ys = xs.map(|x: f64| 2.0 * x * x - 3.0 * x + 1.0);
        let p = fit_quadratic(&xs, &ys).unwrap();
        assert_relative_eq!(p.a2, 2.0, epsilon = 1e-12);
        assert_relative_eq!(p.a1, -3.0, epsilon = 1e-12);
        assert_relative_eq!(p.a0, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fit_rejects_coincident_abscissae() {
        let result = fit_quadratic(&[0.0, 0.0, 1.0], &[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(Error::CoincidentNodes)));
    }

    #[test]
    fn test_fit_works_for_f32() {
        let p = fit_quadratic(&[0.0f32, 1.0, 2.0], &[0.0, 1.0, 4.0]).unwrap();
        assert!((p.eval(1.5) - 2.25).abs() < 1e-5);
    }
}
