pub mod error;
pub mod math;
pub mod plot;

pub use error::{Error, Result};
pub use math::interpolation::{fit_quadratic, Quadratic};
pub use math::quadrature::{linspace, QuadratureResult};
pub use math::{monte_carlo, simpson, trapezoid};
