pub mod interpolation;
pub mod quadrature;

pub use interpolation::{fit_quadratic, Quadratic};
pub use quadrature::monte_carlo::monte_carlo;
pub use quadrature::simpson::simpson;
pub use quadrature::trapezoid::trapezoid;
