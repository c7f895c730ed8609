//! Prompts for a subdivision count, approximates ∫₀¹ 1/(1+x²) dx with
//! Simpson's rule and renders the piecewise-parabola chart.

use std::f64::consts::FRAC_PI_4;
use std::io::{self, BufRead, Write};

use quadviz::{plot, simpson, Result};

const OUTPUT_PATH: &str = "simpson.png";

fn integrand(x: f64) -> f64 {
    1.0 / (1.0 + x * x)
}

fn main() -> Result<()> {
    print!("Enter the number of subdivisions (n): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let mut n: usize = line.trim().parse()?;

    // Simpson's rule needs an even number of subintervals.
    if n % 2 == 1 {
        n += 1;
        println!("Simpson's rule requires n to be even. Using n = {n} instead.");
    }

    let result = simpson(integrand, 0.0, 1.0, n)?;

    println!("True integral = pi/4 = {FRAC_PI_4:.8}");
    println!("Simpson (n = {n}) = {:.8}", result.integral);
    println!("Absolute error = {:.3e}", result.abs_error(FRAC_PI_4));

    plot::render_png(integrand, &result, FRAC_PI_4, OUTPUT_PATH)?;
    println!("Saved plot to {OUTPUT_PATH}");
    Ok(())
}
