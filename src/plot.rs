//! Chart rendering for a Simpson approximation.
//!
//! Draws the true curve, each 3-node segment's fitted parabola as a
//! translucent filled region, and the sample nodes as markers, in the
//! style of the pack's plotters-based report charts.

use std::path::Path;

use log::debug;
use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::math::interpolation::fit_quadratic;
use crate::math::quadrature::{linspace, QuadratureResult};

/// Resolution of the true-curve line series.
const CURVE_SAMPLES: usize = 400;
/// Resolution of each filled parabola segment.
const SEGMENT_SAMPLES: usize = 40;

fn to_render<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Samples the parabola through each consecutive 3-node group of a
/// Simpson result, one point series per segment.
///
/// # Errors
///
/// Rejects results whose node sequence cannot be split into 3-point
/// groups (fewer than three nodes, or an odd subinterval count).
pub fn segment_parabolas(result: &QuadratureResult) -> Result<Vec<Vec<(f64, f64)>>> {
    let len = result.nodes.len();
    if len < 3 {
        return Err(Error::TooFewSubintervals {
            min: 2,
            got: len.saturating_sub(1),
        });
    }
    if (len - 1) % 2 != 0 {
        return Err(Error::OddSubintervals(len - 1));
    }

    let mut segments = Vec::with_capacity((len - 1) / 2);
    for i in (0..len - 1).step_by(2) {
        let xs = [result.nodes[i], result.nodes[i + 1], result.nodes[i + 2]];
        let ys = [result.values[i], result.values[i + 1], result.values[i + 2]];
        let parabola = fit_quadratic(&xs, &ys)?;
        segments.push(
            linspace(xs[0], xs[2], SEGMENT_SAMPLES)
                .into_iter()
                .map(|x| (x, parabola.eval(x)))
                .collect(),
        );
    }
    Ok(segments)
}

/// Renders a Simpson approximation of `f` to a PNG file at `path`.
///
/// The caption compares the approximation against `exact`, the
/// closed-form value of the integral.
///
/// # Errors
///
/// Fails when the node sequence is malformed (see [`segment_parabolas`])
/// or when the backend cannot write the image.
pub fn render_png<F, P>(f: F, result: &QuadratureResult, exact: f64, path: P) -> Result<()>
where
    F: Fn(f64) -> f64,
    P: AsRef<Path>,
{
    let segments = segment_parabolas(result)?;
    let n = result.nodes.len() - 1;
    let a = result.nodes[0];
    let b = result.nodes[n];

    let curve: Vec<(f64, f64)> = linspace(a, b, CURVE_SAMPLES)
        .into_iter()
        .map(|x| (x, f(x)))
        .collect();

    let y_lo = curve.iter().map(|&(_, y)| y).fold(0.0, f64::min);
    let y_hi = curve
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::NEG_INFINITY, f64::max);
    let y_pad = 0.05 * (y_hi - y_lo).max(f64::EPSILON);

    let root = BitMapBackend::new(path.as_ref(), (800, 500)).into_drawing_area();
    root.fill(&WHITE).map_err(to_render)?;

    let caption = format!(
        "Simpson's rule (n = {n}): {:.8} vs exact {:.8}",
        result.integral, exact
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(a..b, (y_lo - y_pad)..(y_hi + y_pad))
        .map_err(to_render)?;

    chart
        .configure_mesh()
        .x_desc("x")
        .y_desc("f(x)")
        .draw()
        .map_err(to_render)?;

    for (i, points) in segments.into_iter().enumerate() {
        let fill = Palette99::pick(i).mix(0.3);
        chart
            .draw_series(AreaSeries::new(points, 0.0, fill))
            .map_err(to_render)?;
    }

    chart
        .draw_series(LineSeries::new(curve, &RED))
        .map_err(to_render)?
        .label("f(x)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .draw_series(
            result
                .nodes
                .iter()
                .zip(&result.values)
                .map(|(&x, &y)| Circle::new((x, y), 3, BLUE.filled())),
        )
        .map_err(to_render)?
        .label("Simpson nodes")
        .legend(|(x, y)| Circle::new((x + 10, y), 3, BLUE.filled()));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(to_render)?;

    root.present().map_err(to_render)?;
    debug!("wrote chart to {}", path.as_ref().display());
    Ok(())
}
