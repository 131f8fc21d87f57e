// Fit one synthetic freehand stroke at several tolerances and draw the results
// side by side, to see how the tolerance trades segment count against fidelity.

use log::info;
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use sketch_fit::{fit_curve, Point};
use std::error::Error;

const OUTPUT: &str = "freehand-fit-tolerance.png";
const TOLERANCES: [f64; 4] = [1.0, 4.0, 16.0, 40.0];
const SAMPLES: usize = 240;
const SEED: u64 = 20;

/// A looping pen stroke with hand jitter
fn synthesize_stroke(rng: &mut StdRng) -> Vec<Point> {
    let jitter = Normal::new(0.0, 0.8).expect("valid standard deviation");
    (0..SAMPLES)
        .map(|i| {
            let t = i as f64 / (SAMPLES - 1) as f64 * std::f64::consts::TAU * 1.5;
            let x = 60.0 + t * 70.0 + 45.0 * t.sin();
            let y = 300.0 - 120.0 * (0.7 * t).sin() + 45.0 * t.cos();
            Point::new(x + jitter.sample(rng), y + jitter.sample(rng))
        })
        .collect()
}

fn bounds(points: &[Point]) -> ((f64, f64), (f64, f64)) {
    let mut x = (f64::INFINITY, f64::NEG_INFINITY);
    let mut y = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        x = (x.0.min(p.x), x.1.max(p.x));
        y = (y.0.min(p.y), y.1.max(p.y));
    }
    ((x.0 - 20.0, x.1 + 20.0), (y.0 - 20.0, y.1 + 20.0))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let stroke = synthesize_stroke(&mut rng);
    let ((x0, x1), (y0, y1)) = bounds(&stroke);

    let root = BitMapBackend::new(OUTPUT, (1400, 1000)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 2));

    for (panel, &tolerance) in panels.iter().zip(TOLERANCES.iter()) {
        let curve = fit_curve(&stroke, tolerance)?;
        info!(
            "tolerance {:>5}: {:>3} segments for {} samples",
            tolerance,
            curve.len(),
            stroke.len()
        );

        let mut chart = ChartBuilder::on(panel)
            .caption(
                format!("tolerance {} - {} segments", tolerance, curve.len()),
                ("sans-serif", 22),
            )
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(40)
            .build_cartesian_2d(x0..x1, y0..y1)?;
        chart.configure_mesh().draw()?;

        chart.draw_series(
            stroke
                .iter()
                .map(|p| Circle::new((p.x, p.y), 2, RED.mix(0.5).filled())),
        )?;

        for segment in &curve.segments {
            chart.draw_series(LineSeries::new(
                segment.sample_points(40).into_iter().map(|p| (p.x, p.y)),
                BLUE.stroke_width(2),
            ))?;
        }

        // segment anchors
        chart.draw_series(
            curve
                .segments
                .iter()
                .map(|s| s.start())
                .chain(curve.end())
                .map(|p| Cross::new((p.x, p.y), 5, BLACK.stroke_width(2))),
        )?;
    }

    root.present()?;
    info!("wrote {}", OUTPUT);
    Ok(())
}
