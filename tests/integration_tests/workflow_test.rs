use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sketch_fit::modules::export::svg_path::ToSvgPath;
use sketch_fit::modules::parse::json::points_from_json;
use sketch_fit::modules::protocol::message::{decode, encode, ClientMessage, ServerMessage};
use sketch_fit::{cubic, fit_curve, BezierCurve, FitConfig, FitSegments, Point};

/// A random pen stroke: a walk with slowly turning heading
fn random_stroke(rng: &mut StdRng, len: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity(len);
    let mut position = Point::new(rng.gen_range(0.0..500.0), rng.gen_range(0.0..500.0));
    let mut heading: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
    for _ in 0..len {
        points.push(position);
        heading += rng.gen_range(-0.6..0.6);
        let step = rng.gen_range(0.0..8.0);
        position = position + Point::new(heading.cos(), heading.sin()) * step;
    }
    points
}

fn assert_fit_invariants(curve: &BezierCurve, points: &[Point]) {
    assert!(!curve.is_empty());
    assert_eq!(curve.start(), points.first().copied());
    assert_eq!(curve.end(), points.last().copied());
    for pair in curve.segments.windows(2) {
        assert_eq!(pair[0].end(), pair[1].start());
    }
    assert!(curve
        .segments
        .iter()
        .all(|s| s.points.iter().all(Point::is_finite)));
}

#[test]
fn test_complete_workflow() {
    // A stroke as the drawing client would send it
    let stroke = points_from_json(
        r#"[
            {"x": 0, "y": 0}, {"x": 0, "y": 5}, {"x": 11, "y": 14}, {"x": 21, "y": 16},
            {"x": 32, "y": 11}, {"x": 40, "y": 2}, {"x": 40, "y": 0}, {"x": 20, "y": -20},
            {"x": 20, "y": -30}, {"x": 40, "y": -40}
        ]"#,
    )
    .unwrap();

    let curve = fit_curve(&stroke, 40.0).unwrap();
    assert_fit_invariants(&curve, &stroke);

    // Rendered path data starts at the first sample
    let path_data = curve.to_svg_path();
    assert!(path_data.starts_with("M0,0 C"));
    assert_eq!(path_data.matches('C').count(), curve.len());

    // Relayed to the rest of the session and back
    let wire = encode(&ClientMessage::AddPath { path: curve.clone() }).unwrap();
    let relayed = ServerMessage::AddPath {
        path: match decode::<ClientMessage>(&wire).unwrap() {
            ClientMessage::AddPath { path } => path,
            other => panic!("unexpected message {:?}", other),
        },
    };
    let history = ServerMessage::Paths {
        paths: vec![curve.clone()],
    };
    assert_eq!(decode::<ServerMessage>(&encode(&relayed).unwrap()).unwrap(), relayed);
    assert_eq!(decode::<ServerMessage>(&encode(&history).unwrap()).unwrap(), history);
}

#[test]
fn test_random_strokes_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(7);
    for round in 0..40 {
        let len = rng.gen_range(2..300);
        let stroke = random_stroke(&mut rng, len);
        let tolerance = [0.25, 4.0, 40.0][round % 3];

        let curve = fit_curve(&stroke, tolerance).unwrap();
        assert_fit_invariants(&curve, &stroke);
        assert!(curve.len() < stroke.len());
    }
}

#[test]
fn test_samples_lie_near_accepted_segments() {
    let mut rng = StdRng::seed_from_u64(11);
    let stroke = random_stroke(&mut rng, 200);
    let tolerance = 4.0;

    let fitted: Vec<_> = FitSegments::new(&stroke, FitConfig::with_tolerance(tolerance))
        .unwrap()
        .collect();
    for f in &fitted {
        assert!(f.max_error < tolerance);

        // The distance at the fitted parameter bounds the distance to the
        // curve, up to the spacing of the dense sampling used here.
        let dense = f.segment.sample_points(2000);
        let spacing = dense
            .windows(2)
            .map(|w| w[0].distance(&w[1]))
            .fold(0.0, f64::max);
        for sample in &stroke[f.first..=f.last] {
            let nearest = dense
                .iter()
                .map(|p| p.distance(sample))
                .fold(f64::INFINITY, f64::min);
            assert!(nearest <= tolerance.sqrt() + spacing);
        }
    }
}

#[test]
fn test_exact_cubic_round_trip() {
    let original = cubic!([(20, 20), (50, 50), (80, 80), (110, 110)]);
    let samples = original.sample_points(50);

    let curve = fit_curve(&samples, 1e-6).unwrap();
    assert_eq!(curve.len(), 1);
    for (fitted, expected) in curve.segments[0].points.iter().zip(original.points.iter()) {
        assert_relative_eq!(fitted.x, expected.x, epsilon = 1e-8);
        assert_relative_eq!(fitted.y, expected.y, epsilon = 1e-8);
    }
}

#[test]
fn test_curved_cubic_round_trip() {
    let original = cubic!([(0, 0), (10, 25), (40, 30), (50, 0)]);
    let samples = original.sample_points(50);

    let curve = fit_curve(&samples, 4.0).unwrap();
    assert_eq!(curve.len(), 1);
    let fitted = &curve.segments[0];
    assert_eq!(fitted.start(), original.start());
    assert_eq!(fitted.end(), original.end());
    for (a, b) in fitted.points[1..3].iter().zip(original.points[1..3].iter()) {
        assert!(a.distance(b) < 4.0, "{:?} vs {:?}", a, b);
    }
    // the fitted curve itself hugs the original everywhere
    for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
        assert!(fitted.point_at(t).distance(&original.point_at(t)) < 4.0);
    }
}

#[test]
fn test_fitting_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(3);
    let stroke = random_stroke(&mut rng, 250);
    let first = fit_curve(&stroke, 2.0).unwrap();
    for _ in 0..3 {
        assert_eq!(fit_curve(&stroke, 2.0).unwrap(), first);
    }
}
