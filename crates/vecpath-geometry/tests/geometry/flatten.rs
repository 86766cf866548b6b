use vecpath_geometry::{FlattenOutcome, Matrix, Path, Point, RectF, DEFAULT_FLATNESS};

fn arch() -> Path {
    let mut path = Path::new();
    path.add_bezier(
        Point::new(0.0, 0.0),
        Point::new(0.0, 100.0),
        Point::new(100.0, 100.0),
        Point::new(100.0, 0.0),
    );
    path
}

#[test]
fn test_flatten_without_curves_is_identity() {
    let mut path = Path::new();
    path.add_rectangle(RectF::new(0.0, 0.0, 10.0, 5.0));
    path.add_line(Point::new(20.0, 20.0), Point::new(30.0, 25.0));
    let before = path.clone();
    assert_eq!(path.flatten(None, DEFAULT_FLATNESS), FlattenOutcome::NoCurves);
    assert_eq!(path, before);
}

#[test]
fn test_infinite_flatness_keeps_endpoints_only() {
    let mut path = arch();
    assert_eq!(path.flatten(None, f64::INFINITY), FlattenOutcome::Flattened);
    assert_eq!(path.points(), vec![Point::new(0.0, 0.0), Point::new(100.0, 0.0)]);
    assert_eq!(path.types(), vec![0x00, 0x01]);
}

#[test]
fn test_zero_flatness_leaves_placeholder() {
    let mut path = arch();
    assert_eq!(path.flatten(None, 0.0), FlattenOutcome::Degraded);
    assert_eq!(path.points(), vec![Point::ZERO; 3]);
    assert_eq!(path.types(), vec![0x00, 0x01, 0x01]);
}

#[test]
fn test_flattened_ellipse_stays_closed() {
    let mut path = Path::new();
    path.add_ellipse(RectF::new(0.0, 0.0, 40.0, 20.0));
    path.flatten(None, DEFAULT_FLATNESS);
    assert!(!path.has_curves());
    let types = path.types();
    assert_eq!(types[0], 0x00);
    assert_eq!(*types.last().unwrap(), 0x81);
    assert!(types[1..types.len() - 1].iter().all(|&t| t == 0x01));
    for point in path.points() {
        let nx = (point.x - 20.0) / 20.0;
        let ny = (point.y - 10.0) / 10.0;
        assert!((nx * nx + ny * ny - 1.0).abs() < 0.05);
    }
}

#[test]
fn test_flatten_applies_matrix_first() {
    let mut path = arch();
    path.flatten(Some(&Matrix::translation(10.0, -5.0)), DEFAULT_FLATNESS);
    assert_eq!(path.points()[0], Point::new(10.0, -5.0));
    assert_eq!(*path.points().last().unwrap(), Point::new(110.0, -5.0));
}

#[test]
fn test_flatten_twice_is_stable() {
    let mut path = arch();
    path.flatten(None, DEFAULT_FLATNESS);
    let once = path.clone();
    assert_eq!(path.flatten(None, DEFAULT_FLATNESS), FlattenOutcome::NoCurves);
    assert_eq!(path, once);
}

#[test]
fn test_overflow_anywhere_replaces_whole_path() {
    let mut path = Path::new();
    path.add_rectangle(RectF::new(0.0, 0.0, 10.0, 5.0));
    path.add_bezier(
        Point::new(20.0, 0.0),
        Point::new(20.0, 100.0),
        Point::new(120.0, 100.0),
        Point::new(120.0, 0.0),
    );
    assert_eq!(path.flatten(None, 0.0), FlattenOutcome::Degraded);
    assert_eq!(path.points(), vec![Point::ZERO; 3]);
    assert_eq!(path.types(), vec![0x00, 0x01, 0x01]);
}
