use vecpath_geometry::{Matrix, Path, Pen, Point, PointKind, RectF};

#[test]
fn test_empty_path_has_empty_bounds() {
    assert_eq!(Path::new().bounds(None, None), RectF::default());
}

#[test]
fn test_single_point_bounds() {
    let mut path = Path::new();
    path.append(Point::new(5.0, 7.0), PointKind::Start, false);
    assert_eq!(path.bounds(None, None), RectF::new(5.0, 7.0, 0.0, 0.0));
}

#[test]
fn test_rectangle_bounds() {
    let mut path = Path::new();
    path.add_rectangle(RectF::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(path.bounds(None, None), RectF::new(1.0, 2.0, 3.0, 4.0));
}

#[test]
fn test_pen_inflates_by_half_width() {
    let mut path = Path::new();
    path.add_rectangle(RectF::new(10.0, 10.0, 10.0, 10.0));
    assert_eq!(
        path.bounds(None, Some(&Pen::new(4.0))),
        RectF::new(8.0, 8.0, 14.0, 14.0)
    );
    // hairline pens still count as one unit wide
    assert_eq!(
        path.bounds(None, Some(&Pen::new(0.0))),
        RectF::new(9.5, 9.5, 11.0, 11.0)
    );
}

#[test]
fn test_bounds_through_matrix_leave_path_untouched() {
    let mut path = Path::new();
    path.add_rectangle(RectF::new(0.0, 0.0, 2.0, 1.0));
    let before = path.clone();
    let rect = path.bounds(Some(&Matrix::scale(3.0, 2.0)), None);
    assert_eq!(rect, RectF::new(0.0, 0.0, 6.0, 2.0));
    assert_eq!(path, before);
}

#[test]
fn test_curve_bounds_contain_endpoints() {
    let mut path = Path::new();
    path.add_ellipse(RectF::new(0.0, 0.0, 100.0, 50.0));
    let rect = path.bounds(None, None);
    assert!(rect.x <= 0.0 + 1e-9 && rect.right() >= 100.0 - 1e-9);
    assert!(rect.width <= 100.0 + 1e-9);
}
