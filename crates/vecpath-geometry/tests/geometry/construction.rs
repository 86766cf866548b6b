use vecpath_geometry::{FillRule, Path, Point, PointKind, PointRole, RectF};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

#[test]
fn test_role_bytes_round_trip() {
    for byte in [0x00u8, 0x01, 0x03, 0x21, 0x81, 0xa3, 0x91] {
        assert_eq!(PointRole::from_byte(byte).unwrap().to_byte(), byte);
    }
    assert!(PointRole::from_byte(0x02).is_err());
    assert!(PointRole::from_byte(0x41).is_err());
}

#[test]
fn test_compressed_duplicate_is_a_no_op() {
    let mut path = Path::new();
    path.add_line(p(0.0, 0.0), p(3.0, 4.0));
    let before = path.clone();
    path.append(p(3.0, 4.0), PointKind::Line, true);
    assert_eq!(path, before);
}

#[test]
fn test_point_after_close_is_start() {
    let mut path = Path::new();
    path.add_line(p(0.0, 0.0), p(1.0, 0.0));
    path.close_figure();
    path.append(p(2.0, 2.0), PointKind::Line, false);
    assert_eq!(path.types(), vec![0x00, 0x81, 0x00]);
}

#[test]
fn test_line_joint_shares_point() {
    // add_line appends its first point with compression, so the shared joint is stored once
    let mut path = Path::new();
    path.add_line(p(0.0, 0.0), p(10.0, 0.0));
    path.add_line(p(10.0, 0.0), p(10.0, 10.0));
    assert_eq!(path.points(), vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)]);
    assert_eq!(path.types(), vec![0x00, 0x01, 0x01]);
}

#[test]
fn test_line_joint_without_compression_keeps_duplicate() {
    let mut path = Path::new();
    for (point, kind) in [
        (p(0.0, 0.0), PointKind::Line),
        (p(10.0, 0.0), PointKind::Line),
        (p(10.0, 0.0), PointKind::Line),
        (p(10.0, 10.0), PointKind::Line),
    ] {
        path.append(point, kind, false);
    }
    assert_eq!(path.point_count(), 4);
    assert_eq!(path.types(), vec![0x00, 0x01, 0x01, 0x01]);
}

#[test]
fn test_rectangle_layout() {
    let mut path = Path::new();
    path.add_rectangle(RectF::new(1.0, 2.0, 3.0, 4.0));
    assert_eq!(
        path.points(),
        vec![p(1.0, 2.0), p(4.0, 2.0), p(4.0, 6.0), p(1.0, 6.0)]
    );
    assert_eq!(path.types(), vec![0x00, 0x01, 0x01, 0x81]);
}

#[test]
fn test_zero_size_rectangle_adds_nothing() {
    let mut path = Path::new();
    path.add_rectangle(RectF::new(1.0, 2.0, 0.0, 4.0));
    path.add_rectangle(RectF::new(1.0, 2.0, 3.0, 0.0));
    assert!(path.is_empty());
}

#[test]
fn test_ellipse_has_thirteen_points() {
    let mut path = Path::new();
    path.add_ellipse(RectF::new(0.0, 0.0, 20.0, 10.0));
    assert_eq!(path.point_count(), 13);
    assert_eq!(path.points()[0], p(20.0, 5.0));
    let types = path.types();
    assert_eq!(types[0], 0x00);
    assert!(types[1..12].iter().all(|&t| t == 0x03));
    assert_eq!(types[12], 0x83);
}

#[test]
fn test_full_sweep_arc_is_ellipse() {
    let rect = RectF::new(5.0, 5.0, 30.0, 12.0);
    let mut ellipse = Path::new();
    ellipse.add_ellipse(rect);
    for sweep in [360.0, -360.0, 720.0] {
        let mut arc = Path::new();
        arc.add_arc(rect, 45.0, sweep);
        assert_eq!(arc, ellipse, "sweep {}", sweep);
    }
}

#[test]
fn test_polygon_needs_three_points() {
    let mut path = Path::new();
    let err = path.add_polygon(&[p(0.0, 0.0), p(1.0, 1.0)]).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(path.is_empty());
}

#[test]
fn test_polygon_is_closed() {
    let mut path = Path::new();
    path.add_polygon(&[p(0.0, 0.0), p(4.0, 0.0), p(2.0, 3.0)]).unwrap();
    let types = path.types();
    assert_eq!(types[0], 0x00);
    assert_eq!(*types.last().unwrap() & 0x80, 0x80);
    assert_eq!(path.points()[0], p(0.0, 0.0));
}

#[test]
fn test_beziers_validate_point_count() {
    let mut path = Path::new();
    assert!(path.add_beziers(&[p(0.0, 0.0); 3]).is_err());
    assert!(path.add_beziers(&[p(0.0, 0.0); 5]).is_err());
    path.add_beziers(&[
        p(0.0, 0.0),
        p(1.0, 1.0),
        p(2.0, 1.0),
        p(3.0, 0.0),
        p(4.0, -1.0),
        p(5.0, -1.0),
        p(6.0, 0.0),
    ])
    .unwrap();
    assert_eq!(path.types(), vec![0x00, 3, 3, 3, 3, 3, 3]);
}

#[test]
fn test_add_path_connects_open_subpath() {
    let mut first = Path::new();
    first.add_line(p(0.0, 0.0), p(1.0, 0.0));
    let mut second = Path::new();
    second.add_line(p(5.0, 5.0), p(6.0, 5.0));

    let mut connected = first.clone();
    connected.add_path(&second, true);
    assert_eq!(connected.types(), vec![0x00, 0x01, 0x01, 0x01]);

    let mut separate = first.clone();
    separate.add_path(&second, false);
    assert_eq!(separate.types(), vec![0x00, 0x01, 0x00, 0x01]);
}

#[test]
fn test_path_data_json_round_trip() {
    let mut path = Path::with_fill_rule(FillRule::Winding);
    path.add_rectangle(RectF::new(0.0, 0.0, 2.0, 2.0));
    let json = serde_json::to_string(&path.path_data()).unwrap();
    let data = serde_json::from_str(&json).unwrap();
    let restored = Path::from_path_data(&data, FillRule::Winding).unwrap();
    assert_eq!(restored.points(), path.points());
    assert_eq!(restored.types(), path.types());
}

#[test]
fn test_full_sweep_pie_is_center_then_ellipse() {
    let rect = RectF::new(0.0, 0.0, 20.0, 10.0);
    let mut ellipse = Path::new();
    ellipse.add_ellipse(rect);

    for sweep in [360.0, -450.0] {
        let mut pie = Path::new();
        pie.add_pie(rect, 30.0, sweep);
        assert_eq!(pie.point_count(), 14, "sweep {}", sweep);
        assert_eq!(pie.points()[0], p(10.0, 5.0));
        assert_eq!(pie.types()[0], 0x00);
        assert_eq!(pie.points()[1..], ellipse.points()[..]);
        assert_eq!(pie.types()[1..], ellipse.types()[..]);
    }
}
