use vecpath_geometry::{FillRule, Path, Point, RectF};

fn mixed() -> Path {
    let mut path = Path::new();
    path.add_line(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
    path.add_bezier(
        Point::new(10.0, 0.0),
        Point::new(15.0, 5.0),
        Point::new(15.0, 10.0),
        Point::new(10.0, 15.0),
    );
    path.add_rectangle(RectF::new(20.0, 20.0, 5.0, 5.0));
    path.add_ellipse(RectF::new(-10.0, -10.0, 8.0, 4.0));
    path
}

#[test]
fn test_reverse_twice_is_identity() {
    let original = mixed();
    let mut path = original.clone();
    path.reverse();
    assert_ne!(path, original);
    path.reverse();
    assert_eq!(path, original);
}

#[test]
fn test_reverse_keeps_subpath_shape() {
    let mut path = mixed();
    path.reverse();
    let ranges = path.subpath_ranges();
    assert_eq!(ranges.len(), 3);
    // subpaths come back in opposite order
    assert_eq!(ranges[0].len(), 13);
    assert_eq!(ranges[2].len(), 5);
    assert_eq!(path.types()[..13].last(), Some(&0x83));
}

#[test]
fn test_reverse_empty_path() {
    let mut path = Path::new();
    path.reverse();
    assert!(path.is_empty());
}

const KIND: u8 = 0x07;
const DASH: u8 = 0x10;
const MARKER: u8 = 0x20;
const CLOSE: u8 = 0x80;

/// Role bytes expected after reversal, built subpath by subpath in forward
/// order and flipped at the end.
fn expected_roles(old: &[u8]) -> Vec<u8> {
    let starts: Vec<usize> = (0..old.len())
        .filter(|&i| i == 0 || old[i] & KIND == 0)
        .collect();
    let mut out = vec![0u8; old.len()];
    let mut marker_in = false;

    for (n, &a) in starts.iter().enumerate() {
        let b = starts.get(n + 1).copied().unwrap_or(old.len()) - 1;
        out[a..b].copy_from_slice(&old[a + 1..=b]);
        out[b] = 0;
        if b > a {
            out[b - 1] &= KIND;
        }
        out[a] |= old[b] & (DASH | CLOSE);
        for i in a + 1..b {
            out[i] = (out[i] & !MARKER) | (old[i - 1] & MARKER);
        }
        out[a] = if marker_in { out[a] | MARKER } else { out[a] & !MARKER };
        marker_in = old[b] & MARKER != 0;
    }

    out.reverse();
    out
}

fn all_role_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    for kind in [0x00u8, 0x01, 0x03] {
        for flags in 0u8..8 {
            let mut byte = kind;
            if flags & 1 != 0 {
                byte |= DASH;
            }
            if flags & 2 != 0 {
                byte |= MARKER;
            }
            if flags & 4 != 0 {
                byte |= CLOSE;
            }
            bytes.push(byte);
        }
    }
    bytes
}

fn reversed_types(types: &[u8]) -> Vec<u8> {
    let points: Vec<Point> = (0..types.len()).map(|i| Point::new(i as f64, 0.0)).collect();
    let mut path = Path::from_parts(&points, types, FillRule::Alternate).unwrap();
    path.reverse();
    let expected_points: Vec<Point> = points.into_iter().rev().collect();
    assert_eq!(path.points(), expected_points, "points for {:02x?}", types);
    path.types()
}

fn check_all_extensions(seq: &mut Vec<u8>, bytes: &[u8], checked: &mut usize) {
    let subpaths = seq.iter().filter(|&&b| b & KIND == 0).count();
    if subpaths > 2 {
        return;
    }
    if seq.len() > 1 {
        assert_eq!(reversed_types(seq), expected_roles(seq), "roles for {:02x?}", seq);
    }
    *checked += 1;
    if seq.len() == 4 {
        return;
    }
    for &b in bytes {
        seq.push(b);
        check_all_extensions(seq, bytes, checked);
        seq.pop();
    }
}

#[test]
fn test_reverse_roles_for_every_short_path() {
    let bytes = all_role_bytes();
    let mut checked = 0;
    for &first in bytes.iter().filter(|&&b| b & KIND == 0) {
        check_all_extensions(&mut vec![first], &bytes, &mut checked);
    }
    assert!(checked > 10_000);
}

#[test]
fn test_reverse_dash_flags() {
    // dash on an interior point moves with its segment
    assert_eq!(reversed_types(&[0x00, 0x11, 0x01]), vec![0x00, 0x01, 0x11]);
    // dash on the last point stays on the last point
    assert_eq!(reversed_types(&[0x00, 0x01, 0x11]), vec![0x00, 0x01, 0x11]);
    // dash on the start point has no segment and is dropped
    assert_eq!(reversed_types(&[0x10, 0x01, 0x01]), vec![0x00, 0x01, 0x01]);
}

#[test]
fn test_reverse_close_with_dash() {
    assert_eq!(reversed_types(&[0x00, 0x01, 0x91]), vec![0x00, 0x01, 0x91]);
    assert_eq!(
        reversed_types(&[0x00, 0x81, 0x00, 0x01, 0x01]),
        vec![0x00, 0x01, 0x01, 0x00, 0x81]
    );
}
