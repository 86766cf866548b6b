use lyon::geom::euclid::{self, default::Transform2D, Angle};
use serde::{Deserialize, Serialize};

use super::Point;

/// Anything that can map a set of points in place.
///
/// Path operations that accept a transform only ever need this one
/// capability, so they take `&dyn PointTransform` rather than a concrete
/// matrix type.
pub trait PointTransform {
    fn transform_points(&self, points: &mut [Point]);

    /// Hint that lets callers skip the per-point pass entirely.
    fn is_identity(&self) -> bool {
        false
    }
}

/// 3x2 affine matrix in row-vector convention.
///
/// A point maps as `x' = x*m11 + y*m21 + dx`, `y' = x*m12 + y*m22 + dy`.
/// The algebra is done by [`Transform2D`], which uses the same layout;
/// this type only adds the serde form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Matrix {
    pub const fn new(m11: f64, m12: f64, m21: f64, m22: f64, dx: f64, dy: f64) -> Self {
        Self {
            m11,
            m12,
            m21,
            m22,
            dx,
            dy,
        }
    }

    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Transform2D::translation(dx, dy).into()
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Transform2D::scale(sx, sy).into()
    }

    /// Rotation about the origin, angle in degrees.
    pub fn rotation(angle_deg: f64) -> Self {
        Transform2D::rotation(Angle::degrees(angle_deg)).into()
    }

    /// Rotation about `center`, angle in degrees.
    pub fn rotation_about(angle_deg: f64, center: Point) -> Self {
        Transform2D::translation(-center.x, -center.y)
            .then_rotate(Angle::degrees(angle_deg))
            .then_translate(euclid::vec2(center.x, center.y))
            .into()
    }

    pub fn to_transform(&self) -> Transform2D<f64> {
        Transform2D::new(self.m11, self.m12, self.m21, self.m22, self.dx, self.dy)
    }

    /// The matrix that applies `self` first and `next` second.
    pub fn then(&self, next: &Matrix) -> Matrix {
        self.to_transform().then(&next.to_transform()).into()
    }

    pub fn determinant(&self) -> f64 {
        self.to_transform().determinant()
    }

    pub fn is_invertible(&self) -> bool {
        self.to_transform().is_invertible() && self.determinant().is_finite()
    }

    pub fn invert(&self) -> Option<Matrix> {
        if !self.is_invertible() {
            return None;
        }
        self.to_transform().inverse().map(Matrix::from)
    }

    pub fn transform_point(&self, p: Point) -> Point {
        map_point(&self.to_transform(), p)
    }
}

fn map_point(t: &Transform2D<f64>, p: Point) -> Point {
    let mapped = t.transform_point(euclid::point2(p.x, p.y));
    Point::new(mapped.x, mapped.y)
}

impl From<Transform2D<f64>> for Matrix {
    fn from(t: Transform2D<f64>) -> Self {
        Matrix::new(t.m11, t.m12, t.m21, t.m22, t.m31, t.m32)
    }
}

impl PointTransform for Matrix {
    fn transform_points(&self, points: &mut [Point]) {
        let t = self.to_transform();
        for p in points.iter_mut() {
            *p = map_point(&t, *p);
        }
    }

    fn is_identity(&self) -> bool {
        *self == Matrix::identity()
    }
}

impl From<lyon::math::Transform> for Matrix {
    fn from(t: lyon::math::Transform) -> Self {
        t.cast::<f64>().into()
    }
}

impl From<Matrix> for lyon::math::Transform {
    fn from(m: Matrix) -> Self {
        lyon::math::Transform::new(
            m.m11 as f32,
            m.m12 as f32,
            m.m21 as f32,
            m.m22 as f32,
            m.dx as f32,
            m.dy as f32,
        )
    }
}

impl PointTransform for lyon::math::Transform {
    fn transform_points(&self, points: &mut [Point]) {
        for p in points.iter_mut() {
            *p = self.transform_point((*p).into()).into();
        }
    }

    fn is_identity(&self) -> bool {
        *self == lyon::math::Transform::identity()
    }
}
