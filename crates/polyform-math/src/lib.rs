#![warn(missing_docs)]

//! Math types for the polyform mesh kernel.
//!
//! Thin wrappers around nalgebra providing the types the mesh builders
//! and hull algorithms work with: 2D/3D points, vectors, and a 4x4
//! homogeneous transform for positioning meshes.

use std::ops::Mul;

use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

/// A point in the plane.
pub type Point2 = nalgebra::Point2<f64>;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A 4x4 homogeneous affine transform.
///
/// Composition reads right-to-left, matching the matrix-vector
/// convention: `a.compose(&b)` (or `a * b`) applies `b` first, then `a`.
/// All constructors return new immutable values; applying a transform
/// never mutates it.
///
/// ```
/// use std::f64::consts::FRAC_PI_2;
/// use polyform_math::{Point3, Transform};
///
/// let m = Transform::rotation_z(FRAC_PI_2) * Transform::translation(5.0, 0.0, 0.0);
/// let p = m.apply_point(&Point3::new(10.0, 0.0, 0.0));
/// assert!((p.y - 15.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m[(2, 2)] = sz;
        Self { matrix: m }
    }

    /// Reflection about the plane through the origin with the given normal.
    ///
    /// The normal need not be unit length; it is normalized internally.
    pub fn mirror(normal: &Vec3) -> Self {
        let n = normal.normalize();
        let txx = -2.0 * n.x * n.x;
        let txy = -2.0 * n.x * n.y;
        let txz = -2.0 * n.x * n.z;
        let tyy = -2.0 * n.y * n.y;
        let tyz = -2.0 * n.y * n.z;
        let tzz = -2.0 * n.z * n.z;
        let mut m = Matrix4::identity();
        m[(0, 0)] = 1.0 + txx;
        m[(0, 1)] = txy;
        m[(0, 2)] = txz;
        m[(1, 0)] = txy;
        m[(1, 1)] = 1.0 + tyy;
        m[(1, 2)] = tyz;
        m[(2, 0)] = txz;
        m[(2, 1)] = tyz;
        m[(2, 2)] = 1.0 + tzz;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Rotation about an arbitrary axis through the origin by `angle` radians.
    ///
    /// Built via the axis-angle to quaternion to matrix expansion. The axis
    /// need not be unit length.
    pub fn rotation_about_axis(axis: &Vec3, angle: f64) -> Self {
        let a = axis.normalize();
        let (s, w) = (angle / 2.0).sin_cos();
        let (x, y, z) = (s * a.x, s * a.y, s * a.z);
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let xx = x * x2;
        let yx = y * x2;
        let yy = y * y2;
        let zx = z * x2;
        let zy = z * y2;
        let zz = z * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;
        let mut m = Matrix4::identity();
        m[(0, 0)] = 1.0 - yy - zz;
        m[(0, 1)] = yx - wz;
        m[(0, 2)] = zx + wy;
        m[(1, 0)] = yx + wz;
        m[(1, 1)] = 1.0 - xx - zz;
        m[(1, 2)] = zy - wx;
        m[(2, 0)] = zx - wy;
        m[(2, 1)] = zy + wx;
        m[(2, 2)] = 1.0 - xx - yy;
        Self { matrix: m }
    }

    /// Compose with another transform: applying the result equals applying
    /// `other` first, then `self`.
    pub fn compose(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a batch of points, returning a new list.
    pub fn apply_points(&self, points: &[Point3]) -> Vec<Point3> {
        points.iter().map(|p| self.apply_point(p)).collect()
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.compose(&rhs)
    }
}

impl Mul for &Transform {
    type Output = Transform;

    fn mul(self, rhs: &Transform) -> Transform {
        self.compose(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result.x - 11.0).abs() < 1e-12);
        assert!((result.y - 22.0).abs() < 1e-12);
        assert!((result.z - 33.0).abs() < 1e-12);
    }

    #[test]
    fn test_scale() {
        let t = Transform::scale(2.0, 3.0, 4.0);
        let p = Point3::new(1.0, 1.0, 1.0);
        let result = t.apply_point(&p);
        assert!((result.x - 2.0).abs() < 1e-12);
        assert!((result.y - 3.0).abs() < 1e-12);
        assert!((result.z - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_mirror_x() {
        let t = Transform::mirror(&Vec3::x());
        let p = Point3::new(3.0, 1.0, 2.0);
        let result = t.apply_point(&p);
        assert!((result.x + 3.0).abs() < 1e-12);
        assert!((result.y - 1.0).abs() < 1e-12);
        assert!((result.z - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_mirror_is_involution() {
        let t = Transform::mirror(&Vec3::new(1.0, 2.0, -1.0));
        let p = Point3::new(4.0, -5.0, 6.0);
        let twice = t.compose(&t).apply_point(&p);
        assert!((twice - p).norm() < 1e-12);
    }

    #[test]
    fn test_rotation_z_90() {
        let t = Transform::rotation_z(PI / 2.0);
        let p = Point3::new(1.0, 0.0, 0.0);
        let result = t.apply_point(&p);
        assert!(result.x.abs() < 1e-12);
        assert!((result.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_compose_applies_right_to_left() {
        // translate then scale: (0,0,0) -> (1,0,0) -> (2,0,0)
        let translate = Transform::translation(1.0, 0.0, 0.0);
        let scale = Transform::scale(2.0, 2.0, 2.0);
        let composed = scale.compose(&translate);
        let result = composed.apply_point(&Point3::origin());
        assert!((result.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_compose_identity_law() {
        let composed = Transform::rotation_z(0.0).compose(&Transform::identity());
        let p = Point3::new(7.0, -3.0, 2.5);
        assert!((composed.apply_point(&p) - p).norm() < 1e-12);
    }

    #[test]
    fn test_compose_associativity() {
        let a = Transform::rotation_x(0.3);
        let b = Transform::translation(1.0, 2.0, 3.0);
        let c = Transform::scale(2.0, 0.5, 1.5);
        let left = a.compose(&b).compose(&c);
        let right = a.compose(&b.compose(&c));
        let p = Point3::new(4.0, 5.0, 6.0);
        assert!((left.apply_point(&p) - right.apply_point(&p)).norm() < 1e-12);
    }

    #[test]
    fn test_mul_operator_matches_compose() {
        let a = Transform::rotation_y(1.0);
        let b = Transform::translation(0.0, 2.0, 0.0);
        let p = Point3::new(1.0, 1.0, 1.0);
        let via_mul = (&a * &b).apply_point(&p);
        let via_compose = a.compose(&b).apply_point(&p);
        assert!((via_mul - via_compose).norm() < 1e-12);
    }

    #[test]
    fn test_rotation_about_axis_matches_rotation_z() {
        let quat = Transform::rotation_about_axis(&Vec3::z(), PI / 3.0);
        let direct = Transform::rotation_z(PI / 3.0);
        let p = Point3::new(2.0, -1.0, 4.0);
        assert!((quat.apply_point(&p) - direct.apply_point(&p)).norm() < 1e-12);
    }

    #[test]
    fn test_rotation_about_diagonal_axis() {
        // 180 degrees about (1,1,0): swaps x/y and negates z.
        let t = Transform::rotation_about_axis(&Vec3::new(1.0, 1.0, 0.0), PI);
        let result = t.apply_point(&Point3::new(1.0, 0.0, 0.0));
        assert!(result.x.abs() < 1e-12);
        assert!((result.y - 1.0).abs() < 1e-12);
        assert!(result.z.abs() < 1e-12);
    }

    #[test]
    fn test_apply_points() {
        let t = Transform::translation(5.0, 5.0, 5.0);
        let pts = vec![
            Point3::new(10.0, 20.0, 30.0),
            Point3::origin(),
            Point3::new(-10.0, -20.0, -30.0),
        ];
        let moved = t.apply_points(&pts);
        assert_eq!(moved.len(), 3);
        assert!((moved[1] - Point3::new(5.0, 5.0, 5.0)).norm() < 1e-12);
    }

    #[test]
    fn test_inverse() {
        let t = Transform::translation(1.0, 2.0, 3.0);
        let inv = t.inverse().unwrap();
        let p = Point3::new(5.0, 6.0, 7.0);
        let roundtrip = t.compose(&inv).apply_point(&p);
        assert!((roundtrip - p).norm() < 1e-12);
    }
}
