//! 2x3 affine transform
//!
//! A [`Transform2D`] maps shape geometry between coordinate frames (for
//! example local shape space to body or world space). The six coefficients
//! form the matrix
//!
//! ```text
//! a  c  tx
//! b  d  ty
//! ```
//!
//! so a point `(x, y)` maps to `(a*x + c*y + tx, b*x + d*y + ty)`.
//!
//! Unspecified fields default to the identity, not to zero. Override only the
//! fields you need with struct update syntax:
//!
//! ```
//! use planar_math::{Transform2D, Vec2};
//!
//! let t = Transform2D { b: 3.0, ty: 5.0, ..Transform2D::IDENTITY };
//! assert_eq!(t.apply(Vec2::new(1.0, 0.0)), Vec2::new(1.0, 8.0));
//! ```

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::Vec2;

/// A 2D affine transform (rotation, scale, shear and translation)
///
/// Deserializing a partial table fills the missing coefficients from the
/// identity transform.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform2D {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform2D {
    /// The identity transform
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    /// Create a transform from all six coefficients
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    /// The identity transform
    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// A pure translation
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self { tx, ty, ..Self::IDENTITY }
    }

    /// A uniform scale about the origin
    pub const fn scaling(s: f64) -> Self {
        Self::scaling_xy(s, s)
    }

    /// A non-uniform scale about the origin
    pub const fn scaling_xy(sx: f64, sy: f64) -> Self {
        Self { a: sx, d: sy, ..Self::IDENTITY }
    }

    /// A counter-clockwise rotation about the origin
    pub fn rotation(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Transform a point (translation applies)
    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    /// Transform a direction (translation is ignored)
    #[inline]
    pub fn apply_vector(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    /// Compose two transforms: result = self * other
    ///
    /// The composed transform applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            a: self.a * other.a + self.c * other.b,
            b: self.b * other.a + self.d * other.b,
            c: self.a * other.c + self.c * other.d,
            d: self.b * other.c + self.d * other.d,
            tx: self.a * other.tx + self.c * other.ty + self.tx,
            ty: self.b * other.tx + self.d * other.ty + self.ty,
        }
    }

    /// Translate in local space, before this transform
    pub fn translated(&self, tx: f64, ty: f64) -> Self {
        self.compose(&Self::translation(tx, ty))
    }

    /// Scale in local space, before this transform
    pub fn scaled(&self, s: f64) -> Self {
        self.compose(&Self::scaling(s))
    }

    /// Rotate in local space, before this transform
    pub fn rotated(&self, radians: f64) -> Self {
        self.compose(&Self::rotation(radians))
    }

    /// Determinant of the linear part
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Compute the inverse transform
    ///
    /// Returns `None` if the linear part is singular (or its determinant is
    /// not finite).
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inv_det = 1.0 / det;

        Some(Self {
            a: self.d * inv_det,
            b: -self.b * inv_det,
            c: -self.c * inv_det,
            d: self.a * inv_det,
            tx: (self.c * self.ty - self.d * self.tx) * inv_det,
            ty: (self.b * self.tx - self.a * self.ty) * inv_det,
        })
    }

    /// Coefficients in field order `[a, b, c, d, tx, ty]`
    #[inline]
    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.tx, self.ty]
    }
}

impl From<[f64; 6]> for Transform2D {
    #[inline]
    fn from([a, b, c, d, tx, ty]: [f64; 6]) -> Self {
        Self::new(a, b, c, d, tx, ty)
    }
}

impl std::ops::Mul for Transform2D {
    type Output = Self;
    #[inline]
    fn mul(self, other: Self) -> Self {
        self.compose(&other)
    }
}

impl std::ops::Mul<Vec2> for Transform2D {
    type Output = Vec2;
    #[inline]
    fn mul(self, p: Vec2) -> Vec2 {
        self.apply(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec2, b: Vec2) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
    }

    #[test]
    fn test_identity_transform() {
        let t = Transform2D::identity();
        assert_eq!(t.apply(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
        assert_eq!(t.to_array(), [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_default() {
        assert_eq!(Transform2D::default(), Transform2D::IDENTITY);
    }

    #[test]
    fn test_partial_override_keeps_identity() {
        let t = Transform2D { b: 3.0, ty: 5.0, ..Transform2D::default() };
        assert_eq!(t.a, 1.0);
        assert_eq!(t.c, 0.0);
        assert_eq!(t.d, 1.0);
        assert_eq!(t.tx, 0.0);

        assert_eq!(t.apply(Vec2::ZERO), Vec2::new(0.0, 5.0));
        assert_eq!(t.apply(Vec2::new(1.0, 0.0)), Vec2::new(1.0, 8.0));
        assert_eq!(t.apply_vector(Vec2::new(1.0, 0.0)), Vec2::new(1.0, 3.0));
    }

    #[test]
    fn test_partial_deserialize_keeps_identity() {
        let t: Transform2D = toml::from_str("b = 3.0\nty = 5.0").unwrap();
        assert_eq!(t, Transform2D::new(1.0, 3.0, 0.0, 1.0, 0.0, 5.0));

        let empty: Transform2D = toml::from_str("").unwrap();
        assert_eq!(empty, Transform2D::IDENTITY);
    }

    #[test]
    fn test_scale_and_translate() {
        let t = Transform2D::new(2.0, 0.0, 0.0, 2.0, 1.0, 1.0);
        assert_eq!(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(3.0, 3.0));
        assert_eq!(t * Vec2::new(1.0, 1.0), Vec2::new(3.0, 3.0));
    }

    #[test]
    fn test_shear() {
        let t = Transform2D { c: 1.0, ..Transform2D::IDENTITY };
        assert_eq!(t.apply(Vec2::new(0.0, 2.0)), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn test_rotation() {
        let t = Transform2D::rotation(PI / 2.0);
        let p = t.apply(Vec2::X);
        assert!(vec_approx_eq(p, Vec2::Y), "Expected Y, got {:?}", p);
    }

    #[test]
    fn test_transform_vector_ignores_translation() {
        let t = Transform2D::translation(100.0, -100.0);
        assert_eq!(t.apply_vector(Vec2::X), Vec2::X);
        assert_eq!(t.apply(Vec2::X), Vec2::new(101.0, -100.0));
    }

    #[test]
    fn test_compose_order() {
        let scale = Transform2D::scaling(2.0);
        let shift = Transform2D::translation(1.0, 0.0);

        // scale * shift: shift first, then scale
        let p = (scale * shift).apply(Vec2::ZERO);
        assert_eq!(p, Vec2::new(2.0, 0.0));

        // shift * scale: scale first, then shift
        let q = (shift * scale).apply(Vec2::ZERO);
        assert_eq!(q, Vec2::new(1.0, 0.0));

        assert_ne!(scale * shift, shift * scale);
    }

    #[test]
    fn test_compose_matches_sequential_apply() {
        let t1 = Transform2D::new(1.0, 2.0, -0.5, 1.5, 3.0, -1.0);
        let t2 = Transform2D::rotation(0.7).translated(2.0, 5.0);
        let p = Vec2::new(-1.25, 4.0);

        let composed = t2.compose(&t1).apply(p);
        let sequential = t2.apply(t1.apply(p));
        assert!(vec_approx_eq(composed, sequential));
    }

    #[test]
    fn test_local_operations() {
        let t = Transform2D::translation(10.0, 0.0).scaled(2.0);
        // Scale happens first, in local space
        assert_eq!(t.apply(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 2.0));

        let r = Transform2D::identity().rotated(PI).translated(1.0, 0.0);
        assert!(vec_approx_eq(r.apply(Vec2::ZERO), Vec2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_inverse() {
        let t = Transform2D::rotation(0.5).scaled(2.0).translated(1.0, -3.0);
        let inv = t.inverse().expect("transform should be invertible");

        let p = Vec2::new(1.0, 2.0);
        let back = inv.apply(t.apply(p));
        assert!(vec_approx_eq(p, back), "Expected {:?}, got {:?}", p, back);

        let id = t * inv;
        for (got, want) in id.to_array().iter().zip(Transform2D::IDENTITY.to_array()) {
            assert!(approx_eq(*got, want));
        }
    }

    #[test]
    fn test_singular_inverse() {
        assert!(Transform2D::scaling(0.0).inverse().is_none());
        assert!(Transform2D::new(1.0, 2.0, 2.0, 4.0, 0.0, 0.0).inverse().is_none());
        assert!(Transform2D { a: f64::NAN, ..Transform2D::IDENTITY }.inverse().is_none());
    }

    #[test]
    fn test_non_finite_propagates() {
        let t = Transform2D { tx: f64::INFINITY, ..Transform2D::IDENTITY };
        let p = t.apply(Vec2::new(1.0, 1.0));
        assert!(p.x.is_infinite());
        assert_eq!(p.y, 1.0);

        let q = Transform2D::IDENTITY.apply(Vec2::new(f64::NAN, 0.0));
        assert!(q.x.is_nan());
    }

    #[test]
    fn test_array_conversion() {
        let coeffs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let t = Transform2D::from(coeffs);
        assert_eq!(t, Transform2D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0));
        assert_eq!(t.to_array(), coeffs);
    }
}
