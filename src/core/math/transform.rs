use super::Vector2;
use crate::core::traits::Real;
use std::ops;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Epsilon used to classify a transform determinant as zero (singular matrix).
pub const SINGULAR_DET_EPS: f64 = 1e-10;

/// Error type for transform operations that require invertibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Transform determinant is approximately zero so no inverse exists.
    #[error("transform matrix is singular (determinant is approximately zero)")]
    SingularMatrix,
}

/// 2x3 affine transform matrix.
///
/// Stored in the `[a, b, c, d, e, f]` layout common to 2D canvas APIs, mapping a point
/// `(x, y)` to `(a * x + c * y + e, b * x + d * y + f)`. The `e`/`f` components are the
/// translation and are ignored when transforming direction vectors (normals, tangents).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2<T = f64> {
    pub a: T,
    pub b: T,
    pub c: T,
    pub d: T,
    pub e: T,
    pub f: T,
}

/// Scale/skew/rotation components extracted from a [Transform2] by [Transform2::decompose].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformDecomposition<T> {
    pub scale_x: T,
    pub scale_y: T,
    /// Rotation in radians.
    pub rotation: T,
    /// X axis skew in radians (the decomposition leaves all skew on the x axis).
    pub skew_x: T,
}

impl<T> Default for Transform2<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Transform2<T>
where
    T: Real,
{
    #[inline]
    pub fn new(a: T, b: T, c: T, d: T, e: T, f: T) -> Self {
        Transform2 { a, b, c, d, e, f }
    }

    /// Identity transform (maps every point to itself).
    #[inline]
    pub fn identity() -> Self {
        Self::new(
            T::one(),
            T::zero(),
            T::zero(),
            T::one(),
            T::zero(),
            T::zero(),
        )
    }

    /// Pure translation by `(tx, ty)`.
    #[inline]
    pub fn from_translation(tx: T, ty: T) -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::one(), tx, ty)
    }

    /// Pure (possibly non-uniform) scale.
    #[inline]
    pub fn from_scale(sx: T, sy: T) -> Self {
        Self::new(sx, T::zero(), T::zero(), sy, T::zero(), T::zero())
    }

    /// Pure rotation by `angle` radians (counter clockwise for the `perp` convention).
    #[inline]
    pub fn from_rotation(angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s, -s, c, T::zero(), T::zero())
    }

    /// Skew by `skew_x`/`skew_y` radians along the x/y axes.
    #[inline]
    pub fn from_skew(skew_x: T, skew_y: T) -> Self {
        Self::new(
            T::one(),
            skew_y.tan(),
            skew_x.tan(),
            T::one(),
            T::zero(),
            T::zero(),
        )
    }

    /// Compose `self` with `other`, returning the transform that applies `other` first and
    /// `self` second.
    pub fn compose(&self, other: &Self) -> Self {
        Self::new(
            self.a * other.a + self.c * other.b,
            self.b * other.a + self.d * other.b,
            self.a * other.c + self.c * other.d,
            self.b * other.c + self.d * other.d,
            self.a * other.e + self.c * other.f + self.e,
            self.b * other.e + self.d * other.f + self.f,
        )
    }

    /// Apply the transform to a point (translation included).
    #[inline]
    pub fn apply(&self, point: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            self.a * point.x + self.c * point.y + self.e,
            self.b * point.x + self.d * point.y + self.f,
        )
    }

    /// Apply the transform to a direction vector (translation ignored).
    ///
    /// Vector transforms are translation invariant which is what edge tangents and stroke
    /// normals require.
    #[inline]
    pub fn apply_to_vector(&self, vector: Vector2<T>) -> Vector2<T> {
        Vector2::new(
            self.a * vector.x + self.c * vector.y,
            self.b * vector.x + self.d * vector.y,
        )
    }

    /// Determinant of the linear (2x2) part.
    #[inline]
    pub fn determinant(&self) -> T {
        self.a * self.d - self.b * self.c
    }

    /// Returns true if the transform cannot be inverted (determinant approximately zero,
    /// classified using [SINGULAR_DET_EPS]).
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.determinant()
            .fuzzy_eq_zero_eps(T::from(SINGULAR_DET_EPS).unwrap())
    }

    /// Invert the transform.
    ///
    /// Fails with [TransformError::SingularMatrix] when the determinant is approximately zero.
    pub fn invert(&self) -> Result<Self, TransformError> {
        let det = self.determinant();
        if det.fuzzy_eq_zero_eps(T::from(SINGULAR_DET_EPS).unwrap()) {
            return Err(TransformError::SingularMatrix);
        }

        Ok(Self::new(
            self.d / det,
            -self.b / det,
            -self.c / det,
            self.a / det,
            (self.c * self.f - self.d * self.e) / det,
            (self.b * self.e - self.a * self.f) / det,
        ))
    }

    /// QR style decomposition into scale, rotation, and skew components.
    ///
    /// `scale_x` is always non-negative, `scale_y` carries the sign of the determinant, and
    /// all skew is expressed on the x axis. A degenerate transform decomposes to zero scale
    /// rather than failing, callers that divide by the scale components are expected to
    /// handle the zero case (see [uniform_stroke_scalars](crate::project::uniform_stroke_scalars)).
    pub fn decompose(&self) -> TransformDecomposition<T> {
        let denom = self.a * self.a + self.b * self.b;
        let scale_x = denom.sqrt();
        if scale_x.fuzzy_eq_zero_eps(T::from(SINGULAR_DET_EPS).unwrap()) {
            return TransformDecomposition {
                scale_x: T::zero(),
                scale_y: (self.c * self.c + self.d * self.d).sqrt(),
                rotation: T::zero(),
                skew_x: T::zero(),
            };
        }

        TransformDecomposition {
            scale_x,
            scale_y: self.determinant() / scale_x,
            rotation: T::atan2(self.b, self.a),
            skew_x: T::atan2(self.a * self.c + self.b * self.d, denom),
        }
    }
}

impl<T> ops::Mul for Transform2<T>
where
    T: Real,
{
    type Output = Transform2<T>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.compose(&rhs)
    }
}
