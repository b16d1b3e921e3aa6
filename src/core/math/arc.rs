use super::{angle_is_within_sweep_eps, Vector2};
use crate::core::math::Transform2;
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Affine image of a circular arc.
///
/// Point at parameter angle `theta` is `center + x_axis * cos(theta) + y_axis * sin(theta)`
/// with `theta` running from `start_angle` over the signed `sweep` (positive sweeps toward
/// the `perp` side, i.e. counter clockwise in the crate's convention). A plain circular arc
/// has axes `(radius, 0)` and `(0, radius)`; applying an affine transform maps the axes and
/// yields an elliptical arc while staying exact, which is what keeps round join/cap bounding
/// boxes tight under scale and skew.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcSpan<T = f64> {
    pub center: Vector2<T>,
    pub x_axis: Vector2<T>,
    pub y_axis: Vector2<T>,
    /// Start parameter angle in radians.
    pub start_angle: T,
    /// Signed sweep in radians.
    pub sweep: T,
}

impl<T> ArcSpan<T>
where
    T: Real,
{
    #[inline]
    pub fn new(
        center: Vector2<T>,
        x_axis: Vector2<T>,
        y_axis: Vector2<T>,
        start_angle: T,
        sweep: T,
    ) -> Self {
        ArcSpan {
            center,
            x_axis,
            y_axis,
            start_angle,
            sweep,
        }
    }

    /// Circular arc with `radius` around `center`.
    #[inline]
    pub fn circle(center: Vector2<T>, radius: T, start_angle: T, sweep: T) -> Self {
        Self::new(
            center,
            Vector2::new(radius, T::zero()),
            Vector2::new(T::zero(), radius),
            start_angle,
            sweep,
        )
    }

    /// Point on the arc at parameter angle `theta` (not clamped to the sweep).
    #[inline]
    pub fn point_at(&self, theta: T) -> Vector2<T> {
        let (s, c) = theta.sin_cos();
        self.center + self.x_axis.scale(c) + self.y_axis.scale(s)
    }

    #[inline]
    pub fn start_point(&self) -> Vector2<T> {
        self.point_at(self.start_angle)
    }

    #[inline]
    pub fn end_point(&self) -> Vector2<T> {
        self.point_at(self.start_angle + self.sweep)
    }

    /// Returns true if `theta` lies within the arc's sweep (fuzzy inclusive at the ends).
    #[inline]
    pub fn contains_angle(&self, theta: T) -> bool {
        angle_is_within_sweep_eps(theta, self.start_angle, self.sweep, T::fuzzy_epsilon())
    }

    /// Apply an affine transform, producing the exact image arc.
    ///
    /// The center transforms as a point and the axes as vectors, parameter angles are
    /// unchanged.
    #[inline]
    pub fn transformed(&self, transform: &Transform2<T>) -> Self {
        Self::new(
            transform.apply(self.center),
            transform.apply_to_vector(self.x_axis),
            transform.apply_to_vector(self.y_axis),
            self.start_angle,
            self.sweep,
        )
    }

    /// Exact axis-aligned extents of the arc.
    ///
    /// Folds the two end points plus every local axis extremum whose parameter angle lies
    /// within the sweep. For coordinate `x(theta) = cx + ax.x * cos + ay.x * sin` the
    /// extrema are at `theta = atan2(ay.x, ax.x)` and the diametrically opposite angle
    /// (same derivation for y), so the result is tight rather than endpoint-only.
    pub fn extents(&self) -> AABB<T> {
        let start = self.start_point();
        let mut result = AABB::new(start.x, start.y, start.x, start.y);

        let mut fold = |p: Vector2<T>| {
            result.min_x = num_traits::real::Real::min(result.min_x, p.x);
            result.min_y = num_traits::real::Real::min(result.min_y, p.y);
            result.max_x = num_traits::real::Real::max(result.max_x, p.x);
            result.max_y = num_traits::real::Real::max(result.max_y, p.y);
        };

        fold(self.end_point());

        let x_critical = T::atan2(self.y_axis.x, self.x_axis.x);
        let y_critical = T::atan2(self.y_axis.y, self.x_axis.y);
        let candidates = [
            x_critical,
            x_critical + T::pi(),
            y_critical,
            y_critical + T::pi(),
        ];
        for theta in candidates {
            if self.contains_angle(theta) {
                fold(self.point_at(theta));
            }
        }

        result
    }
}
