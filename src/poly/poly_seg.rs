//! Per-segment geometry: edge tangents, normals, and the signed turn angle at a joint.
//!
//! Coordinate/sign convention (fixed crate-wide): coordinates are y-down screen space and
//! the left-hand normal of a direction `d` is `d.perp() = (-d.y, d.x)`. The signed turn
//! angle at a joint is positive when the path bends toward the `perp` side of the incoming
//! edge, which places the outer side of the corner on the `-perp` side. Tests pin this
//! convention, do not infer it from individual call sites.

use crate::core::math::{dist_squared, Vector2};
use crate::core::traits::Real;

/// Unit tangent (direction) of the segment from `v1` to `v2`.
///
/// Returns `None` for a degenerate (zero length within `pos_equal_eps`) segment rather than
/// producing NaN from normalizing a zero vector. Callers treat a degenerate segment as a
/// straight continuation and skip the join computation at the affected vertex.
#[inline]
pub fn seg_tangent<T>(v1: Vector2<T>, v2: Vector2<T>, pos_equal_eps: T) -> Option<Vector2<T>>
where
    T: Real,
{
    if dist_squared(v1, v2) <= pos_equal_eps * pos_equal_eps {
        return None;
    }

    Some((v2 - v1).normalize())
}

/// Unit left-hand normal of the segment from `v1` to `v2` (tangent rotated +90 degrees).
///
/// Returns `None` for a degenerate segment, same as [seg_tangent].
#[inline]
pub fn seg_normal<T>(v1: Vector2<T>, v2: Vector2<T>, pos_equal_eps: T) -> Option<Vector2<T>>
where
    T: Real,
{
    seg_tangent(v1, v2, pos_equal_eps).map(|t| t.perp())
}

/// Signed turn angle in `(-PI, PI]` between two unit edge tangents meeting at a joint.
///
/// Positive result means the second edge bends toward the `perp` side of the first.
/// A result of exactly `PI` (path doubles back on itself) is returned positive.
#[inline]
pub fn turn_angle_between<T>(tangent1: Vector2<T>, tangent2: Vector2<T>) -> T
where
    T: Real,
{
    T::atan2(tangent1.perp_dot(tangent2), tangent1.dot(tangent2))
}

/// Signed turn angle at joint `b` for the vertex triple `a -> b -> c`.
///
/// Returns `None` if either edge is degenerate (see [seg_tangent]).
#[inline]
pub fn turn_angle<T>(
    a: Vector2<T>,
    b: Vector2<T>,
    c: Vector2<T>,
    pos_equal_eps: T,
) -> Option<T>
where
    T: Real,
{
    let t1 = seg_tangent(a, b, pos_equal_eps)?;
    let t2 = seg_tangent(b, c, pos_equal_eps)?;
    Some(turn_angle_between(t1, t2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-8;

    #[test]
    fn tangent_and_normal() {
        let t = seg_tangent(vec2(0.0, 0.0), vec2(3.0, 0.0), EPS).unwrap();
        assert!(t.fuzzy_eq(vec2(1.0, 0.0)));
        let n = seg_normal(vec2(0.0, 0.0), vec2(3.0, 0.0), EPS).unwrap();
        assert!(n.fuzzy_eq(vec2(0.0, 1.0)));
    }

    #[test]
    fn degenerate_segment_is_none() {
        assert!(seg_tangent(vec2(1.0, 1.0), vec2(1.0, 1.0), EPS).is_none());
        assert!(seg_normal(vec2(1.0, 1.0), vec2(1.0, 1.0 + 1e-12), EPS).is_none());
        assert!(turn_angle(vec2(0.0, 0.0), vec2(0.0, 0.0), vec2(1.0, 0.0), EPS).is_none());
    }

    #[test]
    fn turn_angle_sign_convention() {
        // y-down right angle polyline: up the screen then right
        let a = vec2(0.0, 0.0);
        let b = vec2(0.0, -30.0);
        let c = vec2(30.0, -30.0);
        let angle = turn_angle(a, b, c, EPS).unwrap();
        // tangent1 = (0, -1), tangent2 = (1, 0), perp_dot = 1 => positive turn
        assert!(angle.fuzzy_eq(FRAC_PI_2));

        // mirrored corner turns the other way
        let angle = turn_angle(vec2(0.0, 0.0), vec2(0.0, 30.0), vec2(30.0, 30.0), EPS).unwrap();
        assert!(angle.fuzzy_eq(-FRAC_PI_2));
    }

    #[test]
    fn straight_and_reversal_angles() {
        let straight = turn_angle(vec2(1.0, 1.0), vec2(6.0, 6.0), vec2(36.0, 36.0), EPS).unwrap();
        assert!(straight.fuzzy_eq(0.0));

        let reversal = turn_angle(vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(0.0, 0.0), EPS).unwrap();
        assert!(reversal.abs().fuzzy_eq(PI));
    }
}
