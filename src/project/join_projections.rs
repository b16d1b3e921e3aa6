use super::outline::{JoinCorner, JoinProjection};
use crate::core::math::{line_line_intr, vec2, ArcSpan, LineLineIntr, Vector2};
use crate::core::traits::Real;
use crate::poly::{seg_tangent, turn_angle_between, LineJoin, StrokeStyle};

/// Parameters passed to the per-joint projection functions.
#[derive(Debug, Clone, Copy)]
pub struct StrokeProjectionParams<T>
where
    T: Real,
{
    /// Half the stroke width.
    pub half_width: T,
    /// Per axis scalars applied to offset vectors. `(1, 1)` for regular strokes; for
    /// uniform strokes the inverse of the transform's scale components (see
    /// [uniform_stroke_scalars](crate::project::uniform_stroke_scalars)).
    pub stroke_scalars: Vector2<T>,
    pub line_join: LineJoin,
    pub miter_limit: T,
    /// Epsilon used for degenerate edge detection and offset line intersection.
    pub pos_equal_eps: T,
}

impl<T> StrokeProjectionParams<T>
where
    T: Real,
{
    /// Build params from a style using the scalars given (callers derive them from the
    /// transform when the style is uniform).
    #[inline]
    pub fn from_style(style: &StrokeStyle<T>, stroke_scalars: Vector2<T>) -> Self {
        Self {
            half_width: style.half_width(),
            stroke_scalars,
            line_join: style.line_join,
            miter_limit: style.miter_limit,
            pos_equal_eps: T::fuzzy_epsilon(),
        }
    }

    /// Offset vector for a unit `normal`: half width along the normal with the per axis
    /// scalars applied.
    #[inline]
    pub fn offset(&self, normal: Vector2<T>) -> Vector2<T> {
        normal.scale(self.half_width).component_scale(self.stroke_scalars)
    }
}

/// Compute the stroke projection at joint `b` of the vertex triple `a -> b -> c`.
///
/// Emits the orthogonal offset end points of both adjacent edges on both stroke sides (the
/// base), plus the join-style corner geometry on the outer side of the turn:
///
/// * miter: the intersect of the two outer offset lines, degraded to bevel when the apex
///   distance from `b` exceeds `half_width * miter_limit` or when the offset lines are
///   near parallel (numerically unstable intersect),
/// * bevel: the two outer offset end points,
/// * round: an arc around `b` spanning the turn angle.
///
/// Degenerate edges (either `a == b` or `b == c` within epsilon) skip the corner and
/// project from the surviving edge only; a turn angle of approximately zero is a straight
/// continuation with no corner geometry. Never panics and never produces NaN output for
/// finite input.
pub fn project_join<T>(
    a: Vector2<T>,
    b: Vector2<T>,
    c: Vector2<T>,
    params: &StrokeProjectionParams<T>,
) -> JoinProjection<T>
where
    T: Real,
{
    let eps = params.pos_equal_eps;
    let (tan1, tan2) = match (seg_tangent(a, b, eps), seg_tangent(b, c, eps)) {
        (Some(tan1), Some(tan2)) => (tan1, tan2),
        (Some(tan), None) | (None, Some(tan)) => {
            // one degenerate edge, continue straight through the joint using the edge
            // that survives
            let off = params.offset(tan.perp());
            return JoinProjection {
                corner: JoinCorner::Continuation,
                base: vec![b + off, b - off],
            };
        }
        (None, None) => {
            // both edges collapsed onto the joint, keep the joint itself so output
            // stays finite
            return JoinProjection {
                corner: JoinCorner::Continuation,
                base: vec![b],
            };
        }
    };

    let off1 = params.offset(tan1.perp());
    let off2 = params.offset(tan2.perp());
    let base = vec![b + off1, b - off1, b + off2, b - off2];

    let turn = turn_angle_between(tan1, tan2);
    if turn.fuzzy_eq_zero_eps(eps) {
        // straight angle, offset lines are collinear and there is no corner
        return JoinProjection {
            corner: JoinCorner::Continuation,
            base,
        };
    }

    // positive turn bends toward the perp side so the outer corner is on the -perp side
    let (out1, out2) = if turn > T::zero() {
        (-tan1.perp(), -tan2.perp())
    } else {
        (tan1.perp(), tan2.perp())
    };

    let corner = match params.line_join {
        LineJoin::Bevel => bevel_corner(b, out1, out2, params),
        LineJoin::Round => JoinCorner::Round(outer_arc(b, out1, turn, params)),
        LineJoin::Miter => miter_corner(b, tan1, tan2, out1, out2, params),
    };

    JoinProjection { corner, base }
}

/// The two outer offset end points connected by the bevel chord.
#[inline]
fn bevel_corner<T>(
    b: Vector2<T>,
    out1: Vector2<T>,
    out2: Vector2<T>,
    params: &StrokeProjectionParams<T>,
) -> JoinCorner<T>
where
    T: Real,
{
    JoinCorner::Bevel(b + params.offset(out1), b + params.offset(out2))
}

/// Arc spanning the outer wedge of the corner, from the outer normal of the first edge
/// sweeping the turn angle to the outer normal of the second.
#[inline]
fn outer_arc<T>(
    b: Vector2<T>,
    out1: Vector2<T>,
    turn: T,
    params: &StrokeProjectionParams<T>,
) -> ArcSpan<T>
where
    T: Real,
{
    ArcSpan::new(
        b,
        vec2(params.half_width * params.stroke_scalars.x, T::zero()),
        vec2(T::zero(), params.half_width * params.stroke_scalars.y),
        T::atan2(out1.y, out1.x),
        turn,
    )
}

/// Intersect the two outer offset lines for a miter join, falling back to bevel per the
/// miter limit policy or when the intersect is numerically unstable.
fn miter_corner<T>(
    b: Vector2<T>,
    tan1: Vector2<T>,
    tan2: Vector2<T>,
    out1: Vector2<T>,
    out2: Vector2<T>,
    params: &StrokeProjectionParams<T>,
) -> JoinCorner<T>
where
    T: Real,
{
    // intersect in isotropic offset space, the limit ratio is defined on the unscaled
    // stroke geometry; the apex vector gets the per axis scalars applied afterwards
    let hw = params.half_width;
    let p1 = b + out1.scale(hw);
    let p2 = b + out2.scale(hw);

    match line_line_intr(p1, tan1, p2, tan2, params.pos_equal_eps) {
        LineLineIntr::TrueIntersect { t1, .. } => {
            let apex = p1 + tan1.scale(t1);
            let apex_v = apex - b;
            if apex_v.is_non_finite() || apex_v.length() > hw * params.miter_limit {
                bevel_corner(b, out1, out2, params)
            } else {
                JoinCorner::Miter(b + apex_v.component_scale(params.stroke_scalars))
            }
        }
        // near parallel offset lines: a straight angle was already handled by the caller,
        // so this is a reversal (turn ~ PI) or unstable intersect, both degrade to bevel
        LineLineIntr::NoIntersect | LineLineIntr::Coincident => {
            bevel_corner(b, out1, out2, params)
        }
    }
}
