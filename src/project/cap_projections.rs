use super::join_projections::StrokeProjectionParams;
use super::outline::{CapProjection, CapShape};
use crate::core::math::{vec2, ArcSpan, Vector2};
use crate::core::traits::Real;
use crate::poly::{seg_tangent, LineCap};

/// Compute the stroke projection at an open path end point.
///
/// `end` is the path end point and `neighbor` the adjacent vertex, so the cap faces along
/// `neighbor -> end`. The base is always the pair of orthogonal offset points at `end`;
/// the cap style adds:
///
/// * butt: nothing, the stroke truncates exactly at the end point,
/// * square: the two base points extended past the end point by half the stroke width
///   along the edge direction,
/// * round: a half circle arc around the end point.
///
/// A degenerate edge (`end == neighbor` within epsilon) has no direction to cap along and
/// collapses to the end point itself.
pub fn project_cap<T>(
    end: Vector2<T>,
    neighbor: Vector2<T>,
    line_cap: LineCap,
    params: &StrokeProjectionParams<T>,
) -> CapProjection<T>
where
    T: Real,
{
    let outward = match seg_tangent(neighbor, end, params.pos_equal_eps) {
        Some(tan) => tan,
        None => {
            return CapProjection {
                shape: CapShape::Butt,
                base: [end, end],
            };
        }
    };

    let normal = outward.perp();
    let off = params.offset(normal);
    let base = [end + off, end - off];

    let shape = match line_cap {
        LineCap::Butt => CapShape::Butt,
        LineCap::Square => {
            let ext = params.offset(outward);
            CapShape::Square(base[0] + ext, base[1] + ext)
        }
        LineCap::Round => {
            // half circle from the +perp side through the outward direction to the -perp
            // side; sweeping negative passes through `outward` (perp rotated -90 degrees)
            CapShape::Round(ArcSpan::new(
                end,
                vec2(params.half_width * params.stroke_scalars.x, T::zero()),
                vec2(T::zero(), params.half_width * params.stroke_scalars.y),
                T::atan2(normal.y, normal.x),
                -T::pi(),
            ))
        }
    };

    CapProjection { shape, base }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_fuzzy_eq;
    use crate::core::traits::FuzzyEq;
    use crate::poly::{LineJoin, StrokeStyle};

    fn params(width: f64) -> StrokeProjectionParams<f64> {
        let style = StrokeStyle {
            width,
            line_join: LineJoin::Miter,
            line_cap: LineCap::Butt,
            miter_limit: 10.0,
            uniform: false,
        };
        StrokeProjectionParams::from_style(&style, vec2(1.0, 1.0))
    }

    #[test]
    fn butt_cap_truncates_at_end_point() {
        // edge pointing along +x, cap at (10, 0)
        let p = project_cap(vec2(10.0, 0.0), vec2(0.0, 0.0), LineCap::Butt, &params(10.0));
        assert_eq!(p.shape, CapShape::Butt);
        assert!(p.base[0].fuzzy_eq(vec2(10.0, 5.0)));
        assert!(p.base[1].fuzzy_eq(vec2(10.0, -5.0)));
    }

    #[test]
    fn square_cap_extends_half_width() {
        let p = project_cap(
            vec2(10.0, 0.0),
            vec2(0.0, 0.0),
            LineCap::Square,
            &params(10.0),
        );
        match p.shape {
            CapShape::Square(c1, c2) => {
                assert!(c1.fuzzy_eq(vec2(15.0, 5.0)));
                assert!(c2.fuzzy_eq(vec2(15.0, -5.0)));
            }
            s => panic!("expected square cap, got {:?}", s),
        }
    }

    #[test]
    fn round_cap_is_half_circle_through_outward_direction() {
        let p = project_cap(
            vec2(10.0, 0.0),
            vec2(0.0, 0.0),
            LineCap::Round,
            &params(10.0),
        );
        match p.shape {
            CapShape::Round(arc) => {
                assert!(arc.center.fuzzy_eq(vec2(10.0, 0.0)));
                assert_fuzzy_eq!(arc.sweep.abs(), std::f64::consts::PI);
                assert!(arc.start_point().fuzzy_eq(p.base[0]));
                assert!(arc.end_point().fuzzy_eq(p.base[1]));
                // midpoint of the sweep pokes outward past the end point
                let mid = arc.point_at(arc.start_angle + arc.sweep / 2.0);
                assert!(mid.fuzzy_eq(vec2(15.0, 0.0)));
            }
            s => panic!("expected round cap, got {:?}", s),
        }
    }

    #[test]
    fn degenerate_edge_collapses_to_end_point() {
        let p = project_cap(vec2(3.0, 4.0), vec2(3.0, 4.0), LineCap::Round, &params(10.0));
        assert_eq!(p.shape, CapShape::Butt);
        assert!(p.base[0].fuzzy_eq(vec2(3.0, 4.0)));
    }
}
