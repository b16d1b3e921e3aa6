use super::Vector2;
use crate::core::traits::Real;

/// Holds the result of finding the intersect between two infinite lines.
#[derive(Debug, Copy, Clone)]
pub enum LineLineIntr<T>
where
    T: Real,
{
    /// No intersect, lines are parallel and not coincident.
    NoIntersect,
    /// There is a single intersect point between the lines.
    TrueIntersect {
        /// Parametric value for intersect on first line (`p1 + t1 * d1`).
        t1: T,
        /// Parametric value for intersect on second line (`p2 + t2 * d2`).
        t2: T,
    },
    /// Lines lie over each other (are coincident).
    Coincident,
}

/// Finds the intersect between two infinite lines given in point + direction form.
///
/// The first line is `p1 + t1 * d1` and the second `p2 + t2 * d2`. Almost parallel lines are
/// classified as parallel using `epsilon` applied to the perpendicular dot product of the
/// directions, this avoids returning wildly distant intersect points from numerically unstable
/// divisions (the caller is expected to degrade gracefully on [LineLineIntr::NoIntersect]).
///
/// # Examples
///
/// ```
/// # use polystroke::core::math::*;
/// # use polystroke::core::traits::*;
/// let p1 = Vector2::new(0.0, 0.0);
/// let d1 = Vector2::new(1.0, 0.0);
/// let p2 = Vector2::new(2.0, -1.0);
/// let d2 = Vector2::new(0.0, 1.0);
/// if let LineLineIntr::TrueIntersect { t1, t2 } = line_line_intr(p1, d1, p2, d2, 1e-8) {
///     assert!(t1.fuzzy_eq(2.0));
///     assert!(t2.fuzzy_eq(1.0));
/// } else {
///     unreachable!("expected true intersection between lines");
/// }
/// ```
pub fn line_line_intr<T>(
    p1: Vector2<T>,
    d1: Vector2<T>,
    p2: Vector2<T>,
    d2: Vector2<T>,
    epsilon: T,
) -> LineLineIntr<T>
where
    T: Real,
{
    // Lines processed in parametric form using perpendicular products
    // http://geomalgorithms.com/a05-_intersect-1.html
    // http://mathworld.wolfram.com/PerpDotProduct.html
    use LineLineIntr::*;

    let d1_pdot_d2 = d1.perp_dot(d2);
    let w = p2 - p1;

    if !d1_pdot_d2.fuzzy_eq_zero_eps(epsilon) {
        // lines are not parallel
        let t1 = w.perp_dot(d2) / d1_pdot_d2;
        let t2 = w.perp_dot(d1) / d1_pdot_d2;
        return TrueIntersect { t1, t2 };
    }

    // lines are parallel, coincident if the offset between them is parallel to the directions
    if d1.perp_dot(w).fuzzy_eq_zero_eps(epsilon) {
        return Coincident;
    }

    NoIntersect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;
    use crate::core::traits::FuzzyEq;

    const EPS: f64 = 1e-8;

    #[test]
    fn crossing_lines() {
        let r = line_line_intr(vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(0.0, 2.0), vec2(1.0, -1.0), EPS);
        match r {
            LineLineIntr::TrueIntersect { t1, t2 } => {
                assert!(t1.fuzzy_eq(1.0));
                assert!(t2.fuzzy_eq(1.0));
            }
            _ => panic!("expected true intersect, got {:?}", r),
        }
    }

    #[test]
    fn parallel_lines() {
        let r = line_line_intr(vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0), vec2(2.0, 0.0), EPS);
        assert!(matches!(r, LineLineIntr::NoIntersect));
    }

    #[test]
    fn coincident_lines() {
        let r = line_line_intr(vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(3.0, 3.0), vec2(-1.0, -1.0), EPS);
        assert!(matches!(r, LineLineIntr::Coincident));
    }

    #[test]
    fn almost_parallel_classified_as_parallel() {
        // directions differ by much less than epsilon allows
        let r = line_line_intr(
            vec2(0.0, 0.0),
            vec2(1.0, 0.0),
            vec2(0.0, 1.0),
            vec2(1.0, 1e-12),
            1e-10,
        );
        assert!(matches!(r, LineLineIntr::NoIntersect));
    }
}
