use super::outline::{OutlineElement, ProjectedOutline};
use crate::core::traits::Real;
use static_aabb2d_index::AABB;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in `{ left, top, width, height }` form.
///
/// Equivalent to an [AABB] with `left = min_x`, `top = min_y` (y-down coordinates), kept
/// as the shape-facing representation consumed by selection/layout logic.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct BoundingBox<T = f64> {
    pub left: T,
    pub top: T,
    pub width: T,
    pub height: T,
}

impl<T> BoundingBox<T>
where
    T: Real,
{
    #[inline]
    pub fn new(left: T, top: T, width: T, height: T) -> Self {
        BoundingBox {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn from_aabb(aabb: &AABB<T>) -> Self {
        BoundingBox {
            left: aabb.min_x,
            top: aabb.min_y,
            width: aabb.max_x - aabb.min_x,
            height: aabb.max_y - aabb.min_y,
        }
    }

    #[inline]
    pub fn to_aabb(&self) -> AABB<T> {
        AABB::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }

    /// Returns true if `(x, y)` lies inside or on the boundary (fuzzy inclusive).
    #[inline]
    pub fn contains_point_eps(&self, x: T, y: T, epsilon: T) -> bool {
        x.fuzzy_in_range_eps(self.left, self.left + self.width, epsilon)
            && y.fuzzy_in_range_eps(self.top, self.top + self.height, epsilon)
    }
}

/// Fold outline elements into their exact extents.
///
/// Points contribute their position; arcs contribute their true per axis extrema via
/// [ArcSpan::extents](crate::core::math::ArcSpan::extents), never just their end points, so
/// the result is the tight box rather than an approximation inflated by stroke width.
/// Returns `None` for an empty element sequence.
///
/// Non-finite coordinates in the input are a contract violation upstream (projection of
/// finite input never produces them) and are debug asserted here.
pub fn accumulate_extents<'a, T, I>(elements: I) -> Option<AABB<T>>
where
    T: Real,
    I: IntoIterator<Item = &'a OutlineElement<T>>,
{
    let mut result: Option<AABB<T>> = None;

    let mut fold = |min_x: T, min_y: T, max_x: T, max_y: T| {
        debug_assert!(
            min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite(),
            "outline element produced non-finite extents"
        );
        result = Some(match result {
            None => AABB::new(min_x, min_y, max_x, max_y),
            Some(r) => AABB::new(
                num_traits::real::Real::min(r.min_x, min_x),
                num_traits::real::Real::min(r.min_y, min_y),
                num_traits::real::Real::max(r.max_x, max_x),
                num_traits::real::Real::max(r.max_y, max_y),
            ),
        });
    };

    for element in elements {
        match element {
            OutlineElement::Point(p) => fold(p.x, p.y, p.x, p.y),
            OutlineElement::Arc(arc) => {
                let e = arc.extents();
                fold(e.min_x, e.min_y, e.max_x, e.max_y);
            }
        }
    }

    result
}

/// Exact bounding box of a projected outline, `None` when the outline is empty.
#[inline]
pub fn outline_bounding_box<T>(outline: &ProjectedOutline<T>) -> Option<BoundingBox<T>>
where
    T: Real,
{
    accumulate_extents(outline.iter()).map(|aabb| BoundingBox::from_aabb(&aabb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::{vec2, ArcSpan};
    use crate::core::traits::FuzzyEq;
    use std::f64::consts::PI;

    #[test]
    fn empty_is_none() {
        let outline = ProjectedOutline::<f64>::new();
        assert!(outline_bounding_box(&outline).is_none());
    }

    #[test]
    fn points_fold_to_min_max() {
        let mut outline = ProjectedOutline::new();
        outline.push_point(vec2(1.0, 2.0));
        outline.push_point(vec2(-3.0, 5.0));
        outline.push_point(vec2(0.5, -1.0));
        let bb = outline_bounding_box(&outline).unwrap();
        assert!(bb.left.fuzzy_eq(-3.0));
        assert!(bb.top.fuzzy_eq(-1.0));
        assert!(bb.width.fuzzy_eq(4.0));
        assert!(bb.height.fuzzy_eq(6.0));
    }

    #[test]
    fn arc_contributes_interior_extrema() {
        // half circle bulging to +y, end points both at y = 0
        let mut outline = ProjectedOutline::new();
        outline.push_arc(ArcSpan::circle(vec2(0.0, 0.0), 2.0, 0.0, PI));
        let bb = outline_bounding_box(&outline).unwrap();
        assert!(bb.top.fuzzy_eq(0.0));
        // the arc's topmost point is interior to the sweep, not an end point
        assert!(bb.height.fuzzy_eq(2.0));
        assert!(bb.left.fuzzy_eq(-2.0));
        assert!(bb.width.fuzzy_eq(4.0));
    }

    #[test]
    fn bounding_box_aabb_round_trip() {
        let bb = BoundingBox::new(1.0, -2.0, 3.0, 4.0);
        let back = BoundingBox::from_aabb(&bb.to_aabb());
        assert_eq!(bb, back);
        assert!(bb.contains_point_eps(1.0, -2.0, 1e-8));
        assert!(bb.contains_point_eps(4.0, 2.0, 1e-8));
        assert!(!bb.contains_point_eps(4.1, 0.0, 1e-8));
    }
}
