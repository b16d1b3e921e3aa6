use crate::core::math::{ArcSpan, Transform2, Vector2};
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Single element of a projected stroke outline.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum OutlineElement<T = f64> {
    /// Silhouette vertex.
    Point(Vector2<T>),
    /// Arc primitive from a round join or cap, kept as an arc (not sampled) so bounding
    /// boxes can use its exact extents.
    Arc(ArcSpan<T>),
}

impl<T> OutlineElement<T>
where
    T: Real,
{
    /// Apply an affine transform to the element.
    #[inline]
    pub fn transformed(&self, transform: &Transform2<T>) -> Self {
        match self {
            OutlineElement::Point(p) => OutlineElement::Point(transform.apply(*p)),
            OutlineElement::Arc(arc) => OutlineElement::Arc(arc.transformed(transform)),
        }
    }

    /// True if any coordinate of the element is NaN or infinite.
    pub fn is_non_finite(&self) -> bool {
        match self {
            OutlineElement::Point(p) => p.is_non_finite(),
            OutlineElement::Arc(arc) => {
                arc.center.is_non_finite()
                    || arc.x_axis.is_non_finite()
                    || arc.y_axis.is_non_finite()
                    || !arc.start_angle.is_finite()
                    || !arc.sweep.is_finite()
            }
        }
    }
}

/// Corner-specific geometry produced at one joint by the join projector.
///
/// The join style is dispatched exhaustively to one of these variants; the miter limit
/// policy shows up here as a [JoinCorner::Bevel] result for a [LineJoin](crate::poly::LineJoin::Miter)
/// style.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinCorner<T = f64> {
    /// Straight continuation (turn angle approximately zero or a degenerate edge), no
    /// corner geometry beyond the base projections.
    Continuation,
    /// Single miter apex point on the outer side of the corner.
    Miter(Vector2<T>),
    /// The two outer offset-edge end points connected by a straight chord.
    Bevel(Vector2<T>, Vector2<T>),
    /// Arc spanning the outer wedge of the corner.
    Round(ArcSpan<T>),
}

/// Full projection result at one joint: the corner geometry plus the orthogonal offset
/// end points of the adjacent edges on both sides of the stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinProjection<T = f64> {
    pub corner: JoinCorner<T>,
    /// Offset-edge end points at the joint on both stroke sides. These are silhouette
    /// vertexes regardless of the join style (the inner side of the corner and the points
    /// where the corner geometry meets the offset edges).
    pub base: Vec<Vector2<T>>,
}

impl<T> JoinProjection<T>
where
    T: Real,
{
    /// Append the projection's elements to `out` in outline order (base then corner).
    pub fn append_to(&self, out: &mut ProjectedOutline<T>) {
        for p in self.base.iter() {
            out.push_point(*p);
        }
        match &self.corner {
            JoinCorner::Continuation => {}
            JoinCorner::Miter(apex) => out.push_point(*apex),
            JoinCorner::Bevel(p1, p2) => {
                out.push_point(*p1);
                out.push_point(*p2);
            }
            JoinCorner::Round(arc) => out.push_arc(*arc),
        }
    }
}

/// Cap-specific geometry at an open path end point.
#[derive(Debug, Clone, PartialEq)]
pub enum CapShape<T = f64> {
    /// Truncate exactly at the end point, the base projections close the stroke.
    Butt,
    /// The two cap corners extended past the end point by half the stroke width.
    Square(Vector2<T>, Vector2<T>),
    /// Half circle arc around the end point.
    Round(ArcSpan<T>),
}

/// Full projection result at an open path end point.
#[derive(Debug, Clone, PartialEq)]
pub struct CapProjection<T = f64> {
    pub shape: CapShape<T>,
    /// Orthogonal offset points at the end point on both stroke sides.
    pub base: [Vector2<T>; 2],
}

impl<T> CapProjection<T>
where
    T: Real,
{
    /// Append the projection's elements to `out` in outline order (base then shape).
    pub fn append_to(&self, out: &mut ProjectedOutline<T>) {
        out.push_point(self.base[0]);
        out.push_point(self.base[1]);
        match &self.shape {
            CapShape::Butt => {}
            CapShape::Square(p1, p2) => {
                out.push_point(*p1);
                out.push_point(*p2);
            }
            CapShape::Round(arc) => out.push_arc(*arc),
        }
    }
}

/// Ordered sequence of outline elements representing the stroke silhouette.
///
/// Elements are emitted in path vertex order (per joint: base projections then corner/cap
/// geometry). The sequence is a measurement set for exact bounds and hit regions, it is not
/// stitched into a self-intersection-free ring.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectedOutline<T = f64> {
    elements: Vec<OutlineElement<T>>,
}

impl<T> ProjectedOutline<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        ProjectedOutline {
            elements: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        ProjectedOutline {
            elements: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push_point(&mut self, point: Vector2<T>) {
        self.elements.push(OutlineElement::Point(point));
    }

    #[inline]
    pub fn push_arc(&mut self, arc: ArcSpan<T>) {
        self.elements.push(OutlineElement::Arc(arc));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn elements(&self) -> &[OutlineElement<T>] {
        &self.elements
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &OutlineElement<T>> {
        self.elements.iter()
    }

    /// Apply an affine transform to every element.
    pub fn transformed(&self, transform: &Transform2<T>) -> Self {
        ProjectedOutline {
            elements: self
                .elements
                .iter()
                .map(|e| e.transformed(transform))
                .collect(),
        }
    }

    /// True if every coordinate in the outline is finite (NaN/infinity free).
    ///
    /// A non-finite element in a final outline is a contract violation, callers only hit
    /// this in assertions.
    pub fn is_finite(&self) -> bool {
        self.elements.iter().all(|e| !e.is_non_finite())
    }
}

impl<'a, T> IntoIterator for &'a ProjectedOutline<T> {
    type Item = &'a OutlineElement<T>;
    type IntoIter = std::slice::Iter<'a, OutlineElement<T>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
