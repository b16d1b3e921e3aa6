use crate::core::math::Vector2;
use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Straight-segment path data: an ordered vertex sequence plus a closed flag.
///
/// Open paths are polylines (end points receive cap treatment when stroked), closed paths
/// are polygons (every vertex receives join treatment, with an implied segment from the
/// last vertex back to the first).
///
/// Every mutation bumps an internal revision counter so projection results memoized against
/// a path can be invalidated without comparing vertex data (see
/// [OutlineCache](crate::project::OutlineCache)).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone)]
pub struct PolyPath<T = f64> {
    /// Contiguous sequence of vertex positions.
    #[cfg_attr(feature = "serde", serde(rename = "vertexes"))]
    vertex_data: Vec<Vector2<T>>,
    /// Bool to indicate whether the path is closed or open.
    is_closed: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    revision: u64,
}

impl<T> Default for PolyPath<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PolyPath<T>
where
    T: Real,
{
    /// Create a new empty open [PolyPath].
    #[inline]
    pub fn new() -> Self {
        PolyPath {
            vertex_data: Vec::new(),
            is_closed: false,
            revision: 0,
        }
    }

    /// Create a new empty closed [PolyPath].
    #[inline]
    pub fn new_closed() -> Self {
        PolyPath {
            vertex_data: Vec::new(),
            is_closed: true,
            revision: 0,
        }
    }

    /// Create a new empty [PolyPath] with `capacity` vertexes reserved.
    #[inline]
    pub fn with_capacity(capacity: usize, is_closed: bool) -> Self {
        PolyPath {
            vertex_data: Vec::with_capacity(capacity),
            is_closed,
            revision: 0,
        }
    }

    /// Create a [PolyPath] from an iterator of vertex positions.
    #[inline]
    pub fn from_iter<I>(iter: I, is_closed: bool) -> Self
    where
        I: IntoIterator<Item = Vector2<T>>,
    {
        PolyPath {
            vertex_data: iter.into_iter().collect(),
            is_closed,
            revision: 0,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len()
    }

    /// Count of segments in the path (accounts for the closing segment of closed paths).
    #[inline]
    pub fn segment_count(&self) -> usize {
        let vc = self.vertex_count();
        if vc < 2 {
            return 0;
        }
        if self.is_closed {
            vc
        } else {
            vc - 1
        }
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_data.is_empty()
    }

    /// Monotonically increasing counter bumped by every mutation.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Vector2<T>> {
        self.vertex_data.get(index).copied()
    }

    #[inline]
    pub fn at(&self, index: usize) -> Vector2<T> {
        self.vertex_data[index]
    }

    #[inline]
    pub fn iter_vertexes(&self) -> impl Iterator<Item = Vector2<T>> + '_ {
        self.vertex_data.iter().copied()
    }

    /// Iterate segments as `(v1, v2)` pairs, including the closing segment for closed paths.
    pub fn iter_segments(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + '_ {
        let count = self.segment_count();
        (0..count).map(move |i| {
            let v1 = self.vertex_data[i];
            let v2 = self.vertex_data[(i + 1) % self.vertex_count()];
            (v1, v2)
        })
    }

    /// Append a vertex at the end of the path.
    #[inline]
    pub fn add(&mut self, x: T, y: T) {
        self.add_vertex(Vector2::new(x, y));
    }

    /// Append a vertex at the end of the path.
    #[inline]
    pub fn add_vertex(&mut self, vertex: Vector2<T>) {
        self.vertex_data.push(vertex);
        self.revision += 1;
    }

    /// Replace the last vertex, used by interactive creation to track a drag position.
    ///
    /// Returns the replaced vertex or `None` if the path is empty.
    #[inline]
    pub fn replace_last(&mut self, vertex: Vector2<T>) -> Option<Vector2<T>> {
        let last = self.vertex_data.last_mut()?;
        let replaced = *last;
        *last = vertex;
        self.revision += 1;
        Some(replaced)
    }

    #[inline]
    pub fn set_vertex(&mut self, index: usize, vertex: Vector2<T>) {
        self.vertex_data[index] = vertex;
        self.revision += 1;
    }

    #[inline]
    pub fn set_is_closed(&mut self, is_closed: bool) {
        self.is_closed = is_closed;
        self.revision += 1;
    }

    #[inline]
    pub fn clear(&mut self) {
        self.vertex_data.clear();
        self.revision += 1;
    }
}

impl<T> Index<usize> for PolyPath<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertex_data[index]
    }
}

impl<T> IndexMut<usize> for PolyPath<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vertex_data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::vec2;

    #[test]
    fn segment_iteration_open_and_closed() {
        let mut path = PolyPath::<f64>::new();
        path.add(0.0, 0.0);
        path.add(1.0, 0.0);
        path.add(1.0, 1.0);
        assert_eq!(path.segment_count(), 2);
        let segs: Vec<_> = path.iter_segments().collect();
        assert_eq!(segs.len(), 2);
        assert!(segs[1].1.fuzzy_eq(vec2(1.0, 1.0)));

        path.set_is_closed(true);
        assert_eq!(path.segment_count(), 3);
        let segs: Vec<_> = path.iter_segments().collect();
        // closing segment wraps back to the first vertex
        assert!(segs[2].0.fuzzy_eq(vec2(1.0, 1.0)));
        assert!(segs[2].1.fuzzy_eq(vec2(0.0, 0.0)));
    }

    #[test]
    fn revision_bumps_on_mutation() {
        let mut path = PolyPath::<f64>::new();
        let r0 = path.revision();
        path.add(0.0, 0.0);
        assert!(path.revision() > r0);
        let r1 = path.revision();
        path.replace_last(vec2(2.0, 2.0));
        assert!(path.revision() > r1);
        assert!(path.at(0).fuzzy_eq(vec2(2.0, 2.0)));
        let r2 = path.revision();
        path.set_is_closed(true);
        assert!(path.revision() > r2);
    }

    #[test]
    fn from_iter_collects_vertexes() {
        let path = PolyPath::from_iter([vec2(0.0, 0.0), vec2(5.0, 0.0), vec2(5.0, 5.0)], true);
        assert!(path.is_closed());
        assert_eq!(path.vertex_count(), 3);
        assert_eq!(path.revision(), 0);
        assert_eq!(path.get(1), Some(vec2(5.0, 0.0)));
        assert_eq!(path.get(3), None);
    }

    #[test]
    fn replace_last_on_empty_is_none() {
        let mut path = PolyPath::<f64>::new();
        assert_eq!(path.replace_last(vec2(1.0, 1.0)), None);
    }
}
