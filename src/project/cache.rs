use super::outline::ProjectedOutline;
use super::{compute_projected_outline, ProjectError};
use crate::core::math::Transform2;
use crate::core::traits::Real;
use crate::poly::{PolyPath, StrokeStyle};

/// Single slot memoization of a path's projected outline.
///
/// The slot is keyed on the path's revision counter plus the exact style and transform
/// used, so a repeated projection of an unchanged path is a key comparison instead of a
/// recompute. Interactive editing invalidates naturally: every path mutation bumps the
/// revision (see [PolyPath::revision]).
#[derive(Debug, Clone, Default)]
pub struct OutlineCache<T = f64> {
    slot: Option<CacheSlot<T>>,
}

#[derive(Debug, Clone)]
struct CacheSlot<T> {
    revision: u64,
    style: StrokeStyle<T>,
    transform: Transform2<T>,
    outline: ProjectedOutline<T>,
}

impl<T> OutlineCache<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        OutlineCache { slot: None }
    }

    /// Projected outline for `path`, recomputed only when the path revision, style, or
    /// transform differ from the memoized projection.
    pub fn get_or_compute(
        &mut self,
        path: &PolyPath<T>,
        style: &StrokeStyle<T>,
        transform: &Transform2<T>,
    ) -> Result<&ProjectedOutline<T>, ProjectError> {
        let hit = self.slot.as_ref().is_some_and(|s| {
            s.revision == path.revision() && s.style == *style && s.transform == *transform
        });

        if !hit {
            let outline = compute_projected_outline(path, style, transform)?;
            self.slot = Some(CacheSlot {
                revision: path.revision(),
                style: *style,
                transform: *transform,
                outline,
            });
        }

        // slot is always filled at this point
        Ok(&self.slot.as_ref().unwrap().outline)
    }

    /// Drop the memoized projection.
    #[inline]
    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}
