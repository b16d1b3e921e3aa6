//! Stroke projection: offsetting a path's silhouette by its stroke geometry and measuring
//! the exact extents of the result.
//!
//! The entry points are [compute_projected_outline] and [compute_exact_bounding_box]. Both
//! walk the path once, dispatching [project_join] at interior joints (every joint for a
//! closed path) and [project_cap] at the end points of an open path, then map the outline
//! through the shape's transform. Round joins and caps stay arcs all the way through so
//! the bounding box comes out tight under any affine transform.
mod bounds;
mod cache;
mod cap_projections;
mod join_projections;
mod outline;
mod uniform;

pub use bounds::{accumulate_extents, outline_bounding_box, BoundingBox};
pub use cache::OutlineCache;
pub use cap_projections::project_cap;
pub use join_projections::{project_join, StrokeProjectionParams};
pub use outline::{
    CapProjection, CapShape, JoinCorner, JoinProjection, OutlineElement, ProjectedOutline,
};
pub use uniform::{to_uniform_space, uniform_stroke_scalars};

use crate::core::math::{vec2, Transform2};
use crate::core::traits::Real;
use crate::poly::{PolyPath, StrokeStyle};
use thiserror::Error;

/// Error type for the stroke projection entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProjectError {
    /// Stroke width is negative or non-finite.
    #[error("stroke width must be finite and >= 0")]
    InvalidStrokeWidth,
    /// Miter limit is zero, negative, or non-finite.
    #[error("miter limit must be finite and > 0")]
    InvalidMiterLimit,
}

fn validate_style<T>(style: &StrokeStyle<T>) -> Result<(), ProjectError>
where
    T: Real,
{
    if !style.width.is_finite() || style.width < T::zero() {
        return Err(ProjectError::InvalidStrokeWidth);
    }
    if !style.miter_limit.is_finite() || style.miter_limit <= T::zero() {
        return Err(ProjectError::InvalidMiterLimit);
    }
    Ok(())
}

/// Project the stroke silhouette of `path` under `style` and `transform`.
///
/// Joint and end point projections are computed in local space (with per axis scalars
/// canceling the transform's scale when the style is uniform) and the resulting outline is
/// mapped through the full transform. The output is in path vertex order and is finite for
/// any finite input, degenerate joints included.
pub fn compute_projected_outline<T>(
    path: &PolyPath<T>,
    style: &StrokeStyle<T>,
    transform: &Transform2<T>,
) -> Result<ProjectedOutline<T>, ProjectError>
where
    T: Real,
{
    validate_style(style)?;

    let vc = path.vertex_count();
    let mut outline = ProjectedOutline::with_capacity(vc * 5);
    if vc == 0 {
        return Ok(outline);
    }

    let scalars = if style.uniform {
        uniform_stroke_scalars(transform)
    } else {
        vec2(T::one(), T::one())
    };
    let params = StrokeProjectionParams::from_style(style, scalars);

    if vc == 1 {
        // an isolated vertex has no edge direction, it projects to itself
        outline.push_point(path.at(0));
        return Ok(outline.transformed(transform));
    }

    if path.is_closed() {
        for i in 0..vc {
            let a = path.at((i + vc - 1) % vc);
            let b = path.at(i);
            let c = path.at((i + 1) % vc);
            project_join(a, b, c, &params).append_to(&mut outline);
        }
    } else {
        project_cap(path.at(0), path.at(1), style.line_cap, &params).append_to(&mut outline);
        for i in 1..vc - 1 {
            let p = project_join(path.at(i - 1), path.at(i), path.at(i + 1), &params);
            p.append_to(&mut outline);
        }
        project_cap(path.at(vc - 1), path.at(vc - 2), style.line_cap, &params)
            .append_to(&mut outline);
    }

    let outline = outline.transformed(transform);
    debug_assert!(outline.is_finite(), "projection produced non-finite output");
    Ok(outline)
}

/// Exact axis aligned bounding box of the stroked `path`.
///
/// Equivalent to projecting the outline and folding it through
/// [outline_bounding_box]; arcs contribute their true per axis extrema so the box is tight
/// for round joins and caps. Returns `Ok(None)` for an empty path.
pub fn compute_exact_bounding_box<T>(
    path: &PolyPath<T>,
    style: &StrokeStyle<T>,
    transform: &Transform2<T>,
) -> Result<Option<BoundingBox<T>>, ProjectError>
where
    T: Real,
{
    let outline = compute_projected_outline(path, style, transform)?;
    Ok(outline_bounding_box(&outline))
}
