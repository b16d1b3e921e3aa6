//! Core/common math for working with angles, 2D space, affine transforms, and arcs.
mod arc;
mod base_math;
mod line_line_intersect;
mod transform;
mod vector2;

pub use arc::ArcSpan;
pub use base_math::*;
pub use line_line_intersect::{line_line_intr, LineLineIntr};
pub use transform::{Transform2, TransformDecomposition, TransformError, SINGULAR_DET_EPS};
pub use vector2::{vec2, Vector2};
