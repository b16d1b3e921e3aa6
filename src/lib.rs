//! Polystroke is a library for projecting the stroke outline of 2D paths and measuring
//! the exact axis aligned bounds of the stroked result under affine transforms.
//!
//! Stroking a path inflates it by half the stroke width on both sides and fills the
//! corners according to the join style (miter, round, or bevel) and the open end points
//! according to the cap style (butt, square, or round). This crate computes that
//! silhouette analytically, as points and arc primitives rather than a sampled
//! approximation, so the bounding box of a stroked shape comes out tight even under
//! rotation, non-uniform scale, and skew.
//!
//! The main entry points are [compute_projected_outline](crate::project::compute_projected_outline)
//! and [compute_exact_bounding_box](crate::project::compute_exact_bounding_box):
//!
//! ```
//! use polystroke::core::math::Transform2;
//! use polystroke::poly::{LineJoin, StrokeStyle};
//! use polystroke::poly_open;
//! use polystroke::project::compute_exact_bounding_box;
//!
//! let path = poly_open![(0.0, 0.0), (0.0, -30.0), (30.0, -30.0)];
//! let mut style = StrokeStyle::default();
//! style.width = 10.0;
//! style.line_join = LineJoin::Miter;
//!
//! let bb = compute_exact_bounding_box(&path, &style, &Transform2::identity())
//!     .unwrap()
//!     .unwrap();
//! // the miter apex at the right angle joint pushes the box out past the vertexes
//! assert_eq!(bb.left, -5.0);
//! assert_eq!(bb.top, -35.0);
//! ```
//!
//! Stroke width is normally defined in the shape's local space and scales with its
//! transform; setting [StrokeStyle::uniform](crate::poly::StrokeStyle) keeps the width
//! fixed in final space instead (see
//! [uniform_stroke_scalars](crate::project::uniform_stroke_scalars)).

#[macro_use]
mod macros;

pub mod core;
pub mod poly;
pub mod project;

pub use static_aabb2d_index::AABB;
