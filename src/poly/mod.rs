//! Path data types, per-segment geometry, and stroke style configuration.
mod poly_path;
mod poly_seg;
mod stroke_style;

pub use poly_path::PolyPath;
pub use poly_seg::{seg_normal, seg_tangent, turn_angle, turn_angle_between};
pub use stroke_style::{
    LayeredStrokeStyle, LineCap, LineJoin, StrokeStyle, StrokeStyleField, StrokeStyleOverride,
};
