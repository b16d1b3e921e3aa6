use crate::core::math::{Transform2, Vector2};
use crate::core::traits::Real;

/// Per axis scalars that cancel the scale of `transform` so a stroke keeps its width when
/// the outline is mapped through the full transform.
///
/// The scalars come from the transform's QR decomposition and are applied component wise
/// to offset vectors in local space (before transforming). An axis with approximately zero
/// scale has no inverse; it recovers as a zero scalar so the stroke collapses on that axis
/// instead of blowing up to infinity.
pub fn uniform_stroke_scalars<T>(transform: &Transform2<T>) -> Vector2<T>
where
    T: Real,
{
    let d = transform.decompose();
    let scalar = |scale: T| {
        let s = scale.abs();
        if s.fuzzy_eq_zero() {
            T::zero()
        } else {
            T::one() / s
        }
    };
    Vector2::new(scalar(d.scale_x), scalar(d.scale_y))
}

/// Strip the scale components from `transform`, keeping rotation, skew, and translation.
///
/// Used when projecting a uniform stroke: the outline is produced against this transform
/// so the corner geometry sees the shear and rotation but not the scale. Falls back to
/// scaling by the [uniform_stroke_scalars] when the scale is degenerate and cannot be
/// inverted.
pub fn to_uniform_space<T>(transform: &Transform2<T>) -> Transform2<T>
where
    T: Real,
{
    let d = transform.decompose();
    match Transform2::from_scale(d.scale_x, d.scale_y).invert() {
        Ok(inv_scale) => transform.compose(&inv_scale),
        Err(_) => {
            let s = uniform_stroke_scalars(transform);
            transform.compose(&Transform2::from_scale(s.x, s.y))
        }
    }
}
