use crate::core::traits::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Join style applied at interior vertexes (and every vertex of a closed path).
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineJoin {
    /// Extend the outer edges until they meet, falling back to [LineJoin::Bevel] when the
    /// miter length exceeds the miter limit.
    #[default]
    Miter,
    /// Connect the outer edges with a circular arc around the joint.
    Round,
    /// Connect the outer edges directly with a straight chord.
    Bevel,
}

/// Cap style applied at the two end points of an open path.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineCap {
    /// Truncate exactly at the end point.
    #[default]
    Butt,
    /// Extend the stroke past the end point by half the stroke width.
    Square,
    /// Cap with a half circle of radius half the stroke width.
    Round,
}

/// Stroke style parameters consumed by the projection functions.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle<T = f64> {
    /// Stroke width (total, not half), must be >= 0.
    pub width: T,
    pub line_join: LineJoin,
    pub line_cap: LineCap,
    /// Maximum allowed ratio of miter length to stroke width, must be > 0. Exceeding it
    /// degrades a miter join to bevel.
    pub miter_limit: T,
    /// If true the stroke width is defined in final (viewport) space and does not scale
    /// with the shape's own scale.
    pub uniform: bool,
}

impl<T> StrokeStyle<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            width: T::one(),
            line_join: LineJoin::Miter,
            line_cap: LineCap::Butt,
            // canvas default
            miter_limit: T::from(10.0).unwrap(),
            uniform: false,
        }
    }

    #[inline]
    pub fn half_width(&self) -> T {
        self.width * T::half()
    }
}

impl<T> Default for StrokeStyle<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Per-field overrides for a [StrokeStyle]; `None` means "use the base value".
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StrokeStyleOverride<T = f64> {
    pub width: Option<T>,
    pub line_join: Option<LineJoin>,
    pub line_cap: Option<LineCap>,
    pub miter_limit: Option<T>,
    pub uniform: Option<bool>,
}

/// Field selector for [LayeredStrokeStyle::reset].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrokeStyleField {
    Width,
    LineJoin,
    LineCap,
    MiterLimit,
    Uniform,
}

/// Layered stroke style configuration: a base record plus an optional override record.
///
/// Lookup is "override value if present, else base value". Overrides are set per field and
/// can be explicitly reset back to the base, individually or all at once. This replaces
/// runtime property interception with a plain data structure.
///
/// # Examples
///
/// ```
/// # use polystroke::poly::*;
/// let mut style = LayeredStrokeStyle::<f64>::new(StrokeStyle::default());
/// style.set_width(4.0);
/// assert_eq!(style.resolve().width, 4.0);
/// style.reset(StrokeStyleField::Width);
/// assert_eq!(style.resolve().width, 1.0);
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayeredStrokeStyle<T = f64> {
    base: StrokeStyle<T>,
    overrides: StrokeStyleOverride<T>,
}

impl<T> Default for LayeredStrokeStyle<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new(StrokeStyle::default())
    }
}

impl<T> LayeredStrokeStyle<T>
where
    T: Real,
{
    #[inline]
    pub fn new(base: StrokeStyle<T>) -> Self {
        Self {
            base,
            overrides: StrokeStyleOverride::default(),
        }
    }

    #[inline]
    pub fn base(&self) -> &StrokeStyle<T> {
        &self.base
    }

    #[inline]
    pub fn set_width(&mut self, width: T) {
        self.overrides.width = Some(width);
    }

    #[inline]
    pub fn set_line_join(&mut self, line_join: LineJoin) {
        self.overrides.line_join = Some(line_join);
    }

    #[inline]
    pub fn set_line_cap(&mut self, line_cap: LineCap) {
        self.overrides.line_cap = Some(line_cap);
    }

    #[inline]
    pub fn set_miter_limit(&mut self, miter_limit: T) {
        self.overrides.miter_limit = Some(miter_limit);
    }

    #[inline]
    pub fn set_uniform(&mut self, uniform: bool) {
        self.overrides.uniform = Some(uniform);
    }

    /// True if `field` currently has an override applied.
    pub fn is_overridden(&self, field: StrokeStyleField) -> bool {
        match field {
            StrokeStyleField::Width => self.overrides.width.is_some(),
            StrokeStyleField::LineJoin => self.overrides.line_join.is_some(),
            StrokeStyleField::LineCap => self.overrides.line_cap.is_some(),
            StrokeStyleField::MiterLimit => self.overrides.miter_limit.is_some(),
            StrokeStyleField::Uniform => self.overrides.uniform.is_some(),
        }
    }

    /// Clear the override for `field`, restoring the base value.
    ///
    /// Returns true if an override was actually cleared.
    pub fn reset(&mut self, field: StrokeStyleField) -> bool {
        match field {
            StrokeStyleField::Width => self.overrides.width.take().is_some(),
            StrokeStyleField::LineJoin => self.overrides.line_join.take().is_some(),
            StrokeStyleField::LineCap => self.overrides.line_cap.take().is_some(),
            StrokeStyleField::MiterLimit => self.overrides.miter_limit.take().is_some(),
            StrokeStyleField::Uniform => self.overrides.uniform.take().is_some(),
        }
    }

    /// Clear all overrides, restoring every field to the base value.
    #[inline]
    pub fn reset_all(&mut self) {
        self.overrides = StrokeStyleOverride::default();
    }

    /// Effective style: override value if present, else base value, per field.
    pub fn resolve(&self) -> StrokeStyle<T> {
        StrokeStyle {
            width: self.overrides.width.unwrap_or(self.base.width),
            line_join: self.overrides.line_join.unwrap_or(self.base.line_join),
            line_cap: self.overrides.line_cap.unwrap_or(self.base.line_cap),
            miter_limit: self.overrides.miter_limit.unwrap_or(self.base.miter_limit),
            uniform: self.overrides.uniform.unwrap_or(self.base.uniform),
        }
    }
}
