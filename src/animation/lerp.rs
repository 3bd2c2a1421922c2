use crate::foundation::{
    core::{Point, Size},
    math,
};

/// Interpolation contract for animatable value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with factor `t`; `t` is applied as given (no clamping).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        math::lerp(*a, *b, t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(math::lerp(a.x, b.x, t), math::lerp(a.y, b.y, t))
    }
}

impl Lerp for Size {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Size::new(
            math::lerp(a.width, b.width, t),
            math::lerp(a.height, b.height, t),
        )
    }
}

/// Jump straight to `target`.
pub fn snap<T: Clone>(target: &T) -> T {
    target.clone()
}

/// `v` when finite, otherwise `fallback`.
pub fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
