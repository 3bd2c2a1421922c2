use crate::{
    animation::lerp::{Lerp, finite_or},
    foundation::core::{Point, Size},
    model::layer::LayerProps,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Complete set of render-time visual properties of one layer.
///
/// A value is never partially advanced: every field moves on the same progress scalar.
pub struct TransitionValue {
    pub position: Point,
    pub z_position: f64,
    pub scale: f64,
    /// Degrees about Z.
    pub rotation: f64,
    /// Degrees about X.
    pub rotation_x: f64,
    /// Degrees about Y.
    pub rotation_y: f64,
    pub corner_radius: f64,
    /// `[0, 1]` by convention; not enforced here.
    pub opacity: f64,
    pub size: Size,
}

impl Default for TransitionValue {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            z_position: 0.0,
            scale: 1.0,
            rotation: 0.0,
            rotation_x: 0.0,
            rotation_y: 0.0,
            corner_radius: 0.0,
            opacity: 1.0,
            size: Size::ZERO,
        }
    }
}

impl TransitionValue {
    /// Resolve document properties, using neutral defaults for missing or non-finite fields.
    pub fn from_props(props: &LayerProps) -> Self {
        Self::default().merge_finite(props)
    }

    /// Copy of `self` with every finite field of `props` applied.
    ///
    /// Non-finite inputs leave the corresponding field untouched.
    pub fn merge_finite(&self, props: &LayerProps) -> Self {
        Self {
            position: Point::new(
                finite_or(props.position.x, self.position.x),
                finite_or(props.position.y, self.position.y),
            ),
            z_position: finite_or(props.resolved_z_position(), self.z_position),
            scale: finite_or(props.resolved_scale(), self.scale),
            rotation: finite_or(props.resolved_rotation(), self.rotation),
            rotation_x: finite_or(props.resolved_rotation_x(), self.rotation_x),
            rotation_y: finite_or(props.resolved_rotation_y(), self.rotation_y),
            corner_radius: finite_or(props.resolved_corner_radius(), self.corner_radius),
            opacity: finite_or(props.resolved_opacity(), self.opacity),
            size: Size::new(
                finite_or(props.size.width, self.size.width),
                finite_or(props.size.height, self.size.height),
            ),
        }
    }

    /// Whether any input field of `props` is non-finite.
    pub fn has_non_finite(props: &LayerProps) -> bool {
        ![
            props.position.x,
            props.position.y,
            props.size.width,
            props.size.height,
            props.resolved_z_position(),
            props.resolved_scale(),
            props.resolved_rotation(),
            props.resolved_rotation_x(),
            props.resolved_rotation_y(),
            props.resolved_corner_radius(),
            props.resolved_opacity(),
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Whether every field is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.position.x,
            self.position.y,
            self.z_position,
            self.scale,
            self.rotation,
            self.rotation_x,
            self.rotation_y,
            self.corner_radius,
            self.opacity,
            self.size.width,
            self.size.height,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

// Rotations interpolate per axis; large multi-axis deltas may not take the shortest visual path.
impl Lerp for TransitionValue {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            position: <Point as Lerp>::lerp(&a.position, &b.position, t),
            z_position: <f64 as Lerp>::lerp(&a.z_position, &b.z_position, t),
            scale: <f64 as Lerp>::lerp(&a.scale, &b.scale, t),
            rotation: <f64 as Lerp>::lerp(&a.rotation, &b.rotation, t),
            rotation_x: <f64 as Lerp>::lerp(&a.rotation_x, &b.rotation_x, t),
            rotation_y: <f64 as Lerp>::lerp(&a.rotation_y, &b.rotation_y, t),
            corner_radius: <f64 as Lerp>::lerp(&a.corner_radius, &b.corner_radius, t),
            opacity: <f64 as Lerp>::lerp(&a.opacity, &b.opacity, t),
            size: <Size as Lerp>::lerp(&a.size, &b.size, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/value.rs"]
mod tests;
