use crate::foundation::core::{Affine, LayerId, Point, Size, Vec2};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Capability tag of a layer; gates which specialized attributes are meaningful.
pub enum LayerKind {
    #[default]
    Basic,
    Replicator,
    Gradient,
    Emitter,
    Text,
    Shape,
    Video,
    /// Any tag this crate does not know about; treated like `Basic`.
    #[serde(other)]
    Unknown,
}

impl LayerKind {
    /// Whether replicator instance attributes apply to this kind.
    pub fn supports_replication(self) -> bool {
        matches!(self, Self::Replicator)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Animatable attributes of a layer as stored in the document.
///
/// Optional attributes may be absent in document data; see [`LayerProps::resolved_scale`] and
/// friends for the neutral values they stand for.
pub struct LayerProps {
    /// Position in document units.
    #[serde(default)]
    pub position: Point,
    /// Bounds size; non-negative by convention.
    #[serde(default)]
    pub size: Size,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_position: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Rotation about Z in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl LayerProps {
    /// Props at `(x, y)` with the given bounds; everything else absent.
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Point::new(x, y),
            size: Size::new(width, height),
            ..Self::default()
        }
    }

    /// Set the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Set the uniform scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set rotations about Z, X and Y in degrees.
    pub fn with_rotation(mut self, z: f64, x: f64, y: f64) -> Self {
        self.rotation = Some(z);
        self.rotation_x = Some(x);
        self.rotation_y = Some(y);
        self
    }

    /// Set the corner radius.
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// Set the z-position.
    pub fn with_z_position(mut self, z: f64) -> Self {
        self.z_position = Some(z);
        self
    }

    /// Z-position, `0` when absent.
    pub fn resolved_z_position(&self) -> f64 {
        self.z_position.unwrap_or(0.0)
    }

    /// Scale, `1` when absent.
    pub fn resolved_scale(&self) -> f64 {
        self.scale.unwrap_or(1.0)
    }

    /// Rotation about Z, `0` when absent.
    pub fn resolved_rotation(&self) -> f64 {
        self.rotation.unwrap_or(0.0)
    }

    /// Rotation about X, `0` when absent.
    pub fn resolved_rotation_x(&self) -> f64 {
        self.rotation_x.unwrap_or(0.0)
    }

    /// Rotation about Y, `0` when absent.
    pub fn resolved_rotation_y(&self) -> f64 {
        self.rotation_y.unwrap_or(0.0)
    }

    /// Corner radius, `0` when absent.
    pub fn resolved_corner_radius(&self) -> f64 {
        self.corner_radius.unwrap_or(0.0)
    }

    /// Opacity, `1` when absent.
    pub fn resolved_opacity(&self) -> f64 {
        self.opacity.unwrap_or(1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Per-instance transform of a replicator layer.
///
/// Instance `n` is offset by `n` applications of the translation/rotation and `scale^n`.
pub struct ReplicatorProps {
    #[serde(default = "one_u32")]
    pub instance_count: u32,
    /// Delay between instances in seconds.
    #[serde(default)]
    pub instance_delay: f64,
    #[serde(default)]
    pub instance_translation: [f64; 3],
    /// Degrees about Z.
    #[serde(default)]
    pub instance_rotation: f64,
    #[serde(default = "one_f64")]
    pub instance_scale: f64,
}

fn one_u32() -> u32 {
    1
}

fn one_f64() -> f64 {
    1.0
}

impl Default for ReplicatorProps {
    fn default() -> Self {
        Self {
            instance_count: 1,
            instance_delay: 0.0,
            instance_translation: [0.0; 3],
            instance_rotation: 0.0,
            instance_scale: 1.0,
        }
    }
}

impl ReplicatorProps {
    /// 2D transform of instance `n` relative to the source instance (Z translation is dropped).
    pub fn instance_affine(&self, n: u32) -> Affine {
        let k = f64::from(n);
        let [tx, ty, _] = self.instance_translation;
        let scale = if self.instance_scale.is_finite() {
            self.instance_scale.powi(i32::try_from(n).unwrap_or(i32::MAX))
        } else {
            1.0
        };
        Affine::translate(Vec2::new(tx * k, ty * k))
            * Affine::rotate((self.instance_rotation * k).to_radians())
            * Affine::scale(scale)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A filter attached to a layer, reduced to its scalar amount.
pub struct FilterProps {
    pub kind: String,
    #[serde(default)]
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A visual element of the document, as seen by this crate (read-only).
pub struct Layer {
    pub id: LayerId,
    #[serde(default)]
    pub kind: LayerKind,
    #[serde(flatten)]
    pub props: LayerProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicator: Option<ReplicatorProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterProps>,
}

impl Layer {
    /// Layer without specialized attributes.
    pub fn new(id: impl Into<String>, kind: LayerKind, props: LayerProps) -> Self {
        Self {
            id: LayerId::new(id),
            kind,
            props,
            replicator: None,
            filter: None,
        }
    }

    /// Replicator attributes, present only for replicator layers.
    ///
    /// A replicator without explicit attributes replicates a single untransformed instance.
    pub fn replicator_transform(&self) -> Option<ReplicatorProps> {
        if !self.kind.supports_replication() {
            return None;
        }
        Some(self.replicator.unwrap_or_default())
    }

    /// Finite filter amount, if the layer carries a filter.
    pub fn filter_value(&self) -> Option<f64> {
        self.filter
            .as_ref()
            .map(|f| f.value)
            .filter(|v| v.is_finite())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/layer.rs"]
mod tests;
