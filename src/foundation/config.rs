use tracing::warn;

use crate::foundation::error::CastageResult;

/// Duration of a state transition.
pub const TRANSITION_DURATION_MS: f64 = 800.0;
/// Fixed length of the editing timeline.
pub const TIMELINE_DURATION_S: f64 = 600.0;
/// Zoom level of a fresh timeline session.
pub const INITIAL_VIEW_SECONDS: f64 = 10.0;
/// Narrowest zoom level.
pub const MIN_VIEW_SECONDS: f64 = 1.0;
/// Per-step zoom multiplier.
pub const ZOOM_FACTOR: f64 = 2.0;
/// Distance the playhead is kept from either visible edge while following.
pub const AUTO_SCROLL_MARGIN_PX: f64 = 40.0;
/// Movement needed before a press on a numeric field turns into a drag.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;
/// Sensitivity used when no persisted setting exists.
pub const DEFAULT_DRAG_SENSITIVITY: f64 = 3.0;
/// Sensitivity multiplier while shift is held.
pub const FINE_DRAG_FACTOR: f64 = 0.1;
/// Candidate label spacings in seconds, ascending.
pub const NICE_INTERVALS_S: [f64; 13] = [
    0.1, 0.2, 0.5, 1.0, 2.0, 5.0, 10.0, 15.0, 30.0, 60.0, 120.0, 300.0, 600.0,
];
/// Labeled ticks targeted per visible span.
pub const LABELS_PER_VIEW: f64 = 5.0;
/// Minor subdivisions per labeled interval.
pub const TICKS_PER_LABEL: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Options for per-layer state transitions.
pub struct TransitionOpts {
    /// Length of one transition window in milliseconds.
    #[serde(default = "default_transition_duration_ms")]
    pub duration_ms: f64,
}

impl Default for TransitionOpts {
    fn default() -> Self {
        Self {
            duration_ms: TRANSITION_DURATION_MS,
        }
    }
}

fn default_transition_duration_ms() -> f64 {
    TRANSITION_DURATION_MS
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Options for the timeline time-map.
pub struct TimelineOpts {
    pub duration_s: f64,
    pub initial_view_seconds: f64,
    pub min_view_seconds: f64,
    pub zoom_factor: f64,
    pub auto_scroll_margin_px: f64,
}

impl Default for TimelineOpts {
    fn default() -> Self {
        Self {
            duration_s: TIMELINE_DURATION_S,
            initial_view_seconds: INITIAL_VIEW_SECONDS,
            min_view_seconds: MIN_VIEW_SECONDS,
            zoom_factor: ZOOM_FACTOR,
            auto_scroll_margin_px: AUTO_SCROLL_MARGIN_PX,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Options for numeric drag-to-edit widgets.
pub struct DragOpts {
    pub threshold_px: f64,
    pub fine_factor: f64,
}

impl Default for DragOpts {
    fn default() -> Self {
        Self {
            threshold_px: DRAG_THRESHOLD_PX,
            fine_factor: FINE_DRAG_FACTOR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// User preferences persisted by the host application.
pub struct EditorSettings {
    #[serde(default = "default_drag_sensitivity")]
    pub drag_sensitivity: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
        }
    }
}

fn default_drag_sensitivity() -> f64 {
    DEFAULT_DRAG_SENSITIVITY
}

impl EditorSettings {
    /// Parse persisted settings JSON, then sanitize the values.
    pub fn from_json(s: &str) -> CastageResult<Self> {
        let raw: Self = serde_json::from_str(s)?;
        Ok(raw.sanitized())
    }

    /// Replace unusable values with defaults.
    ///
    /// Persisted data is not trusted: a non-finite or non-positive sensitivity would freeze or
    /// invert numeric drags.
    pub fn sanitized(self) -> Self {
        let s = self.drag_sensitivity;
        if s.is_finite() && s > 0.0 {
            return self;
        }
        warn!(
            drag_sensitivity = s,
            "ignoring unusable drag sensitivity, using default"
        );
        Self {
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
