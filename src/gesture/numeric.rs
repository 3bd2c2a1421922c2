use crate::{
    foundation::config::{DragOpts, EditorSettings},
    foundation::error::{CastageError, CastageResult},
    foundation::math::{clamp_or, decimals_of, round_to},
    gesture::drag::{CommitMode, DragGesture, DragPolicy, GestureEvent, PointerEvent},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Declared range and granularity of an editable number.
pub struct NumericField {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl NumericField {
    /// Validated field; `step` must be finite and positive, `min <= max`.
    pub fn new(min: f64, max: f64, step: f64) -> CastageResult<Self> {
        if !(step.is_finite() && step > 0.0) {
            return Err(CastageError::validation(format!(
                "numeric field step must be finite and > 0, got {step}"
            )));
        }
        if min.is_nan() || max.is_nan() || min > max {
            return Err(CastageError::validation(format!(
                "numeric field range is invalid: [{min}, {max}]"
            )));
        }
        Ok(Self { min, max, step })
    }

    /// Field without range limits.
    pub fn unbounded(step: f64) -> CastageResult<Self> {
        Self::new(f64::NEG_INFINITY, f64::INFINITY, step)
    }

    /// Decimal places kept after an edit.
    pub fn precision(&self) -> u32 {
        decimals_of(self.step)
    }

    /// Clamp into range and round to [`NumericField::precision`] places.
    pub fn clamp_round(&self, v: f64) -> f64 {
        round_to(clamp_or(v, self.min, self.max), self.precision())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Drag policy mapping horizontal travel to a field value.
pub struct NumericDrag {
    pub field: NumericField,
    /// Field value when the pointer went down.
    pub start_value: f64,
    pub sensitivity: f64,
    pub opts: DragOpts,
}

impl NumericDrag {
    /// Policy for `field` using the user's drag sensitivity.
    pub fn new(field: NumericField, settings: EditorSettings) -> Self {
        Self {
            field,
            start_value: 0.0,
            sensitivity: settings.sanitized().drag_sensitivity,
            opts: DragOpts::default(),
        }
    }

    /// Value change for `dx` pixels of horizontal travel; `fine` applies the shift factor.
    pub fn delta_for(&self, dx: f64, fine: bool) -> f64 {
        let factor = if fine { self.opts.fine_factor } else { 1.0 };
        dx * self.field.step * factor * self.sensitivity
    }
}

impl DragPolicy for NumericDrag {
    type Value = f64;

    fn threshold_px(&self) -> f64 {
        self.opts.threshold_px
    }

    fn commit_mode(&self) -> CommitMode {
        CommitMode::Continuous
    }

    fn value_at(&self, origin: &PointerEvent, current: &PointerEvent) -> f64 {
        let delta = self.delta_for(current.x - origin.x, current.shift);
        self.field.clamp_round(self.start_value + delta)
    }
}

/// A numeric input that can be edited by dragging horizontally across it.
#[derive(Clone, Debug)]
pub struct NumericScrubber {
    value: f64,
    gesture: DragGesture<NumericDrag>,
}

impl NumericScrubber {
    /// Scrubber showing `value` (clamped and rounded to the field).
    pub fn new(field: NumericField, value: f64, settings: EditorSettings) -> Self {
        Self {
            value: field.clamp_round(value),
            gesture: DragGesture::new(NumericDrag::new(field, settings)),
        }
    }

    /// Current field value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Field declaration.
    pub fn field(&self) -> &NumericField {
        &self.gesture.policy().field
    }

    /// Whether a drag past the threshold is in progress.
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Typed entry. Ignored while a drag owns the value.
    pub fn set_value(&mut self, v: f64) {
        if !self.gesture.is_captured() && v.is_finite() {
            self.value = self.field().clamp_round(v);
        }
    }

    /// Apply updated user settings.
    pub fn set_sensitivity(&mut self, settings: EditorSettings) {
        self.gesture.policy_mut().sensitivity = settings.sanitized().drag_sensitivity;
    }

    /// Capture the pointer and remember the value at press.
    pub fn pointer_down(&mut self, ev: PointerEvent) -> Option<GestureEvent<f64>> {
        if !self.gesture.is_captured() {
            self.gesture.policy_mut().start_value = self.value;
        }
        self.gesture.pointer_down(ev)
    }

    /// Returns the new value when this move changed it.
    pub fn pointer_move(&mut self, ev: PointerEvent) -> Option<f64> {
        match self.gesture.pointer_move(ev)? {
            GestureEvent::Commit(v) if v != self.value => {
                self.value = v;
                Some(v)
            }
            _ => None,
        }
    }

    /// Release capture; a press that never passed the threshold is a click.
    pub fn pointer_up(&mut self, ev: PointerEvent) -> Option<GestureEvent<f64>> {
        self.gesture.pointer_up(ev)
    }

    /// Drop capture, keeping the value reached so far.
    pub fn cancel(&mut self) {
        self.gesture.cancel();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/numeric.rs"]
mod tests;
