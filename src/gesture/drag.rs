use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Pointer sample delivered by the host, in viewport pixels of the captured element.
pub struct PointerEvent {
    #[serde(default)]
    pub pointer_id: u32,
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub shift: bool,
}

impl PointerEvent {
    /// Primary pointer at `(x, y)` without modifiers.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            pointer_id: 0,
            x,
            y,
            shift: false,
        }
    }

    /// Set the shift modifier.
    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    /// Set the pointer id.
    pub fn with_pointer(mut self, pointer_id: u32) -> Self {
        self.pointer_id = pointer_id;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// When a gesture's mapped value is handed to the owner.
pub enum CommitMode {
    /// Every recognized movement commits.
    Continuous,
    /// Movements only preview; release commits.
    OnRelease,
}

/// Hooks that specialize [`DragGesture`] for one kind of widget.
pub trait DragPolicy {
    /// What a pointer position maps to.
    type Value: Copy;

    /// Horizontal distance a press must travel before it becomes a drag; `0` drags on press.
    fn threshold_px(&self) -> f64;

    /// Whether moves commit or only preview.
    fn commit_mode(&self) -> CommitMode;

    /// Value for the pointer at `current` in a drag that was pressed at `origin`.
    fn value_at(&self, origin: &PointerEvent, current: &PointerEvent) -> Self::Value;

    /// Whether `current` has travelled past [`DragPolicy::threshold_px`] from `origin`.
    fn exceeds_threshold(&self, origin: &PointerEvent, current: &PointerEvent) -> bool {
        (current.x - origin.x).abs() > self.threshold_px()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Capture state of a [`DragGesture`].
pub enum GesturePhase {
    Idle,
    /// Pointer captured, threshold not yet exceeded.
    Pressed { origin: PointerEvent },
    Dragging { origin: PointerEvent },
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// What the owner of a gesture should do in response to one pointer event.
pub enum GestureEvent<V> {
    /// Apply `V` now.
    Commit(V),
    /// Show `V` without applying it.
    Preview(V),
    /// Capture released after a continuous drag; nothing further to apply.
    Released,
    /// Press and release without exceeding the threshold.
    Click,
}

/// Pointer-capture drag state machine: `Idle -> Pressed -> Dragging -> Idle`.
///
/// While captured, events from other pointers are ignored.
#[derive(Clone, Debug)]
pub struct DragGesture<P: DragPolicy> {
    policy: P,
    phase: GesturePhase,
}

impl<P: DragPolicy> DragGesture<P> {
    /// Idle gesture driven by `policy`.
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            phase: GesturePhase::Idle,
        }
    }

    /// Policy in use.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Mutable policy, for refreshing its inputs between events.
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Current phase.
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Whether the threshold has been exceeded.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }

    /// Whether a pointer is captured.
    pub fn is_captured(&self) -> bool {
        !matches!(self.phase, GesturePhase::Idle)
    }

    /// Capture the pointer; zero-threshold policies start dragging immediately.
    pub fn pointer_down(&mut self, ev: PointerEvent) -> Option<GestureEvent<P::Value>> {
        if self.is_captured() {
            return None;
        }
        if self.policy.threshold_px() <= 0.0 {
            self.phase = GesturePhase::Dragging { origin: ev };
            return Some(self.emit(&ev, &ev));
        }
        self.phase = GesturePhase::Pressed { origin: ev };
        None
    }

    /// Feed a move of the captured pointer.
    pub fn pointer_move(&mut self, ev: PointerEvent) -> Option<GestureEvent<P::Value>> {
        match self.phase {
            GesturePhase::Idle => None,
            GesturePhase::Pressed { origin } if origin.pointer_id == ev.pointer_id => {
                if !self.policy.exceeds_threshold(&origin, &ev) {
                    return None;
                }
                trace!(x = ev.x, "drag threshold exceeded");
                self.phase = GesturePhase::Dragging { origin };
                Some(self.emit(&origin, &ev))
            }
            GesturePhase::Dragging { origin } if origin.pointer_id == ev.pointer_id => {
                Some(self.emit(&origin, &ev))
            }
            GesturePhase::Pressed { .. } | GesturePhase::Dragging { .. } => None,
        }
    }

    /// Release the captured pointer.
    pub fn pointer_up(&mut self, ev: PointerEvent) -> Option<GestureEvent<P::Value>> {
        match self.phase {
            GesturePhase::Pressed { origin } if origin.pointer_id == ev.pointer_id => {
                self.phase = GesturePhase::Idle;
                Some(GestureEvent::Click)
            }
            GesturePhase::Dragging { origin } if origin.pointer_id == ev.pointer_id => {
                self.phase = GesturePhase::Idle;
                Some(match self.policy.commit_mode() {
                    CommitMode::Continuous => GestureEvent::Released,
                    CommitMode::OnRelease => {
                        GestureEvent::Commit(self.policy.value_at(&origin, &ev))
                    }
                })
            }
            _ => None,
        }
    }

    /// Drop capture without committing (lost capture, escape key).
    pub fn cancel(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    fn emit(&self, origin: &PointerEvent, current: &PointerEvent) -> GestureEvent<P::Value> {
        let v = self.policy.value_at(origin, current);
        match self.policy.commit_mode() {
            CommitMode::Continuous => GestureEvent::Commit(v),
            CommitMode::OnRelease => GestureEvent::Preview(v),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gesture/drag.rs"]
mod tests;
