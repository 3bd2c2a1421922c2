use tracing::{debug, trace};

use crate::{
    animation::{
        lerp::{Lerp, snap},
        value::TransitionValue,
    },
    foundation::config::TransitionOpts,
    foundation::core::{LayerId, Millis, StateKey},
    model::layer::LayerProps,
    schedule::frame::{FrameHandle, FrameScheduler},
};

/// Per-layer runtime that animates a layer's visual properties across active-state changes.
///
/// The controller exposes one [`TransitionValue`] (what should be rendered right now):
///
/// - while idle, the exposed value follows the layer's properties exactly;
/// - when the active-state identity changes, the exposed value at that instant becomes the start
///   point and the controller interpolates toward the *latest* target over
///   [`TransitionOpts::duration_ms`], one scheduled frame at a time;
/// - a further state change mid-flight restarts the window from the current exposed value.
///
/// At most one frame is scheduled at any time. Dropping the controller cancels it.
pub struct TransitionController<S: FrameScheduler> {
    layer: LayerId,
    opts: TransitionOpts,
    scheduler: S,
    value: TransitionValue,
    target: TransitionValue,
    start: TransitionValue,
    start_time: Millis,
    transitioning: bool,
    prev_state: StateKey,
    pending: Option<FrameHandle>,
}

impl<S: FrameScheduler> TransitionController<S> {
    /// Mount a controller; the exposed value starts at the layer's values without animating.
    pub fn new(
        layer: LayerId,
        props: &LayerProps,
        active_state: &str,
        opts: TransitionOpts,
        scheduler: S,
    ) -> Self {
        let value = TransitionValue::from_props(props);
        Self {
            layer,
            opts,
            scheduler,
            value,
            target: value,
            start: value,
            start_time: Millis::default(),
            transitioning: false,
            prev_state: StateKey::new(active_state),
            pending: None,
        }
    }

    /// Layer this controller animates.
    pub fn layer(&self) -> &LayerId {
        &self.layer
    }

    /// Value to render now.
    pub fn value(&self) -> &TransitionValue {
        &self.value
    }

    /// Latest target resolved from the layer's properties.
    pub fn target(&self) -> &TransitionValue {
        &self.target
    }

    /// Whether a transition is running.
    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Active-state identity the controller last observed.
    pub fn active_state(&self) -> &str {
        self.prev_state.as_str()
    }

    /// Frame currently scheduled on behalf of this controller.
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Normalized progress of the running transition at `now`; `1.0` when idle.
    pub fn progress_at(&self, now: Millis) -> f64 {
        if !self.transitioning {
            return 1.0;
        }
        let d = self.opts.duration_ms;
        if d.is_nan() || d <= 0.0 {
            return 1.0;
        }
        let raw = now.since(self.start_time) / d;
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }

    /// Feed the current document view of this layer.
    ///
    /// Call on every property change and every active-state change. Properties update the target;
    /// a changed state identity starts (or restarts) a transition; otherwise an idle controller
    /// snaps straight to the target.
    pub fn observe(&mut self, props: &LayerProps, active_state: &str, now: Millis) {
        self.set_target(props);

        if active_state != self.prev_state.as_str() {
            self.begin(active_state, now);
        } else if !self.transitioning {
            self.value = snap(&self.target);
        }
    }

    /// Run the scheduled frame `handle` at host time `now`.
    ///
    /// Returns `false` (and does nothing) for a handle this controller no longer owns.
    pub fn on_frame(&mut self, handle: FrameHandle, now: Millis) -> bool {
        if self.pending != Some(handle) {
            trace!(layer = %self.layer, handle = handle.id(), "ignoring stale frame");
            return false;
        }
        self.pending = None;

        let progress = self.progress_at(now);
        if progress >= 1.0 {
            self.value = snap(&self.target);
            self.transitioning = false;
            debug!(layer = %self.layer, state = %self.prev_state, "transition settled");
            return true;
        }

        self.value = TransitionValue::lerp(&self.start, &self.target, progress);
        self.pending = Some(self.scheduler.schedule());
        true
    }

    /// Unmount: cancel any scheduled frame and release the controller.
    pub fn teardown(mut self) {
        self.cancel_pending();
    }

    fn set_target(&mut self, props: &LayerProps) {
        if TransitionValue::has_non_finite(props) {
            debug!(layer = %self.layer, "dropping non-finite property input");
        }
        self.target = self.target.merge_finite(props);
    }

    fn begin(&mut self, active_state: &str, now: Millis) {
        self.cancel_pending();

        let retarget = self.transitioning;
        debug!(
            layer = %self.layer,
            from = %self.prev_state,
            to = active_state,
            retarget,
            "transition started"
        );

        self.start = self.value;
        self.start_time = now;
        self.transitioning = true;
        self.prev_state = StateKey::new(active_state);
        self.pending = Some(self.scheduler.schedule());
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: FrameScheduler> Drop for TransitionController<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl<S: FrameScheduler> std::fmt::Debug for TransitionController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionController")
            .field("layer", &self.layer)
            .field("state", &self.prev_state)
            .field("transitioning", &self.transitioning)
            .field("value", &self.value)
            .field("pending", &self.pending)
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
