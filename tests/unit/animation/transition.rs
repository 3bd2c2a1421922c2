use super::*;
use crate::schedule::frame::FrameQueue;

fn base_props() -> LayerProps {
    LayerProps::at(10.0, 20.0, 100.0, 40.0).with_opacity(1.0)
}

fn locked_props() -> LayerProps {
    LayerProps::at(110.0, 220.0, 200.0, 80.0)
        .with_opacity(0.0)
        .with_scale(2.0)
        .with_rotation(90.0, 30.0, -30.0)
        .with_corner_radius(12.0)
        .with_z_position(5.0)
}

fn mount(queue: &FrameQueue) -> TransitionController<FrameQueue> {
    TransitionController::new(
        LayerId::new("layer"),
        &base_props(),
        "Base",
        TransitionOpts::default(),
        queue.clone(),
    )
}

/// Dispatch every due frame at `now`.
fn pump(ctrl: &mut TransitionController<FrameQueue>, queue: &FrameQueue, now: f64) {
    for h in queue.take_due() {
        ctrl.on_frame(h, Millis(now));
    }
}

#[test]
fn mount_exposes_props_verbatim_without_scheduling() {
    let q = FrameQueue::new();
    let ctrl = mount(&q);
    assert_eq!(*ctrl.value(), TransitionValue::from_props(&base_props()));
    assert!(!ctrl.is_transitioning());
    assert_eq!(q.pending_len(), 0);
}

#[test]
fn idle_property_edits_snap() {
    let q = FrameQueue::new();
    let mut ctrl = mount(&q);
    for i in 0..5 {
        let p = LayerProps::at(i as f64 * 3.0, 1.0, 5.0, 5.0).with_opacity(0.1 * i as f64);
        ctrl.observe(&p, "Base", Millis(i as f64 * 16.0));
        assert_eq!(*ctrl.value(), TransitionValue::from_props(&p));
        assert!(!ctrl.is_transitioning());
    }
    assert_eq!(q.pending_len(), 0);
}

#[test]
fn state_change_starts_at_previous_value_and_ends_at_target() {
    let q = FrameQueue::new();
    let mut ctrl = mount(&q);
    let before = *ctrl.value();

    ctrl.observe(&locked_props(), "Locked", Millis(1000.0));
    assert!(ctrl.is_transitioning());
    assert_eq!(*ctrl.value(), before);
    assert_eq!(q.pending_len(), 1);

    pump(&mut ctrl, &q, 1000.0);
    assert_eq!(*ctrl.value(), before);

    pump(&mut ctrl, &q, 1800.0);
    assert_eq!(*ctrl.value(), TransitionValue::from_props(&locked_props()));
    assert!(!ctrl.is_transitioning());
    assert_eq!(q.pending_len(), 0);
}

#[test]
fn opacity_halfway_at_400ms() {
    let q = FrameQueue::new();
    let mut ctrl = mount(&q);
    ctrl.observe(&base_props().with_opacity(0.0), "Locked", Millis(0.0));
    pump(&mut ctrl, &q, 400.0);
    assert_eq!(ctrl.value().opacity, 0.5);
    pump(&mut ctrl, &q, 800.0);
    assert_eq!(ctrl.value().opacity, 0.0);
}

#[test]
fn progress_is_linear_in_elapsed_time() {
    let q = FrameQueue::new();
    let mut ctrl = mount(&q);
    ctrl.observe(&base_props().with_opacity(0.0), "Locked", Millis(0.0));
    for (ms, opacity) in [(200.0, 0.75), (600.0, 0.25)] {
        pump(&mut ctrl, &q, ms);
        assert_eq!(ctrl.progress_at(Millis(ms)), ms / 800.0);
        assert_eq!(ctrl.value().opacity, opacity);
    }
}

#[test]
fn frames_are_field_wise_lerps() {
    let q = FrameQueue::new();
    let mut ctrl = mount(&q);
    let a = *ctrl.value();
    let b = TransitionValue::from_props(&locked_props());
    ctrl.observe(&locked_props(), "Locked", Millis(0.0));
    for ms in [80.0, 200.0, 360.0, 640.0] {
        pump(&mut ctrl, &q, ms);
        let t = ms / 800.0;
        assert_eq!(*ctrl.value(), TransitionValue::lerp(&a, &b, t));
    }
}

#[test]
fn target_edits_mid_transition_are_tracked_not_snapped() {
    let q = FrameQueue::new();
    let mut ctrl = mount(&q);
    ctrl.observe(&base_props().with_opacity(0.0), "Locked", Millis(0.0));
    pump(&mut ctrl, &q, 200.0);
    let mid = *ctrl.value();

    // Edit while transitioning: exposed value does not jump.
    let edited = base_props().with_opacity(0.0).with_scale(5.0);
    ctrl.observe(&edited, "Locked", Millis(250.0));
    assert_eq!(*ctrl.value(), mid);
    assert!(ctrl.is_transitioning());

    pump(&mut ctrl, &q, 400.0);
    assert_eq!(ctrl.value().scale, 1.0 + (5.0 - 1.0) * 0.5);

    pump(&mut ctrl, &q, 900.0);
    assert_eq!(ctrl.value().scale, 5.0);
}

#[test]
fn retarget_starts_from_current_value() {
    let q = FrameQueue::new();
    let mut ctrl = mount(&q);
    ctrl.observe(&base_props().with_opacity(0.0), "Locked", Millis(0.0));
    pump(&mut ctrl, &q, 200.0);
    let at_quarter = *ctrl.value();
    assert_eq!(at_quarter.opacity, 0.75);

    let old_handle = ctrl.pending_frame().unwrap();
    ctrl.observe(&base_props().with_opacity(1.0), "Unlocked", Millis(200.0));
    assert_eq!(*ctrl.value(), at_quarter);
    assert!(!q.is_pending(old_handle));
    assert_eq!(q.pending_len(), 1);

    pump(&mut ctrl, &q, 600.0);
    assert_eq!(ctrl.value().opacity, 0.75 + (1.0 - 0.75) * 0.5);
    pump(&mut ctrl, &q, 1000.0);
    assert_eq!(ctrl.value().opacity, 1.0);
    assert_eq!(ctrl.active_state(), "Unlocked");
}

#[test]
fn stale_handles_are_ignored() {
    let q = FrameQueue::new();
    let mut ctrl = mount(&q);
    ctrl.observe(&base_props().with_opacity(0.0), "Locked", Millis(0.0));
    let stale = q.take_due()[0];

    ctrl.observe(&base_props(), "Base", Millis(100.0));
    let before = *ctrl.value();
    assert!(!ctrl.on_frame(stale, Millis(700.0)));
    assert_eq!(*ctrl.value(), before);
    assert!(ctrl.is_transitioning());
}

#[test]
fn one_frame_in_flight_at_most() {
    let q = FrameQueue::new();
    let mut ctrl = mount(&q);
    ctrl.observe(&locked_props(), "Locked", Millis(0.0));
    for ms in (16..800).step_by(16) {
        assert!(q.pending_len() <= 1);
        pump(&mut ctrl, &q, ms as f64);
    }
}

#[test]
fn teardown_cancels_pending_frame() {
    let q = FrameQueue::new();
    let mut ctrl = mount(&q);
    ctrl.observe(&locked_props(), "Locked", Millis(0.0));
    assert_eq!(q.pending_len(), 1);
    ctrl.teardown();
    assert_eq!(q.pending_len(), 0);
    assert_eq!(q.cancelled_count(), 1);
}

#[test]
fn drop_cancels_pending_frame() {
    let q = FrameQueue::new();
    {
        let mut ctrl = mount(&q);
        ctrl.observe(&locked_props(), "Locked", Millis(0.0));
        pump(&mut ctrl, &q, 100.0);
        assert_eq!(q.pending_len(), 1);
    }
    assert_eq!(q.pending_len(), 0);
    assert!(q.take_due().is_empty());
}

#[test]
fn non_finite_input_is_not_applied() {
    let q = FrameQueue::new();
    let mut ctrl = mount(&q);
    let mut bad = base_props();
    bad.opacity = Some(f64::NAN);
    bad.position.x = f64::INFINITY;
    ctrl.observe(&bad, "Base", Millis(0.0));
    assert!(ctrl.value().is_finite());
    assert_eq!(ctrl.value().opacity, 1.0);
    assert_eq!(ctrl.value().position.x, 10.0);

    ctrl.observe(&bad, "Locked", Millis(0.0));
    pump(&mut ctrl, &q, 400.0);
    assert!(ctrl.value().is_finite());
}

#[test]
fn zero_duration_settles_on_first_frame() {
    let q = FrameQueue::new();
    let opts = TransitionOpts { duration_ms: 0.0 };
    let mut ctrl =
        TransitionController::new(LayerId::new("z"), &base_props(), "Base", opts, q.clone());
    ctrl.observe(&locked_props(), "Locked", Millis(5.0));
    pump(&mut ctrl, &q, 5.0);
    assert_eq!(*ctrl.value(), TransitionValue::from_props(&locked_props()));
    assert!(!ctrl.is_transitioning());
}

#[test]
fn clock_going_backwards_clamps_progress_to_zero() {
    let q = FrameQueue::new();
    let mut ctrl = mount(&q);
    ctrl.observe(&locked_props(), "Locked", Millis(500.0));
    assert_eq!(ctrl.progress_at(Millis(100.0)), 0.0);
    assert_eq!(ctrl.progress_at(Millis(900.0)), 0.5);
    assert_eq!(ctrl.progress_at(Millis(5000.0)), 1.0);
}
