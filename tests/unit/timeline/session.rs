use super::*;

#[test]
fn fresh_session_is_parked_at_zero() {
    let tl = Timeline::new(500.0);
    assert_eq!(tl.playhead(), 0.0);
    assert!(!tl.is_playing());
    assert!(!tl.is_dragging());
    assert_eq!(tl.map().view_seconds(), 10.0);
}

#[test]
fn playhead_is_clamped_and_followed() {
    let mut tl = Timeline::new(500.0);
    tl.set_playhead(-5.0);
    assert_eq!(tl.playhead(), 0.0);

    tl.set_playhead(9.5);
    assert_eq!(tl.map().scroll_offset_px(), 15.0);

    tl.set_playhead(1_000.0);
    assert_eq!(tl.playhead(), 600.0);
    assert_eq!(tl.map().scroll_offset_px(), tl.map().max_scroll_px());

    tl.set_playhead(f64::NAN);
    assert_eq!(tl.playhead(), 600.0);
}

#[test]
fn press_on_ruler_commits_immediately() {
    let mut tl = Timeline::new(500.0);
    assert_eq!(tl.pointer_down(PointerEvent::at(100.0, 4.0)), Some(2.0));
    assert!(tl.is_dragging());
    assert_eq!(tl.playhead(), 2.0);

    assert_eq!(tl.pointer_move(PointerEvent::at(125.0, 4.0)), Some(2.5));
    tl.pointer_up(PointerEvent::at(125.0, 4.0));
    assert!(!tl.is_dragging());
    assert_eq!(tl.playhead(), 2.5);
}

#[test]
fn scrubbing_does_not_auto_scroll() {
    let mut tl = Timeline::new(500.0);
    tl.pointer_down(PointerEvent::at(490.0, 0.0));
    assert_eq!(tl.playhead(), 9.8);
    assert_eq!(tl.map().scroll_offset_px(), 0.0);
    tl.pointer_up(PointerEvent::at(490.0, 0.0));

    tl.set_playhead(9.8);
    assert!(tl.map().scroll_offset_px() > 0.0);
}

#[test]
fn scrub_uses_current_scroll_and_zoom() {
    let mut tl = Timeline::new(500.0);
    tl.scroll_by(500.0);
    assert_eq!(tl.pointer_down(PointerEvent::at(0.0, 0.0)), Some(10.0));
    tl.pointer_up(PointerEvent::at(0.0, 0.0));

    tl.zoom_in();
    // 5s view: 100 px/s, offset still 500px.
    assert_eq!(tl.pointer_down(PointerEvent::at(100.0, 0.0)), Some(6.0));
}

#[test]
fn foreign_pointer_cannot_scrub() {
    let mut tl = Timeline::new(500.0);
    tl.pointer_down(PointerEvent::at(50.0, 0.0).with_pointer(7));
    assert_eq!(tl.pointer_move(PointerEvent::at(300.0, 0.0).with_pointer(8)), None);
    assert_eq!(tl.playhead(), 1.0);
}

#[test]
fn playback_advances_and_stops_at_end() {
    let mut tl = Timeline::new(500.0);
    tl.advance(1.0);
    assert_eq!(tl.playhead(), 0.0);

    tl.play();
    tl.advance(0.5);
    assert_eq!(tl.playhead(), 0.5);

    tl.set_playhead(599.8);
    tl.advance(1.0);
    assert_eq!(tl.playhead(), 600.0);
    assert!(!tl.is_playing());

    tl.toggle();
    assert!(tl.is_playing());
    assert_eq!(tl.playhead(), 0.0);
    tl.toggle();
    assert!(!tl.is_playing());
}

#[test]
fn layout_reflects_zoom() {
    let mut tl = Timeline::new(500.0);
    tl.zoom_out();
    let layout = tl.layout(false);
    assert_eq!(layout.view_seconds, 20.0);
    assert_eq!(layout.px_per_second, 25.0);
    assert_eq!(layout.intervals.label_every, 5.0);
}
