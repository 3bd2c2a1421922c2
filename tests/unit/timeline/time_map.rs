use super::*;

#[test]
fn ten_seconds_over_500px_is_50px_per_second() {
    let map = TimeMap::new(500.0);
    assert_eq!(map.view_seconds(), 10.0);
    assert_eq!(map.px_per_second(), 50.0);
    assert_eq!(map.total_width_px(), 30_000.0);
    assert_eq!(map.tick_intervals().label_every, 2.0);
    assert_eq!(map.tick_intervals().tick_every, 0.4);
}

#[test]
fn pixel_seconds_round_trip() {
    let map = TimeMap::new(730.0);
    let total = map.total_width_px();
    let mut x = 0.0;
    while x <= total {
        let back = map.seconds_to_pixel(map.pixel_to_seconds(x));
        assert!((back - x).abs() < 1e-6, "{x} -> {back}");
        x += 97.3;
    }
}

#[test]
fn pixel_to_seconds_clamps_out_of_range() {
    let map = TimeMap::new(500.0);
    assert_eq!(map.pixel_to_seconds(-40.0), 0.0);
    assert_eq!(map.pixel_to_seconds(1e9), 600.0);
    assert_eq!(map.pixel_to_seconds(f64::NAN), 0.0);
}

#[test]
fn zoom_steps_halve_and_double_within_bounds() {
    let mut map = TimeMap::new(500.0);
    map.zoom_in();
    map.zoom_in();
    assert_eq!(map.view_seconds(), 2.5);

    map.set_view_seconds(1.0);
    map.zoom_in();
    assert_eq!(map.view_seconds(), 1.0);

    map.set_view_seconds(600.0);
    map.zoom_out();
    assert_eq!(map.view_seconds(), 600.0);

    map.set_view_seconds(400.0);
    map.zoom_out();
    assert_eq!(map.view_seconds(), 600.0);

    map.set_view_seconds(0.01);
    assert_eq!(map.view_seconds(), 1.0);
}

#[test]
fn zoom_out_from_narrowest_level_doubles() {
    let mut map = TimeMap::new(500.0);
    map.set_view_seconds(1.0);
    map.zoom_out();
    assert_eq!(map.view_seconds(), 2.0);
}

#[test]
fn zoom_keeps_scroll_offset_but_reclamps() {
    let mut map = TimeMap::new(500.0);
    map.scroll_to(1000.0);
    map.zoom_in();
    assert_eq!(map.scroll_offset_px(), 1000.0);

    map.scroll_to(map.max_scroll_px());
    map.zoom_out();
    assert_eq!(map.scroll_offset_px(), map.max_scroll_px());
}

#[test]
fn fully_zoomed_out_has_nothing_to_scroll() {
    let mut map = TimeMap::new(500.0);
    map.set_view_seconds(600.0);
    assert_eq!(map.total_width_px(), 500.0);
    assert_eq!(map.max_scroll_px(), 0.0);
    map.scroll_by(250.0);
    assert_eq!(map.scroll_offset_px(), 0.0);
}

#[test]
fn viewport_x_accounts_for_scroll() {
    let mut map = TimeMap::new(500.0);
    map.scroll_to(500.0);
    assert_eq!(map.viewport_x_to_seconds(0.0), 10.0);
    assert_eq!(map.viewport_x_to_seconds(250.0), 15.0);
    assert_eq!(map.visible_range_s(), (10.0, 20.0));
}

#[test]
fn follow_scrolls_minimally_past_right_margin() {
    let mut map = TimeMap::new(500.0);
    // 9.5s -> 475px, margin edge at 460px.
    assert!(map.follow(9.5));
    assert_eq!(map.scroll_offset_px(), 15.0);
    // Inside the band: nothing to do.
    assert!(!map.follow(8.0));
    assert_eq!(map.scroll_offset_px(), 15.0);
}

#[test]
fn follow_scrolls_back_past_left_margin() {
    let mut map = TimeMap::new(500.0);
    map.scroll_to(1000.0);
    // 20.5s -> 1025px, left margin edge at 1040px.
    assert!(map.follow(20.5));
    assert_eq!(map.scroll_offset_px(), 985.0);
}

#[test]
fn follow_never_leaves_scroll_range() {
    let mut map = TimeMap::new(500.0);
    map.scroll_to(300.0);
    map.follow(0.0);
    assert_eq!(map.scroll_offset_px(), 0.0);

    map.follow(600.0);
    assert_eq!(map.scroll_offset_px(), map.max_scroll_px());
    assert!(!map.follow(f64::NAN));
}

#[test]
fn visible_ticks_are_inside_viewport() {
    let mut map = TimeMap::new(500.0);
    map.scroll_to(1000.0);
    let ticks = map.visible_ticks();
    assert!(!ticks.is_empty());
    assert!(
        ticks
            .iter()
            .all(|t| t.position_px >= 1000.0 && t.position_px <= 1500.0)
    );
    assert_eq!(ticks[0].seconds, 20.0);
    assert_eq!(ticks[0].label.as_deref(), Some("20s"));
}

#[test]
fn zero_width_viewport_degrades_gracefully() {
    let map = TimeMap::new(0.0);
    assert_eq!(map.px_per_second(), 0.0);
    assert_eq!(map.pixel_to_seconds(100.0), 0.0);
    assert_eq!(map.max_scroll_px(), 0.0);
}

#[test]
fn layout_serializes_for_the_ruler() {
    let map = TimeMap::new(500.0);
    let json = serde_json::to_value(map.layout(true)).unwrap();
    assert_eq!(json["pxPerSecond"], 50.0);
    assert_eq!(json["intervals"]["labelEvery"], 2.0);
    assert!(json["ticks"].as_array().unwrap().len() >= 25);
}
