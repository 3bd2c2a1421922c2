use tracing::trace;

use crate::{
    foundation::config::TimelineOpts,
    foundation::math::clamp_or,
    gesture::drag::{DragGesture, GestureEvent, PointerEvent},
    timeline::{
        scrub::RulerScrub,
        time_map::{TickLayout, TimeMap},
    },
};

/// Playhead, playback flag and ruler interaction for one editing timeline.
///
/// The scroll offset has two writers: auto-follow after a playhead change, and the user. Follow
/// is suppressed while the ruler is being scrubbed.
#[derive(Clone, Debug)]
pub struct Timeline {
    map: TimeMap,
    playhead_s: f64,
    playing: bool,
    scrub: DragGesture<RulerScrub>,
}

impl Timeline {
    /// Session with default options, playhead at `0`, paused.
    pub fn new(viewport_width_px: f64) -> Self {
        Self::with_opts(TimelineOpts::default(), viewport_width_px)
    }

    /// Session with explicit timeline options.
    pub fn with_opts(opts: TimelineOpts, viewport_width_px: f64) -> Self {
        let map = TimeMap::with_opts(opts, viewport_width_px);
        Self {
            map,
            playhead_s: 0.0,
            playing: false,
            scrub: DragGesture::new(RulerScrub { map }),
        }
    }

    /// Current time-map (zoom and scroll).
    pub fn map(&self) -> &TimeMap {
        &self.map
    }

    /// Committed playhead in seconds.
    pub fn playhead(&self) -> f64 {
        self.playhead_s
    }

    /// Whether the ruler is being scrubbed.
    pub fn is_dragging(&self) -> bool {
        self.scrub.is_dragging()
    }

    /// Whether playback is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Move the playhead, clamped to the timeline. Follows it with the viewport unless scrubbing.
    pub fn set_playhead(&mut self, t: f64) {
        if !t.is_finite() {
            return;
        }
        self.playhead_s = clamp_or(t, 0.0, self.map.duration_s());
        if !self.scrub.is_dragging() && self.map.follow(self.playhead_s) {
            trace!(
                playhead_s = self.playhead_s,
                scroll_px = self.map.scroll_offset_px(),
                "viewport followed playhead"
            );
        }
    }

    /// Press on the ruler; returns the committed playhead.
    pub fn pointer_down(&mut self, ev: PointerEvent) -> Option<f64> {
        self.sync_scrub_map();
        let out = self.scrub.pointer_down(ev);
        self.apply(out)
    }

    /// Captured move over the ruler; returns the committed playhead.
    pub fn pointer_move(&mut self, ev: PointerEvent) -> Option<f64> {
        self.sync_scrub_map();
        let out = self.scrub.pointer_move(ev);
        self.apply(out)
    }

    /// Release the ruler capture.
    pub fn pointer_up(&mut self, ev: PointerEvent) {
        self.scrub.pointer_up(ev);
    }

    /// See [`TimeMap::zoom_in`].
    pub fn zoom_in(&mut self) {
        self.map.zoom_in();
    }

    /// See [`TimeMap::zoom_out`].
    pub fn zoom_out(&mut self) {
        self.map.zoom_out();
    }

    /// See [`TimeMap::set_view_seconds`].
    pub fn set_view_seconds(&mut self, view_seconds: f64) {
        self.map.set_view_seconds(view_seconds);
    }

    /// See [`TimeMap::set_viewport_width`].
    pub fn set_viewport_width(&mut self, width_px: f64) {
        self.map.set_viewport_width(width_px);
    }

    /// User scroll (wheel, scrollbar).
    pub fn scroll_by(&mut self, delta_px: f64) {
        self.map.scroll_by(delta_px);
    }

    /// Start playback; restarts from `0` when parked at the end.
    pub fn play(&mut self) {
        if self.playhead_s >= self.map.duration_s() {
            self.set_playhead(0.0);
        }
        self.playing = true;
    }

    /// Stop playback, keeping the playhead.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Play when paused, pause when playing.
    pub fn toggle(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Advance playback by `dt_s` seconds of wall time. Playback stops at the end.
    pub fn advance(&mut self, dt_s: f64) {
        if !self.playing || !dt_s.is_finite() || dt_s <= 0.0 {
            return;
        }
        self.set_playhead(self.playhead_s + dt_s);
        if self.playhead_s >= self.map.duration_s() {
            self.playing = false;
        }
    }

    /// See [`TimeMap::layout`].
    pub fn layout(&self, visible_only: bool) -> TickLayout {
        self.map.layout(visible_only)
    }

    fn sync_scrub_map(&mut self) {
        self.scrub.policy_mut().map = self.map;
    }

    fn apply(&mut self, out: Option<GestureEvent<f64>>) -> Option<f64> {
        match out? {
            GestureEvent::Commit(t) => {
                self.set_playhead(t);
                Some(self.playhead_s)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/session.rs"]
mod tests;
