use crate::{
    foundation::config::TimelineOpts,
    foundation::math::clamp_or,
    timeline::ticks::{Tick, TickIntervals, compute_tick_intervals, generate_ticks},
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Mapping between logical timeline seconds and ruler pixels.
///
/// Content pixels run from `0` to [`TimeMap::total_width_px`]; viewport pixels are content pixels
/// minus the scroll offset. The zoom level is the number of seconds visible at once.
pub struct TimeMap {
    opts: TimelineOpts,
    view_seconds: f64,
    viewport_width_px: f64,
    scroll_offset_px: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Ruler geometry handed to the scrubber UI.
pub struct TickLayout {
    pub view_seconds: f64,
    pub px_per_second: f64,
    pub total_width_px: f64,
    pub scroll_offset_px: f64,
    pub intervals: TickIntervals,
    pub ticks: Vec<Tick>,
}

impl TimeMap {
    /// Default timeline options over a viewport `viewport_width_px` wide.
    pub fn new(viewport_width_px: f64) -> Self {
        Self::with_opts(TimelineOpts::default(), viewport_width_px)
    }

    /// Time-map with explicit options, starting at the initial zoom and no scroll.
    pub fn with_opts(opts: TimelineOpts, viewport_width_px: f64) -> Self {
        let mut map = Self {
            opts,
            view_seconds: opts.initial_view_seconds,
            viewport_width_px: 0.0,
            scroll_offset_px: 0.0,
        };
        map.set_view_seconds(opts.initial_view_seconds);
        map.set_viewport_width(viewport_width_px);
        map
    }

    /// Options this map was built with.
    pub fn opts(&self) -> &TimelineOpts {
        &self.opts
    }

    /// Timeline length in seconds.
    pub fn duration_s(&self) -> f64 {
        self.opts.duration_s
    }

    /// Seconds visible at once (zoom level).
    pub fn view_seconds(&self) -> f64 {
        self.view_seconds
    }

    /// Visible ruler width.
    pub fn viewport_width_px(&self) -> f64 {
        self.viewport_width_px
    }

    /// Content pixel at the left edge of the viewport.
    pub fn scroll_offset_px(&self) -> f64 {
        self.scroll_offset_px
    }

    /// Ruler pixels per timeline second at the current zoom.
    pub fn px_per_second(&self) -> f64 {
        self.viewport_width_px / self.view_seconds
    }

    /// Content width of the whole timeline.
    pub fn total_width_px(&self) -> f64 {
        self.viewport_width_px * self.opts.duration_s / self.view_seconds
    }

    /// Largest valid scroll offset.
    pub fn max_scroll_px(&self) -> f64 {
        (self.total_width_px() - self.viewport_width_px).max(0.0)
    }

    /// Content pixel -> seconds, clamped to `[0, duration]`.
    pub fn pixel_to_seconds(&self, x: f64) -> f64 {
        let pps = self.px_per_second();
        if pps <= 0.0 {
            return 0.0;
        }
        clamp_or(x / pps, 0.0, self.opts.duration_s)
    }

    /// Seconds -> content pixel.
    pub fn seconds_to_pixel(&self, t: f64) -> f64 {
        t * self.px_per_second()
    }

    /// Viewport pixel (pointer position over the ruler) -> seconds.
    pub fn viewport_x_to_seconds(&self, x: f64) -> f64 {
        self.pixel_to_seconds(x + self.scroll_offset_px)
    }

    /// Seconds visible at the left and right edge of the viewport.
    pub fn visible_range_s(&self) -> (f64, f64) {
        (
            self.pixel_to_seconds(self.scroll_offset_px),
            self.pixel_to_seconds(self.scroll_offset_px + self.viewport_width_px),
        )
    }

    /// Set the zoom level, clamped to `[min_view_seconds, duration]`.
    ///
    /// The scroll offset is kept as-is apart from re-clamping into the new content width.
    pub fn set_view_seconds(&mut self, view_seconds: f64) {
        self.view_seconds = clamp_or(
            view_seconds,
            self.opts.min_view_seconds,
            self.opts.duration_s,
        );
        self.clamp_scroll();
    }

    /// Halve the visible span, clamped to the narrowest zoom.
    pub fn zoom_in(&mut self) {
        self.set_view_seconds(self.view_seconds / self.opts.zoom_factor);
    }

    /// Double the visible span, clamped to the full duration.
    pub fn zoom_out(&mut self) {
        self.set_view_seconds(self.view_seconds * self.opts.zoom_factor);
    }

    /// Resize the viewport; non-finite widths become `0`.
    pub fn set_viewport_width(&mut self, width_px: f64) {
        self.viewport_width_px = if width_px.is_finite() {
            width_px.max(0.0)
        } else {
            0.0
        };
        self.clamp_scroll();
    }

    /// Scroll to `offset_px`, clamped to the valid range.
    pub fn scroll_to(&mut self, offset_px: f64) {
        self.scroll_offset_px = clamp_or(offset_px, 0.0, self.max_scroll_px());
    }

    /// Scroll by `delta_px`, clamped to the valid range.
    pub fn scroll_by(&mut self, delta_px: f64) {
        if delta_px.is_finite() {
            self.scroll_to(self.scroll_offset_px + delta_px);
        }
    }

    /// Scroll by the least amount that keeps `t` at least the follow margin away from both
    /// viewport edges. Returns whether the offset changed.
    pub fn follow(&mut self, t: f64) -> bool {
        if !t.is_finite() {
            return false;
        }
        let x = self.seconds_to_pixel(t);
        let margin = self.opts.auto_scroll_margin_px;
        let left = self.scroll_offset_px + margin;
        let right = self.scroll_offset_px + self.viewport_width_px - margin;

        let wanted = if x < left {
            x - margin
        } else if x > right {
            x - self.viewport_width_px + margin
        } else {
            return false;
        };

        let before = self.scroll_offset_px;
        self.scroll_to(wanted);
        self.scroll_offset_px != before
    }

    /// Tick spacing for the current zoom.
    pub fn tick_intervals(&self) -> TickIntervals {
        compute_tick_intervals(self.view_seconds)
    }

    /// All ticks across the full duration.
    pub fn ticks(&self) -> Vec<Tick> {
        generate_ticks(
            self.opts.duration_s,
            self.tick_intervals(),
            self.px_per_second(),
        )
    }

    /// Ticks whose position falls inside the scrolled viewport.
    pub fn visible_ticks(&self) -> Vec<Tick> {
        let lo = self.scroll_offset_px;
        let hi = lo + self.viewport_width_px;
        self.ticks()
            .into_iter()
            .filter(|t| t.position_px >= lo && t.position_px <= hi)
            .collect()
    }

    /// Ruler geometry plus ticks, optionally limited to the viewport.
    pub fn layout(&self, visible_only: bool) -> TickLayout {
        TickLayout {
            view_seconds: self.view_seconds,
            px_per_second: self.px_per_second(),
            total_width_px: self.total_width_px(),
            scroll_offset_px: self.scroll_offset_px,
            intervals: self.tick_intervals(),
            ticks: if visible_only {
                self.visible_ticks()
            } else {
                self.ticks()
            },
        }
    }

    fn clamp_scroll(&mut self) {
        self.scroll_offset_px = clamp_or(self.scroll_offset_px, 0.0, self.max_scroll_px());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/time_map.rs"]
mod tests;
