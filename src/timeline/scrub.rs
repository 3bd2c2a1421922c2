use crate::{
    gesture::drag::{CommitMode, DragPolicy, PointerEvent},
    timeline::time_map::TimeMap,
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Ruler scrubbing: commits the time under the pointer on press and on every move.
pub struct RulerScrub {
    pub map: TimeMap,
}

impl DragPolicy for RulerScrub {
    type Value = f64;

    fn threshold_px(&self) -> f64 {
        0.0
    }

    fn commit_mode(&self) -> CommitMode {
        CommitMode::Continuous
    }

    fn value_at(&self, _origin: &PointerEvent, current: &PointerEvent) -> f64 {
        self.map.viewport_x_to_seconds(current.x)
    }
}
