//! Per-view orchestration: one transition controller per mounted layer, driven by one frame queue.

pub(crate) mod runtime;
