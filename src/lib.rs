//! Castage is the animation core of a Core Animation style layer editor.
//!
//! It owns two pieces of runtime behaviour that sit between the document and the canvas:
//!
//! 1. **State transitions**: when the document's active state changes, every mounted layer
//!    interpolates its visual properties from what is currently on screen toward the new values
//!    over a fixed window ([`TransitionController`], orchestrated per view by [`Stage`]).
//! 2. **Timeline time-map**: conversion between seconds and ruler pixels, zoom, auto-follow
//!    scrolling and tick layout for a fixed-length timeline ([`TimeMap`], [`Timeline`]).
//!
//! Pointer-driven editing (ruler scrubbing, numeric drag-to-edit) shares one gesture state machine,
//! [`DragGesture`].
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded and cooperative**: all work is driven by the host's frame callback through
//!   a cancellable [`FrameScheduler`]; nothing here spawns threads or takes locks.
//! - **Read-only document**: layers and the active state are consumed through [`DocumentView`].
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod foundation;
mod gesture;
mod model;
mod schedule;
mod stage;
mod timeline;

pub use animation::lerp::{Lerp, finite_or, snap};
pub use animation::transition::TransitionController;
pub use animation::value::TransitionValue;
pub use foundation::config::{
    AUTO_SCROLL_MARGIN_PX, DEFAULT_DRAG_SENSITIVITY, DRAG_THRESHOLD_PX, DragOpts, EditorSettings,
    FINE_DRAG_FACTOR, INITIAL_VIEW_SECONDS, MIN_VIEW_SECONDS, NICE_INTERVALS_S,
    TIMELINE_DURATION_S, TRANSITION_DURATION_MS, TimelineOpts, TransitionOpts, ZOOM_FACTOR,
};
pub use foundation::core::{Affine, LayerId, Millis, Point, Size, StateKey, Vec2};
pub use foundation::error::{CastageError, CastageResult};
pub use foundation::math::{decimals_of, lerp, round_to};
pub use gesture::drag::{
    CommitMode, DragGesture, DragPolicy, GestureEvent, GesturePhase, PointerEvent,
};
pub use gesture::numeric::{NumericDrag, NumericField, NumericScrubber};
pub use model::document::{DocumentSnapshot, DocumentView};
pub use model::layer::{FilterProps, Layer, LayerKind, LayerProps, ReplicatorProps};
pub use schedule::frame::{FrameHandle, FrameQueue, FrameScheduler};
pub use stage::runtime::{RenderedLayer, Stage, SyncReport};
pub use timeline::scrub::RulerScrub;
pub use timeline::session::Timeline;
pub use timeline::ticks::{
    Tick, TickIntervals, compute_tick_intervals, format_time_label, generate_ticks,
};
pub use timeline::time_map::{TickLayout, TimeMap};
