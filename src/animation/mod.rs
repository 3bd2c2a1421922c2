//! State-transition interpolation.
//!
//! [`value::TransitionValue`] is the render-time snapshot of a layer, [`lerp::Lerp`] blends two of
//! them, and [`transition::TransitionController`] drives the blend across active-state changes.

pub(crate) mod lerp;
pub(crate) mod transition;
pub(crate) mod value;
