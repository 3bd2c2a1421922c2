//! Pointer-capture drag gestures and the numeric drag-to-edit policy.

pub(crate) mod drag;
pub(crate) mod numeric;
