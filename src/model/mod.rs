//! Read-only document model: layers, their animatable properties and the active state.

pub(crate) mod document;
pub(crate) mod layer;
