//! Cancellable frame scheduling.

pub(crate) mod frame;
