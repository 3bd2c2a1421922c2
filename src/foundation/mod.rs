//! Shared primitives: identifiers, clock, numeric helpers, configuration and the error type.

pub(crate) mod config;
pub(crate) mod core;
pub(crate) mod error;
pub(crate) mod math;
