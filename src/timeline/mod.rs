//! Timeline ruler: the seconds/pixels time-map, tick layout, scrubbing and playhead session.

pub(crate) mod scrub;
pub(crate) mod session;
pub(crate) mod ticks;
pub(crate) mod time_map;
