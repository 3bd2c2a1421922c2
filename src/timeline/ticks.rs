use crate::foundation::{
    config::{LABELS_PER_VIEW, NICE_INTERVALS_S, TICKS_PER_LABEL},
    math::{distance_to_multiple, round_to},
};

/// Tolerance for deciding that a tick sits on a label boundary.
const LABEL_TOLERANCE_S: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// Spacing of minor ticks and labeled major ticks, in seconds.
pub struct TickIntervals {
    pub tick_every: f64,
    pub label_every: f64,
}

/// Pick tick spacing for a view spanning `view_seconds`.
///
/// `label_every` is the smallest "nice" interval with `view_seconds / 5 <= label_every`, giving
/// about five labels per view with four minor ticks between neighbours. Spans no interval can
/// cover (or NaN) fall back to the largest interval.
pub fn compute_tick_intervals(view_seconds: f64) -> TickIntervals {
    let wanted = view_seconds / LABELS_PER_VIEW;
    let label_every = NICE_INTERVALS_S
        .iter()
        .copied()
        .find(|&iv| wanted <= iv)
        .unwrap_or(NICE_INTERVALS_S[NICE_INTERVALS_S.len() - 1]);
    TickIntervals {
        tick_every: label_every / TICKS_PER_LABEL,
        label_every,
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
/// One ruler tick, positioned in content pixels.
pub struct Tick {
    pub seconds: f64,
    pub position_px: f64,
    pub labeled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Every tick over `[0, duration_s]`.
///
/// Tick times are rounded to milliseconds so accumulated float error never leaks into labels.
pub fn generate_ticks(duration_s: f64, intervals: TickIntervals, px_per_second: f64) -> Vec<Tick> {
    let TickIntervals {
        tick_every,
        label_every,
    } = intervals;
    if tick_every.is_nan() || tick_every <= 0.0 || !duration_s.is_finite() || duration_s < 0.0 {
        return Vec::new();
    }

    // The epsilon keeps an exact final tick (e.g. 600 / 0.4) from being lost to division error.
    let count = (duration_s / tick_every + 1e-9).floor() as u64;
    (0..=count)
        .map(|i| {
            let seconds = round_to(i as f64 * tick_every, 3);
            let labeled = distance_to_multiple(seconds, label_every) < LABEL_TOLERANCE_S;
            Tick {
                seconds,
                position_px: seconds * px_per_second,
                labeled,
                label: labeled.then(|| format_time_label(seconds, label_every)),
            }
        })
        .collect()
}

/// Ruler label for `seconds`: `"2s"`, `"0.5s"` below one-second spacing, `"m:ss"` from a minute on.
pub fn format_time_label(seconds: f64, label_every: f64) -> String {
    if seconds < 60.0 {
        if label_every < 1.0 {
            format!("{seconds:.1}s")
        } else {
            format!("{}s", seconds.round() as u64)
        }
    } else {
        let total = seconds.round() as u64;
        format!("{}:{:02}", total / 60, total % 60)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/ticks.rs"]
mod tests;
