/// Linear interpolation `a + (b - a) * t`.
///
/// `t` is not clamped, so callers may extrapolate; the transition controller clamps its progress
/// before calling this.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp that tolerates inverted bounds and maps NaN to `lo`.
pub(crate) fn clamp_or(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        return lo;
    }
    if lo > hi {
        return v.clamp(hi, lo);
    }
    v.clamp(lo, hi)
}

/// Round `v` to `decimals` places after the point.
///
/// Values too large to scale are returned unchanged.
pub fn round_to(v: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let scaled = v * factor;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / factor
}

/// Most decimal places [`decimals_of`] reports; beyond this `f64` carries no useful digits.
pub const MAX_DECIMALS: u32 = 15;

/// Number of decimal places carried by a step value (`1` -> 0, `0.1` -> 1, `0.25` -> 2).
///
/// Capped at [`MAX_DECIMALS`].
pub fn decimals_of(step: f64) -> u32 {
    if !step.is_finite() {
        return 0;
    }
    let text = format!("{}", step.abs());
    match text.split_once('.') {
        Some((_, frac)) => (frac.trim_end_matches('0').len() as u32).min(MAX_DECIMALS),
        None => 0,
    }
}

/// Distance from `v` to the nearest multiple of `period`.
pub(crate) fn distance_to_multiple(v: f64, period: f64) -> f64 {
    if period <= 0.0 {
        return f64::INFINITY;
    }
    let rem = v.rem_euclid(period);
    rem.min(period - rem)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
