/// Fan mechanics: split a stream volume into real fans and bot plays.

/// Real fans out of `volume` streams at `rate_pct` percent, floored and never above `volume`.
#[inline]
pub fn real_fans(volume: u64, rate_pct: f64) -> u64 {
    let raw = (volume as f64 * rate_pct / 100.0).floor();
    if raw.is_finite() && raw > 0.0 {
        (raw as u64).min(volume)
    } else {
        0
    }
}

/// Streams that are not real fans.
#[inline]
pub fn bot_plays(volume: u64, real_fans: u64) -> u64 {
    volume.saturating_sub(real_fans)
}

/// Projected real fans under the organic strategy: round(baseline * multiplier).
#[inline]
pub fn projected_fans(baseline: u64, multiplier: f64) -> u64 {
    let raw = (baseline as f64 * multiplier.max(0.0)).round();
    if raw.is_finite() { raw as u64 } else { 0 }
}
