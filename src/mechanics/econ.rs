/// Economy mechanics: savings against the platform fee and ROI.

/// Monthly savings when the current spend is replaced by the platform fee.
#[inline]
pub fn savings(spend: f64, platform_fee: f64) -> f64 {
    spend - platform_fee
}

/// ROI in percent of spend for the extra fans gained; 0 unless there are savings.
#[inline]
pub fn roi_percent(savings: f64, spend: f64, baseline: u64, projected: u64) -> f64 {
    if savings > 0.0 && spend > 0.0 {
        let gained = projected as f64 - baseline as f64;
        let roi = gained / spend * 100.0;
        if roi.is_finite() { roi } else { 0.0 }
    } else {
        0.0
    }
}
