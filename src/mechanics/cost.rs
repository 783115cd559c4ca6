/// Cost mechanics: price of one real fan.

/// `amount / fans`, or `None` when there are no fans to divide by.
#[inline]
pub fn per_fan(amount: f64, fans: u64) -> Option<f64> {
    if fans == 0 {
        return None;
    }
    let c = amount / fans as f64;
    c.is_finite().then_some(c)
}
