//! Duty cycle conversions
//!
//! Percentages are what the operator types and sees; compare counts are
//! what the timer compares against. Both directions round half up.

/// Largest duty percentage
pub const MAX_PERCENT: u8 = 100;

/// Clamp a percentage to 0-100
pub const fn clamp_percent(percent: u8) -> u8 {
    if percent > MAX_PERCENT {
        MAX_PERCENT
    } else {
        percent
    }
}

/// Compare count for a duty percentage at a given period
///
/// `round(period * percent / 100)`. 0% gives 0 and 100% gives `period`.
pub fn percentage_to_count(period: u16, percent: u8) -> u16 {
    let percent = clamp_percent(percent) as u32;
    let count = (period as u32 * percent + 50) / 100;
    count as u16
}

/// Duty percentage of a compare count at a given period
///
/// `round(count * 100 / period)`, clamped to 100. A zero period has no
/// meaningful duty and reads as 0%.
pub fn count_to_percentage(period: u16, count: u16) -> u8 {
    if period == 0 {
        return 0;
    }
    let period = period as u32;
    let percent = (count as u32 * 100 + period / 2) / period;
    percent.min(MAX_PERCENT as u32) as u8
}
