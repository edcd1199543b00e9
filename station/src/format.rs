//! Display strings for fees, durations and progress.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Seconds of processing the progress bar assumes per unit.
///
/// Cosmetic only: the host's `timeLeft` is the real clock and its batch
/// duration formula may differ.
pub const PROGRESS_SECONDS_PER_UNIT: f64 = 0.3;

/// Progress bar fill: `clamp(0, 100, 100 − timeLeft / (amount × 0.3) × 100)`.
#[must_use]
pub fn progress_percent(time_left: u32, amount: u32) -> f64 {
    if amount == 0 {
        return if time_left == 0 { 100.0 } else { 0.0 };
    }
    let span = f64::from(amount) * PROGRESS_SECONDS_PER_UNIT;
    (100.0 - f64::from(time_left) / span * 100.0).clamp(0.0, 100.0)
}

/// `"3 min 5 sec"` when at least a minute remains, otherwise `"45 seconds"`.
#[must_use]
pub fn time_remaining(seconds: u32) -> String {
    let minutes = seconds / 60;
    let rest = seconds % 60;
    if minutes > 0 {
        format!("{minutes} min {rest} sec")
    } else {
        format!("{rest} seconds")
    }
}

/// Currency label for a fee, e.g. `"£5.20"`.
#[must_use]
pub fn fee(amount: f64) -> String {
    format!("£{amount:.2}")
}

/// Whole-number percentage label, e.g. `"50%"`.
#[must_use]
pub fn percent(value: f64) -> String {
    format!("{}%", value.round())
}

/// Milliseconds rendered as whole seconds, e.g. `"10s"`.
#[must_use]
pub fn millis_as_seconds(ms: u32) -> String {
    format!("{}s", ms.div_ceil(1000))
}
