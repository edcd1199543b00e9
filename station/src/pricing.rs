//! Fee, quantity and duration arithmetic shown on the recycle tab.
//!
//! These numbers are display estimates only; the host recomputes whatever it
//! actually charges and schedules.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

/// Flat part of the processing fee.
pub const BASE_FEE: f64 = 5.0;
/// Fee added per processed unit.
pub const FEE_PER_UNIT: f64 = 0.2;

/// Processing fee for `amount` units: `5 + 0.2 × amount`.
#[must_use]
pub fn processing_fee(amount: u32) -> f64 {
    BASE_FEE + f64::from(amount) * FEE_PER_UNIT
}

/// Clamp a requested quantity into `[1, available]`.
///
/// An `available` of zero still yields 1; such items cannot be selected in
/// the first place.
#[must_use]
pub fn clamp_amount(requested: i64, available: u32) -> u32 {
    let max = i64::from(available.max(1));
    let clamped = requested.clamp(1, max);
    u32::try_from(clamped).unwrap_or(1)
}

/// Parse free-form amount input, treating anything non-numeric as 1.
///
/// A numeric prefix is honoured and saturates at the `i64` bounds, so an
/// oversized entry still clamps to the available count.
#[must_use]
pub fn parse_amount(raw: &str) -> i64 {
    let trimmed = raw.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit);
    let mut value: Option<i64> = None;
    for digit in digits {
        let digit = i64::from(digit - b'0');
        let acc = value.unwrap_or(0);
        value = Some(if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        });
    }
    value.unwrap_or(1)
}

/// Estimated minutes for `amount` units: `ceil(ms / 1000 × amount / 60)`.
#[must_use]
pub fn estimated_minutes(processing_time_ms: u32, amount: u32) -> u64 {
    let total_seconds = f64::from(processing_time_ms) / 1000.0 * f64::from(amount);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let minutes = (total_seconds / 60.0).ceil() as u64;
    minutes
}
