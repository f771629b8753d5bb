//! Scalar helpers shared by every other module.
//!
//! Trigonometry goes through `libm` rather than the platform intrinsics so a
//! trail computed natively matches one computed in the browser bit for bit.

use crate::error::InputError;

/// Clamp `value` into `[min, max]`.
///
/// `min > max` is a caller error; the result is then `max`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Replace NaN or Infinity with `default`.
#[inline]
pub fn sanitize(value: f64, default: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        log::warn!("Sanitized non-finite value {} to {}", value, default);
        default
    }
}

#[inline]
pub fn sin_cos(angle: f64) -> (f64, f64) {
    libm::sincos(angle)
}

#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    libm::atan2(y, x)
}

#[inline]
pub fn hypot(x: f64, y: f64) -> f64 {
    libm::hypot(x, y)
}

/// `base^exp`, with `0^x = 0` for every `x > 0`.
#[inline]
pub fn pow(base: f64, exp: f64) -> f64 {
    libm::pow(base, exp)
}

/// Canonical decimal text of a value.
///
/// Shortest representation that parses back to the same `f64`, without an
/// exponent for the magnitudes this crate allows. `-0` renders as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Round to two fractional digits for display.
///
/// The exact binary value is rounded and exact ties go away from zero, then
/// the result is re-parsed so trailing zeros vanish (`1.50` → `1.5`,
/// `-0.001` → `0`). Display only: never feed the output back into state.
pub fn round_display(value: f64) -> String {
    if !value.is_finite() {
        return format_number(0.0);
    }
    let fixed = to_fixed_2(value);
    let reparsed: f64 = fixed.parse().unwrap_or(0.0);
    format_number(reparsed)
}

fn to_fixed_2(value: f64) -> String {
    // Odd multiples of 1/8 are the only values whose third decimal is an
    // exact 5; formatting rounds those half-to-even, so handle them here.
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        let hundredths = (value.abs() * 100.0).ceil().copysign(value);
        return format!("{:.2}", hundredths / 100.0);
    }
    format!("{:.2}", value)
}

/// Parse free-form numeric text.
///
/// Empty (or whitespace) text is `Ok(None)`, meaning "unset". Anything that
/// is not a finite number is an error.
pub fn parse_number(text: &str) -> Result<Option<f64>, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(InputError::NotANumber(text.to_string())),
    }
}
