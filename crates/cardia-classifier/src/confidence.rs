//! Confidence sanitizing and rounding.
//!
//! The service reports confidence as a percentage but nothing guarantees it.
//! NaN becomes 0, everything else is clamped to [0, 100]. Rounding is
//! half-up, which for the clamped non-negative range is what `f64::round`
//! (half away from zero) does.

use cardia_core::constants::MAX_CONFIDENCE;

/// Bring a raw service confidence into [0, 100].
pub fn sanitize_confidence(raw: f64) -> f64 {
    if raw.is_nan() {
        0.0
    } else {
        raw.clamp(0.0, MAX_CONFIDENCE)
    }
}

/// Round a raw confidence to a whole percent in [0, 100].
pub fn round_percent(raw: f64) -> u32 {
    // Sanitized values are in [0, 100], so the cast is lossless.
    sanitize_confidence(raw).round() as u32
}
