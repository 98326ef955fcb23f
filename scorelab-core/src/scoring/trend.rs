//! Trend-strength factor: EMA spread plus ADX confirmation.
//!
//! The spread term is (ema_fast - ema_slow) / ema_slow scaled by a fixed
//! sensitivity and clamped to [-2.4, 2.4]. The ADX term contributes +1.6 at
//! 25 or above, -1.6 at 15 or below, and interpolates linearly between.
//! Their sum is clamped to [-4, 4].

/// Spread scaling constant.
const SPREAD_SENSITIVITY: f64 = 800.0;
/// Clamp for the spread term (60% of the factor's 4-point range).
const SPREAD_CLAMP: f64 = 2.4;
/// ADX level treated as a confirmed trend.
const ADX_TREND: f64 = 25.0;
/// ADX level treated as trendless.
const ADX_FLAT: f64 = 15.0;
/// Clamp for the ADX term (40% of the factor's 4-point range).
const ADX_CLAMP: f64 = 1.6;
const FACTOR_CLAMP: f64 = 4.0;

/// Compute the trend-strength factor.
///
/// Returns `None` when any input is still in warm-up; the caller scores the
/// bar neutral and flags the breakdown as insufficient.
pub fn trend_strength_score(ema_fast: f64, ema_slow: f64, adx: f64) -> Option<f64> {
    if ema_fast.is_nan() || ema_slow.is_nan() || adx.is_nan() {
        return None;
    }

    let spread_term = if ema_slow == 0.0 {
        0.0
    } else {
        let spread = (ema_fast - ema_slow) / ema_slow;
        (spread * SPREAD_SENSITIVITY).clamp(-SPREAD_CLAMP, SPREAD_CLAMP)
    };

    let adx_term = if adx >= ADX_TREND {
        ADX_CLAMP
    } else if adx <= ADX_FLAT {
        -ADX_CLAMP
    } else {
        let normalized = (adx - ADX_FLAT) / (ADX_TREND - ADX_FLAT);
        normalized * (2.0 * ADX_CLAMP) - ADX_CLAMP
    };

    Some((spread_term + adx_term).clamp(-FACTOR_CLAMP, FACTOR_CLAMP))
}
