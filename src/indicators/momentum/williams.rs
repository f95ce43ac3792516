//! Williams %R indicator

use crate::models::candle::Candle;

/// Calculate Williams %R, bounded in [-100, 0].
///
/// %R = -100 * (highest high - close) / (highest high - lowest low)
pub fn calculate_williams_r(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period {
        return None;
    }

    let window = &candles[candles.len() - period..];
    let highest = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
    let lowest = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
    let close = window[window.len() - 1].close;

    if highest <= lowest {
        return Some(-50.0);
    }
    Some(-100.0 * (highest - close) / (highest - lowest))
}

/// Calculate Williams %R with the default period (14).
pub fn calculate_williams_r_default(candles: &[Candle]) -> Option<f64> {
    calculate_williams_r(candles, 14)
}
