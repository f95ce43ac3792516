//! OBV (On-Balance Volume) indicator

use crate::models::candle::Candle;

/// Calculate cumulative on-balance volume over the window.
///
/// Volume is added on up-closes and subtracted on down-closes.
pub fn calculate_obv(candles: &[Candle]) -> Option<f64> {
    if candles.len() < 2 {
        return None;
    }

    let mut obv = 0.0;
    for i in 1..candles.len() {
        if candles[i].close > candles[i - 1].close {
            obv += candles[i].volume;
        } else if candles[i].close < candles[i - 1].close {
            obv -= candles[i].volume;
        }
    }
    Some(obv)
}
