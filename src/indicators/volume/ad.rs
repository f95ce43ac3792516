//! A/D (Accumulation/Distribution) line

use crate::models::candle::Candle;

/// Calculate the cumulative accumulation/distribution line.
///
/// Each candle contributes its volume scaled by the money flow multiplier
/// ((close - low) - (high - close)) / (high - low).
pub fn calculate_ad(candles: &[Candle]) -> Option<f64> {
    if candles.len() < 2 {
        return None;
    }

    let mut ad = 0.0;
    for candle in candles {
        let range = candle.high - candle.low;
        if range > 0.0 {
            let multiplier = ((candle.close - candle.low) - (candle.high - candle.close)) / range;
            ad += multiplier * candle.volume;
        }
    }
    Some(ad)
}
