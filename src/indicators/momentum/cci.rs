//! CCI (Commodity Channel Index) indicator

use crate::models::candle::Candle;

/// Calculate CCI over typical prices.
///
/// CCI = (TP - SMA(TP)) / (0.015 * mean deviation)
pub fn calculate_cci(candles: &[Candle], period: usize) -> Option<f64> {
    if period == 0 || candles.len() < period {
        return None;
    }

    let typical: Vec<f64> = candles[candles.len() - period..]
        .iter()
        .map(|c| (c.high + c.low + c.close) / 3.0)
        .collect();

    let mean = typical.iter().sum::<f64>() / period as f64;
    let mean_deviation = typical.iter().map(|tp| (tp - mean).abs()).sum::<f64>() / period as f64;

    if mean_deviation == 0.0 {
        return Some(0.0);
    }
    Some((typical[typical.len() - 1] - mean) / (0.015 * mean_deviation))
}

/// Calculate CCI with the default period (14).
pub fn calculate_cci_default(candles: &[Candle]) -> Option<f64> {
    calculate_cci(candles, 14)
}
