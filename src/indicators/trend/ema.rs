//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::candle::Candle;

/// Calculate the EMA of closing prices for a specific period.
pub fn calculate_ema(candles: &[Candle], period: usize) -> Option<f64> {
    if candles.len() < period {
        return None;
    }
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
    math::ema(&closes, period)
}
