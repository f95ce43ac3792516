//! Stochastic oscillator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::StochasticIndicator;

/// Calculate the stochastic oscillator.
///
/// %K = 100 * (close - lowest low) / (highest high - lowest low)
/// %D = SMA(d_period) of %K
pub fn calculate_stochastic(
    candles: &[Candle],
    k_period: usize,
    d_period: usize,
) -> Option<StochasticIndicator> {
    if k_period == 0 || d_period == 0 || candles.len() < k_period + d_period - 1 {
        return None;
    }

    let mut k_values = Vec::with_capacity(d_period);
    for offset in (0..d_period).rev() {
        let end = candles.len() - offset;
        let window = &candles[end - k_period..end];

        let highest = window.iter().map(|c| c.high).fold(f64::MIN, f64::max);
        let lowest = window.iter().map(|c| c.low).fold(f64::MAX, f64::min);
        let close = window[window.len() - 1].close;

        let k = if highest > lowest {
            100.0 * (close - lowest) / (highest - lowest)
        } else {
            // No trading range: park the oscillator at midpoint.
            50.0
        };
        k_values.push(k);
    }

    let d = math::sma(&k_values, d_period)?;
    Some(StochasticIndicator {
        k: k_values[k_values.len() - 1],
        d,
    })
}

/// Calculate the stochastic oscillator with the default periods (14, 3).
pub fn calculate_stochastic_default(candles: &[Candle]) -> Option<StochasticIndicator> {
    calculate_stochastic(candles, 14, 3)
}
