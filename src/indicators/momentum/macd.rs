//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::MacdIndicator;

/// Calculate MACD.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of the MACD series
/// Histogram = MACD - Signal
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<MacdIndicator> {
    if candles.len() < slow_period + signal_period {
        return None;
    }

    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let fast_ema = math::ema(&closes, fast_period)?;
    let slow_ema = math::ema(&closes, slow_period)?;
    let macd_line = fast_ema - slow_ema;

    // Build the MACD series by walking both EMAs forward in lockstep.
    let mut macd_values = Vec::new();
    let mut fast_ema_prev = math::sma(&closes[..fast_period], fast_period)?;
    let mut slow_ema_prev = math::sma(&closes[..slow_period], slow_period)?;

    for i in fast_period..closes.len() {
        fast_ema_prev = math::ema_from_previous(closes[i], fast_ema_prev, fast_period);

        if i >= slow_period {
            slow_ema_prev = math::ema_from_previous(closes[i], slow_ema_prev, slow_period);
            macd_values.push(fast_ema_prev - slow_ema_prev);
        }
    }

    if macd_values.len() < signal_period {
        return None;
    }

    let signal_line = math::ema(&macd_values, signal_period)?;

    Some(MacdIndicator {
        macd: macd_line,
        signal: signal_line,
        histogram: macd_line - signal_line,
    })
}

/// Calculate MACD with the default periods (12, 26, 9).
pub fn calculate_macd_default(candles: &[Candle]) -> Option<MacdIndicator> {
    calculate_macd(candles, 12, 26, 9)
}
