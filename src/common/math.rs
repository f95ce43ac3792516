//! Numeric building blocks for indicator calculations.

/// Simple moving average over the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let sum: f64 = values[values.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Exponential moving average over the full series.
///
/// Seeded with the SMA of the first `period` values, then smoothed forward
/// with multiplier 2 / (period + 1).
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    let mut current = seed;
    for &value in &values[period..] {
        current = ema_from_previous(value, current, period);
    }
    Some(current)
}

/// Single EMA smoothing step from the previous EMA value.
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let multiplier = 2.0 / (period as f64 + 1.0);
    (value - previous) * multiplier + previous
}

/// Population standard deviation of the last `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
    Some(variance.sqrt())
}

/// True range of a candle given the previous close.
pub fn true_range(high: f64, low: f64, previous_close: f64) -> f64 {
    let hl = high - low;
    let hc = (high - previous_close).abs();
    let lc = (low - previous_close).abs();
    hl.max(hc).max(lc)
}

/// Ordinary least-squares slope of `values` against their index.
pub fn linear_slope(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }
    let n_f = n as f64;
    let x_mean = (n_f - 1.0) / 2.0;
    let y_mean = values.iter().sum::<f64>() / n_f;

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        numerator += dx * (y - y_mean);
        denominator += dx * dx;
    }
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}
