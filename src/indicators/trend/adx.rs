//! ADX (Average Directional Index) indicator

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::indicators::AdxIndicator;

/// Calculate ADX, a trend-strength magnitude regardless of direction.
///
/// Built from smoothed true range and the +DM/-DM directional movements.
pub fn calculate_adx(candles: &[Candle], period: usize) -> Option<AdxIndicator> {
    if candles.len() < period + 1 {
        return None;
    }

    let mut tr_values = Vec::new();
    let mut plus_dm_values = Vec::new();
    let mut minus_dm_values = Vec::new();

    for i in 1..candles.len() {
        let tr = math::true_range(candles[i].high, candles[i].low, candles[i - 1].close);
        tr_values.push(tr);

        let plus_dm = if candles[i].high > candles[i - 1].high {
            candles[i].high - candles[i - 1].high
        } else {
            0.0
        };
        plus_dm_values.push(plus_dm);

        let minus_dm = if candles[i].low < candles[i - 1].low {
            candles[i - 1].low - candles[i].low
        } else {
            0.0
        };
        minus_dm_values.push(minus_dm);
    }

    let atr = math::sma(&tr_values, period)?;
    let plus_dm_avg = math::sma(&plus_dm_values, period)?;
    let minus_dm_avg = math::sma(&minus_dm_values, period)?;

    let plus_di = if atr > 0.0 {
        100.0 * (plus_dm_avg / atr)
    } else {
        0.0
    };
    let minus_di = if atr > 0.0 {
        100.0 * (minus_dm_avg / atr)
    } else {
        0.0
    };

    let di_sum = plus_di + minus_di;
    let dx = if di_sum > 0.0 {
        100.0 * ((plus_di - minus_di).abs() / di_sum)
    } else {
        0.0
    };

    Some(AdxIndicator {
        value: dx,
        plus_di,
        minus_di,
    })
}

/// Calculate ADX with the default period (14).
pub fn calculate_adx_default(candles: &[Candle]) -> Option<AdxIndicator> {
    calculate_adx(candles, 14)
}
