//! Single- and two-candle reversal pattern detection.
//!
//! Scores use the 0/±100 convention: 100 when the pattern is present on the
//! most recent candle(s), -100 for the bearish variant of engulfing, 0
//! otherwise.

use crate::models::candle::Candle;

/// Hammer: small body near the top of the range with a long lower shadow.
pub fn score_hammer(candles: &[Candle]) -> f64 {
    let Some(candle) = candles.last() else {
        return 0.0;
    };
    let body = candle.body();
    if candle.range() <= 0.0 || body <= 0.0 {
        return 0.0;
    }
    if candle.lower_shadow() >= 2.0 * body && candle.upper_shadow() <= body {
        100.0
    } else {
        0.0
    }
}

/// Shooting star: small body near the bottom of the range with a long upper
/// shadow.
pub fn score_shooting_star(candles: &[Candle]) -> f64 {
    let Some(candle) = candles.last() else {
        return 0.0;
    };
    let body = candle.body();
    if candle.range() <= 0.0 || body <= 0.0 {
        return 0.0;
    }
    if candle.upper_shadow() >= 2.0 * body && candle.lower_shadow() <= body {
        100.0
    } else {
        0.0
    }
}

/// Doji: body no larger than 10% of the full range.
pub fn score_doji(candles: &[Candle]) -> f64 {
    let Some(candle) = candles.last() else {
        return 0.0;
    };
    if candle.range() <= 0.0 {
        return 0.0;
    }
    if candle.body() <= 0.1 * candle.range() {
        100.0
    } else {
        0.0
    }
}

/// Engulfing: the latest body fully engulfs the previous, opposite-colored
/// body. Bullish scores 100, bearish scores -100.
pub fn score_engulfing(candles: &[Candle]) -> f64 {
    if candles.len() < 2 {
        return 0.0;
    }
    let previous = &candles[candles.len() - 2];
    let current = &candles[candles.len() - 1];

    if previous.is_bearish()
        && current.is_bullish()
        && current.open <= previous.close
        && current.close >= previous.open
    {
        return 100.0;
    }
    if previous.is_bullish()
        && current.is_bearish()
        && current.open >= previous.close
        && current.close <= previous.open
    {
        return -100.0;
    }
    0.0
}
