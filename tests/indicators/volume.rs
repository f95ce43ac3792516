//! Unit tests for volume indicators (OBV, A/D)

use chartsight::indicators::volume::{calculate_ad, calculate_obv};
use chartsight::models::Candle;

#[test]
fn obv_insufficient_data() {
    let candles = vec![Candle::new(100.0, 101.0, 99.0, 100.0, 1000.0)];
    assert!(calculate_obv(&candles).is_none());
}

#[test]
fn obv_accumulates_on_up_closes() {
    let candles: Vec<Candle> = (0..10)
        .map(|i| {
            let close = 100.0 + i as f64;
            Candle::new(close - 0.5, close + 1.0, close - 1.0, close, 1000.0)
        })
        .collect();
    assert_eq!(calculate_obv(&candles), Some(9000.0));
}

#[test]
fn obv_drains_on_down_closes() {
    let candles: Vec<Candle> = (0..10)
        .map(|i| {
            let close = 100.0 - i as f64;
            Candle::new(close + 0.5, close + 1.0, close - 1.0, close, 1000.0)
        })
        .collect();
    assert_eq!(calculate_obv(&candles), Some(-9000.0));
}

#[test]
fn obv_ignores_unchanged_closes() {
    let candles: Vec<Candle> = (0..5)
        .map(|_| Candle::new(100.0, 101.0, 99.0, 100.0, 1000.0))
        .collect();
    assert_eq!(calculate_obv(&candles), Some(0.0));
}

#[test]
fn ad_insufficient_data() {
    let candles = vec![Candle::new(100.0, 101.0, 99.0, 100.0, 1000.0)];
    assert!(calculate_ad(&candles).is_none());
}

#[test]
fn ad_positive_when_closes_at_high() {
    let candles: Vec<Candle> = (0..5)
        .map(|i| {
            let price = 100.0 + i as f64;
            Candle::new(price, price + 1.0, price - 1.0, price + 1.0, 1000.0)
        })
        .collect();
    assert_eq!(calculate_ad(&candles), Some(5000.0));
}

#[test]
fn ad_negative_when_closes_at_low() {
    let candles: Vec<Candle> = (0..5)
        .map(|i| {
            let price = 100.0 + i as f64;
            Candle::new(price, price + 1.0, price - 1.0, price - 1.0, 1000.0)
        })
        .collect();
    assert_eq!(calculate_ad(&candles), Some(-5000.0));
}

#[test]
fn ad_skips_zero_range_candles() {
    let candles: Vec<Candle> = (0..5)
        .map(|_| Candle::new(100.0, 100.0, 100.0, 100.0, 1000.0))
        .collect();
    assert_eq!(calculate_ad(&candles), Some(0.0));
}
