//! Unit tests for trend indicators (SMA, EMA, ADX)

use chartsight::indicators::trend::{calculate_adx_default, calculate_ema, calculate_sma};
use chartsight::models::Candle;

fn create_test_candles(count: usize, base_price: f64) -> Vec<Candle> {
    (0..count)
        .map(|i| {
            let price = base_price + (i as f64 * 0.1);
            Candle::new(price, price + 0.05, price - 0.05, price, 1000.0)
        })
        .collect()
}

#[test]
fn sma_averages_closes() {
    let candles: Vec<Candle> = (1..=20)
        .map(|i| {
            let close = i as f64;
            Candle::new(close, close + 0.1, close - 0.1, close, 1000.0)
        })
        .collect();
    let sma = calculate_sma(&candles, 20).unwrap();
    assert!((sma - 10.5).abs() < 1e-12);
}

#[test]
fn sma_insufficient_data() {
    let candles = create_test_candles(10, 100.0);
    assert!(calculate_sma(&candles, 20).is_none());
}

#[test]
fn ema_sufficient_data() {
    let candles = create_test_candles(50, 100.0);
    let ema = calculate_ema(&candles, 12);
    assert!(ema.is_some());
    assert!(ema.unwrap().is_finite());
}

#[test]
fn ema_insufficient_data() {
    let candles = create_test_candles(10, 100.0);
    assert!(calculate_ema(&candles, 20).is_none());
}

#[test]
fn fast_ema_above_slow_ema_in_uptrend() {
    let candles = create_test_candles(60, 100.0);
    let fast = calculate_ema(&candles, 12).unwrap();
    let slow = calculate_ema(&candles, 26).unwrap();
    assert!(fast > slow);
}

#[test]
fn adx_insufficient_data() {
    let candles = create_test_candles(10, 100.0);
    assert!(calculate_adx_default(&candles).is_none());
}

#[test]
fn adx_detects_directional_movement_in_uptrend() {
    let candles = create_test_candles(60, 100.0);
    let adx = calculate_adx_default(&candles).unwrap();
    assert!(adx.plus_di > adx.minus_di);
    assert!((0.0..=100.0).contains(&adx.value));
}

#[test]
fn adx_is_zero_on_flat_window() {
    let candles: Vec<Candle> = (0..30)
        .map(|_| Candle::new(100.0, 100.0, 100.0, 100.0, 1000.0))
        .collect();
    let adx = calculate_adx_default(&candles).unwrap();
    assert_eq!(adx.value, 0.0);
}
