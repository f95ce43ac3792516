//! Unit tests for trend, support/resistance, and chart pattern detection

use chartsight::models::{Candle, ChartPattern, PatternSet, SrKind, Trend};
use chartsight::patterns::PatternDetector;

fn candle(high: f64, low: f64, close: f64) -> Candle {
    Candle::new(close, high, low, close, 1000.0)
}

fn flat(count: usize, price: f64) -> Vec<Candle> {
    (0..count).map(|_| candle(price, price, price)).collect()
}

#[test]
fn short_window_is_sideways_with_no_structure() {
    let candles = flat(10, 100.0);
    assert_eq!(PatternDetector::detect(&candles), PatternSet::sideways());
}

#[test]
fn rising_highs_make_a_bullish_trend() {
    let candles: Vec<Candle> = (0..20)
        .map(|i| {
            let price = 100.0 + i as f64;
            candle(price + 0.5, price - 0.5, price)
        })
        .collect();
    assert_eq!(PatternDetector::detect(&candles).trend, Trend::Bullish);
}

#[test]
fn falling_highs_make_a_bearish_trend() {
    let candles: Vec<Candle> = (0..20)
        .map(|i| {
            let price = 200.0 - i as f64;
            candle(price + 0.5, price - 0.5, price)
        })
        .collect();
    assert_eq!(PatternDetector::detect(&candles).trend, Trend::Bearish);
}

#[test]
fn flat_highs_make_a_sideways_trend() {
    let candles = flat(20, 100.0);
    assert_eq!(PatternDetector::detect(&candles).trend, Trend::Sideways);
}

#[test]
fn support_resistance_needs_fifty_candles() {
    let candles = flat(40, 100.0);
    assert!(PatternDetector::detect(&candles)
        .support_resistance
        .is_empty());
}

#[test]
fn support_resistance_clusters_recent_extrema() {
    // High spikes at 5/15/25/35 and low dips at 10/20/30, all well before
    // the trailing chart window so no chart patterns fire.
    let mut candles = flat(60, 100.0);
    for (i, high) in [(5, 110.0), (15, 111.0), (25, 112.0), (35, 113.0)] {
        candles[i] = candle(high, 100.0, 100.0);
    }
    for (i, low) in [(10, 90.0), (20, 89.0), (30, 88.0)] {
        candles[i] = candle(100.0, low, 100.0);
    }

    let detected = PatternDetector::detect(&candles);
    assert!(detected.chart_patterns.is_empty());

    let levels = &detected.support_resistance;
    assert_eq!(levels.len(), 2);

    assert_eq!(levels[0].kind, SrKind::Resistance);
    assert!((levels[0].level - 112.0).abs() < 1e-9);
    assert_eq!(levels[0].strength, 4);

    assert_eq!(levels[1].kind, SrKind::Support);
    assert!((levels[1].level - 89.0).abs() < 1e-9);
    assert_eq!(levels[1].strength, 3);
}

#[test]
fn double_top_on_two_matching_peaks() {
    let mut candles = flat(20, 100.0);
    candles[5] = candle(110.0, 100.0, 100.0);
    candles[15] = candle(110.3, 100.0, 100.0);

    let detected = PatternDetector::detect(&candles);
    assert_eq!(detected.chart_patterns, vec![ChartPattern::DoubleTop]);
}

#[test]
fn mismatched_peaks_are_not_a_double_top() {
    let mut candles = flat(20, 100.0);
    candles[5] = candle(110.0, 100.0, 100.0);
    candles[15] = candle(120.0, 100.0, 100.0);

    let detected = PatternDetector::detect(&candles);
    assert!(!detected
        .chart_patterns
        .contains(&ChartPattern::DoubleTop));
}

#[test]
fn double_bottom_on_two_matching_troughs() {
    let mut candles = flat(20, 100.0);
    candles[5] = candle(100.0, 90.0, 100.0);
    candles[15] = candle(100.0, 90.2, 100.0);

    let detected = PatternDetector::detect(&candles);
    assert_eq!(detected.chart_patterns, vec![ChartPattern::DoubleBottom]);
}

#[test]
fn head_and_shoulders_on_three_peaks() {
    let mut candles = flat(20, 100.0);
    candles[4] = candle(105.0, 100.0, 100.0);
    candles[9] = candle(110.0, 100.0, 100.0);
    candles[14] = candle(105.5, 100.0, 100.0);

    let detected = PatternDetector::detect(&candles);
    assert_eq!(
        detected.chart_patterns,
        vec![ChartPattern::HeadAndShoulders]
    );
}

#[test]
fn ascending_triangle_on_flat_resistance_rising_support() {
    let candles: Vec<Candle> = (0..20)
        .map(|i| {
            let high = 600.0 + i as f64;
            let low = 100.0 + 25.0 * i as f64;
            candle(high, low, (high + low) / 2.0)
        })
        .collect();

    let detected = PatternDetector::detect(&candles);
    assert_eq!(
        detected.chart_patterns,
        vec![ChartPattern::AscendingTriangle]
    );
}

#[test]
fn descending_triangle_on_falling_resistance_flat_support() {
    let candles: Vec<Candle> = (0..20)
        .map(|i| {
            let high = 600.0 - 25.0 * i as f64;
            let low = 100.0 + i as f64;
            candle(high, low, (high + low) / 2.0)
        })
        .collect();

    let detected = PatternDetector::detect(&candles);
    assert_eq!(
        detected.chart_patterns,
        vec![ChartPattern::DescendingTriangle]
    );
}

#[test]
fn flag_on_tight_consolidation_after_wide_move() {
    let mut closes = vec![100.0; 10];
    closes.extend_from_slice(&[100.0, 108.0, 94.0, 106.0, 98.0]);
    closes.extend_from_slice(&[101.0, 101.5, 100.8, 101.2, 101.0]);

    let candles: Vec<Candle> = closes
        .iter()
        .map(|&c| candle(c + 0.2, c - 0.2, c))
        .collect();

    let detected = PatternDetector::detect(&candles);
    assert_eq!(detected.chart_patterns, vec![ChartPattern::Flag]);
}

#[test]
fn pennant_on_steep_converging_trend_lines() {
    let candles: Vec<Candle> = (0..20)
        .map(|i| {
            if i < 10 {
                candle(500.0, 100.0, 300.0)
            } else {
                let step = (i - 9) as f64;
                candle(500.0 - 12.0 * step, 100.0 + 12.0 * step, 300.0)
            }
        })
        .collect();

    let detected = PatternDetector::detect(&candles);
    assert_eq!(detected.chart_patterns, vec![ChartPattern::Pennant]);
}

#[test]
fn flat_window_has_no_chart_patterns() {
    let candles = flat(60, 100.0);
    assert!(PatternDetector::detect(&candles).chart_patterns.is_empty());
}
