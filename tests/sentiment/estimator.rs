//! Unit tests for the price-action sentiment tally

use chartsight::models::{Candle, Sentiment, SentimentEstimate};
use chartsight::sentiment::SentimentEstimator;

fn candles_with(closes: &[f64], volumes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .zip(volumes)
        .map(|(&close, &volume)| Candle::new(close, close + 0.1, close - 0.1, close, volume))
        .collect()
}

#[test]
fn short_window_is_all_zero_neutral() {
    let candles = candles_with(&[100.0; 5], &[1000.0; 5]);
    assert_eq!(
        SentimentEstimator::estimate(&candles),
        SentimentEstimate::neutral()
    );
}

#[test]
fn strong_momentum_up_is_bullish() {
    let mut closes = vec![100.0; 9];
    closes.push(105.0);
    let candles = candles_with(&closes, &[1000.0; 10]);

    let estimate = SentimentEstimator::estimate(&candles);
    assert_eq!(estimate.bullish_signals, 2);
    assert_eq!(estimate.bearish_signals, 0);
    assert_eq!(estimate.neutral_signals, 0);
    assert_eq!(estimate.overall, Sentiment::Bullish);
}

#[test]
fn strong_momentum_down_is_bearish() {
    let mut closes = vec![100.0; 9];
    closes.push(95.0);
    let candles = candles_with(&closes, &[1000.0; 10]);

    let estimate = SentimentEstimator::estimate(&candles);
    assert_eq!(estimate.bearish_signals, 2);
    assert_eq!(estimate.overall, Sentiment::Bearish);
}

#[test]
fn volume_spike_reinforces_the_move() {
    let mut closes = vec![100.0; 9];
    closes.push(105.0);
    let mut volumes = vec![1000.0; 9];
    volumes.push(5000.0);
    let candles = candles_with(&closes, &volumes);

    let estimate = SentimentEstimator::estimate(&candles);
    assert_eq!(estimate.bullish_signals, 3);
    assert_eq!(estimate.overall, Sentiment::Bullish);
}

#[test]
fn flat_price_is_neutral() {
    let candles = candles_with(&[100.0; 10], &[1000.0; 10]);

    let estimate = SentimentEstimator::estimate(&candles);
    assert_eq!(estimate.neutral_signals, 1);
    assert_eq!(estimate.overall, Sentiment::Neutral);
}

#[test]
fn volume_spike_without_momentum_does_not_flip_sentiment() {
    // Flat price with a volume spike tallies one neutral and one bearish
    // signal; neither side clears the majority threshold.
    let mut volumes = vec![1000.0; 9];
    volumes.push(5000.0);
    let candles = candles_with(&[100.0; 10], &volumes);

    let estimate = SentimentEstimator::estimate(&candles);
    assert_eq!(estimate.neutral_signals, 1);
    assert_eq!(estimate.bearish_signals, 1);
    assert_eq!(estimate.overall, Sentiment::Neutral);
}

#[test]
fn only_the_last_ten_candles_count() {
    // A huge early move outside the window must not register.
    let mut closes = vec![50.0, 200.0];
    closes.extend_from_slice(&[100.0; 10]);
    let candles = candles_with(&closes, &[1000.0; 12]);

    let estimate = SentimentEstimator::estimate(&candles);
    assert_eq!(estimate.overall, Sentiment::Neutral);
}
