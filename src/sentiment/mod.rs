//! Price-action sentiment tally over the last ten candles.

use crate::models::candle::Candle;
use crate::models::sentiment::{Sentiment, SentimentEstimate};

const WINDOW: usize = 10;
const MOMENTUM_THRESHOLD: f64 = 0.02;
const VOLUME_SPIKE_RATIO: f64 = 1.5;
const MAJORITY: f64 = 0.6;

pub struct SentimentEstimator;

impl SentimentEstimator {
    /// Tally bullish/bearish/neutral signals from momentum and volume.
    ///
    /// Needs at least ten candles; below that the estimate is all-zero
    /// neutral.
    pub fn estimate(candles: &[Candle]) -> SentimentEstimate {
        if candles.len() < WINDOW {
            return SentimentEstimate::neutral();
        }

        let recent = &candles[candles.len() - WINDOW..];
        let first_close = recent[0].close;
        let last_close = recent[recent.len() - 1].close;
        if first_close == 0.0 {
            return SentimentEstimate::neutral();
        }
        let price_change = (last_close - first_close) / first_close;

        let mut bullish = 0u32;
        let mut bearish = 0u32;
        let mut neutral = 0u32;

        if price_change > MOMENTUM_THRESHOLD {
            bullish += 2;
        } else if price_change < -MOMENTUM_THRESHOLD {
            bearish += 2;
        } else {
            neutral += 1;
        }

        let avg_volume = recent.iter().map(|c| c.volume).sum::<f64>() / WINDOW as f64;
        let last_volume = recent[recent.len() - 1].volume;
        if last_volume > avg_volume * VOLUME_SPIKE_RATIO {
            if price_change > 0.0 {
                bullish += 1;
            } else {
                bearish += 1;
            }
        }

        let total = bullish + bearish + neutral;
        let overall = if total == 0 {
            Sentiment::Neutral
        } else if bullish as f64 / total as f64 > MAJORITY {
            Sentiment::Bullish
        } else if bearish as f64 / total as f64 > MAJORITY {
            Sentiment::Bearish
        } else {
            Sentiment::Neutral
        };

        SentimentEstimate {
            bullish_signals: bullish,
            bearish_signals: bearish,
            neutral_signals: neutral,
            overall,
        }
    }
}
