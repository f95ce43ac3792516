//! Weighted fusion of indicators, patterns, and sentiment into an action.
//!
//! The scoring pass is a declarative decision table: each rule names its
//! condition, side, weight, and reasoning tag, and rules are evaluated in a
//! fixed order so the reasoning list is reproducible. Chart pattern
//! contributions expand between the trend rules and the sentiment rules.

use crate::config::FusionConfig;
use crate::models::indicators::IndicatorSet;
use crate::models::patterns::{PatternSet, Trend};
use crate::models::sentiment::{Sentiment, SentimentEstimate};
use crate::models::signal::Action;

/// Everything the fusion pass reads.
pub struct FusionInput<'a> {
    pub indicators: &'a IndicatorSet,
    pub patterns: &'a PatternSet,
    pub sentiment: &'a SentimentEstimate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Buy,
    Sell,
}

/// One row of the decision table: when `applies` holds, `weight` is added to
/// `side` and `tag` is appended to the reasoning list.
pub struct FusionRule {
    pub tag: &'static str,
    pub side: Side,
    pub weight: f64,
    pub applies: fn(&FusionInput, &FusionConfig) -> bool,
}

/// Indicator and trend rules, evaluated before chart patterns.
pub const INDICATOR_RULES: &[FusionRule] = &[
    FusionRule {
        tag: "RSI Oversold",
        side: Side::Buy,
        weight: 2.0,
        applies: |input, config| input.indicators.rsi < config.rsi_oversold,
    },
    FusionRule {
        tag: "RSI Overbought",
        side: Side::Sell,
        weight: 2.0,
        applies: |input, config| input.indicators.rsi > config.rsi_overbought,
    },
    FusionRule {
        tag: "MACD Bullish",
        side: Side::Buy,
        weight: 1.5,
        applies: |input, _| {
            input.indicators.macd > input.indicators.macd_signal && input.indicators.macd > 0.0
        },
    },
    FusionRule {
        tag: "MACD Bearish",
        side: Side::Sell,
        weight: 1.5,
        applies: |input, _| {
            input.indicators.macd < input.indicators.macd_signal && input.indicators.macd < 0.0
        },
    },
    FusionRule {
        tag: "BB Oversold",
        side: Side::Buy,
        weight: 1.0,
        applies: |input, config| input.indicators.bb_position < config.bb_oversold,
    },
    FusionRule {
        tag: "BB Overbought",
        side: Side::Sell,
        weight: 1.0,
        applies: |input, config| input.indicators.bb_position > config.bb_overbought,
    },
    FusionRule {
        tag: "Strong Uptrend",
        side: Side::Buy,
        weight: 1.0,
        applies: |input, config| {
            input.indicators.adx > config.adx_trend_strength
                && input.indicators.ema_12 > input.indicators.ema_26
        },
    },
    FusionRule {
        tag: "Strong Downtrend",
        side: Side::Sell,
        weight: 1.0,
        applies: |input, config| {
            input.indicators.adx > config.adx_trend_strength
                && input.indicators.ema_12 <= input.indicators.ema_26
        },
    },
    FusionRule {
        tag: "Bullish Trend",
        side: Side::Buy,
        weight: 1.5,
        applies: |input, _| input.patterns.trend == Trend::Bullish,
    },
    FusionRule {
        tag: "Bearish Trend",
        side: Side::Sell,
        weight: 1.5,
        applies: |input, _| input.patterns.trend == Trend::Bearish,
    },
];

/// Sentiment and candlestick rules, evaluated after chart patterns.
///
/// The engulfing rule only ever credits the buy side: a bearish engulfing is
/// scored -100 by the detector and never passes the `> 0` gate. Known quirk,
/// kept for output compatibility.
pub const CONTEXT_RULES: &[FusionRule] = &[
    FusionRule {
        tag: "Bullish Sentiment",
        side: Side::Buy,
        weight: 0.5,
        applies: |input, _| input.sentiment.overall == Sentiment::Bullish,
    },
    FusionRule {
        tag: "Bearish Sentiment",
        side: Side::Sell,
        weight: 0.5,
        applies: |input, _| input.sentiment.overall == Sentiment::Bearish,
    },
    FusionRule {
        tag: "Hammer Pattern",
        side: Side::Buy,
        weight: 1.0,
        applies: |input, _| input.indicators.hammer > 0.0,
    },
    FusionRule {
        tag: "Shooting Star Pattern",
        side: Side::Sell,
        weight: 1.0,
        applies: |input, _| input.indicators.shooting_star > 0.0,
    },
    FusionRule {
        tag: "Bullish Engulfing",
        side: Side::Buy,
        weight: 1.0,
        applies: |input, _| input.indicators.engulfing > 0.0,
    },
];

const CHART_PATTERN_WEIGHT: f64 = 1.0;

/// Fusion result before risk annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct FusionOutcome {
    pub action: Action,
    pub confidence: f64,
    pub reasoning: Vec<String>,
    pub buy_score: f64,
    pub sell_score: f64,
}

pub struct SignalFusion {
    config: FusionConfig,
}

impl SignalFusion {
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Run the decision table and resolve the action.
    pub fn fuse(&self, input: &FusionInput) -> FusionOutcome {
        let mut buy_score = 0.0;
        let mut sell_score = 0.0;
        let mut reasoning = Vec::new();

        let mut apply = |rules: &[FusionRule],
                         buy: &mut f64,
                         sell: &mut f64,
                         reasoning: &mut Vec<String>| {
            for rule in rules {
                if (rule.applies)(input, &self.config) {
                    match rule.side {
                        Side::Buy => *buy += rule.weight,
                        Side::Sell => *sell += rule.weight,
                    }
                    reasoning.push(rule.tag.to_string());
                }
            }
        };

        apply(
            INDICATOR_RULES,
            &mut buy_score,
            &mut sell_score,
            &mut reasoning,
        );

        for pattern in &input.patterns.chart_patterns {
            if pattern.is_bullish() {
                buy_score += CHART_PATTERN_WEIGHT;
                reasoning.push(format!("Bullish {pattern}"));
            } else if pattern.is_bearish() {
                sell_score += CHART_PATTERN_WEIGHT;
                reasoning.push(format!("Bearish {pattern}"));
            }
        }

        apply(
            CONTEXT_RULES,
            &mut buy_score,
            &mut sell_score,
            &mut reasoning,
        );

        let (action, confidence) = self.decide(buy_score, sell_score);

        FusionOutcome {
            action,
            confidence,
            reasoning,
            buy_score,
            sell_score,
        }
    }

    /// Resolve scores to an action. Ties and weak winners hold.
    fn decide(&self, buy_score: f64, sell_score: f64) -> (Action, f64) {
        let total = buy_score + sell_score;
        if total == 0.0 {
            return (Action::Hold, 0.5);
        }
        if buy_score > sell_score && buy_score >= self.config.min_action_score {
            return (
                Action::Buy,
                (buy_score / total).min(self.config.max_confidence),
            );
        }
        if sell_score > buy_score && sell_score >= self.config.min_action_score {
            return (
                Action::Sell,
                (sell_score / total).min(self.config.max_confidence),
            );
        }
        (Action::Hold, 0.5)
    }
}

impl Default for SignalFusion {
    fn default() -> Self {
        Self::new(FusionConfig::default())
    }
}
