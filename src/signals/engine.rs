//! Top-level analysis pipeline.

use crate::config::FusionConfig;
use crate::indicators::IndicatorBank;
use crate::models::candle::{validate_window, Candle, ValidationError};
use crate::models::signal::{Signal, FALLBACK_ENTRY_PRICE};
use crate::patterns::PatternDetector;
use crate::sentiment::SentimentEstimator;
use crate::signals::fusion::{FusionInput, SignalFusion};
use crate::signals::risk::RiskAnnotator;

/// Pure, stateless signal engine.
///
/// `analyze` reads only the window and the engine's read-only configuration,
/// so concurrent calls need no synchronization and identical windows always
/// produce bit-identical signals.
pub struct SignalEngine {
    fusion: SignalFusion,
}

impl SignalEngine {
    pub fn new() -> Self {
        Self::with_config(FusionConfig::default())
    }

    pub fn with_config(config: FusionConfig) -> Self {
        Self {
            fusion: SignalFusion::new(config),
        }
    }

    /// Analyze a candle window into a trading signal.
    ///
    /// Structurally invalid input is rejected with a [`ValidationError`].
    /// Everything past validation always yields a well-formed signal: local
    /// computation faults degrade to documented defaults, and anything that
    /// still escapes is replaced by the canonical fallback signal.
    pub fn analyze(&self, candles: &[Candle]) -> Result<Signal, ValidationError> {
        validate_window(candles)?;
        Ok(self.run(candles).unwrap_or_else(Signal::fallback))
    }

    fn run(&self, candles: &[Candle]) -> Option<Signal> {
        let indicators = IndicatorBank::compute(candles);
        let patterns = PatternDetector::detect(candles);
        let sentiment = SentimentEstimator::estimate(candles);

        let outcome = self.fusion.fuse(&FusionInput {
            indicators: &indicators,
            patterns: &patterns,
            sentiment: &sentiment,
        });

        let entry_price = candles
            .last()
            .map(|c| c.close)
            .unwrap_or(FALLBACK_ENTRY_PRICE);
        let risk = RiskAnnotator::annotate(outcome.action, entry_price, self.fusion.config());

        let signal = Signal {
            action: outcome.action,
            confidence: outcome.confidence,
            entry_price: risk.entry_price,
            stop_loss: risk.stop_loss,
            take_profit: risk.take_profit,
            risk_reward: risk.risk_reward,
            reasoning: outcome.reasoning,
            buy_score: outcome.buy_score,
            sell_score: outcome.sell_score,
        };

        let well_formed = signal.confidence.is_finite()
            && signal.entry_price.is_finite()
            && signal.stop_loss.is_finite()
            && signal.take_profit.is_finite()
            && signal.buy_score.is_finite()
            && signal.sell_score.is_finite();
        well_formed.then_some(signal)
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new()
    }
}
