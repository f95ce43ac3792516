use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sentiment {
    Bullish,
    Bearish,
    Neutral,
}

/// Coarse bullish/bearish/neutral tally from recent momentum and volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentEstimate {
    pub bullish_signals: u32,
    pub bearish_signals: u32,
    pub neutral_signals: u32,
    pub overall: Sentiment,
}

impl SentimentEstimate {
    /// All-zero neutral estimate, used below the minimum window length.
    pub fn neutral() -> Self {
        Self {
            bullish_signals: 0,
            bearish_signals: 0,
            neutral_signals: 0,
            overall: Sentiment::Neutral,
        }
    }
}
