use serde::{Deserialize, Serialize};

/// Entry price reported when no candle data is available.
pub const FALLBACK_ENTRY_PRICE: f64 = 50_000.0;

/// Reasoning line attached to the canonical fallback signal.
pub const FALLBACK_REASON: &str = "Fallback Signal - Analysis Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

/// Final engine output: the trading decision with its risk annotation and the
/// ordered list of contributing reasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    pub action: Action,
    pub confidence: f64,
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk_reward: f64,
    pub reasoning: Vec<String>,
    pub buy_score: f64,
    pub sell_score: f64,
}

impl Signal {
    /// Canonical well-formed signal substituted when analysis degrades past
    /// the local indicator fallbacks. Never surfaced as an error.
    pub fn fallback() -> Self {
        Self {
            action: Action::Hold,
            confidence: 0.5,
            entry_price: FALLBACK_ENTRY_PRICE,
            stop_loss: 0.0,
            take_profit: 0.0,
            risk_reward: 0.0,
            reasoning: vec![FALLBACK_REASON.to_string()],
            buy_score: 0.0,
            sell_score: 0.0,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.reasoning.len() == 1 && self.reasoning[0] == FALLBACK_REASON
    }
}
