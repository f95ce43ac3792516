//! Stop-loss / take-profit annotation for a resolved action.

use crate::config::FusionConfig;
use crate::models::signal::Action;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAnnotation {
    pub entry_price: f64,
    pub stop_loss: f64,
    pub take_profit: f64,
    pub risk_reward: f64,
}

pub struct RiskAnnotator;

impl RiskAnnotator {
    /// Derive the protective levels from the action and entry price.
    ///
    /// HOLD carries no position, so its levels are zeroed.
    pub fn annotate(action: Action, entry_price: f64, config: &FusionConfig) -> RiskAnnotation {
        match action {
            Action::Buy => RiskAnnotation {
                entry_price,
                stop_loss: entry_price * (1.0 - config.stop_loss_pct),
                take_profit: entry_price * (1.0 + config.take_profit_pct),
                risk_reward: config.risk_reward,
            },
            Action::Sell => RiskAnnotation {
                entry_price,
                stop_loss: entry_price * (1.0 + config.stop_loss_pct),
                take_profit: entry_price * (1.0 - config.take_profit_pct),
                risk_reward: config.risk_reward,
            },
            Action::Hold => RiskAnnotation {
                entry_price,
                stop_loss: 0.0,
                take_profit: 0.0,
                risk_reward: 0.0,
            },
        }
    }
}
