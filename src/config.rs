//! Process configuration from environment variables and the read-only
//! thresholds used by signal fusion.

/// Get the deployment environment name.
///
/// Reads the ENVIRONMENT variable, defaulting to "sandbox".
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Get the HTTP port, defaulting to 8080.
pub fn get_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080)
}

/// Thresholds and weights for the fusion decision table.
///
/// Constructed once per engine and never mutated afterwards; the defaults are
/// the production constants and the regression suite depends on them.
#[derive(Debug, Clone)]
pub struct FusionConfig {
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub bb_oversold: f64,
    pub bb_overbought: f64,
    pub adx_trend_strength: f64,
    /// Minimum winning score required to act instead of holding.
    pub min_action_score: f64,
    pub max_confidence: f64,
    pub stop_loss_pct: f64,
    pub take_profit_pct: f64,
    pub risk_reward: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            bb_oversold: 0.2,
            bb_overbought: 0.8,
            adx_trend_strength: 25.0,
            min_action_score: 3.0,
            max_confidence: 0.95,
            stop_loss_pct: 0.02,
            take_profit_pct: 0.04,
            risk_reward: 2.0,
        }
    }
}
