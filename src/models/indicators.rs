use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StochasticIndicator {
    pub k: f64,
    pub d: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdxIndicator {
    pub value: f64,
    pub plus_di: f64,
    pub minus_di: f64,
}

/// Fixed-shape scalar snapshot of every indicator the fusion pass reads.
///
/// Computed once per window. Candlestick fields are detection scores in the
/// 0/±100 convention: 100 when the pattern is present on the latest candle(s),
/// -100 for the bearish variant of two-sided patterns, 0 otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub sma_20: f64,
    pub sma_50: f64,
    pub ema_12: f64,
    pub ema_26: f64,
    pub rsi: f64,
    pub macd: f64,
    pub macd_signal: f64,
    pub bb_upper: f64,
    pub bb_lower: f64,
    pub bb_position: f64,
    pub obv: f64,
    pub ad: f64,
    pub adx: f64,
    pub cci: f64,
    pub williams_r: f64,
    pub stoch_k: f64,
    pub stoch_d: f64,
    pub hammer: f64,
    pub doji: f64,
    pub engulfing: f64,
    pub shooting_star: f64,
}

impl IndicatorSet {
    /// Documented default values, substituted per field when the window is
    /// shorter than an indicator's required period, or wholesale when a
    /// computation degenerates into a non-finite result.
    pub fn fallback() -> Self {
        Self {
            sma_20: 50_000.0,
            sma_50: 49_500.0,
            ema_12: 50_200.0,
            ema_26: 49_800.0,
            rsi: 55.0,
            macd: 100.0,
            macd_signal: 80.0,
            bb_upper: 52_000.0,
            bb_lower: 48_000.0,
            bb_position: 0.6,
            obv: 1_000_000.0,
            ad: 500_000.0,
            adx: 30.0,
            cci: 20.0,
            williams_r: -30.0,
            stoch_k: 60.0,
            stoch_d: 58.0,
            hammer: 0.0,
            doji: 0.0,
            engulfing: 0.0,
            shooting_star: 0.0,
        }
    }

    pub fn is_finite(&self) -> bool {
        [
            self.sma_20,
            self.sma_50,
            self.ema_12,
            self.ema_26,
            self.rsi,
            self.macd,
            self.macd_signal,
            self.bb_upper,
            self.bb_lower,
            self.bb_position,
            self.obv,
            self.ad,
            self.adx,
            self.cci,
            self.williams_r,
            self.stoch_k,
            self.stoch_d,
            self.hammer,
            self.doji,
            self.engulfing,
            self.shooting_star,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}
