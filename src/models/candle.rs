use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One OHLCV price interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Absolute size of the candle body.
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Full high-to-low range.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    pub fn upper_shadow(&self) -> f64 {
        self.high - self.open.max(self.close)
    }

    pub fn lower_shadow(&self) -> f64 {
        self.open.min(self.close) - self.low
    }

    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }
}

/// Structural rejection of malformed input, distinct from the in-engine
/// fallback values used when a window is merely too short.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("candle window is empty")]
    EmptyWindow,
    #[error("candle {index}: non-finite value")]
    NonFinite { index: usize },
    #[error("candle {index}: high {high} is below the candle body")]
    HighBelowBody { index: usize, high: f64 },
    #[error("candle {index}: low {low} is above the candle body")]
    LowAboveBody { index: usize, low: f64 },
    #[error("candle {index}: negative volume {volume}")]
    NegativeVolume { index: usize, volume: f64 },
}

/// Check window shape before any analysis runs.
///
/// A candle must satisfy `high >= max(open, close)`, `low <= min(open, close)`
/// and `volume >= 0`, with every field finite.
pub fn validate_window(candles: &[Candle]) -> Result<(), ValidationError> {
    if candles.is_empty() {
        return Err(ValidationError::EmptyWindow);
    }
    for (index, candle) in candles.iter().enumerate() {
        if !candle.is_finite() {
            return Err(ValidationError::NonFinite { index });
        }
        if candle.high < candle.open.max(candle.close) {
            return Err(ValidationError::HighBelowBody {
                index,
                high: candle.high,
            });
        }
        if candle.low > candle.open.min(candle.close) {
            return Err(ValidationError::LowAboveBody {
                index,
                low: candle.low,
            });
        }
        if candle.volume < 0.0 {
            return Err(ValidationError::NegativeVolume {
                index,
                volume: candle.volume,
            });
        }
    }
    Ok(())
}
