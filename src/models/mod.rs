//! Shared data models spanning the engine layers.

pub mod candle;
pub mod indicators;
pub mod patterns;
pub mod sentiment;
pub mod signal;

pub use candle::{validate_window, Candle, ValidationError};
pub use indicators::{
    AdxIndicator, BollingerBandsIndicator, IndicatorSet, MacdIndicator, StochasticIndicator,
};
pub use patterns::{ChartPattern, PatternSet, SrKind, SrLevel, Trend};
pub use sentiment::{Sentiment, SentimentEstimate};
pub use signal::{Action, Signal, FALLBACK_ENTRY_PRICE, FALLBACK_REASON};
