//! Geometric pattern detection over the candle window.

pub mod detector;
pub mod peaks;

pub use detector::PatternDetector;
pub use peaks::{find_peaks, find_troughs};
