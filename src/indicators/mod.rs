pub mod bank;
pub mod candlestick;
pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use bank::IndicatorBank;
