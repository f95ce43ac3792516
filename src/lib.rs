//! Chartsight signal engine.
//!
//! Deterministic multi-factor trading signal generation from OHLCV candle
//! windows. Technical indicators, geometric chart patterns, and a price-action
//! sentiment tally are fused under fixed weights into a BUY/SELL/HOLD decision
//! with a confidence score and risk annotation.
//!
//! The engine ([`signals::engine::SignalEngine`]) is pure and stateless: the
//! same window always produces a bit-identical signal, and concurrent calls
//! need no synchronization.

pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod patterns;
pub mod sentiment;
pub mod signals;
