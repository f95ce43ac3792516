//! Service-layer plumbing around the analysis engine.

pub mod http;
