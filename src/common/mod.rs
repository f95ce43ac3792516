//! Shared helpers used across indicator and pattern computations.

pub mod math;
