//! Signal fusion, risk annotation, and the top-level engine.

pub mod engine;
pub mod fusion;
pub mod risk;

pub use engine::SignalEngine;
pub use fusion::{FusionInput, FusionOutcome, SignalFusion};
pub use risk::{RiskAnnotation, RiskAnnotator};
