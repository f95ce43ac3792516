use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the regression trend over recent highs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Trend {
    Bullish,
    Bearish,
    Sideways,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SrKind {
    Support,
    Resistance,
}

/// A support or resistance level derived from clustered local extrema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SrLevel {
    #[serde(rename = "type")]
    pub kind: SrKind,
    pub level: f64,
    pub strength: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartPattern {
    HeadAndShoulders,
    DoubleTop,
    DoubleBottom,
    AscendingTriangle,
    DescendingTriangle,
    Flag,
    Pennant,
}

impl ChartPattern {
    /// Patterns that add to the buy side of the fusion score.
    pub fn is_bullish(&self) -> bool {
        matches!(
            self,
            ChartPattern::DoubleBottom | ChartPattern::AscendingTriangle | ChartPattern::Flag
        )
    }

    /// Patterns that add to the sell side of the fusion score.
    pub fn is_bearish(&self) -> bool {
        matches!(
            self,
            ChartPattern::DoubleTop
                | ChartPattern::HeadAndShoulders
                | ChartPattern::DescendingTriangle
        )
    }
}

impl fmt::Display for ChartPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartPattern::HeadAndShoulders => "HEAD_AND_SHOULDERS",
            ChartPattern::DoubleTop => "DOUBLE_TOP",
            ChartPattern::DoubleBottom => "DOUBLE_BOTTOM",
            ChartPattern::AscendingTriangle => "ASCENDING_TRIANGLE",
            ChartPattern::DescendingTriangle => "DESCENDING_TRIANGLE",
            ChartPattern::Flag => "FLAG",
            ChartPattern::Pennant => "PENNANT",
        };
        f.write_str(name)
    }
}

/// Geometric structure detected over the trailing window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSet {
    pub trend: Trend,
    pub support_resistance: Vec<SrLevel>,
    pub chart_patterns: Vec<ChartPattern>,
}

impl PatternSet {
    /// The neutral result for windows too short to analyze.
    pub fn sideways() -> Self {
        Self {
            trend: Trend::Sideways,
            support_resistance: Vec::new(),
            chart_patterns: Vec::new(),
        }
    }
}
