//! Trend, support/resistance, and chart pattern detection.

use crate::common::math;
use crate::models::candle::Candle;
use crate::models::patterns::{ChartPattern, PatternSet, SrKind, SrLevel, Trend};
use crate::patterns::peaks::{find_peaks, find_troughs};

/// Minimum window before any trend or chart pattern is reported.
const MIN_CANDLES: usize = 20;
/// Number of trailing highs fed to the trend regression.
const TREND_WINDOW: usize = 10;
/// Minimum window before support/resistance levels are computed.
const SR_MIN_CANDLES: usize = 50;
/// Horizontal separation between support/resistance extrema.
const SR_DISTANCE: usize = 5;
/// Chart patterns are evaluated over this many trailing candles.
const CHART_WINDOW: usize = 20;

pub struct PatternDetector;

impl PatternDetector {
    /// Detect all geometric structure for the window.
    pub fn detect(candles: &[Candle]) -> PatternSet {
        if candles.len() < MIN_CANDLES {
            return PatternSet::sideways();
        }

        let highs: Vec<f64> = candles.iter().map(|c| c.high).collect();
        let lows: Vec<f64> = candles.iter().map(|c| c.low).collect();
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

        PatternSet {
            trend: Self::detect_trend(&highs),
            support_resistance: Self::detect_support_resistance(&highs, &lows),
            chart_patterns: Self::detect_chart_patterns(&highs, &lows, &closes),
        }
    }

    /// Regression slope of the last 10 highs decides the trend direction.
    fn detect_trend(highs: &[f64]) -> Trend {
        let recent = &highs[highs.len() - TREND_WINDOW..];
        match math::linear_slope(recent) {
            Some(slope) if slope > 0.0 => Trend::Bullish,
            Some(slope) if slope < 0.0 => Trend::Bearish,
            _ => Trend::Sideways,
        }
    }

    /// Cluster local extrema into one resistance and one support level.
    ///
    /// Level is the mean of the (up to) three most recent extrema; strength
    /// is the total extremum count over the window.
    fn detect_support_resistance(highs: &[f64], lows: &[f64]) -> Vec<SrLevel> {
        let mut levels = Vec::new();
        if highs.len() < SR_MIN_CANDLES {
            return levels;
        }

        let resistance_peaks = find_peaks(highs, SR_DISTANCE);
        if !resistance_peaks.is_empty() {
            let recent = &resistance_peaks[resistance_peaks.len().saturating_sub(3)..];
            let level = recent.iter().map(|&i| highs[i]).sum::<f64>() / recent.len() as f64;
            levels.push(SrLevel {
                kind: SrKind::Resistance,
                level,
                strength: resistance_peaks.len(),
            });
        }

        let support_troughs = find_troughs(lows, SR_DISTANCE);
        if !support_troughs.is_empty() {
            let recent = &support_troughs[support_troughs.len().saturating_sub(3)..];
            let level = recent.iter().map(|&i| lows[i]).sum::<f64>() / recent.len() as f64;
            levels.push(SrLevel {
                kind: SrKind::Support,
                level,
                strength: support_troughs.len(),
            });
        }

        levels
    }

    fn detect_chart_patterns(highs: &[f64], lows: &[f64], closes: &[f64]) -> Vec<ChartPattern> {
        let highs = &highs[highs.len() - CHART_WINDOW..];
        let lows = &lows[lows.len() - CHART_WINDOW..];
        let closes = &closes[closes.len() - CHART_WINDOW..];

        let mut patterns = Vec::new();
        if Self::is_head_and_shoulders(highs) {
            patterns.push(ChartPattern::HeadAndShoulders);
        }
        if Self::is_double_top(highs) {
            patterns.push(ChartPattern::DoubleTop);
        }
        if Self::is_double_bottom(lows) {
            patterns.push(ChartPattern::DoubleBottom);
        }
        if Self::is_ascending_triangle(highs, lows) {
            patterns.push(ChartPattern::AscendingTriangle);
        }
        if Self::is_descending_triangle(highs, lows) {
            patterns.push(ChartPattern::DescendingTriangle);
        }
        if Self::is_flag(closes) {
            patterns.push(ChartPattern::Flag);
        }
        if Self::is_pennant(highs, lows) {
            patterns.push(ChartPattern::Pennant);
        }
        patterns
    }

    /// Three peaks with the middle one highest.
    fn is_head_and_shoulders(highs: &[f64]) -> bool {
        let peaks = find_peaks(highs, 3);
        peaks.len() >= 3
            && highs[peaks[1]] > highs[peaks[0]]
            && highs[peaks[1]] > highs[peaks[2]]
    }

    /// Two most recent peaks within 2% of each other.
    fn is_double_top(highs: &[f64]) -> bool {
        let peaks = find_peaks(highs, 5);
        if peaks.len() < 2 {
            return false;
        }
        let last = highs[peaks[peaks.len() - 1]];
        let previous = highs[peaks[peaks.len() - 2]];
        (last - previous).abs() / last < 0.02
    }

    /// Two most recent troughs within 2% of each other.
    fn is_double_bottom(lows: &[f64]) -> bool {
        let troughs = find_troughs(lows, 5);
        if troughs.len() < 2 {
            return false;
        }
        let last = lows[troughs[troughs.len() - 1]];
        let previous = lows[troughs[troughs.len() - 2]];
        (last - previous).abs() / last < 0.02
    }

    /// Flat resistance line over rising support.
    fn is_ascending_triangle(highs: &[f64], lows: &[f64]) -> bool {
        let resistance_slope = math::linear_slope(highs).unwrap_or(0.0);
        let support_slope = math::linear_slope(lows).unwrap_or(0.0);
        resistance_slope.abs() < 50.0 && support_slope > 20.0
    }

    /// Flat support line under falling resistance.
    fn is_descending_triangle(highs: &[f64], lows: &[f64]) -> bool {
        let resistance_slope = math::linear_slope(highs).unwrap_or(0.0);
        let support_slope = math::linear_slope(lows).unwrap_or(0.0);
        support_slope.abs() < 50.0 && resistance_slope < -20.0
    }

    /// Tight consolidation after a wider move: the last five closes span less
    /// than 30% of the range of the five before them.
    fn is_flag(closes: &[f64]) -> bool {
        if closes.len() < 10 {
            return false;
        }
        let recent = &closes[closes.len() - 5..];
        let previous = &closes[closes.len() - 10..closes.len() - 5];

        let recent_range = span(recent);
        let previous_range = span(previous);
        recent_range < previous_range * 0.3
    }

    /// Steep converging trend lines over the last ten candles.
    fn is_pennant(highs: &[f64], lows: &[f64]) -> bool {
        if highs.len() < 10 || lows.len() < 10 {
            return false;
        }
        let high_slope = math::linear_slope(&highs[highs.len() - 10..]).unwrap_or(0.0);
        let low_slope = math::linear_slope(&lows[lows.len() - 10..]).unwrap_or(0.0);
        high_slope.abs() > 10.0 && low_slope.abs() > 10.0
    }
}

fn span(values: &[f64]) -> f64 {
    let max = values.iter().fold(f64::MIN, |a, &b| a.max(b));
    let min = values.iter().fold(f64::MAX, |a, &b| a.min(b));
    max - min
}
