//! Assembles the full [`IndicatorSet`] for a candle window.
//!
//! Two-tier degradation: an indicator whose required period exceeds the
//! window length falls back to its documented default value, and a set that
//! still comes out with any non-finite scalar is replaced wholesale by
//! [`IndicatorSet::fallback`]. Computation never errors.

use crate::indicators::{candlestick, momentum, trend, volatility, volume};
use crate::models::candle::Candle;
use crate::models::indicators::IndicatorSet;

pub struct IndicatorBank;

impl IndicatorBank {
    /// Compute every indicator scalar for the window.
    pub fn compute(candles: &[Candle]) -> IndicatorSet {
        let set = Self::compute_raw(candles);
        if set.is_finite() {
            set
        } else {
            IndicatorSet::fallback()
        }
    }

    fn compute_raw(candles: &[Candle]) -> IndicatorSet {
        let defaults = IndicatorSet::fallback();

        let macd = momentum::calculate_macd_default(candles);
        let stochastic = momentum::calculate_stochastic_default(candles);
        let adx = trend::calculate_adx_default(candles);

        let bollinger = volatility::calculate_bollinger_bands_default(candles);
        let (bb_upper, bb_lower, bb_position) = match (&bollinger, candles.last()) {
            (Some(bb), Some(last)) => {
                let position = if bb.upper > bb.lower {
                    (last.close - bb.lower) / (bb.upper - bb.lower)
                } else {
                    // Zero-width band on a flat window: price sits mid-band.
                    0.5
                };
                (bb.upper, bb.lower, position)
            }
            _ => (defaults.bb_upper, defaults.bb_lower, defaults.bb_position),
        };

        IndicatorSet {
            sma_20: trend::calculate_sma(candles, 20).unwrap_or(defaults.sma_20),
            sma_50: trend::calculate_sma(candles, 50).unwrap_or(defaults.sma_50),
            ema_12: trend::calculate_ema(candles, 12).unwrap_or(defaults.ema_12),
            ema_26: trend::calculate_ema(candles, 26).unwrap_or(defaults.ema_26),
            rsi: momentum::calculate_rsi_default(candles).unwrap_or(defaults.rsi),
            macd: macd.as_ref().map(|m| m.macd).unwrap_or(defaults.macd),
            macd_signal: macd
                .as_ref()
                .map(|m| m.signal)
                .unwrap_or(defaults.macd_signal),
            bb_upper,
            bb_lower,
            bb_position,
            obv: volume::calculate_obv(candles).unwrap_or(defaults.obv),
            ad: volume::calculate_ad(candles).unwrap_or(defaults.ad),
            adx: adx.as_ref().map(|a| a.value).unwrap_or(defaults.adx),
            cci: momentum::calculate_cci_default(candles).unwrap_or(defaults.cci),
            williams_r: momentum::calculate_williams_r_default(candles)
                .unwrap_or(defaults.williams_r),
            stoch_k: stochastic
                .as_ref()
                .map(|s| s.k)
                .unwrap_or(defaults.stoch_k),
            stoch_d: stochastic
                .as_ref()
                .map(|s| s.d)
                .unwrap_or(defaults.stoch_d),
            hammer: candlestick::score_hammer(candles),
            doji: candlestick::score_doji(candles),
            engulfing: candlestick::score_engulfing(candles),
            shooting_star: candlestick::score_shooting_star(candles),
        }
    }
}
