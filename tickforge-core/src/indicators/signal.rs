//! Mean-reversion signal classifier.
//!
//! A pure function of the *latest* (RSI, price, upper band, lower band)
//! tuple only: oversold below the lower band is a buy, overbought above the
//! upper band is a sell, anything else — including an undefined RSI — holds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl TradeAction {
    /// Numeric form: +1 buy, -1 sell, 0 hold.
    pub fn as_i8(self) -> i8 {
        match self {
            TradeAction::Buy => 1,
            TradeAction::Sell => -1,
            TradeAction::Hold => 0,
        }
    }
}

impl fmt::Display for TradeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAction::Buy => write!(f, "BUY"),
            TradeAction::Sell => write!(f, "SELL"),
            TradeAction::Hold => write!(f, "HOLD"),
        }
    }
}

/// Classify the most recent point of the given series.
///
/// All four slices are indexed in lockstep; only the last element of each is
/// consulted. Empty input or a NaN RSI yields `Hold`.
pub fn classify(rsi: &[f64], price: &[f64], upper: &[f64], lower: &[f64]) -> TradeAction {
    let last = match rsi.len().checked_sub(1) {
        Some(i) => i,
        None => return TradeAction::Hold,
    };
    if rsi[last].is_nan() {
        return TradeAction::Hold;
    }

    if rsi[last] < 30.0 && price[last] < lower[last] {
        TradeAction::Buy
    } else if rsi[last] > 70.0 && price[last] > upper[last] {
        TradeAction::Sell
    } else {
        TradeAction::Hold
    }
}
