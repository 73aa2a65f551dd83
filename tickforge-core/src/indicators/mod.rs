//! Streaming technical indicators.
//!
//! Pure, stateless functions over an ordered slice of prices. Every function
//! returns a series of the same length as its input, with `f64::NAN` marking
//! positions where not enough history exists yet. A malformed configuration
//! (window of 0, or larger than the available data) yields an all-NaN series
//! rather than an error — callers check for the sentinel, they never catch.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod signal;
pub mod sma;

pub use bollinger::{bollinger_bands, BollingerBands};
pub use ema::ema;
pub use macd::{macd, Macd};
pub use rsi::rsi;
pub use signal::{classify, TradeAction};
pub use sma::sma;

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
