//! Slippage models: map a mid price and order context to an execution price.
//!
//! The execution engine treats the model as an injected function, so a host
//! can pass a plain closure; the stock models cover the common cases.

use crate::domain::Side;

/// Market context handed to a slippage model for one order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlippageInput {
    pub mid_price: f64,
    pub order_quantity: f64,
    /// Bid volume + ask volume at the cached tick.
    pub available_liquidity: f64,
    pub side: Side,
}

/// Maps order context to a raw execution price (before limit clamping).
pub trait SlippageModel: Send + Sync {
    fn execution_price(&self, input: &SlippageInput) -> f64;

    fn name(&self) -> &str {
        "custom"
    }
}

/// Any `Fn(&SlippageInput) -> f64` closure is a slippage model.
impl<F> SlippageModel for F
where
    F: Fn(&SlippageInput) -> f64 + Send + Sync,
{
    fn execution_price(&self, input: &SlippageInput) -> f64 {
        self(input)
    }
}

/// Frictionless: fills exactly at mid.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSlippage;

impl SlippageModel for NoSlippage {
    fn execution_price(&self, input: &SlippageInput) -> f64 {
        input.mid_price
    }

    fn name(&self) -> &str {
        "NoSlippage"
    }
}

/// Directional fixed cost in basis points: buyers pay up, sellers receive
/// less.
#[derive(Debug, Clone, Copy)]
pub struct FixedBpsSlippage {
    pub bps: f64,
}

impl FixedBpsSlippage {
    pub fn new(bps: f64) -> Self {
        Self { bps }
    }
}

impl SlippageModel for FixedBpsSlippage {
    fn execution_price(&self, input: &SlippageInput) -> f64 {
        let fraction = self.bps / 10_000.0;
        match input.side {
            Side::Buy => input.mid_price * (1.0 + fraction),
            Side::Sell => input.mid_price * (1.0 - fraction),
        }
    }

    fn name(&self) -> &str {
        "FixedBpsSlippage"
    }
}

/// Impact grows with the share of displayed liquidity the order consumes.
#[derive(Debug, Clone, Copy)]
pub struct VolumeImpactSlippage {
    /// Price impact at 100% of available liquidity, as a fraction of mid.
    pub impact: f64,
}

impl VolumeImpactSlippage {
    pub fn new(impact: f64) -> Self {
        Self { impact }
    }
}

impl SlippageModel for VolumeImpactSlippage {
    fn execution_price(&self, input: &SlippageInput) -> f64 {
        if input.available_liquidity <= 0.0 {
            return input.mid_price;
        }
        let consumed = (input.order_quantity / input.available_liquidity).min(1.0);
        let fraction = self.impact * consumed;
        match input.side {
            Side::Buy => input.mid_price * (1.0 + fraction),
            Side::Sell => input.mid_price * (1.0 - fraction),
        }
    }

    fn name(&self) -> &str {
        "VolumeImpactSlippage"
    }
}
