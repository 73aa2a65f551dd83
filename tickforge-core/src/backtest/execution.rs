//! Execution engine: turns orders into fills against the last tick seen per
//! symbol, applying the injected slippage model, limit clamping, and a flat
//! commission. Fills are events — each one re-enters the queue and is
//! drained like any other event.

use crate::backtest::queue::EventQueue;
use crate::backtest::slippage::{SlippageInput, SlippageModel};
use crate::domain::{FillEvent, OrderEvent, Side, TickEvent};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Execution friction parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Commission per fill: `quantity * price * fee_rate`.
    pub fee_rate: f64,
    /// Tag recorded on every fill.
    pub exchange_tag: String,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            fee_rate: 0.0005, // 5 bps flat
            exchange_tag: "SIMULATED".to_string(),
        }
    }
}

/// Stateful per-symbol "last tick" cache plus the order → fill conversion.
pub struct ExecutionEngine {
    queue: Arc<EventQueue>,
    slippage_model: Box<dyn SlippageModel>,
    config: ExecutionConfig,
    last_ticks: HashMap<String, TickEvent>,
    fills: Vec<FillEvent>,
}

impl ExecutionEngine {
    pub fn new(
        queue: Arc<EventQueue>,
        slippage_model: Box<dyn SlippageModel>,
        config: ExecutionConfig,
    ) -> Self {
        Self {
            queue,
            slippage_model,
            config,
            last_ticks: HashMap::new(),
            fills: Vec::new(),
        }
    }

    /// Overwrite the cached tick for the tick's symbol.
    pub fn on_tick(&mut self, tick: TickEvent) {
        self.last_ticks.insert(tick.symbol.clone(), tick);
    }

    /// Convert an order into a fill against the cached tick.
    ///
    /// An order for a symbol with no prior tick is silently dropped — no
    /// fill, no error event. A strategy must guarantee a tick preceded any
    /// order for that symbol.
    pub fn on_order(&mut self, order: &OrderEvent) {
        let Some(tick) = self.last_ticks.get(&order.symbol) else {
            return;
        };

        let mid = tick.mid_price();
        let execution_price = self.compute_execution_price(order, tick, mid);

        let fill = FillEvent {
            order_id: order.order_id,
            timestamp: tick.timestamp,
            symbol: order.symbol.clone(),
            side: order.side,
            filled_quantity: order.quantity,
            fill_price: execution_price,
            commission: order.quantity * execution_price * self.config.fee_rate,
            slippage: execution_price - mid,
            exchange: self.config.exchange_tag.clone(),
        };

        self.fills.push(fill.clone());
        self.queue.push(crate::domain::Event::Fill(fill));
    }

    /// Append a fill produced outside this engine to the history.
    pub fn record_fill(&mut self, fill: FillEvent) {
        self.fills.push(fill);
    }

    /// Every fill produced so far, in execution order.
    pub fn fills(&self) -> &[FillEvent] {
        &self.fills
    }

    pub fn last_tick(&self, symbol: &str) -> Option<&TickEvent> {
        self.last_ticks.get(symbol)
    }

    fn compute_execution_price(&self, order: &OrderEvent, tick: &TickEvent, mid: f64) -> f64 {
        let input = SlippageInput {
            mid_price: mid,
            order_quantity: order.quantity,
            available_liquidity: tick.bid_volume + tick.ask_volume,
            side: order.side,
        };
        let slipped = self.slippage_model.execution_price(&input);

        // Limit orders fill at the limit when the slipped price is worse;
        // they are never rejected on price.
        if !order.is_market_order() {
            match order.side {
                Side::Buy if slipped > order.limit_price => return order.limit_price,
                Side::Sell if slipped < order.limit_price => return order.limit_price,
                _ => {}
            }
        }

        slipped
    }
}
