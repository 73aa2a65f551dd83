//! The closed event set flowing through the simulation.
//!
//! Six record types wrapped in one [`Event`] enum. Every event carries
//! exactly one timestamp used as the sole ordering key, and events are
//! immutable once constructed: an execution or signal decision always
//! produces a *new* event, never mutates one in place.

use super::ids::OrderId;
use super::time::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
        }
    }
}

/// Order lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Submitted,
    Filled,
    PartiallyFilled,
    Cancelled,
    Rejected,
}

/// A single market data update for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickEvent {
    pub timestamp: Timestamp,
    pub symbol: String,
    pub bid: f64,
    pub ask: f64,
    pub bid_volume: f64,
    pub ask_volume: f64,
    /// Last traded price.
    pub last: f64,
    pub last_volume: f64,
}

impl TickEvent {
    pub fn mid_price(&self) -> f64 {
        (self.bid + self.ask) * 0.5
    }
}

/// A directional trading suggestion produced by a strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalEvent {
    pub timestamp: Timestamp,
    pub symbol: String,
    pub side: Side,
    /// Signal strength in [-1.0, 1.0].
    pub strength: f64,
    pub strategy_id: String,
}

/// A trading order derived from a signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderEvent {
    pub order_id: OrderId,
    pub timestamp: Timestamp,
    pub symbol: String,
    pub side: Side,
    pub quantity: f64,
    /// 0.0 means market order.
    pub limit_price: f64,
    pub status: OrderStatus,
    pub strategy_id: String,
}

impl OrderEvent {
    pub fn is_market_order(&self) -> bool {
        self.limit_price == 0.0
    }
}

/// The result of executing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillEvent {
    pub order_id: OrderId,
    pub timestamp: Timestamp,
    pub symbol: String,
    pub side: Side,
    pub filled_quantity: f64,
    pub fill_price: f64,
    pub commission: f64,
    /// Execution price minus mid price at the cached tick.
    pub slippage: f64,
    pub exchange: String,
}

/// Net position snapshot for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionUpdateEvent {
    pub timestamp: Timestamp,
    pub symbol: String,
    /// Positive = long, negative = short.
    pub net_position: f64,
    pub avg_entry_price: f64,
    pub unrealized_pnl: f64,
    pub realized_pnl: f64,
}

/// Portfolio-level profit and loss snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PnlUpdateEvent {
    pub timestamp: Timestamp,
    pub total_pnl: f64,
    pub realized_pnl: f64,
    pub unrealized_pnl: f64,
    pub commission_paid: f64,
    pub total_trades: u64,
    pub winning_trades: u64,
}

impl PnlUpdateEvent {
    pub fn win_rate(&self) -> f64 {
        if self.total_trades > 0 {
            self.winning_trades as f64 / self.total_trades as f64
        } else {
            0.0
        }
    }
}

/// Discriminant of an [`Event`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Tick,
    Signal,
    Order,
    Fill,
    PositionUpdate,
    PnlUpdate,
}

/// The closed event set. The one dispatch site (the backtest engine) matches
/// exhaustively; adding a variant is a compile-visible change everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Tick(TickEvent),
    Signal(SignalEvent),
    Order(OrderEvent),
    Fill(FillEvent),
    PositionUpdate(PositionUpdateEvent),
    PnlUpdate(PnlUpdateEvent),
}

impl Event {
    /// The sole ordering key.
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Event::Tick(e) => e.timestamp,
            Event::Signal(e) => e.timestamp,
            Event::Order(e) => e.timestamp,
            Event::Fill(e) => e.timestamp,
            Event::PositionUpdate(e) => e.timestamp,
            Event::PnlUpdate(e) => e.timestamp,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Tick(_) => EventKind::Tick,
            Event::Signal(_) => EventKind::Signal,
            Event::Order(_) => EventKind::Order,
            Event::Fill(_) => EventKind::Fill,
            Event::PositionUpdate(_) => EventKind::PositionUpdate,
            Event::PnlUpdate(_) => EventKind::PnlUpdate,
        }
    }
}
