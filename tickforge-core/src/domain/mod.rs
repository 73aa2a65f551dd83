//! Domain types: logical timestamps, identifiers, and the closed event set.

pub mod event;
pub mod ids;
pub mod time;

pub use event::{
    Event, EventKind, FillEvent, OrderEvent, OrderStatus, PnlUpdateEvent, PositionUpdateEvent,
    Side, SignalEvent, TickEvent,
};
pub use ids::OrderId;
pub use time::Timestamp;
