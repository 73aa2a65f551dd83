//! TickForge Core — native trading engine: streaming indicators, concurrent
//! tick fan-out, and a chronological event-driven backtest.
//!
//! This crate contains the engine a host program drives:
//! - Domain types (logical timestamps, the closed six-variant event set)
//! - Pure streaming indicator math (SMA, EMA, RSI, Bollinger, MACD) with a
//!   NaN sentinel for not-yet-computable positions, plus a signal classifier
//! - Market data manager: bounded per-symbol history under a reader/writer
//!   lock, indicator work offloaded to a fixed worker pool
//! - Timestamp-ordered event queue, execution model (slippage, commission,
//!   limit clamping), and the backtest event-loop driver
//! - An injectable log/signal sink carrying the host callback contract
//!
//! Data acquisition, parameter search, and process wiring live in the host;
//! nothing here touches the network, the filesystem, or wall-clock
//! scheduling (live-path timestamp capture aside).

pub mod backtest;
pub mod domain;
pub mod indicators;
pub mod logging;
pub mod market;

pub use backtest::{BacktestEngine, EngineState, EventQueue, ExecutionConfig, ExecutionEngine};
pub use domain::{Event, EventKind, OrderId, Side, Timestamp};
pub use logging::{CallbackSink, LogLevel, LogSink, MemorySink, NullSink};
pub use market::{ManagerConfig, MarketDataManager, PoolError, WorkerPool};
