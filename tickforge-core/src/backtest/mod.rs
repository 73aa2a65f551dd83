//! Chronological event-driven simulation: the event queue, the execution
//! model (slippage + commission + limit clamping), and the backtest engine
//! driving the loop.

pub mod engine;
pub mod execution;
pub mod queue;
pub mod slippage;

pub use engine::{BacktestEngine, EngineState};
pub use execution::{ExecutionConfig, ExecutionEngine};
pub use queue::EventQueue;
pub use slippage::{FixedBpsSlippage, NoSlippage, SlippageInput, SlippageModel, VolumeImpactSlippage};
