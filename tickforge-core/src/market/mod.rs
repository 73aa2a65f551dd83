//! Live tick path: bounded per-symbol history, a worker pool for off-thread
//! processing, and the manager that ties them together.

pub mod manager;
pub mod series;
pub mod worker_pool;

pub use manager::{ManagerConfig, MarketDataManager};
pub use series::PriceSeries;
pub use worker_pool::{PoolError, WorkerPool};
