//! Market data manager: per-symbol history behind a reader/writer lock, with
//! indicator work fanned out to the worker pool.
//!
//! `update_tick` is fire-and-forget: the caller enqueues and returns, fully
//! decoupled from computation latency. The processing task appends under the
//! exclusive lock, copies the series out, releases the lock, and runs the
//! indicator math on the snapshot. Per-symbol appends are serialized by the
//! lock — serialization order, not submission order, when multiple producers
//! call in concurrently.

use crate::indicators::{bollinger_bands, classify, rsi, TradeAction};
use crate::logging::{LogLevel, LogSink};
use crate::market::series::PriceSeries;
use crate::market::worker_pool::{PoolError, WorkerPool};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Tuning knobs for the live tick path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Worker threads processing ticks.
    pub num_workers: usize,
    /// Price history cap per symbol; oldest-first eviction beyond this.
    pub max_history: usize,
    /// Minimum samples before indicators run — sized for the slowest
    /// indicator the engine exposes (MACD's 26-sample slow period).
    pub min_samples: usize,
    pub rsi_period: usize,
    pub bollinger_period: usize,
    pub bollinger_k: f64,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            num_workers: 4,
            max_history: 200,
            min_samples: 26,
            rsi_period: 14,
            bollinger_period: 20,
            bollinger_k: 2.0,
        }
    }
}

type SymbolMap = HashMap<String, PriceSeries>;

/// Owns the per-symbol price history and the worker pool that processes it.
pub struct MarketDataManager {
    data: Arc<RwLock<SymbolMap>>,
    pool: WorkerPool,
    sink: Arc<dyn LogSink>,
    config: ManagerConfig,
}

impl MarketDataManager {
    pub fn new(config: ManagerConfig, sink: Arc<dyn LogSink>) -> Result<Self, PoolError> {
        Ok(Self {
            data: Arc::new(RwLock::new(HashMap::new())),
            pool: WorkerPool::new(config.num_workers)?,
            sink,
            config,
        })
    }

    /// Ingest a tick. Enqueues the processing task and returns immediately.
    pub fn update_tick(&self, symbol: &str, price: f64) {
        let data = Arc::clone(&self.data);
        let sink = Arc::clone(&self.sink);
        let config = self.config.clone();
        let symbol = symbol.to_string();

        self.pool.execute(move || {
            process_symbol(&data, sink.as_ref(), &config, &symbol, price);
        });
    }

    /// Most recent price for `symbol`, if any ticks have been processed.
    pub fn last_price(&self, symbol: &str) -> Option<f64> {
        let data = self.data.read().unwrap_or_else(|e| e.into_inner());
        data.get(symbol).and_then(PriceSeries::last)
    }

    /// Most recent price, with `0.0` standing in for an unknown symbol.
    ///
    /// The zero sentinel is indistinguishable from a legitimate zero price;
    /// prefer [`MarketDataManager::last_price`] in new code.
    pub fn get_last_price(&self, symbol: &str) -> f64 {
        self.last_price(symbol).unwrap_or(0.0)
    }

    /// Retained history length for `symbol` (0 if unknown).
    pub fn history_len(&self, symbol: &str) -> usize {
        let data = self.data.read().unwrap_or_else(|e| e.into_inner());
        data.get(symbol).map_or(0, PriceSeries::len)
    }

    /// Block until every enqueued tick has been processed.
    pub fn wait_idle(&self) {
        self.pool.wait_idle();
    }

    /// Stop the worker pool; already-enqueued ticks are drained first.
    pub fn stop(&self) {
        self.pool.stop();
    }
}

/// Worker-side processing for one tick.
fn process_symbol(
    data: &RwLock<SymbolMap>,
    sink: &dyn LogSink,
    config: &ManagerConfig,
    symbol: &str,
    price: f64,
) {
    // Critical section: append, then copy the series out.
    let snapshot = {
        let mut map = data.write().unwrap_or_else(|e| e.into_inner());
        let series = map
            .entry(symbol.to_string())
            .or_insert_with(|| PriceSeries::new(config.max_history));
        series.push(price);
        series.snapshot()
    };

    // Indicator math runs on the snapshot, lock-free.
    if snapshot.len() < config.min_samples {
        return;
    }

    let rsi_series = rsi(&snapshot, config.rsi_period);
    let bands = bollinger_bands(&snapshot, config.bollinger_period, config.bollinger_k);
    let action = classify(&rsi_series, &snapshot, &bands.upper, &bands.lower);

    if action != TradeAction::Hold {
        let last = snapshot[snapshot.len() - 1];
        sink.log(
            LogLevel::Signal,
            &format!("{symbol} | price {last:.4} | action {action}"),
        );
    }
}
