//! Backtest engine: pops events in chronological order and dispatches by
//! kind. Signals never execute directly — they are synthesized into market
//! orders that re-enter the queue, and orders become fills the same way.
//!
//! `stop()` and `push_event()` are callable from other threads while `run()`
//! executes, so the run flag and counters use atomics and the execution
//! engine sits behind a mutex.

use crate::backtest::execution::ExecutionEngine;
use crate::backtest::queue::EventQueue;
use crate::domain::{
    Event, FillEvent, OrderEvent, OrderId, OrderStatus, SignalEvent, TickEvent,
};
use crate::logging::{LogLevel, LogSink};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Engine lifecycle. Initial state is `Stopped`; `run()` transitions to
/// `Running` and does *not* transition back when it returns; only `stop()`
/// moves the engine to `Stopped` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Running,
    Stopped,
}

/// Event-loop driver over an [`EventQueue`] and an [`ExecutionEngine`].
pub struct BacktestEngine {
    queue: Arc<EventQueue>,
    execution: Mutex<ExecutionEngine>,
    sink: Arc<dyn LogSink>,
    running: AtomicBool,
    events_processed: AtomicU64,
}

impl BacktestEngine {
    pub fn new(queue: Arc<EventQueue>, execution: ExecutionEngine, sink: Arc<dyn LogSink>) -> Self {
        Self {
            queue,
            execution: Mutex::new(execution),
            sink,
            running: AtomicBool::new(false),
            events_processed: AtomicU64::new(0),
        }
    }

    /// Drain the queue in chronological order.
    ///
    /// The loop exits as soon as the queue is observed empty, even though
    /// `pop()` itself can block for new events: a producer pushing
    /// concurrently while `run()` is active must accept an early return.
    /// Seed the queue before calling, or drive repeated runs.
    pub fn run(&self) {
        self.running.store(true, Ordering::SeqCst);
        self.sink.log(LogLevel::Info, "starting backtest event loop");

        while self.running.load(Ordering::SeqCst) && !self.queue.is_empty() {
            let Some(event) = self.queue.pop() else {
                break;
            };
            self.handle_event(event);
            self.events_processed.fetch_add(1, Ordering::SeqCst);
        }

        self.sink.log(
            LogLevel::Info,
            &format!(
                "backtest finished, processed {} events",
                self.events_processed.load(Ordering::SeqCst)
            ),
        );
    }

    /// Set the state to `Stopped` and release any blocked queue waiters.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
        self.queue.stop();
    }

    /// Forward an event to the queue. Legal at any time, including while
    /// `run()` is executing on another thread.
    pub fn push_event(&self, event: Event) {
        self.queue.push(event);
    }

    pub fn state(&self) -> EngineState {
        if self.running.load(Ordering::SeqCst) {
            EngineState::Running
        } else {
            EngineState::Stopped
        }
    }

    pub fn events_processed(&self) -> u64 {
        self.events_processed.load(Ordering::SeqCst)
    }

    /// Copy of the execution engine's fill history.
    pub fn fills(&self) -> Vec<FillEvent> {
        self.lock_execution().fills().to_vec()
    }

    /// Append a fill produced outside the loop to the fill history.
    pub fn record_fill(&self, fill: FillEvent) {
        self.lock_execution().record_fill(fill);
    }

    pub fn queue(&self) -> Arc<EventQueue> {
        Arc::clone(&self.queue)
    }

    fn handle_event(&self, event: Event) {
        match event {
            Event::Tick(tick) => self.handle_tick(tick),
            Event::Signal(signal) => self.handle_signal(&signal),
            Event::Order(order) => self.handle_order(&order),
            Event::Fill(fill) => self.handle_fill(&fill),
            // Placeholders for a portfolio layer outside this core.
            Event::PositionUpdate(_) | Event::PnlUpdate(_) => {}
        }
    }

    fn handle_tick(&self, tick: TickEvent) {
        self.lock_execution().on_tick(tick);
    }

    /// Synthesize a unit-quantity market order from a signal and requeue it.
    fn handle_signal(&self, signal: &SignalEvent) {
        self.sink.log(
            LogLevel::Info,
            &format!("signal received: {}", signal.symbol),
        );

        let order = OrderEvent {
            order_id: OrderId(self.events_processed.load(Ordering::SeqCst)),
            timestamp: signal.timestamp,
            symbol: signal.symbol.clone(),
            side: signal.side,
            quantity: 1.0,
            limit_price: 0.0,
            status: OrderStatus::Pending,
            strategy_id: signal.strategy_id.clone(),
        };
        self.queue.push(Event::Order(order));
    }

    fn handle_order(&self, order: &OrderEvent) {
        self.lock_execution().on_order(order);
    }

    fn handle_fill(&self, fill: &FillEvent) {
        self.sink.log(
            LogLevel::Signal,
            &format!(
                "[FILL] {} {} @ {:.4}",
                fill.symbol, fill.side, fill.fill_price
            ),
        );
    }

    fn lock_execution(&self) -> std::sync::MutexGuard<'_, ExecutionEngine> {
        self.execution.lock().unwrap_or_else(|e| e.into_inner())
    }
}
