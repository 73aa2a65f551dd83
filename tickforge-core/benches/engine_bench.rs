//! Criterion benchmarks for TickForge hot paths.
//!
//! Benchmarks:
//! 1. Indicator batch computation (SMA, EMA, RSI, Bollinger, MACD)
//! 2. Event queue push/pop throughput
//! 3. Execution fill conversion
//! 4. Full backtest event loop (tick + signal streams)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

use tickforge_core::backtest::slippage::{FixedBpsSlippage, NoSlippage};
use tickforge_core::domain::{
    Event, OrderEvent, OrderId, OrderStatus, Side, SignalEvent, TickEvent, Timestamp,
};
use tickforge_core::indicators::{bollinger_bands, ema, macd, rsi, sma};
use tickforge_core::logging::NullSink;
use tickforge_core::{BacktestEngine, EventQueue, ExecutionConfig, ExecutionEngine};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_prices(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn make_tick(symbol: &str, ts: i64) -> TickEvent {
    let mid = 100.0 + (ts as f64 * 0.01).sin();
    TickEvent {
        timestamp: Timestamp::from_nanos(ts),
        symbol: symbol.to_string(),
        bid: mid - 0.5,
        ask: mid + 0.5,
        bid_volume: 50.0,
        ask_volume: 50.0,
        last: mid,
        last_volume: 1.0,
    }
}

fn make_signal(symbol: &str, ts: i64) -> SignalEvent {
    SignalEvent {
        timestamp: Timestamp::from_nanos(ts),
        symbol: symbol.to_string(),
        side: if ts % 2 == 0 { Side::Buy } else { Side::Sell },
        strength: 0.5,
        strategy_id: "bench".to_string(),
    }
}

fn make_order(symbol: &str, id: u64) -> OrderEvent {
    OrderEvent {
        order_id: OrderId(id),
        timestamp: Timestamp::from_nanos(id as i64),
        symbol: symbol.to_string(),
        side: Side::Buy,
        quantity: 1.0,
        limit_price: 0.0,
        status: OrderStatus::Pending,
        strategy_id: "bench".to_string(),
    }
}

// ── 1. Indicator Batch ───────────────────────────────────────────────

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicator_batch");

    for &n in &[200, 2_000, 20_000] {
        let prices = make_prices(n);

        group.bench_with_input(BenchmarkId::new("sma_20", n), &n, |b, _| {
            b.iter(|| sma(black_box(&prices), 20));
        });
        group.bench_with_input(BenchmarkId::new("ema_20", n), &n, |b, _| {
            b.iter(|| ema(black_box(&prices), 20));
        });
        group.bench_with_input(BenchmarkId::new("rsi_14", n), &n, |b, _| {
            b.iter(|| rsi(black_box(&prices), 14));
        });
        group.bench_with_input(BenchmarkId::new("bollinger_20_2", n), &n, |b, _| {
            b.iter(|| bollinger_bands(black_box(&prices), 20, 2.0));
        });
        group.bench_with_input(BenchmarkId::new("macd_12_26_9", n), &n, |b, _| {
            b.iter(|| macd(black_box(&prices), 12, 26, 9));
        });
    }

    group.finish();
}

// ── 2. Event Queue Throughput ────────────────────────────────────────

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_queue");

    for &n in &[1_000i64, 10_000] {
        group.bench_with_input(BenchmarkId::new("push_pop_ordered", n), &n, |b, &n| {
            b.iter(|| {
                let queue = EventQueue::new();
                for ts in 0..n {
                    queue.push(Event::Tick(make_tick("BENCH", ts)));
                }
                while let Some(event) = queue.try_pop() {
                    black_box(&event);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("push_pop_reversed", n), &n, |b, &n| {
            b.iter(|| {
                let queue = EventQueue::new();
                for ts in (0..n).rev() {
                    queue.push(Event::Tick(make_tick("BENCH", ts)));
                }
                while let Some(event) = queue.try_pop() {
                    black_box(&event);
                }
            });
        });
    }

    group.finish();
}

// ── 3. Execution Fill Conversion ─────────────────────────────────────

fn bench_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution_fill");

    group.bench_function("market_orders_100", |b| {
        b.iter(|| {
            let queue = Arc::new(EventQueue::new());
            let mut engine = ExecutionEngine::new(
                queue,
                Box::new(FixedBpsSlippage::new(5.0)),
                ExecutionConfig::default(),
            );
            engine.on_tick(make_tick("BENCH", 0));
            for i in 0..100u64 {
                engine.on_order(&make_order("BENCH", i));
            }
            black_box(engine.fills().len());
        });
    });

    group.finish();
}

// ── 4. Full Backtest Event Loop ──────────────────────────────────────

fn bench_event_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("backtest_event_loop");

    // A tick stream with a signal every 10 ticks; each signal synthesizes
    // an order, which becomes a fill, so the loop drains 12 events per 10
    // ticks pushed.
    for &ticks in &[1_000i64, 10_000] {
        group.bench_with_input(BenchmarkId::new("tick_signal_mix", ticks), &ticks, |b, &ticks| {
            b.iter(|| {
                let queue = Arc::new(EventQueue::new());
                let execution = ExecutionEngine::new(
                    queue.clone(),
                    Box::new(NoSlippage),
                    ExecutionConfig::default(),
                );
                let engine = BacktestEngine::new(queue, execution, Arc::new(NullSink));

                for ts in 0..ticks {
                    engine.push_event(Event::Tick(make_tick("BENCH", ts)));
                    if ts % 10 == 9 {
                        engine.push_event(Event::Signal(make_signal("BENCH", ts)));
                    }
                }
                engine.run();
                black_box(engine.events_processed());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_indicators,
    bench_queue,
    bench_execution,
    bench_event_loop,
);
criterion_main!(benches);
