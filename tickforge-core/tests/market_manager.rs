//! Live tick path through the market data manager and its worker pool.

use std::sync::Arc;
use std::thread;
use tickforge_core::logging::{LogLevel, MemorySink, NullSink};
use tickforge_core::{ManagerConfig, MarketDataManager};

fn sequential_config() -> ManagerConfig {
    ManagerConfig {
        num_workers: 1,
        ..ManagerConfig::default()
    }
}

#[test]
fn concurrent_producers_single_symbol() {
    let manager = Arc::new(
        MarketDataManager::new(ManagerConfig::default(), Arc::new(NullSink)).unwrap(),
    );

    let producers: Vec<_> = (0..4)
        .map(|p| {
            let manager = manager.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    manager.update_tick("BTCUSD", 100.0 + (p * 50 + i) as f64);
                }
            })
        })
        .collect();
    for p in producers {
        p.join().unwrap();
    }
    manager.wait_idle();

    // All 200 ticks landed, exactly at the history cap.
    assert_eq!(manager.history_len("BTCUSD"), 200);
    assert!(manager.last_price("BTCUSD").is_some());
}

#[test]
fn eviction_keeps_only_the_tail() {
    let manager =
        MarketDataManager::new(sequential_config(), Arc::new(NullSink)).unwrap();
    for i in 0..500 {
        manager.update_tick("ETHUSD", i as f64);
    }
    manager.wait_idle();

    assert_eq!(manager.history_len("ETHUSD"), 200);
    assert_eq!(manager.last_price("ETHUSD"), Some(499.0));
}

#[test]
fn overbought_rally_emits_sell_signal() {
    let sink = Arc::new(MemorySink::new());
    let manager = MarketDataManager::new(sequential_config(), sink.clone()).unwrap();

    // Flat warmup, then a steep rally: RSI pins near 100 and price breaks
    // the upper band.
    for _ in 0..30 {
        manager.update_tick("XRPUSD", 50.0);
    }
    for i in 1..=10 {
        manager.update_tick("XRPUSD", 50.0 + 2.0 * i as f64);
    }
    manager.wait_idle();

    let signals = sink.messages_at(LogLevel::Signal);
    assert!(signals.iter().any(|m| m.contains("XRPUSD") && m.contains("SELL")));
}

#[test]
fn flat_market_stays_quiet() {
    let sink = Arc::new(MemorySink::new());
    let manager = MarketDataManager::new(sequential_config(), sink.clone()).unwrap();
    for _ in 0..100 {
        manager.update_tick("USDCUSD", 1.0);
    }
    manager.wait_idle();
    assert!(sink.messages_at(LogLevel::Signal).is_empty());
}

#[test]
fn stop_drains_already_enqueued_ticks() {
    let manager =
        MarketDataManager::new(sequential_config(), Arc::new(NullSink)).unwrap();
    for i in 0..50 {
        manager.update_tick("DOTUSD", i as f64);
    }
    manager.stop();
    // stop() does not join; fence on the drain before asserting.
    manager.wait_idle();

    assert_eq!(manager.history_len("DOTUSD"), 50);
    assert_eq!(manager.last_price("DOTUSD"), Some(49.0));
}
