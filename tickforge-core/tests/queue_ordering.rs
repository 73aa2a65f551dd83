//! Cross-thread ordering guarantees of the event queue.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;
use std::thread;
use tickforge_core::domain::{Event, PnlUpdateEvent, Timestamp};
use tickforge_core::EventQueue;

fn marker(ts: i64) -> Event {
    Event::PnlUpdate(PnlUpdateEvent {
        timestamp: Timestamp::from_nanos(ts),
        total_pnl: 0.0,
        realized_pnl: 0.0,
        unrealized_pnl: 0.0,
        commission_paid: 0.0,
        total_trades: 0,
        winning_trades: 0,
    })
}

#[test]
fn concurrent_pushes_pop_nondecreasing() {
    let queue = Arc::new(EventQueue::new());
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    // 8 producers, each pushing a shuffled shard of timestamps.
    let mut timestamps: Vec<i64> = (0..4_000).collect();
    timestamps.shuffle(&mut rng);

    let producers: Vec<_> = timestamps
        .chunks(500)
        .map(|chunk| {
            let queue = queue.clone();
            let chunk = chunk.to_vec();
            thread::spawn(move || {
                for ts in chunk {
                    queue.push(marker(ts));
                }
            })
        })
        .collect();
    for p in producers {
        p.join().unwrap();
    }

    assert_eq!(queue.len(), 4_000);

    let mut previous = i64::MIN;
    for _ in 0..4_000 {
        let ts = queue.try_pop().unwrap().timestamp().as_nanos();
        assert!(ts >= previous, "pop order regressed: {ts} after {previous}");
        previous = ts;
    }
    assert!(queue.is_empty());
}

#[test]
fn duplicate_timestamps_all_delivered() {
    let queue = EventQueue::new();
    for _ in 0..100 {
        queue.push(marker(42));
    }
    let mut seen = 0;
    while let Some(event) = queue.try_pop() {
        assert_eq!(event.timestamp().as_nanos(), 42);
        seen += 1;
    }
    assert_eq!(seen, 100);
}

#[test]
fn blocking_pop_hands_events_to_concurrent_consumers() {
    let queue = Arc::new(EventQueue::new());

    let consumers: Vec<_> = (0..4)
        .map(|_| {
            let queue = queue.clone();
            thread::spawn(move || {
                let mut received = Vec::new();
                while let Some(event) = queue.pop() {
                    received.push(event.timestamp().as_nanos());
                }
                received
            })
        })
        .collect();

    for ts in 0..200 {
        queue.push(marker(ts));
    }

    // Consumers drain everything, then unblock on stop.
    while !queue.is_empty() {
        thread::yield_now();
    }
    queue.stop();

    let total: usize = consumers
        .into_iter()
        .map(|c| c.join().unwrap().len())
        .sum();
    assert_eq!(total, 200);
}
