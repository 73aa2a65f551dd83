//! Bounded per-symbol price history.

use std::collections::VecDeque;

/// Ordered price history capped at a maximum length; the oldest sample is
/// evicted on overflow. Owned exclusively by the market data manager and
/// mutated only under its write lock — workers read a snapshot copy and
/// compute outside the lock.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    prices: VecDeque<f64>,
    max_len: usize,
}

impl PriceSeries {
    pub fn new(max_len: usize) -> Self {
        Self {
            prices: VecDeque::with_capacity(max_len),
            max_len,
        }
    }

    /// Append a price, evicting the oldest sample once at capacity.
    pub fn push(&mut self, price: f64) {
        if self.prices.len() == self.max_len {
            self.prices.pop_front();
        }
        self.prices.push_back(price);
    }

    pub fn last(&self) -> Option<f64> {
        self.prices.back().copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Copy the history out, oldest first. Taken under the manager's lock so
    /// indicator math can run lock-free on the copy.
    pub fn snapshot(&self) -> Vec<f64> {
        self.prices.iter().copied().collect()
    }
}
