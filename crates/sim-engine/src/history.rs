//! Bounded FIFO of recent prices feeding live signal computation.

use rust_decimal::Decimal;
use std::collections::VecDeque;

/// Fixed-capacity rolling window of price observations.
///
/// Appending beyond capacity evicts the oldest sample. The window is owned
/// exclusively by one [`crate::Session`]; strategies only ever see read-only
/// snapshots of it.
#[derive(Debug, Clone)]
pub struct RollingHistory {
    prices: VecDeque<Decimal>,
    capacity: usize,
}

impl RollingHistory {
    /// Create an empty window. `capacity` must be non-zero; the session
    /// config validates this before construction.
    pub fn new(capacity: usize) -> Self {
        Self {
            prices: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a price at the tail, evicting the oldest sample when full.
    pub fn append(&mut self, price: Decimal) {
        if self.prices.len() == self.capacity {
            self.prices.pop_front();
        }
        self.prices.push_back(price);
    }

    /// The current contents in arrival order, for read-only evaluation.
    pub fn snapshot(&self) -> Vec<Decimal> {
        self.prices.iter().copied().collect()
    }

    pub fn last(&self) -> Option<Decimal> {
        self.prices.back().copied()
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn append_preserves_arrival_order() {
        let mut history = RollingHistory::new(5);
        for n in 1..=3 {
            history.append(dec(n));
        }
        assert_eq!(history.snapshot(), vec![dec(1), dec(2), dec(3)]);
        assert_eq!(history.last(), Some(dec(3)));
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn append_evicts_oldest_at_capacity() {
        let mut history = RollingHistory::new(3);
        for n in 1..=5 {
            history.append(dec(n));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.snapshot(), vec![dec(3), dec(4), dec(5)]);
    }

    #[test]
    fn empty_window_reports_empty() {
        let history = RollingHistory::new(10);
        assert!(history.is_empty());
        assert_eq!(history.last(), None);
        assert_eq!(history.snapshot(), Vec::<Decimal>::new());
        assert_eq!(history.capacity(), 10);
    }
}
