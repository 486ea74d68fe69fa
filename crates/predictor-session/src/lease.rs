use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts scoped tensor acquisitions for one session.
///
/// Every tensor that participates in a predict call is wrapped in a
/// [`TensorLease`]; a live count of zero after the call proves no tensor
/// outlived it, on success and failure paths alike.
#[derive(Debug, Default, Clone)]
pub struct LeaseTracker {
    acquired: Arc<AtomicUsize>,
    live: Arc<AtomicUsize>,
}

impl LeaseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a value in a lease, counting it until the lease drops.
    pub fn acquire<T>(&self, value: T) -> TensorLease<T> {
        self.acquired.fetch_add(1, Ordering::SeqCst);
        self.live.fetch_add(1, Ordering::SeqCst);
        TensorLease {
            value,
            live: Arc::clone(&self.live),
        }
    }

    /// Total acquisitions since the tracker was created.
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    /// Leases currently alive.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

/// Scoped ownership of a tensor; decrements the live count when dropped.
pub struct TensorLease<T> {
    value: T,
    live: Arc<AtomicUsize>,
}

impl<T> TensorLease<T> {
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T> std::ops::Deref for TensorLease<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> Drop for TensorLease<T> {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::LeaseTracker;

    #[test]
    fn counts_balance_after_drop() {
        let tracker = LeaseTracker::new();
        {
            let a = tracker.acquire(vec![1.0f32]);
            let b = tracker.acquire(vec![2.0f32]);
            assert_eq!(tracker.live(), 2);
            assert_eq!(a.get().len() + b.len(), 2);
        }
        assert_eq!(tracker.acquired(), 2);
        assert_eq!(tracker.live(), 0);
    }

    #[test]
    fn early_return_still_releases() {
        let tracker = LeaseTracker::new();
        let failing = |tracker: &LeaseTracker| -> Result<(), ()> {
            let _lease = tracker.acquire(0u32);
            Err(())
        };
        assert!(failing(&tracker).is_err());
        assert_eq!(tracker.live(), 0);
    }
}
