use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Single-slot "operation pending" flag
#[derive(Debug, Default)]
pub struct InFlight {
    active: Arc<AtomicBool>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot, `None` if another operation holds it
    ///
    /// The guard is owned, so it can travel into a spawned task and keep
    /// the slot claimed until that task finishes.
    pub fn try_begin(&self) -> Option<InFlightGuard> {
        self.active
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                flag: Arc::clone(&self.active),
            })
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }
}

/// Releases the slot on drop, including on early return and panic
#[derive(Debug)]
pub struct InFlightGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_claim_is_rejected() {
        let flag = InFlight::new();
        let guard = flag.try_begin();

        assert!(guard.is_some());
        assert!(flag.is_active());
        assert!(flag.try_begin().is_none());

        drop(guard);
        assert!(!flag.is_active());
        assert!(flag.try_begin().is_some());
    }

    #[tokio::test]
    async fn test_guard_held_by_task_outlives_caller() {
        let flag = InFlight::new();
        let guard = flag.try_begin().unwrap();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let _guard = guard;
            let _ = rx.await;
        });

        assert!(flag.is_active());
        tx.send(()).unwrap();
        task.await.unwrap();
        assert!(!flag.is_active());
    }
}
