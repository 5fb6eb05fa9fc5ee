use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Payload-free "item data may have changed" notification.
///
/// Cloneable and shareable across threads. Raising it only marks the state
/// dirty; any number of notifications before the next drain collapse into a
/// single rebuild.
#[derive(Debug, Clone, Default)]
pub struct ChangeSignal {
    dirty: Arc<AtomicBool>,
    wake: Arc<Notify>,
}

impl ChangeSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the item data as changed and wake any waiter
    pub fn notify(&self) {
        self.dirty.store(true, Ordering::Release);
        self.wake.notify_one();
    }

    pub fn is_pending(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Wait until a notification has been raised
    pub async fn changed(&self) {
        if self.is_pending() {
            return;
        }
        self.wake.notified().await;
    }

    /// Clear the flag, returning whether it was set
    pub(crate) fn take(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    /// Set the flag without waking anyone
    pub(crate) fn mark(&self) {
        self.dirty.store(true, Ordering::Release);
    }
}
