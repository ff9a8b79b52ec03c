// ── Single observable value ──

use std::sync::Arc;

use tokio::sync::watch;

/// One value behind a `watch` channel, replaced as a whole.
pub(crate) struct Slot<T: Send + Sync + 'static> {
    tx: watch::Sender<Arc<T>>,
}

impl<T: Send + Sync + 'static> Slot<T> {
    pub(crate) fn new(value: T) -> Self {
        let (tx, _) = watch::channel(Arc::new(value));
        Self { tx }
    }

    /// Current value (cheap `Arc` clone).
    pub(crate) fn get(&self) -> Arc<T> {
        self.tx.borrow().clone()
    }

    /// Replace the value wholesale and notify subscribers.
    pub(crate) fn replace(&self, value: T) {
        // `send_replace` updates unconditionally, even with zero receivers.
        self.tx.send_replace(Arc::new(value));
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<T>> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Send + Sync + 'static> Slot<T> {
    /// Mutate in place under the channel lock.
    pub(crate) fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(|value| f(Arc::make_mut(value)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_is_visible_to_subscribers() {
        let slot = Slot::new(vec![1, 2]);
        let mut rx = slot.subscribe();
        slot.replace(vec![3]);
        assert!(rx.has_changed().unwrap_or(false));
        assert_eq!(*rx.borrow_and_update().clone(), vec![3]);
    }

    #[test]
    fn update_does_not_touch_old_snapshots() {
        let slot = Slot::new(vec![1, 2, 3]);
        let before = slot.get();
        slot.update(|v| v.retain(|n| *n != 2));
        assert_eq!(*before, vec![1, 2, 3]);
        assert_eq!(*slot.get(), vec![1, 3]);
    }
}
