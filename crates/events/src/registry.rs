//! Same-context listener registry (synchronous delivery).
//!
//! Notification here is synchronous: [`ListenerRegistry::emit`] returns only
//! after every registered listener has run. A logout followed immediately by
//! a navigation can therefore never read a stale session; by the time the
//! logout handler reaches its next statement, every mounted surface in this
//! context has already been told.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Entry<E> {
    id: u64,
    listener: Listener<E>,
}

struct Inner<E> {
    entries: Mutex<Vec<Entry<E>>>,
    next_id: AtomicU64,
}

/// Registry of change listeners for one browsing context.
///
/// Cloning the registry shares the listener set; a store handle and all of
/// its clones notify the same listeners.
pub struct ListenerRegistry<E> {
    inner: Arc<Inner<E>>,
}

impl<E> ListenerRegistry<E> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                entries: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Register `listener`; it stays registered until the returned guard is
    /// dropped.
    #[must_use = "dropping the guard unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&E) + Send + Sync + 'static) -> SubscriptionGuard<E> {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);

        let mut entries = self
            .inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        entries.push(Entry {
            id,
            listener: Arc::new(listener),
        });

        SubscriptionGuard {
            inner: Arc::downgrade(&self.inner),
            id,
        }
    }

    /// Notify every listener, in subscription order, before returning.
    ///
    /// The listener list is snapshotted outside the lock, so a listener may
    /// subscribe, unsubscribe, or emit again without deadlocking. Listeners
    /// added during an emit only see later emissions.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Listener<E>> = {
            let entries = self
                .inner
                .entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            entries.iter().map(|e| Arc::clone(&e.listener)).collect()
        };

        for listener in snapshot {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl<E> Clone for ListenerRegistry<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> Default for ListenerRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> core::fmt::Debug for ListenerRegistry<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// An active subscription; dropping it removes the listener.
///
/// Components hold the guard for exactly as long as they are mounted, which
/// makes the unsubscribe-on-teardown obligation structural rather than a
/// convention.
pub struct SubscriptionGuard<E> {
    inner: Weak<Inner<E>>,
    id: u64,
}

impl<E> Drop for SubscriptionGuard<E> {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            let mut entries = inner.entries.lock().unwrap_or_else(PoisonError::into_inner);
            entries.retain(|e| e.id != self.id);
        }
    }
}

impl<E> core::fmt::Debug for SubscriptionGuard<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SubscriptionGuard")
            .field("id", &self.id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn emit_notifies_synchronously_in_subscription_order() {
        let registry = ListenerRegistry::<u32>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_a = Arc::clone(&seen);
        let _a = registry.subscribe(move |n| seen_a.lock().unwrap().push(("a", *n)));
        let seen_b = Arc::clone(&seen);
        let _b = registry.subscribe(move |n| seen_b.lock().unwrap().push(("b", *n)));

        registry.emit(&7);

        // Both listeners have already run by the time emit returns.
        assert_eq!(*seen.lock().unwrap(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn dropping_the_guard_stops_delivery() {
        let registry = ListenerRegistry::<u32>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_for_listener = Arc::clone(&count);
        let guard = registry.subscribe(move |_| {
            count_for_listener.fetch_add(1, Ordering::SeqCst);
        });

        registry.emit(&1);
        drop(guard);
        registry.emit(&2);

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(registry.listener_count(), 0);
    }

    #[test]
    fn listener_may_subscribe_during_emit_without_deadlock() {
        let registry = ListenerRegistry::<u32>::new();
        let late_guard: Arc<Mutex<Option<SubscriptionGuard<u32>>>> = Arc::new(Mutex::new(None));

        let registry_for_listener = registry.clone();
        let late_for_listener = Arc::clone(&late_guard);
        let _outer = registry.subscribe(move |_| {
            let guard = registry_for_listener.subscribe(|_| {});
            *late_for_listener.lock().unwrap() = Some(guard);
        });

        registry.emit(&1);
        assert_eq!(registry.listener_count(), 2);
    }
}
