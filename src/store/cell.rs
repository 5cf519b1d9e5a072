//! Push-based reactive cell.
//!
//! A [`Store`] holds an optional value and an ordered list of subscribers.
//! Writing a value notifies every subscriber synchronously, in the order
//! they subscribed. Derived stores are built with [`Store::map`] and stay
//! in sync with their source for as long as the source lives.
//!
//! ```text
//! Store<String> ──map──→ Store<u64> ──map──→ Store<&str>
//! ```
//!
//! Stores are single-threaded: clones share the same cell through `Rc`.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// When a store notifies its subscribers on `set`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum NotifyPolicy {
    /// Every write notifies, even if the value is unchanged.
    #[default]
    Always,
    /// Writes equal to the current value are dropped silently.
    OnChange,
}

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: Option<T>,
    policy: NotifyPolicy,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

pub struct Store<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + PartialEq + 'static> Store<T> {
    /// Store with no value yet. Subscribers are not called until the first `set`.
    pub fn pending() -> Self {
        Self::with_policy(None, NotifyPolicy::Always)
    }

    pub fn new(value: T) -> Self {
        Self::with_policy(Some(value), NotifyPolicy::Always)
    }

    pub fn with_policy(value: Option<T>, policy: NotifyPolicy) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                policy,
                subscribers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    pub fn policy(&self) -> NotifyPolicy {
        self.inner.borrow().policy
    }

    /// Current value, if any.
    pub fn get(&self) -> Option<T> {
        self.inner.borrow().value.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.inner.borrow().value.is_none()
    }

    /// Replace the value without notifying anyone.
    pub fn seed(&self, value: T) {
        self.inner.borrow_mut().value = Some(value);
    }

    /// Write a value and notify subscribers in registration order.
    ///
    /// Returns `false` when the write was dropped by [`NotifyPolicy::OnChange`].
    pub fn set(&self, value: T) -> bool {
        let subscribers: Vec<Subscriber<T>> = {
            let mut inner = self.inner.borrow_mut();
            if inner.policy == NotifyPolicy::OnChange && inner.value.as_ref() == Some(&value) {
                return false;
            }
            inner.value = Some(value.clone());
            inner
                .subscribers
                .iter()
                .map(|(_, subscriber)| Rc::clone(subscriber))
                .collect()
        };

        // The borrow is released here so subscribers may read or write stores.
        for subscriber in subscribers {
            subscriber(&value);
        }
        true
    }

    pub fn subscribe(&self, subscriber: impl Fn(&T) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, Rc::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns `false` if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(existing, _)| *existing != id);
        inner.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Derive a new store from this one.
    ///
    /// If this store already holds a value, `f` runs immediately to fill the
    /// derived store. After that `f` runs once per notification. A pending
    /// source gives a pending derived store.
    pub fn map<U, F>(&self, f: F) -> Store<U>
    where
        U: Clone + PartialEq + 'static,
        F: FnMut(&T) -> U + 'static,
    {
        let derived = Store::pending();
        let f = Rc::new(RefCell::new(f));

        if let Some(current) = self.get() {
            let mut f = f.borrow_mut();
            derived.set((*f)(&current));
        }

        let target = derived.clone();
        self.subscribe(move |value| {
            let next = {
                let mut f = f.borrow_mut();
                (*f)(value)
            };
            target.set(next);
        });

        derived
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("value", &inner.value)
            .field("policy", &inner.policy)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn set_returns_false_only_for_dropped_writes() {
        let always = Store::new(1);
        assert!(always.set(1));

        let on_change = Store::with_policy(Some(1), NotifyPolicy::OnChange);
        assert!(!on_change.set(1));
        assert!(on_change.set(2));
        assert_eq!(on_change.get(), Some(2));
    }

    #[test]
    fn subscriber_can_read_the_notifying_store() {
        let store = Store::new("a".to_string());
        let seen = Rc::new(RefCell::new(None));
        {
            let store_handle = store.clone();
            let seen = Rc::clone(&seen);
            store.subscribe(move |_| {
                *seen.borrow_mut() = store_handle.get();
            });
        }
        store.set("b".to_string());
        assert_eq!(seen.borrow().as_deref(), Some("b"));
    }

    #[test]
    fn seed_does_not_notify() {
        let store: Store<u8> = Store::pending();
        let calls = Rc::new(Cell::new(0));
        {
            let calls = Rc::clone(&calls);
            store.subscribe(move |_| calls.set(calls.get() + 1));
        }
        store.seed(7);
        assert_eq!(store.get(), Some(7));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn debug_shows_value_and_subscriber_count() {
        let store = Store::new(3);
        store.subscribe(|_| {});
        let rendered = format!("{store:?}");
        assert!(rendered.contains("Some(3)"));
        assert!(rendered.contains("subscribers: 1"));
    }
}
