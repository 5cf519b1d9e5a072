use crate::store::cell::{NotifyPolicy, Store, SubscriptionId};

/// Holds the user's name. The editor view is its only writer.
#[derive(Clone, Debug)]
pub struct NameStore {
    who: Store<String>,
}

impl NameStore {
    /// Creates an empty store. Nothing is published until the first write.
    pub fn new(policy: NotifyPolicy) -> Self {
        Self {
            who: Store::with_policy(None, policy),
        }
    }

    pub fn who(&self) -> Option<String> {
        self.who.get()
    }

    /// Writes a new name and propagates it to every derived store.
    ///
    /// Any string is accepted, including the empty one.
    pub fn set(&self, name: impl Into<String>) -> bool {
        let name = name.into();
        tracing::debug!(name = %name, "name written");
        let notified = self.who.set(name);
        if !notified {
            tracing::trace!("name unchanged, write dropped");
        }
        notified
    }

    /// Sets the starting name without counting it as a change.
    pub fn seed(&self, name: impl Into<String>) {
        self.who.seed(name.into());
    }

    pub fn subscribe(&self, subscriber: impl Fn(&String) + 'static) -> SubscriptionId {
        self.who.subscribe(subscriber)
    }

    pub fn store(&self) -> &Store<String> {
        &self.who
    }
}
