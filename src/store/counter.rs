use crate::store::cell::Store;
use crate::store::name::NameStore;

/// Counts how many times the name has been written.
///
/// The count is unset until the name store publishes for the first time,
/// then starts at 1 and goes up by exactly one per notification.
#[derive(Clone, Debug)]
pub struct NameChangeCounter {
    counter: Store<u64>,
}

impl NameChangeCounter {
    pub fn new(names: &NameStore) -> Self {
        let mut count: u64 = 0;
        let counter = names.store().map(move |_| {
            count += 1;
            count
        });
        Self { counter }
    }

    pub fn count(&self) -> Option<u64> {
        self.counter.get()
    }

    pub fn store(&self) -> &Store<u64> {
        &self.counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NotifyPolicy;

    #[test]
    fn counts_from_one_on_first_write() {
        let names = NameStore::new(NotifyPolicy::Always);
        let counter = NameChangeCounter::new(&names);
        assert_eq!(counter.count(), None);

        names.set("Ada");
        assert_eq!(counter.count(), Some(1));
        names.set("Grace");
        assert_eq!(counter.count(), Some(2));
    }

    #[test]
    fn existing_name_counts_immediately() {
        let names = NameStore::new(NotifyPolicy::Always);
        names.seed("World");
        let counter = NameChangeCounter::new(&names);
        assert_eq!(counter.count(), Some(1));
    }
}
