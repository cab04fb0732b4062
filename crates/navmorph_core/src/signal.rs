//! Observable values.
//!
//! A [`Signal`] is the single writer of a piece of interaction state.
//! Dependents hold a [`Subscription`] and drain published [`Change`]s when
//! they sync; nothing polls the value itself. Dropping a subscription
//! detaches it.

use std::sync::{Arc, Weak};

use crossbeam_channel::{unbounded, Receiver, Sender};

/// One published change.
#[derive(Debug, Clone, PartialEq)]
pub struct Change<T> {
    /// Value before the change.
    pub previous: T,
    /// Value after the change.
    pub current: T,
    /// Signal version after the change.
    pub version: u64,
}

#[derive(Debug)]
struct Subscriber<T> {
    sender: Sender<Change<T>>,
    alive: Weak<()>,
}

/// A value that publishes every change to its subscribers.
#[derive(Debug)]
pub struct Signal<T> {
    value: T,
    version: u64,
    subscribers: Vec<Subscriber<T>>,
}

impl<T: Clone + PartialEq> Signal<T> {
    /// Creates a signal holding `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            version: 0,
            subscribers: Vec::new(),
        }
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of changes published so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replaces the value and publishes the change.
    ///
    /// Setting an equal value publishes nothing and returns false.
    pub fn set(&mut self, value: T) -> bool {
        if value == self.value {
            return false;
        }

        let previous = std::mem::replace(&mut self.value, value);
        self.version += 1;
        let change = Change {
            previous,
            current: self.value.clone(),
            version: self.version,
        };

        self.subscribers.retain(|subscriber| {
            subscriber.alive.strong_count() > 0 && subscriber.sender.send(change.clone()).is_ok()
        });
        true
    }

    /// Opens a new subscription. Only changes after this call are delivered.
    pub fn subscribe(&mut self) -> Subscription<T> {
        let (sender, receiver) = unbounded();
        let token = Arc::new(());
        self.subscribers.push(Subscriber {
            sender,
            alive: Arc::downgrade(&token),
        });
        Subscription {
            receiver,
            _token: token,
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|subscriber| subscriber.alive.strong_count() > 0)
            .count()
    }
}

/// Receiving end of a [`Signal`].
#[derive(Debug)]
pub struct Subscription<T> {
    receiver: Receiver<Change<T>>,
    _token: Arc<()>,
}

impl<T> Subscription<T> {
    /// Takes the oldest pending change, if any.
    #[must_use]
    pub fn try_next(&self) -> Option<Change<T>> {
        self.receiver.try_recv().ok()
    }

    /// Takes every pending change, oldest first.
    #[must_use]
    pub fn drain(&self) -> Vec<Change<T>> {
        self.receiver.try_iter().collect()
    }

    /// Number of pending changes.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_publishes_changes() {
        let mut signal = Signal::new(false);
        let subscription = signal.subscribe();

        assert!(signal.set(true));
        assert!(!signal.set(true), "equal value publishes nothing");
        assert!(signal.set(false));

        let changes = subscription.drain();
        assert_eq!(changes.len(), 2);
        assert!(!changes[0].previous);
        assert!(changes[0].current);
        assert_eq!(changes[1].version, 2);
    }

    #[test]
    fn test_dropped_subscription_detaches() {
        let mut signal: Signal<Option<usize>> = Signal::new(None);
        let first = signal.subscribe();
        let second = signal.subscribe();
        assert_eq!(signal.listener_count(), 2);

        drop(second);
        assert_eq!(signal.listener_count(), 1);

        signal.set(Some(3));
        assert_eq!(first.pending(), 1);
        assert_eq!(signal.listener_count(), 1);
    }
}
