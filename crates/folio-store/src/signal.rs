//! Observable values
//!
//! A [`Signal`] owns a value and notifies subscribers when it changes. Only
//! the owner can write; everyone else gets a [`ReadSignal`].
//!
//! Backed by `tokio::sync::watch`, so writes never block and readers always
//! observe the latest value.

use std::fmt::{self, Debug, Formatter};
use tokio::sync::watch;

/// Writable observable value
pub struct Signal<T> {
    tx: watch::Sender<T>,
}

impl<T> Signal<T> {
    /// Create with an initial value
    #[inline]
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Replace the value and notify subscribers
    #[inline]
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Modify in place; subscribers are notified only if `f` returns true
    #[inline]
    pub fn update(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }

    /// Inspect the value without cloning
    #[inline]
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Read-only view
    #[inline]
    #[must_use]
    pub fn read_only(&self) -> ReadSignal<T> {
        ReadSignal {
            rx: self.tx.subscribe(),
        }
    }
}

impl<T: Clone> Signal<T> {
    /// Current value
    #[inline]
    #[must_use]
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: PartialEq> Signal<T> {
    /// Replace the value only if it differs; returns whether it changed
    #[inline]
    pub fn set_if_changed(&self, value: T) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == value {
                false
            } else {
                *current = value;
                true
            }
        })
    }
}

impl<T: Debug> Debug for Signal<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signal").field(&*self.tx.borrow()).finish()
    }
}

/// Read-only observable value
#[derive(Clone)]
pub struct ReadSignal<T> {
    rx: watch::Receiver<T>,
}

impl<T> ReadSignal<T> {
    /// Wait for the next change
    ///
    /// Returns `false` once the owning [`Signal`] has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Whether a change happened since the value was last seen
    #[inline]
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }
}

impl<T: Clone> ReadSignal<T> {
    /// Current value
    #[inline]
    #[must_use]
    pub fn get(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Current value, marking it as seen
    #[inline]
    #[must_use]
    pub fn get_and_mark_seen(&mut self) -> T {
        self.rx.borrow_and_update().clone()
    }
}

impl<T: Debug> Debug for ReadSignal<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadSignal").field(&*self.rx.borrow()).finish()
    }
}
