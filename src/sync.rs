//! Locking capability used to serialize translator calls.
//!
//! The translator never spawns work of its own. When an instance is shared
//! between threads, a [`Lock`] makes each `translate` and
//! `set_default_language` call observe one consistent default language.
//! Without one ([`NoLock`]) calls stay memory-safe but a translation may
//! interleave with a concurrent language change.

use std::sync::{Arc, Mutex, PoisonError};

/// A held lock. The lock is released when the value is dropped.
pub trait Held {}

impl<T: ?Sized> Held for T {}

/// Mutual exclusion for the duration of one translator call.
pub trait Lock: Send + Sync {
    fn acquire(&self) -> Box<dyn Held + '_>;
}

/// Lock that does nothing (default).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLock;

impl Lock for NoLock {
    fn acquire(&self) -> Box<dyn Held + '_> {
        Box::new(())
    }
}

impl Lock for Mutex<()> {
    fn acquire(&self) -> Box<dyn Held + '_> {
        Box::new(self.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl<L: Lock + ?Sized> Lock for Arc<L> {
    fn acquire(&self) -> Box<dyn Held + '_> {
        (**self).acquire()
    }
}

impl<L: Lock + ?Sized> Lock for Box<L> {
    fn acquire(&self) -> Box<dyn Held + '_> {
        (**self).acquire()
    }
}
