// Rust guideline compliant 2026-10-18

//! Shared state store for the playground record.
//!
//! The store owns a single [`Record`] and hands out access only through its
//! accessors. Writes are synchronous: the new value is committed, the watch
//! channel is refreshed, and then every matching observer is called in
//! registration order before [`Store::update`] returns. Observers run outside
//! the record lock, so they may read from or write to the store themselves.
//!
//! A write that leaves the slot value unchanged commits nothing and notifies
//! nobody.

use crate::models::{Encoding, Record, Slot, SlotChange};
use crate::utils::pretty_json;
use crate::{Config, Result};
use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};
use tokio::sync::watch;

type Callback = Arc<dyn Fn(&SlotChange) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to remove the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Which slot changes an observer receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotFilter {
    /// Changes to any slot.
    Any,
    /// Changes to a single slot.
    Only(Slot),
}

impl SlotFilter {
    fn matches(&self, slot: Slot) -> bool {
        match self {
            SlotFilter::Any => true,
            SlotFilter::Only(wanted) => *wanted == slot,
        }
    }
}

impl From<Slot> for SlotFilter {
    fn from(slot: Slot) -> Self {
        SlotFilter::Only(slot)
    }
}

struct Observer {
    id: SubscriptionId,
    filter: SlotFilter,
    callback: Callback,
}

struct Inner {
    record: RwLock<Record>,
    seed: Record,
    observers: Mutex<Vec<Observer>>,
    next_id: AtomicU64,
    watch_tx: watch::Sender<Record>,
}

/// Process-wide holder of the playground [`Record`].
///
/// Cloning a `Store` yields another handle on the same record.
#[derive(Clone)]
pub struct Store {
    inner: Arc<Inner>,
}

static GLOBAL: OnceLock<Store> = OnceLock::new();

impl Store {
    /// Creates a store with all three slots empty.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(Record::default())
    }

    /// Creates a store whose slots start at the configured seed values.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_seed(config.seed.clone())
    }

    /// Creates a store starting from `seed`; [`Store::reset`] returns to it.
    #[must_use]
    pub fn with_seed(seed: Record) -> Self {
        let (watch_tx, _) = watch::channel(seed.clone());
        Self {
            inner: Arc::new(Inner {
                record: RwLock::new(seed.clone()),
                seed,
                observers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
                watch_tx,
            }),
        }
    }

    /// Returns the process-wide store, creating it empty on first use.
    pub fn global() -> &'static Store {
        GLOBAL.get_or_init(Store::new)
    }

    /// Returns a live view of the whole record.
    ///
    /// Reads through the returned handle always see the latest writes.
    #[must_use]
    pub fn get_code(&self) -> LiveRecord {
        LiveRecord {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Returns an owned copy of the record as it is now.
    #[must_use]
    pub fn snapshot(&self) -> Record {
        self.read().clone()
    }

    /// Returns the current value of the slot named `key`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidKey`] if `key` is not `mapping`, `input`
    /// or `output`.
    pub fn get(&self, key: &str) -> Result<String> {
        let slot: Slot = key.parse()?;
        Ok(self.slot(slot))
    }

    /// Returns the current value of `slot`.
    #[must_use]
    pub fn slot(&self, slot: Slot) -> String {
        self.read().get(slot).to_string()
    }

    /// Writes `value` to the slot named `key`.
    ///
    /// With [`Encoding::Json`] the value is stored as [`pretty_json`] renders
    /// it; with [`Encoding::Raw`] its text form is stored unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidKey`] if `key` is not `mapping`, `input`
    /// or `output`. Nothing is written in that case.
    pub fn update<T>(&self, key: &str, value: &T, encoding: Encoding) -> Result<()>
    where
        T: Serialize + ToString + ?Sized,
    {
        let slot: Slot = key.parse()?;
        self.write(slot, value, encoding);
        Ok(())
    }

    /// Writes `value` to `slot`; see [`Store::update`].
    pub fn write<T>(&self, slot: Slot, value: &T, encoding: Encoding)
    where
        T: Serialize + ToString + ?Sized,
    {
        let text = match encoding {
            Encoding::Json => pretty_json(value),
            Encoding::Raw => value.to_string(),
        };
        self.commit(slot, text);
    }

    /// Restores every slot to its seed value, notifying observers of each
    /// slot that changes.
    pub fn reset(&self) {
        for slot in Slot::ALL {
            self.commit(slot, self.inner.seed.get(slot).to_string());
        }
    }

    /// Registers `callback` for changes matching `filter`.
    ///
    /// # Arguments
    ///
    /// * `filter` - A [`Slot`] or [`SlotFilter::Any`]
    /// * `callback` - Called synchronously after each matching change
    ///
    /// # Returns
    ///
    /// An id that can be passed to [`Store::unsubscribe`].
    pub fn subscribe<F>(&self, filter: impl Into<SlotFilter>, callback: F) -> SubscriptionId
    where
        F: Fn(&SlotChange) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let filter = filter.into();
        self.observers().push(Observer {
            id,
            filter,
            callback: Arc::new(callback),
        });
        tracing::debug!(subscription = id.0, ?filter, "observer registered");
        id
    }

    /// Removes the observer registered under `id`.
    ///
    /// # Returns
    ///
    /// `true` if an observer was removed, `false` if `id` was unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.observers();
        let before = observers.len();
        observers.retain(|observer| observer.id != id);
        let removed = observers.len() != before;
        if removed {
            tracing::debug!(subscription = id.0, "observer removed");
        }
        removed
    }

    /// Returns a watcher that is marked changed after every committed write.
    ///
    /// The watcher only hands out owned copies of the record; no borrow of the
    /// channel outlives a single call, so holding a watcher across a write
    /// never blocks the writer.
    #[must_use]
    pub fn watch(&self) -> RecordWatch {
        RecordWatch {
            rx: self.inner.watch_tx.subscribe(),
        }
    }

    fn commit(&self, slot: Slot, text: String) {
        let change = {
            let mut record = self
                .inner
                .record
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if record.get(slot) == text {
                tracing::trace!(%slot, "write left slot unchanged");
                return;
            }
            let previous = record.set(slot, text.clone());
            SlotChange {
                slot,
                previous,
                current: text,
            }
        };
        tracing::debug!(%slot, len = change.current.len(), "slot updated");
        // Re-read outside the record lock so the last publish is the newest record.
        self.inner.watch_tx.send_replace(self.snapshot());
        self.notify(&change);
    }

    fn notify(&self, change: &SlotChange) {
        let callbacks: Vec<Callback> = self
            .observers()
            .iter()
            .filter(|observer| observer.filter.matches(change.slot))
            .map(|observer| Arc::clone(&observer.callback))
            .collect();
        for callback in callbacks {
            callback(change);
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Record> {
        self.inner
            .record
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn observers(&self) -> std::sync::MutexGuard<'_, Vec<Observer>> {
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("record", &*self.read())
            .field("observers", &self.observers().len())
            .finish()
    }
}

/// Live view of a store's record, returned by [`Store::get_code`].
#[derive(Clone)]
pub struct LiveRecord {
    inner: Arc<Inner>,
}

impl LiveRecord {
    /// Returns the current value of `slot`.
    #[must_use]
    pub fn get(&self, slot: Slot) -> String {
        self.read().get(slot).to_string()
    }

    /// Returns the current mapping text.
    #[must_use]
    pub fn mapping(&self) -> String {
        self.get(Slot::Mapping)
    }

    /// Returns the current input text.
    #[must_use]
    pub fn input(&self) -> String {
        self.get(Slot::Input)
    }

    /// Returns the current output text.
    #[must_use]
    pub fn output(&self) -> String {
        self.get(Slot::Output)
    }

    /// Returns an owned copy of the record as it is now.
    #[must_use]
    pub fn snapshot(&self) -> Record {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Record> {
        self.inner
            .record
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for LiveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LiveRecord").field(&*self.read()).finish()
    }
}

/// Async view of store changes, returned by [`Store::watch`].
#[derive(Debug, Clone)]
pub struct RecordWatch {
    rx: watch::Receiver<Record>,
}

impl RecordWatch {
    /// Waits until a write commits after the last seen record.
    ///
    /// # Returns
    ///
    /// `false` once every handle on the store has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// Reports whether a write committed since the last seen record.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Returns a copy of the latest published record.
    #[must_use]
    pub fn current(&self) -> Record {
        self.rx.borrow().clone()
    }

    /// Returns a copy of the latest published record and marks it seen.
    pub fn take_current(&mut self) -> Record {
        self.rx.borrow_and_update().clone()
    }
}
