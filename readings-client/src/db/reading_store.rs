use crate::db::{
    seed::seed_readings,
    slot::{SlotStorage, StorageError},
};
use crate::domain::Reading;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("reading id {0} already exists")]
    DuplicateId(u64),
    #[error("failed to encode readings: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Change notification sent to subscribers after a successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Seeded { count: usize },
    Added { id: u64 },
    Deleted { id: u64 },
}

type Observer = Box<dyn Fn(&StoreChange)>;

/// Durable collection of readings behind one slot.
///
/// Every mutation reads the current slot, computes the next collection and
/// writes it back in a single `&mut self` call; nothing is cached between
/// calls, so a write made through another handle on the same slot is seen
/// by the next read.
pub struct ReadingStore<S> {
    slot: S,
    observers: Vec<Observer>,
}

impl<S: SlotStorage> ReadingStore<S> {
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            observers: Vec::new(),
        }
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn into_slot(self) -> S {
        self.slot
    }

    /// Register a callback run after each successful write.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&StoreChange) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Seed the slot when it is absent, empty or unparseable.
    ///
    /// Returns `true` if the seed set was written.
    pub fn initialize(&mut self) -> Result<bool, StoreError> {
        if matches!(self.load(), Some(existing) if !existing.is_empty()) {
            return Ok(false);
        }

        let seed = seed_readings();
        self.persist(&seed)?;
        tracing::info!(slot = self.slot.name(), count = seed.len(), "seeded readings slot");
        self.notify(StoreChange::Seeded { count: seed.len() });

        Ok(true)
    }

    /// Full collection in stored order. Absent or malformed content yields
    /// an empty collection.
    pub fn get_all(&self) -> Vec<Reading> {
        self.load().unwrap_or_default()
    }

    pub fn add(&mut self, reading: Reading) -> Result<(), StoreError> {
        let mut readings = self.get_all();
        if readings.iter().any(|r| r.id == reading.id) {
            tracing::error!(id = reading.id, "refusing to add reading with duplicate id");
            return Err(StoreError::DuplicateId(reading.id));
        }

        let id = reading.id;
        readings.push(reading);
        self.persist(&readings)?;

        metrics::counter!("readings_added_total").increment(1);
        tracing::debug!(id, total = readings.len(), "reading added");
        self.notify(StoreChange::Added { id });

        Ok(())
    }

    /// Remove the reading with `id`. Unknown ids leave the collection as is.
    ///
    /// Returns `true` if a reading was removed.
    pub fn delete_by_id(&mut self, id: u64) -> Result<bool, StoreError> {
        let mut readings = self.get_all();
        let before = readings.len();
        readings.retain(|r| r.id != id);
        let removed = readings.len() != before;

        self.persist(&readings)?;

        if removed {
            metrics::counter!("readings_deleted_total").increment(1);
            tracing::debug!(id, total = readings.len(), "reading deleted");
            self.notify(StoreChange::Deleted { id });
        }

        Ok(removed)
    }

    fn load(&self) -> Option<Vec<Reading>> {
        let raw = match self.slot.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "readings slot unreadable, treating as empty");
                return None;
            }
        };

        match serde_json::from_str::<Vec<Reading>>(&raw) {
            Ok(readings) => Some(readings),
            Err(e) => {
                metrics::counter!("readings_slot_decode_errors_total").increment(1);
                tracing::warn!(
                    slot = self.slot.name(),
                    error = %e,
                    "readings slot holds malformed content, treating as empty"
                );
                None
            }
        }
    }

    fn persist(&mut self, readings: &[Reading]) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(readings)?;
        self.slot.write(&encoded)?;
        Ok(())
    }

    fn notify(&self, change: StoreChange) {
        for observer in &self.observers {
            observer(&change);
        }
    }
}
