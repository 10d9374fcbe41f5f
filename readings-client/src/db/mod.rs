pub mod reading_store;
pub mod seed;
pub mod slot;

pub use reading_store::{ReadingStore, StoreChange, StoreError};
pub use seed::seed_readings;
pub use slot::{FileSlot, MemorySlot, SlotStorage, StorageError};
