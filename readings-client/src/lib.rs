pub mod db;
pub mod domain;

pub use db::{ReadingStore, StoreChange, StoreError};
pub use domain::{Reading, ReadingType};
