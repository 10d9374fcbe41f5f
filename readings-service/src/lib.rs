pub mod config;
pub mod format;
pub mod ids;
pub mod locale;
pub mod observability;
pub mod query;
pub mod transform;

pub use query::ReadingQuery;
pub use transform::{ReadingCandidate, ReadingEntry, ValidationError};
