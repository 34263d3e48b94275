// Storage layer module
pub mod sqlite_storage;

pub use sqlite_storage::{DocumentStore, StoredRow, StoreWriter};
