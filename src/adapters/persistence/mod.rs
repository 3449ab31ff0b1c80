//! Record store adapters. Implement RecordStore.

pub mod memory;
pub mod record_json;

pub use memory::MemoryRecordStore;
pub use record_json::RecordJson;
