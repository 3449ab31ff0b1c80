//! In-memory RecordStore. The latest record lives only as long as the process.

use crate::domain::{DomainError, HealthRecord};
use crate::ports::RecordStore;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryRecordStore {
    latest: RwLock<Option<HealthRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RecordStore for MemoryRecordStore {
    async fn save_latest(&self, record: &HealthRecord) -> Result<(), DomainError> {
        *self.latest.write().await = Some(record.clone());
        Ok(())
    }

    async fn latest(&self) -> Result<Option<HealthRecord>, DomainError> {
        Ok(self.latest.read().await.clone())
    }
}
