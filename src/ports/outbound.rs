//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, HealthRecord};
use chrono::{DateTime, Local};

/// Credential check behind the login gate.
#[async_trait::async_trait]
pub trait AuthPort: Send + Sync {
    /// Returns Ok(()) when the pair is accepted, `DomainError::Auth` otherwise.
    async fn verify(&self, email: &str, password: &str) -> Result<(), DomainError>;
}

/// Keeps the most recent assessment so it can be exported later.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Replace the stored record with `record`.
    async fn save_latest(&self, record: &HealthRecord) -> Result<(), DomainError>;

    /// Most recent record, or None if nothing was assessed yet.
    async fn latest(&self) -> Result<Option<HealthRecord>, DomainError>;
}

/// Renders a health record into a document. Synchronous: pure CPU work.
pub trait ReportRenderer: Send + Sync {
    /// File extension of the produced document (without dot).
    fn extension(&self) -> &'static str;

    /// Render `record`; `generated_at` is printed in the footer.
    fn render(
        &self,
        record: &HealthRecord,
        generated_at: DateTime<Local>,
    ) -> Result<Vec<u8>, DomainError>;
}
