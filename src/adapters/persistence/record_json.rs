//! Implements RecordStore using a JSON file.
//!
//! Keeps the latest assessment across runs.

use crate::domain::{DomainError, HealthRecord};
use crate::ports::RecordStore;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecordData {
    latest: Option<HealthRecord>,
}

/// JSON file-based record storage.
pub struct RecordJson {
    path: std::path::PathBuf,
    cache: tokio::sync::RwLock<RecordData>,
}

impl RecordJson {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache: tokio::sync::RwLock::new(RecordData::default()),
        }
    }

    /// Load from disk. A missing file is an empty store; a corrupt one is
    /// logged and treated as empty.
    pub async fn load(&self) -> Result<(), DomainError> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(s) => serde_json::from_str(&s).unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "unreadable record file, starting empty");
                RecordData::default()
            }),
            Err(_) => RecordData::default(),
        };
        *self.cache.write().await = data;
        Ok(())
    }

    /// Write to a temp file, fsync, then rename over the target.
    async fn save(&self) -> Result<(), DomainError> {
        let data = self.cache.read().await;
        let json =
            serde_json::to_string_pretty(&*data).map_err(|e| DomainError::Store(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Store(format!("create data dir: {}", e)))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut f = fs::File::create(&temp_path)
            .await
            .map_err(|e| DomainError::Store(format!("create temp file: {}", e)))?;
        f.write_all(json.as_bytes())
            .await
            .map_err(|e| DomainError::Store(format!("write temp file: {}", e)))?;
        f.sync_all()
            .await
            .map_err(|e| DomainError::Store(format!("sync temp file: {}", e)))?;
        drop(f);

        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| DomainError::Store(format!("atomic rename failed: {}", e)))?;

        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordStore for RecordJson {
    async fn save_latest(&self, record: &HealthRecord) -> Result<(), DomainError> {
        {
            let mut cache = self.cache.write().await;
            cache.latest = Some(record.clone());
        }
        self.save().await
    }

    async fn latest(&self) -> Result<Option<HealthRecord>, DomainError> {
        Ok(self.cache.read().await.latest.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskLabel, VitalSigns};
    use chrono::{TimeZone, Utc};

    fn record() -> HealthRecord {
        HealthRecord {
            name: "Priya".into(),
            vitals: VitalSigns {
                age: 31.0,
                systolic_bp: 145.0,
                diastolic_bp: 92.0,
                blood_sugar: 100.0,
                body_temp: 98.2,
                heart_rate: 88.0,
            },
            risk: RiskLabel::Medium,
            assessed_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("latest_record.json");

        let store = RecordJson::new(&path);
        store.load().await.unwrap();
        assert!(store.latest().await.unwrap().is_none());
        store.save_latest(&record()).await.unwrap();
        assert!(!path.with_extension("json.tmp").exists());

        let reopened = RecordJson::new(&path);
        reopened.load().await.unwrap();
        assert_eq!(reopened.latest().await.unwrap(), Some(record()));
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latest_record.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = RecordJson::new(&path);
        store.load().await.unwrap();
        assert!(store.latest().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_uses_lowercase_risk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latest_record.json");
        let store = RecordJson::new(&path);
        store.save_latest(&record()).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"risk\": \"medium\""));
    }
}
