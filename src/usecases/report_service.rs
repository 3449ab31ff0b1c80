//! Report export: render a health record and write it to the reports directory.

use crate::domain::{DomainError, HealthRecord};
use crate::ports::ReportRenderer;
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::info;

pub struct ReportService {
    renderer: Arc<dyn ReportRenderer>,
    reports_dir: PathBuf,
}

impl ReportService {
    /// # Arguments
    /// * `renderer` - Document renderer (PDF in production)
    /// * `reports_dir` - Directory where exported reports are written
    pub fn new(renderer: Arc<dyn ReportRenderer>, reports_dir: PathBuf) -> Self {
        Self {
            renderer,
            reports_dir,
        }
    }

    /// Render `record` and save it. Returns the written path.
    ///
    /// Exporting the same person twice overwrites the previous file.
    pub async fn export(&self, record: &HealthRecord) -> Result<PathBuf, DomainError> {
        fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| DomainError::Report(format!("Failed to create reports dir: {}", e)))?;

        let bytes = self.renderer.render(record, Local::now())?;
        let path = self
            .reports_dir
            .join(report_file_name(&record.name, self.renderer.extension()));

        fs::write(&path, &bytes)
            .await
            .map_err(|e| DomainError::Report(format!("Failed to write {}: {}", path.display(), e)))?;

        info!(
            path = %path.display(),
            bytes = bytes.len(),
            risk = %record.risk,
            "report exported"
        );
        Ok(path)
    }
}

/// `MatriSense_Report_<name>.<ext>`; "Patient" when the name is blank.
/// Characters outside `[A-Za-z0-9_-]` become underscores.
pub fn report_file_name(name: &str, extension: &str) -> String {
    let trimmed = name.trim();
    let stem: String = if trimmed.is_empty() {
        "Patient".to_string()
    } else {
        trimmed
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    };
    format!("MatriSense_Report_{}.{}", stem, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskLabel, VitalSigns};
    use chrono::{DateTime, Utc};

    struct FakeRenderer;

    impl ReportRenderer for FakeRenderer {
        fn extension(&self) -> &'static str {
            "txt"
        }

        fn render(
            &self,
            record: &HealthRecord,
            _generated_at: DateTime<Local>,
        ) -> Result<Vec<u8>, DomainError> {
            Ok(format!("{}:{}", record.name, record.risk).into_bytes())
        }
    }

    fn record(name: &str) -> HealthRecord {
        HealthRecord {
            name: name.to_string(),
            vitals: VitalSigns {
                age: 28.0,
                systolic_bp: 110.0,
                diastolic_bp: 70.0,
                blood_sugar: 90.0,
                body_temp: 98.6,
                heart_rate: 80.0,
            },
            risk: RiskLabel::Low,
            assessed_at: Utc::now(),
        }
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name("Vandana", "pdf"), "MatriSense_Report_Vandana.pdf");
        assert_eq!(report_file_name("  ", "pdf"), "MatriSense_Report_Patient.pdf");
        assert_eq!(
            report_file_name("Ana María/../x", "pdf"),
            "MatriSense_Report_Ana_Mar_a____x.pdf"
        );
    }

    #[tokio::test]
    async fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("reports");
        let svc = ReportService::new(Arc::new(FakeRenderer), reports.clone());

        let path = svc.export(&record("Asha")).await.unwrap();
        assert_eq!(path, reports.join("MatriSense_Report_Asha.txt"));
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Asha:low");
    }
}
