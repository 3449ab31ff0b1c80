//! Assessment use case: validate the vital-signs form, classify, remember the record.

use crate::domain::risk::{classify, risk_score};
use crate::domain::{AssessmentForm, DomainError, FormError, HealthRecord, VitalSigns};
use crate::ports::RecordStore;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

pub struct AssessmentService {
    store: Arc<dyn RecordStore>,
}

impl AssessmentService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Validate `form`, classify the vitals and store the resulting record.
    ///
    /// Validation failures come back as `DomainError::Validation`; nothing is stored then.
    pub async fn assess(&self, form: &AssessmentForm) -> Result<HealthRecord, DomainError> {
        let vitals = match validate(form) {
            Ok(v) => v,
            Err(e) => {
                warn!(error = %e, "assessment form rejected");
                return Err(e.into());
            }
        };

        let score = risk_score(&vitals);
        let risk = classify(&vitals);
        let record = HealthRecord {
            name: form.name.trim().to_string(),
            vitals,
            risk,
            assessed_at: Utc::now(),
        };

        self.store.save_latest(&record).await?;
        info!(score, risk = %risk, "assessment complete");
        Ok(record)
    }

    /// Last assessed record, if any.
    pub async fn latest(&self) -> Result<Option<HealthRecord>, DomainError> {
        self.store.latest().await
    }
}

/// Presence, then number, then positivity. First failure wins.
pub fn validate(form: &AssessmentForm) -> Result<VitalSigns, FormError> {
    let fields = form.numeric_fields();
    if form.name.trim().is_empty() || fields.iter().any(|(_, raw)| raw.trim().is_empty()) {
        return Err(FormError::MissingFields);
    }

    let mut values = [0.0f64; 6];
    for (slot, (label, raw)) in values.iter_mut().zip(fields.iter()) {
        *slot = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(FormError::NotANumber { field: *label })?;
    }

    if values.iter().any(|v| *v <= 0.0) {
        return Err(FormError::NonPositive);
    }

    let [age, systolic_bp, diastolic_bp, blood_sugar, body_temp, heart_rate] = values;
    Ok(VitalSigns {
        age,
        systolic_bp,
        diastolic_bp,
        blood_sugar,
        body_temp,
        heart_rate,
    })
}
