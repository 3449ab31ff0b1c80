//! Vital-sign risk classification.
//!
//! A handful of threshold checks summed into a score, then bucketed by two
//! cutoffs. Thresholds are taken as given; do not retune them here.

use super::entities::{RiskLabel, VitalSigns};

/// Score at or above which the label is `High`.
pub const HIGH_RISK_SCORE: u8 = 5;
/// Score at or above which the label is `Medium` (and below `HIGH_RISK_SCORE`).
pub const MEDIUM_RISK_SCORE: u8 = 3;

/// Integer risk score for a set of vitals. Age is not scored.
pub fn risk_score(v: &VitalSigns) -> u8 {
    let mut score = 0;

    // Low pressure is checked first; the two branches never both apply.
    if v.systolic_bp < 90.0 || v.diastolic_bp < 60.0 {
        score += 1;
    } else if v.systolic_bp >= 140.0 || v.diastolic_bp >= 90.0 {
        score += 3;
    }

    if v.blood_sugar < 70.0 {
        score += 1;
    } else if v.blood_sugar > 140.0 {
        score += 2;
    }

    if v.body_temp > 100.4 {
        score += 2;
    }

    if v.heart_rate < 60.0 || v.heart_rate > 100.0 {
        score += 1;
    }

    score
}

impl RiskLabel {
    pub fn from_score(score: u8) -> Self {
        if score >= HIGH_RISK_SCORE {
            RiskLabel::High
        } else if score >= MEDIUM_RISK_SCORE {
            RiskLabel::Medium
        } else {
            RiskLabel::Low
        }
    }
}

/// Classify vitals into a risk label. Total and pure.
pub fn classify(v: &VitalSigns) -> RiskLabel {
    RiskLabel::from_score(risk_score(v))
}
