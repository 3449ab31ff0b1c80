//! Domain entities. Pure data structures for the core business.
//!
//! No terminal/PDF/IO types here — adapters render these.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Vital signs entered on the assessment form. Constructed fresh per assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Years. Collected for the report; does not affect the score.
    pub age: f64,
    /// mmHg.
    pub systolic_bp: f64,
    /// mmHg.
    pub diastolic_bp: f64,
    /// mg/dL.
    pub blood_sugar: f64,
    /// Degrees Fahrenheit.
    pub body_temp: f64,
    /// Beats per minute.
    pub heart_rate: f64,
}

/// Three-valued risk classification shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    Low,
    Medium,
    High,
}

impl RiskLabel {
    pub const ALL: [RiskLabel; 3] = [RiskLabel::Low, RiskLabel::Medium, RiskLabel::High];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLabel::Low => "low",
            RiskLabel::Medium => "medium",
            RiskLabel::High => "high",
        }
    }

    /// One-line banner shown right after an assessment.
    pub fn headline(self) -> &'static str {
        match self {
            RiskLabel::Low => "✅ Low Risk - Maintain your healthy routine!",
            RiskLabel::Medium => "⚠️ Medium Risk - Please consult your doctor soon.",
            RiskLabel::High => "🚨 High Risk - Seek medical attention immediately!",
        }
    }

    /// Longer guidance paragraph for the result screen.
    pub fn advice(self) -> &'static str {
        match self {
            RiskLabel::Low => {
                "Your health looks good. Keep maintaining a balanced diet and regular exercise."
            }
            RiskLabel::Medium => {
                "You have some health risks. Consider following a healthier lifestyle and consult your doctor."
            }
            RiskLabel::High => {
                "You have a high health risk. Please seek medical advice immediately and follow prescribed guidelines."
            }
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one assessment. Consumed by the report export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRecord {
    pub name: String,
    pub vitals: VitalSigns,
    pub risk: RiskLabel,
    pub assessed_at: DateTime<Utc>,
}

/// Raw form input as typed by the user, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssessmentForm {
    pub name: String,
    pub age: String,
    pub systolic_bp: String,
    pub diastolic_bp: String,
    pub blood_sugar: String,
    pub body_temp: String,
    pub heart_rate: String,
}

impl AssessmentForm {
    /// Numeric fields paired with their display labels, in form order.
    pub fn numeric_fields(&self) -> [(&'static str, &str); 6] {
        [
            ("Age", self.age.as_str()),
            ("Systolic BP", self.systolic_bp.as_str()),
            ("Diastolic BP", self.diastolic_bp.as_str()),
            ("Blood Sugar", self.blood_sugar.as_str()),
            ("Body Temp", self.body_temp.as_str()),
            ("Heart Rate", self.heart_rate.as_str()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single entry in the chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    /// Quick-reply labels. Empty = none offered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Bullet points shown under the text. Empty = none.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            options: Vec::new(),
            details: Vec::new(),
        }
    }

    pub fn bot(reply: BotReply) -> Self {
        Self {
            sender: Sender::Bot,
            text: reply.text,
            options: reply.options,
            details: reply.details,
        }
    }
}

/// Canned response payload produced by the responder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotReply {
    pub text: String,
    pub details: Vec<String>,
    pub options: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_label_serializes_lowercase() {
        let json = serde_json::to_string(&RiskLabel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let back: RiskLabel = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(back, RiskLabel::High);
    }

    #[test]
    fn test_chat_message_omits_empty_lists() {
        let msg = ChatMessage::user("hello");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(!json.contains("options"));
        assert!(!json.contains("details"));
        assert!(json.contains("\"sender\":\"user\""));
    }
}
