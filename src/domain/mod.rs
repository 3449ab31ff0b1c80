//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod guides;
pub mod responder;
pub mod risk;

pub use entities::{
    AssessmentForm, BotReply, ChatMessage, HealthRecord, RiskLabel, Sender, VitalSigns,
};
pub use errors::{DomainError, FormError};
pub use responder::Topic;
