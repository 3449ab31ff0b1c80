//! Application use cases. Orchestrate domain logic via ports.

pub mod assessment_service;
pub mod auth_service;
pub mod chat_service;
pub mod report_service;

pub use assessment_service::AssessmentService;
pub use auth_service::AuthService;
pub use chat_service::ChatService;
pub use report_service::ReportService;
