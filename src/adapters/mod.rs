//! Infrastructure adapters. Implement outbound ports and drive the inbound one.
//!
//! Credentials, record storage, PDF rendering, terminal UI. Map errors to DomainError.

pub mod auth;
pub mod persistence;
pub mod report;
pub mod ui;
