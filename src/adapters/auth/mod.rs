//! Auth adapters. Implement AuthPort.

pub mod static_credentials;

pub use static_credentials::StaticCredentials;
