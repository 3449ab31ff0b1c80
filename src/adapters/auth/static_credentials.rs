//! Implements AuthPort with a single configured email/password pair.

use crate::domain::DomainError;
use crate::ports::AuthPort;
use crate::shared::config::{DEFAULT_LOGIN_EMAIL, DEFAULT_LOGIN_PASSWORD};
use async_trait::async_trait;

/// Literal comparison against one credential pair. Not a security boundary.
pub struct StaticCredentials {
    email: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    fn is_demo_pair(&self) -> bool {
        self.email == DEFAULT_LOGIN_EMAIL && self.password == DEFAULT_LOGIN_PASSWORD
    }
}

#[async_trait]
impl AuthPort for StaticCredentials {
    async fn verify(&self, email: &str, password: &str) -> Result<(), DomainError> {
        if email == self.email && password == self.password {
            return Ok(());
        }
        // Only the built-in demo pair is safe to echo back.
        let msg = if self.is_demo_pair() {
            format!(
                "Invalid credentials. Try {} / {}",
                DEFAULT_LOGIN_EMAIL, DEFAULT_LOGIN_PASSWORD
            )
        } else {
            "Invalid credentials.".to_string()
        };
        Err(DomainError::Auth(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_pair_hint() {
        let creds = StaticCredentials::new(DEFAULT_LOGIN_EMAIL, DEFAULT_LOGIN_PASSWORD);
        assert!(creds.verify("test@example.com", "123456").await.is_ok());
        let err = creds.verify("test@example.com", "12345").await.unwrap_err();
        assert!(err.to_string().contains("Try test@example.com / 123456"));
    }

    #[tokio::test]
    async fn test_custom_pair_has_no_hint() {
        let creds = StaticCredentials::new("mum@clinic.org", "s3cret");
        assert!(creds.verify("mum@clinic.org", "s3cret").await.is_ok());
        let err = creds.verify("mum@clinic.org", "nope").await.unwrap_err();
        assert!(!err.to_string().contains("s3cret"));
    }

    #[tokio::test]
    async fn test_comparison_is_exact() {
        let creds = StaticCredentials::new(DEFAULT_LOGIN_EMAIL, DEFAULT_LOGIN_PASSWORD);
        assert!(creds.verify("TEST@example.com", "123456").await.is_err());
    }
}
