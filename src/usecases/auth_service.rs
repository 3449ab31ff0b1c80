//! Login gate. Delegates the credential check to AuthPort and tracks attempts.

use crate::domain::DomainError;
use crate::ports::AuthPort;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use tracing::{debug, warn};

pub struct AuthService {
    auth: Arc<dyn AuthPort>,
    max_attempts: u32,
    failed: AtomicU32,
    authenticated: AtomicBool,
}

impl AuthService {
    pub fn new(auth: Arc<dyn AuthPort>, max_attempts: u32) -> Self {
        Self {
            auth,
            max_attempts: max_attempts.max(1),
            failed: AtomicU32::new(0),
            authenticated: AtomicBool::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::Relaxed)
    }

    /// Failed attempts left before the gate closes.
    pub fn attempts_left(&self) -> u32 {
        self.max_attempts
            .saturating_sub(self.failed.load(Ordering::Relaxed))
    }

    /// Check one email/password pair. Errors once attempts are exhausted.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), DomainError> {
        if self.attempts_left() == 0 {
            return Err(DomainError::Auth("too many failed login attempts".into()));
        }

        match self.auth.verify(email.trim(), password).await {
            Ok(()) => {
                self.authenticated.store(true, Ordering::Relaxed);
                let failed = self.failed.swap(0, Ordering::Relaxed);
                debug!(failed, "login accepted");
                Ok(())
            }
            Err(e) => {
                let failed = self.failed.fetch_add(1, Ordering::Relaxed) + 1;
                warn!(failed, max = self.max_attempts, "login rejected");
                Err(e)
            }
        }
    }

    pub fn logout(&self) {
        self.authenticated.store(false, Ordering::Relaxed);
    }
}
