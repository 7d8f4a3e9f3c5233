use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::app_error::{AppError, AppResult};
use crate::application::validators::{is_blank, is_valid_email, normalize_email};
use crate::application::verification_code::generate_verification_code;
use crate::domain::entities::waitlist_entry::{VerificationStatus, WaitlistEntry};

// ============================================================================
// Ports
// ============================================================================

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>>;
    async fn find_by_email_and_code(
        &self,
        email: &str,
        verification_code: &str,
    ) -> AppResult<Option<WaitlistEntry>>;
    /// Fails with `AppError::DuplicateEmail` when the email is already taken.
    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<()>;
    /// Flips `verified` on an unverified entry. Returns false if nothing changed.
    async fn mark_verified(&self, email: &str) -> AppResult<bool>;
}

#[async_trait]
pub trait VerificationEmailSender: Send + Sync {
    async fn send_verification_code(
        &self,
        to_name: &str,
        to_email: &str,
        verification_code: &str,
    ) -> AppResult<()>;
}

// ============================================================================
// Use Cases
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    Verified,
    AlreadyVerified,
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    email: Arc<dyn VerificationEmailSender>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, email: Arc<dyn VerificationEmailSender>) -> Self {
        Self { repo, email }
    }

    /// Adds a new unverified entry and mails its verification code.
    #[instrument(skip(self, name))]
    pub async fn join(&self, name: &str, email: &str) -> AppResult<WaitlistEntry> {
        if is_blank(name) || is_blank(email) {
            return Err(AppError::InvalidInput("Name and email are required".into()));
        }

        let name = name.trim();
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(AppError::InvalidInput("Invalid email format".into()));
        }

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        let code = generate_verification_code();

        // Nothing is persisted unless the code was delivered.
        self.email
            .send_verification_code(name, &email, &code)
            .await?;

        let entry = WaitlistEntry::new(name.to_string(), email, code);
        // A concurrent signup can still win here; the unique index reports it as DuplicateEmail.
        self.repo.insert(&entry).await?;

        info!(email = %entry.email, status = entry.status().as_str(), "Joined waitlist");
        Ok(entry)
    }

    #[instrument(skip(self, verification_code))]
    pub async fn verify(&self, email: &str, verification_code: &str) -> AppResult<VerifyOutcome> {
        if is_blank(email) || is_blank(verification_code) {
            return Err(AppError::InvalidInput(
                "Email and verification code are required".into(),
            ));
        }

        let email = normalize_email(email);
        let entry = self
            .repo
            .find_by_email_and_code(&email, verification_code)
            .await?
            .ok_or(AppError::NotFound)?;

        if entry.status() == VerificationStatus::Verified {
            debug!(email = %entry.email, "Entry already verified");
            return Ok(VerifyOutcome::AlreadyVerified);
        }

        if !self.repo.mark_verified(&entry.email).await? {
            debug!(email = %entry.email, "Entry was verified concurrently");
        }

        info!(email = %entry.email, "Email verified");
        Ok(VerifyOutcome::Verified)
    }
}
