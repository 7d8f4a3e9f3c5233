//! In-memory mock implementations for the waitlist ports.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::{VerificationEmailSender, WaitlistRepo},
    domain::entities::waitlist_entry::WaitlistEntry,
};

// ============================================================================
// InMemoryWaitlistRepo
// ============================================================================

/// In-memory implementation of WaitlistRepo keyed by normalized email,
/// enforcing the same uniqueness rule as the store's index.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<HashMap<String, WaitlistEntry>>,
    inserts: AtomicUsize,
    updates: AtomicUsize,
    fail_writes: AtomicBool,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        let map: HashMap<String, WaitlistEntry> =
            entries.into_iter().map(|e| (e.email.clone(), e)).collect();
        Self {
            entries: Mutex::new(map),
            ..Self::default()
        }
    }

    pub fn get(&self, email: &str) -> Option<WaitlistEntry> {
        self.entries.lock().unwrap().get(email).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Number of insert attempts, including rejected ones.
    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    /// Number of updates that changed an entry.
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    /// Make every subsequent insert and update fail with a database error.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    fn check_writable(&self) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::Database("simulated write failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        Ok(self.get(email))
    }

    async fn find_by_email_and_code(
        &self,
        email: &str,
        verification_code: &str,
    ) -> AppResult<Option<WaitlistEntry>> {
        Ok(self
            .get(email)
            .filter(|e| e.verification_code == verification_code))
    }

    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<()> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.check_writable()?;

        let mut entries = self.entries.lock().unwrap();
        if entries.contains_key(&entry.email) {
            return Err(AppError::DuplicateEmail);
        }
        entries.insert(entry.email.clone(), entry.clone());
        Ok(())
    }

    async fn mark_verified(&self, email: &str) -> AppResult<bool> {
        self.check_writable()?;

        let mut entries = self.entries.lock().unwrap();
        match entries.get_mut(email) {
            Some(entry) if !entry.verified => {
                entry.verified = true;
                self.updates.fetch_add(1, Ordering::SeqCst);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

// ============================================================================
// Email senders
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentVerificationEmail {
    pub to_name: String,
    pub to_email: String,
    pub verification_code: String,
}

/// Email sender that records every message instead of delivering it.
#[derive(Default)]
pub struct RecordingEmailSender {
    sent: Mutex<Vec<SentVerificationEmail>>,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<SentVerificationEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_code_for(&self, email: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|m| m.to_email == email)
            .map(|m| m.verification_code.clone())
    }
}

#[async_trait]
impl VerificationEmailSender for RecordingEmailSender {
    async fn send_verification_code(
        &self,
        to_name: &str,
        to_email: &str,
        verification_code: &str,
    ) -> AppResult<()> {
        self.sent.lock().unwrap().push(SentVerificationEmail {
            to_name: to_name.to_string(),
            to_email: to_email.to_string(),
            verification_code: verification_code.to_string(),
        });
        Ok(())
    }
}

/// Email sender whose provider always rejects the message.
#[derive(Default)]
pub struct FailingEmailSender;

#[async_trait]
impl VerificationEmailSender for FailingEmailSender {
    async fn send_verification_code(
        &self,
        _to_name: &str,
        _to_email: &str,
        _verification_code: &str,
    ) -> AppResult<()> {
        Err(AppError::EmailDelivery("simulated delivery failure".into()))
    }
}
