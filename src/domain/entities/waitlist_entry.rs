use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    Unverified,
    Verified,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Unverified => "unverified",
            VerificationStatus::Verified => "verified",
        }
    }
}

/// One signup on the waitlist. `email` is stored normalized and is unique.
#[derive(Debug, Clone, PartialEq)]
pub struct WaitlistEntry {
    pub name: String,
    pub email: String,
    pub verification_code: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl WaitlistEntry {
    /// New entries always start unverified.
    pub fn new(name: String, email: String, verification_code: String) -> Self {
        Self {
            name,
            email,
            verification_code,
            verified: false,
            created_at: Utc::now(),
        }
    }

    pub fn status(&self) -> VerificationStatus {
        if self.verified {
            VerificationStatus::Verified
        } else {
            VerificationStatus::Unverified
        }
    }
}
