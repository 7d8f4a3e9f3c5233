use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::{doc, oid::ObjectId, serde_helpers::chrono_datetime_as_bson_datetime};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::persistence::MongoPersistence,
    app_error::AppResult,
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::WaitlistRepo,
};

// Waitlist entry as stored in the collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntryDoc {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub verification_code: String,
    #[serde(default)]
    pub verified: bool,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl From<&WaitlistEntry> for WaitlistEntryDoc {
    fn from(entry: &WaitlistEntry) -> Self {
        Self {
            id: None,
            name: entry.name.clone(),
            email: entry.email.clone(),
            verification_code: entry.verification_code.clone(),
            verified: entry.verified,
            created_at: entry.created_at,
        }
    }
}

impl From<WaitlistEntryDoc> for WaitlistEntry {
    fn from(doc: WaitlistEntryDoc) -> Self {
        Self {
            name: doc.name,
            email: doc.email,
            verification_code: doc.verification_code,
            verified: doc.verified,
            created_at: doc.created_at,
        }
    }
}

#[async_trait]
impl WaitlistRepo for MongoPersistence {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<WaitlistEntry>> {
        let found = self
            .entries
            .find_one(doc! { "email": email }, None)
            .await?;
        Ok(found.map(WaitlistEntry::from))
    }

    async fn find_by_email_and_code(
        &self,
        email: &str,
        verification_code: &str,
    ) -> AppResult<Option<WaitlistEntry>> {
        let found = self
            .entries
            .find_one(
                doc! { "email": email, "verificationCode": verification_code },
                None,
            )
            .await?;
        Ok(found.map(WaitlistEntry::from))
    }

    async fn insert(&self, entry: &WaitlistEntry) -> AppResult<()> {
        // Duplicate-key failures convert to AppError::DuplicateEmail.
        self.entries
            .insert_one(WaitlistEntryDoc::from(entry), None)
            .await?;
        Ok(())
    }

    async fn mark_verified(&self, email: &str) -> AppResult<bool> {
        let result = self
            .entries
            .update_one(
                doc! { "email": email, "verified": false },
                doc! { "$set": { "verified": true } },
                None,
            )
            .await?;
        Ok(result.modified_count > 0)
    }
}
