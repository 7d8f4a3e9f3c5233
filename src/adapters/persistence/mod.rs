use mongodb::{
    Collection, Database, IndexModel,
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};

use crate::app_error::AppError;

pub mod waitlist_entry;

use waitlist_entry::WaitlistEntryDoc;

/// MongoDB server code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Clone)]
pub struct MongoPersistence {
    entries: Collection<WaitlistEntryDoc>,
}

impl MongoPersistence {
    pub fn new(db: &Database, collection: &str) -> Self {
        MongoPersistence {
            entries: db.collection(collection),
        }
    }

    /// Creates the unique index on `email`. Safe to call on every startup.
    pub async fn ensure_indexes(&self) -> Result<(), mongodb::error::Error> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();
        self.entries.create_index(index, None).await?;
        Ok(())
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_err)) => {
            write_err.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(cmd_err) => cmd_err.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            return AppError::DuplicateEmail;
        }
        // Log the actual error for debugging, but don't expose details
        tracing::error!(error = ?err, "Database error");
        AppError::Database("Database operation failed".into())
    }
}
