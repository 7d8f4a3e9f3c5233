use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Email already exists in the waitlist")]
    DuplicateEmail,

    #[error("Not found")]
    NotFound,

    #[error("Email delivery error: {0}")]
    EmailDelivery(String),

    #[error("Database error: {0}")]
    Database(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    ValidationError,
    DuplicateEmail,
    NotFound,
    EmailDeliveryError,
    PersistenceError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::DuplicateEmail => "DUPLICATE_EMAIL",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::EmailDeliveryError => "EMAIL_DELIVERY_ERROR",
            ErrorCode::PersistenceError => "PERSISTENCE_ERROR",
        }
    }
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::ValidationError,
            AppError::DuplicateEmail => ErrorCode::DuplicateEmail,
            AppError::NotFound => ErrorCode::NotFound,
            AppError::EmailDelivery(_) => ErrorCode::EmailDeliveryError,
            AppError::Database(_) => ErrorCode::PersistenceError,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
