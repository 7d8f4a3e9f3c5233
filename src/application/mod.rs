pub mod app_error;
pub mod use_cases;
pub mod validators;
pub mod verification_code;
