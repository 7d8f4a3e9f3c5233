use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub mongodb_collection: String,
    /// Base URL of the EmailJS REST API (e.g., "https://api.emailjs.com").
    pub emailjs_api_url: Url,
    pub emailjs_service_id: String,
    pub emailjs_template_id: String,
    /// EmailJS public key, sent as `user_id`.
    pub emailjs_public_key: String,
    /// EmailJS private key, sent as `accessToken`.
    pub emailjs_private_key: SecretString,
    /// When set, structured JSON logs are also written to this file.
    pub log_file: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let bind_addr: SocketAddr = get_env_default(
            "BIND_ADDR",
            SocketAddr::from(([127, 0, 0, 1], 3001)),
        );
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let mongodb_uri: String = get_env("MONGODB_URI");
        let mongodb_database: String = get_env_default("MONGODB_DATABASE", "waitlist".to_string());
        let mongodb_collection: String =
            get_env_default("MONGODB_COLLECTION", "waitlists".to_string());

        let emailjs_api_url: Url = get_env_default(
            "EMAILJS_API_URL",
            Url::parse("https://api.emailjs.com").expect("default EmailJS URL is valid"),
        );
        let emailjs_service_id: String = get_env("EMAILJS_SERVICE_ID");
        let emailjs_template_id: String = get_env("EMAILJS_TEMPLATE_ID");
        let emailjs_public_key: String = get_env("EMAILJS_PUBLIC_KEY");
        let emailjs_private_key: SecretString =
            SecretString::new(get_env::<String>("EMAILJS_PRIVATE_KEY").into());

        let log_file: Option<String> = non_blank(get_env_default("LOG_FILE", String::new()));

        Self {
            bind_addr,
            cors_origin,
            mongodb_uri,
            mongodb_database,
            mongodb_collection,
            emailjs_api_url,
            emailjs_service_id,
            emailjs_template_id,
            emailjs_public_key,
            emailjs_private_key,
            log_file,
        }
    }
}

/// Empty or whitespace-only values count as unset.
fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
