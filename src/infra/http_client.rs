//! Outbound HTTP client for the EmailJS sender.
//!
//! A signup request waits on the EmailJS call before anything is stored, so
//! the client bounds both the connect phase and the whole exchange. A slow
//! provider then surfaces as an `EmailDelivery` error instead of a stuck request.

use reqwest::Client;
use std::time::Duration;

/// Upper bound for TCP + TLS setup with the email provider.
pub const EMAIL_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Upper bound for a full send, response body included.
pub const EMAIL_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn try_build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .connect_timeout(EMAIL_CONNECT_TIMEOUT)
        .timeout(EMAIL_REQUEST_TIMEOUT)
        .build()
}
