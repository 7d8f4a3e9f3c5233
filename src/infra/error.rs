use thiserror::Error;

/// Infrastructure errors that can occur during application startup.
///
/// Display messages are safe for logs. Debug output includes the #[source]
/// chain, which may contain the connection string.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Database connection failed. Check MONGODB_URI and ensure MongoDB is running.")]
    DatabaseConnection(#[source] mongodb::error::Error),

    #[error("Failed to create the unique email index")]
    IndexSetup(#[source] mongodb::error::Error),

    #[error("HTTP client initialization failed")]
    HttpClient(#[source] reqwest::Error),

    #[error("Invalid EmailJS API URL")]
    EmailApiUrl(#[source] url::ParseError),

    #[error("TCP bind failed")]
    TcpBind(#[source] std::io::Error),

    #[error("Server error")]
    Server(#[source] std::io::Error),
}
