use mongodb::{Client, Database, bson::doc};
use tracing::info;

use crate::infra::error::InfraError;

/// Connects and pings the server. A bad MONGODB_URI fails here, at startup.
pub async fn init_db(mongodb_uri: &str, database: &str) -> Result<Database, InfraError> {
    let client = Client::with_uri_str(mongodb_uri)
        .await
        .map_err(InfraError::DatabaseConnection)?;
    let db = client.database(database);

    db.run_command(doc! { "ping": 1 }, None)
        .await
        .map_err(InfraError::DatabaseConnection)?;

    info!(database, "Connected to database!");
    Ok(db)
}
