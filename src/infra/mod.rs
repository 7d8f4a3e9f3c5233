use crate::{
    adapters::persistence::MongoPersistence,
    infra::{config::AppConfig, db::init_db, error::InfraError},
};

pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod http_client;
pub mod setup;

pub async fn mongo_persistence(config: &AppConfig) -> Result<MongoPersistence, InfraError> {
    let db = init_db(&config.mongodb_uri, &config.mongodb_database).await?;
    let persistence = MongoPersistence::new(&db, &config.mongodb_collection);
    persistence
        .ensure_indexes()
        .await
        .map_err(InfraError::IndexSetup)?;
    Ok(persistence)
}
