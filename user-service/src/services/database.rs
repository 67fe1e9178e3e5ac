use crate::models::User;
use crate::services::UserStore;
use anyhow::Context;
use async_trait::async_trait;
use mongodb::{bson::doc, options::ClientOptions, Client as MongoClient, Database};
use service_core::error::AppError;

const APP_NAME: &str = "user-service";

/// MongoDB-backed [`UserStore`]. A table is a collection and the user id is
/// the document `_id`.
#[derive(Clone)]
pub struct MongoUserStore {
    db: Database,
}

impl MongoUserStore {
    /// Connect and ping, so an unreachable server fails startup rather than
    /// the first request.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");

        let mut client_options = ClientOptions::parse(uri).await.map_err(|e| {
            tracing::error!("Failed to parse MongoDB connection string: {}", e);
            AppError::from(e)
        })?;
        client_options.app_name = Some(APP_NAME.to_string());

        let client = MongoClient::with_options(client_options).map_err(|e| {
            tracing::error!("Failed to create MongoDB client: {}", e);
            AppError::from(e)
        })?;
        let db = client.database(database);

        db.run_command(doc! { "ping": 1 }, None).await.map_err(|e| {
            tracing::error!("Failed to reach MongoDB database {}: {}", database, e);
            AppError::from(e)
        })?;

        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { db })
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_by_id(&self, table: &str, id: &str) -> Result<Option<User>, anyhow::Error> {
        let filter = doc! { "_id": id };
        let user = self
            .db
            .collection::<User>(table)
            .find_one(filter, None)
            .await
            .with_context(|| format!("find_one on collection {} failed", table))?;
        Ok(user)
    }

    async fn health_check(&self) -> Result<(), anyhow::Error> {
        self.db
            .run_command(doc! { "ping": 1 }, None)
            .await
            .context("MongoDB ping failed")?;
        Ok(())
    }
}
