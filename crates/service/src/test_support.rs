#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database per test, fully migrated.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_single("sqlite::memory:").await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
