use crate::config::PersonsConfig;
use crate::domain::{NewPerson, Person};
use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

pub mod sqlite;

// a person repository is shared between request handlers behind an Arc
// sqlite-specific implementation lives in "sqlite.rs"
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn list_persons(&self) -> Result<Vec<Person>>;
    async fn get_person(&self, id: i64) -> Result<Option<Person>>;

    // write operations
    async fn insert_person(&self, person: &NewPerson) -> Result<i64>;
    async fn update_person(&self, id: i64, person: &NewPerson) -> Result<u64>;
    async fn delete_person(&self, id: i64) -> Result<u64>;
}

/// Opens the database described by `config`, creating the file and schema if absent.
pub async fn connect(config: &PersonsConfig) -> Result<Pool<Sqlite>> {
    // verify db exists
    if !Sqlite::database_exists(&config.database_url)
        .await
        .unwrap_or(false)
    {
        tracing::info!("No database at {}, creating...", config.database_url);
        Sqlite::create_database(&config.database_url)
            .await
            .with_context(|| format!("Unable to create database at {}", config.database_url))?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .with_context(|| format!("Failed to create pool on {}", config.database_url))?;

    init_schema(&pool).await?;

    Ok(pool)
}

pub async fn init_schema(pool: &Pool<Sqlite>) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")?;
    Ok(())
}
