// src/infrastructure/database.rs
use crate::config::DatabaseSettings;
use sqlx::{PgPool, postgres::PgPoolOptions};

pub async fn init_pool(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections())
        .acquire_timeout(settings.acquire_timeout())
        .connect_with(settings.connect_options()?)
        .await?;

    // Fail fast on bad credentials instead of on the first request.
    sqlx::query("SELECT 1").execute(&pool).await?;
    tracing::debug!(
        max_connections = settings.max_connections(),
        timezone = settings.timezone(),
        "database pool ready"
    );

    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
