//! Store construction and the startup connectivity check.

use crate::config::{DbConfig, DbDriver};
use crate::error::ConnectionError;
use crate::store::{HeroStore, MemoryHeroStore, PgHeroStore};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;

/// Build the store for `config`. For postgres this opens the pool.
pub async fn connect_store(config: &DbConfig) -> Result<Arc<dyn HeroStore>, ConnectionError> {
    match config.driver {
        DbDriver::Memory => {
            tracing::warn!("using in-memory hero store, data is lost on exit");
            Ok(Arc::new(MemoryHeroStore::new()))
        }
        DbDriver::Postgres => {
            let opts = config.connect_options()?;
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(opts)
                .await
                .map_err(ConnectionError::Connect)?;
            Ok(Arc::new(PgHeroStore::new(pool)))
        }
    }
}

/// Read at most one hero to prove the database answers. Must pass before serving traffic.
pub async fn check_db_connection(store: &dyn HeroStore) -> Result<(), ConnectionError> {
    store.probe().await.map_err(ConnectionError::Probe)?;
    tracing::info!("database connection is working");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::model::{Hero, HeroChanges, NewHero};
    use async_trait::async_trait;

    struct Unreachable;

    #[async_trait]
    impl HeroStore for Unreachable {
        async fn insert(&self, _: &NewHero) -> Result<Hero, AppError> {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        }
        async fn list(&self, _: i64, _: i64) -> Result<Vec<Hero>, AppError> {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        }
        async fn get(&self, _: i32) -> Result<Option<Hero>, AppError> {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        }
        async fn update(&self, _: i32, _: &HeroChanges) -> Result<Option<Hero>, AppError> {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        }
        async fn delete(&self, _: i32) -> Result<Option<Hero>, AppError> {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        }
        async fn probe(&self) -> Result<(), AppError> {
            Err(AppError::Db(sqlx::Error::PoolTimedOut))
        }
    }

    #[tokio::test]
    async fn memory_store_passes_check() {
        let store = connect_store(&DbConfig::memory()).await.unwrap();
        check_db_connection(store.as_ref()).await.unwrap();
    }

    #[tokio::test]
    async fn failed_probe_is_descriptive() {
        let err = check_db_connection(&Unreachable).await.unwrap_err();
        assert!(matches!(err, ConnectionError::Probe(_)));
        assert!(err.to_string().starts_with("error connecting to the database:"));
    }

    #[tokio::test]
    async fn postgres_without_parameters_is_a_config_error() {
        let config = DbConfig {
            driver: DbDriver::Postgres,
            ..DbConfig::memory()
        };
        let err = connect_store(&config).await.err().unwrap();
        assert!(matches!(err, ConnectionError::Config(_)));
    }
}
