//! PostgreSQL hero store over a sqlx pool.

use crate::error::AppError;
use crate::model::{Hero, HeroChanges, NewHero};
use crate::sql::{self, QueryBuf};
use crate::store::HeroStore;
use async_trait::async_trait;
use sqlx::PgPool;

/// Pool-backed store. Every call acquires its own pooled connection, returned to the pool on drop.
#[derive(Clone)]
pub struct PgHeroStore {
    pool: PgPool,
}

impl PgHeroStore {
    pub fn new(pool: PgPool) -> Self {
        PgHeroStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_optional(&self, q: &QueryBuf) -> Result<Option<Hero>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut conn = self.pool.acquire().await?;
        let mut query = sqlx::query_as::<_, Hero>(&q.sql);
        for p in &q.params {
            query = p.bind_to(query);
        }
        let row = query.fetch_optional(&mut *conn).await?;
        Ok(row)
    }

    async fn fetch_all(&self, q: &QueryBuf) -> Result<Vec<Hero>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut conn = self.pool.acquire().await?;
        let mut query = sqlx::query_as::<_, Hero>(&q.sql);
        for p in &q.params {
            query = p.bind_to(query);
        }
        let rows = query.fetch_all(&mut *conn).await?;
        Ok(rows)
    }
}

#[async_trait]
impl HeroStore for PgHeroStore {
    async fn insert(&self, hero: &NewHero) -> Result<Hero, AppError> {
        self.fetch_optional(&sql::insert(hero))
            .await?
            .ok_or_else(|| AppError::Db(sqlx::Error::RowNotFound))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Hero>, AppError> {
        self.fetch_all(&sql::select_list(offset, limit)).await
    }

    async fn get(&self, id: i32) -> Result<Option<Hero>, AppError> {
        self.fetch_optional(&sql::select_by_id(id)).await
    }

    async fn update(&self, id: i32, changes: &HeroChanges) -> Result<Option<Hero>, AppError> {
        match sql::update(id, changes) {
            Some(q) => self.fetch_optional(&q).await,
            None => self.get(id).await,
        }
    }

    async fn delete(&self, id: i32) -> Result<Option<Hero>, AppError> {
        self.fetch_optional(&sql::delete(id)).await
    }

    async fn probe(&self) -> Result<(), AppError> {
        self.fetch_optional(&sql::select_probe()).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
