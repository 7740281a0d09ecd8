//! Persistence seam for heroes. Each call runs in its own session, released on every exit path.

mod memory;
mod postgres;

pub use memory::MemoryHeroStore;
pub use postgres::PgHeroStore;

use crate::error::AppError;
use crate::model::{Hero, HeroChanges, NewHero};
use async_trait::async_trait;

#[async_trait]
pub trait HeroStore: Send + Sync {
    /// Persist a new hero and return it with its generated id.
    async fn insert(&self, hero: &NewHero) -> Result<Hero, AppError>;

    /// Page of heroes ordered by id ascending.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Hero>, AppError>;

    async fn get(&self, id: i32) -> Result<Option<Hero>, AppError>;

    /// Apply `changes` to the row; None when no row has that id.
    async fn update(&self, id: i32, changes: &HeroChanges) -> Result<Option<Hero>, AppError>;

    /// Hard delete; returns the removed row, None when no row has that id.
    async fn delete(&self, id: i32) -> Result<Option<Hero>, AppError>;

    /// Bounded read against the hero table.
    async fn probe(&self) -> Result<(), AppError>;

    /// Release shared resources at shutdown.
    async fn close(&self) {}
}
