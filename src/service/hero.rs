//! Hero create, list, get, update, and delete on top of a `HeroStore`.

use crate::error::AppError;
use crate::model::{Hero, HeroCreate, HeroUpdate, ListParams};
use crate::service::HeroValidator;
use crate::store::HeroStore;

/// Resource name used in not-found errors.
pub const HERO: &str = "Hero";

pub struct HeroService;

impl HeroService {
    /// Validate and insert. Duplicate names are allowed.
    pub async fn create(store: &dyn HeroStore, input: HeroCreate) -> Result<Hero, AppError> {
        let new_hero = HeroValidator::validate_create(input)?;
        let hero = store.insert(&new_hero).await?;
        tracing::info!(id = hero.id, "hero created");
        Ok(hero)
    }

    /// Page ordered by id. offset defaults to 0, limit to 100 (max 100).
    pub async fn list(store: &dyn HeroStore, params: ListParams) -> Result<Vec<Hero>, AppError> {
        let (offset, limit) = HeroValidator::validate_list(params)?;
        store.list(offset, limit).await
    }

    pub async fn get(store: &dyn HeroStore, id: i32) -> Result<Hero, AppError> {
        store.get(id).await?.ok_or(AppError::NotFound(HERO))
    }

    /// Apply only the fields present in `patch`.
    pub async fn update(
        store: &dyn HeroStore,
        id: i32,
        patch: HeroUpdate,
    ) -> Result<Hero, AppError> {
        let changes = HeroValidator::validate_update(patch)?;
        let hero = store
            .update(id, &changes)
            .await?
            .ok_or(AppError::NotFound(HERO))?;
        tracing::info!(id, "hero updated");
        Ok(hero)
    }

    pub async fn delete(store: &dyn HeroStore, id: i32) -> Result<(), AppError> {
        store.delete(id).await?.ok_or(AppError::NotFound(HERO))?;
        tracing::info!(id, "hero deleted");
        Ok(())
    }
}
