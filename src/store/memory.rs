//! In-process hero store. Ids come from a counter and are never reused.

use crate::error::AppError;
use crate::model::{Hero, HeroChanges, NewHero};
use crate::store::HeroStore;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryHeroStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    rows: BTreeMap<i32, Hero>,
}

impl MemoryHeroStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HeroStore for MemoryHeroStore {
    async fn insert(&self, hero: &NewHero) -> Result<Hero, AppError> {
        let mut inner = self.inner.write().await;
        let id = inner
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Db(sqlx::Error::Protocol("hero id sequence exhausted".into())))?;
        inner.last_id = id;
        let row = Hero {
            id,
            name: hero.name.clone(),
            description: hero.description.clone(),
            alter_ego: hero.alter_ego.clone(),
        };
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Hero>, AppError> {
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);
        let inner = self.inner.read().await;
        Ok(inner.rows.values().skip(offset).take(limit).cloned().collect())
    }

    async fn get(&self, id: i32) -> Result<Option<Hero>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn update(&self, id: i32, changes: &HeroChanges) -> Result<Option<Hero>, AppError> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|row| {
            changes.apply(row);
            row.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<Option<Hero>, AppError> {
        Ok(self.inner.write().await.rows.remove(&id))
    }

    async fn probe(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_hero(name: &str) -> NewHero {
        NewHero {
            name: name.into(),
            description: None,
            alter_ego: format!("{} secret", name),
        }
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = MemoryHeroStore::new();
        let first = store.insert(&new_hero("Deadpond")).await.unwrap();
        store.delete(first.id).await.unwrap();
        let second = store.insert(&new_hero("Rusty-Man")).await.unwrap();
        assert!(second.id > first.id);
        assert!(store.get(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_pages_in_id_order() {
        let store = MemoryHeroStore::new();
        for name in ["a", "b", "c", "d"] {
            store.insert(&new_hero(name)).await.unwrap();
        }
        let page: Vec<String> = store
            .list(1, 2)
            .await
            .unwrap()
            .into_iter()
            .map(|h| h.name)
            .collect();
        assert_eq!(page, vec!["b", "c"]);
        assert!(store.list(10, 100).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_row_is_none() {
        let store = MemoryHeroStore::new();
        let changes = HeroChanges {
            name: Some("X".into()),
            ..Default::default()
        };
        assert!(store.update(42, &changes).await.unwrap().is_none());
    }
}
