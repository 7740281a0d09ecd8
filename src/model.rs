//! Hero entity, wire shapes, and validated inputs.

use serde::{Deserialize, Deserializer, Serialize};

pub const NAME_FIELD: &str = "name";
pub const DESCRIPTION_FIELD: &str = "description";
pub const ALTER_EGO_FIELD: &str = "alter_ego";

pub const DESCRIPTION_MAX_CHARS: usize = 1000;
pub const ALTER_EGO_MAX_CHARS: usize = 100;

/// A persisted row of the `hero` table.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Hero {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub alter_ego: String,
}

/// Read view returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroPublic {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alter_ego: Option<String>,
}

impl HeroPublic {
    /// `alter_ego` is left out unless the service is configured to expose it.
    pub fn from_hero(hero: Hero, expose_alter_ego: bool) -> Self {
        HeroPublic {
            id: hero.id,
            name: hero.name,
            description: hero.description,
            alter_ego: expose_alter_ego.then_some(hero.alter_ego),
        }
    }
}

/// Create request body. Fields are optional here so validation can name what is missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroCreate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub alter_ego: Option<String>,
}

/// Partial update body. Outer `None`: field not sent. `Some(None)`: sent as null.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HeroUpdate {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub alter_ego: Option<Option<String>>,
}

/// Marks a field as sent, keeping an explicit `null` distinct from an absent key.
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Validated create input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
    pub description: Option<String>,
    pub alter_ego: String,
}

/// Validated partial update. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub alter_ego: Option<String>,
}

impl HeroChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.alter_ego.is_none()
    }

    /// Merge into an existing row.
    pub fn apply(&self, hero: &mut Hero) {
        if let Some(name) = &self.name {
            hero.name = name.clone();
        }
        if let Some(description) = &self.description {
            hero.description = description.clone();
        }
        if let Some(alter_ego) = &self.alter_ego {
            hero.alter_ego = alter_ego.clone();
        }
    }
}

/// `GET /heroes/` query string.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}
