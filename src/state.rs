//! Shared application state for all routes.

use crate::model::{Hero, HeroPublic};
use crate::store::HeroStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn HeroStore>,
    /// Include `alter_ego` in the public view.
    pub expose_alter_ego: bool,
}

impl AppState {
    pub fn new(store: Arc<dyn HeroStore>) -> Self {
        AppState {
            store,
            expose_alter_ego: false,
        }
    }

    pub fn with_expose_alter_ego(mut self, expose: bool) -> Self {
        self.expose_alter_ego = expose;
        self
    }

    /// Public view of a hero under this state's configuration.
    pub fn view(&self, hero: Hero) -> HeroPublic {
        HeroPublic::from_hero(hero, self.expose_alter_ego)
    }
}
