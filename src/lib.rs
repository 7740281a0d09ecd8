//! Heroes API: CRUD REST service for the Hero resource.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod startup;
pub mod state;
pub mod store;

pub use config::{DbConfig, DbDriver, ServerConfig};
pub use error::{AppError, ConfigError, ConnectionError, FieldError};
pub use model::{Hero, HeroCreate, HeroPublic, HeroUpdate};
pub use routes::{app, common_routes, hero_routes};
pub use service::HeroService;
pub use startup::{check_db_connection, connect_store};
pub use state::AppState;
pub use store::{HeroStore, MemoryHeroStore, PgHeroStore};
