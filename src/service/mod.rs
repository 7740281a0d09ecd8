//! HeroService: hero lifecycle over the store seam.

mod hero;
mod validation;
pub use hero::{HeroService, HERO};
pub use validation::{HeroValidator, DEFAULT_LIMIT, MAX_LIMIT};
