//! HTTP handlers for the hero resource.

pub mod hero;
pub use hero::*;
