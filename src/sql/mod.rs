//! Parameterized SQL for the hero table.

mod builder;
mod params;

pub use builder::{
    delete, insert, select_by_id, select_list, select_probe, update, QueryBuf, HERO_TABLE,
    ID_COLUMN,
};
pub use params::BindValue;
