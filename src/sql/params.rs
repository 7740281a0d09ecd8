//! Typed bind values for PostgreSQL statements.

use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;

/// A value bound to a positional `$n` parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    Int(i32),
    BigInt(i64),
    Text(String),
    /// NULL typed as text, for nullable string columns.
    NullText,
}

impl From<Option<String>> for BindValue {
    fn from(v: Option<String>) -> Self {
        v.map(BindValue::Text).unwrap_or(BindValue::NullText)
    }
}

impl BindValue {
    /// Bind onto a query with the Rust type matching the column type.
    pub fn bind_to<'q, O>(
        &'q self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            BindValue::Int(n) => query.bind(*n),
            BindValue::BigInt(n) => query.bind(*n),
            BindValue::Text(s) => query.bind(s.as_str()),
            BindValue::NullText => query.bind(None::<String>),
        }
    }
}
