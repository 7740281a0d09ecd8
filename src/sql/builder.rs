//! Builds parameterized INSERT, SELECT, UPDATE, DELETE for the `hero` table.

use crate::model::{HeroChanges, NewHero, ALTER_EGO_FIELD, DESCRIPTION_FIELD, NAME_FIELD};
use crate::sql::BindValue;

pub const HERO_TABLE: &str = "hero";
pub const ID_COLUMN: &str = "id";

const HERO_COLUMNS: [&str; 4] = [ID_COLUMN, NAME_FIELD, DESCRIPTION_FIELD, ALTER_EGO_FIELD];

/// Quote identifier for PostgreSQL.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list() -> String {
    HERO_COLUMNS
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

/// INSERT one hero; the id comes from the column default.
pub fn insert(hero: &NewHero) -> QueryBuf {
    let mut q = QueryBuf::new();
    let name = q.push_param(BindValue::Text(hero.name.clone()));
    let description = q.push_param(hero.description.clone().into());
    let alter_ego = q.push_param(BindValue::Text(hero.alter_ego.clone()));
    q.sql = format!(
        "INSERT INTO {} ({}, {}, {}) VALUES (${}, ${}, ${}) RETURNING {}",
        quoted(HERO_TABLE),
        quoted(NAME_FIELD),
        quoted(DESCRIPTION_FIELD),
        quoted(ALTER_EGO_FIELD),
        name,
        description,
        alter_ego,
        column_list()
    );
    q
}

pub fn select_by_id(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        column_list(),
        quoted(HERO_TABLE),
        quoted(ID_COLUMN),
        ph
    );
    q
}

/// Page ordered by id ascending.
pub fn select_list(offset: i64, limit: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let limit_ph = q.push_param(BindValue::BigInt(limit));
    let offset_ph = q.push_param(BindValue::BigInt(offset));
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {} LIMIT ${} OFFSET ${}",
        column_list(),
        quoted(HERO_TABLE),
        quoted(ID_COLUMN),
        limit_ph,
        offset_ph
    );
    q
}

/// Bounded read used as the startup connectivity check.
pub fn select_probe() -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {} LIMIT 1", column_list(), quoted(HERO_TABLE));
    q
}

/// UPDATE only the columns present in `changes`. Returns None when there is nothing to set.
pub fn update(id: i32, changes: &HeroChanges) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    if let Some(name) = &changes.name {
        let ph = q.push_param(BindValue::Text(name.clone()));
        sets.push(format!("{} = ${}", quoted(NAME_FIELD), ph));
    }
    if let Some(description) = &changes.description {
        let ph = q.push_param(description.clone().into());
        sets.push(format!("{} = ${}", quoted(DESCRIPTION_FIELD), ph));
    }
    if let Some(alter_ego) = &changes.alter_ego {
        let ph = q.push_param(BindValue::Text(alter_ego.clone()));
        sets.push(format!("{} = ${}", quoted(ALTER_EGO_FIELD), ph));
    }
    if sets.is_empty() {
        return None;
    }
    let id_ph = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(HERO_TABLE),
        sets.join(", "),
        quoted(ID_COLUMN),
        id_ph,
        column_list()
    );
    Some(q)
}

/// DELETE by id, returning the removed row.
pub fn delete(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(BindValue::Int(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${} RETURNING {}",
        quoted(HERO_TABLE),
        quoted(ID_COLUMN),
        ph,
        column_list()
    );
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_binds_null_description() {
        let q = insert(&NewHero {
            name: "Spider-Boy".into(),
            description: None,
            alter_ego: "Pedro Parqueador".into(),
        });
        assert_eq!(
            q.sql,
            r#"INSERT INTO "hero" ("name", "description", "alter_ego") VALUES ($1, $2, $3) RETURNING "id", "name", "description", "alter_ego""#
        );
        assert_eq!(q.params[1], BindValue::NullText);
    }

    #[test]
    fn list_orders_by_id() {
        let q = select_list(10, 5);
        assert_eq!(
            q.sql,
            r#"SELECT "id", "name", "description", "alter_ego" FROM "hero" ORDER BY "id" LIMIT $1 OFFSET $2"#
        );
        assert_eq!(q.params, vec![BindValue::BigInt(5), BindValue::BigInt(10)]);
    }

    #[test]
    fn update_sets_only_changed_columns() {
        let q = update(
            3,
            &HeroChanges {
                description: Some(None),
                alter_ego: Some("Tommy Sharp".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            q.sql,
            r#"UPDATE "hero" SET "description" = $1, "alter_ego" = $2 WHERE "id" = $3 RETURNING "id", "name", "description", "alter_ego""#
        );
        assert_eq!(
            q.params,
            vec![
                BindValue::NullText,
                BindValue::Text("Tommy Sharp".into()),
                BindValue::Int(3)
            ]
        );
    }

    #[test]
    fn empty_update_builds_nothing() {
        assert!(update(1, &HeroChanges::default()).is_none());
    }

    #[test]
    fn probe_is_bounded() {
        assert!(select_probe().sql.ends_with("LIMIT 1"));
    }

    #[test]
    fn identifiers_are_escaped() {
        assert_eq!(quoted(r#"we"ird"#), r#""we""ird""#);
    }
}
