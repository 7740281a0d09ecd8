//! Request validation for hero inputs.

use crate::error::{AppError, FieldError};
use crate::model::{
    HeroChanges, HeroCreate, HeroUpdate, ListParams, NewHero, ALTER_EGO_FIELD, ALTER_EGO_MAX_CHARS,
    DESCRIPTION_FIELD, DESCRIPTION_MAX_CHARS, NAME_FIELD,
};

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 100;

pub struct HeroValidator;

impl HeroValidator {
    /// All create rules are checked; every violation is reported.
    pub fn validate_create(input: HeroCreate) -> Result<NewHero, AppError> {
        let mut errors = Vec::new();

        let name = required(NAME_FIELD, input.name, &mut errors);
        if let Some(name) = &name {
            check_name(name, &mut errors);
        }
        if let Some(description) = &input.description {
            check_length(DESCRIPTION_FIELD, description, DESCRIPTION_MAX_CHARS, &mut errors);
        }
        let alter_ego = required(ALTER_EGO_FIELD, input.alter_ego, &mut errors);
        if let Some(alter_ego) = &alter_ego {
            check_length(ALTER_EGO_FIELD, alter_ego, ALTER_EGO_MAX_CHARS, &mut errors);
        }

        match (name, alter_ego) {
            (Some(name), Some(alter_ego)) if errors.is_empty() => Ok(NewHero {
                name,
                description: input.description,
                alter_ego,
            }),
            _ => Err(AppError::Validation(errors)),
        }
    }

    /// Only fields present in the patch are checked. `name` and `alter_ego` cannot be nulled.
    pub fn validate_update(patch: HeroUpdate) -> Result<HeroChanges, AppError> {
        let mut errors = Vec::new();

        let name = not_null(NAME_FIELD, patch.name, &mut errors);
        if let Some(name) = &name {
            check_name(name, &mut errors);
        }
        if let Some(Some(description)) = &patch.description {
            check_length(DESCRIPTION_FIELD, description, DESCRIPTION_MAX_CHARS, &mut errors);
        }
        let alter_ego = not_null(ALTER_EGO_FIELD, patch.alter_ego, &mut errors);
        if let Some(alter_ego) = &alter_ego {
            check_length(ALTER_EGO_FIELD, alter_ego, ALTER_EGO_MAX_CHARS, &mut errors);
        }

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(HeroChanges {
            name,
            description: patch.description,
            alter_ego,
        })
    }

    /// Returns `(offset, limit)`. Limits above the maximum are rejected, not clamped.
    pub fn validate_list(params: ListParams) -> Result<(i64, i64), AppError> {
        let mut errors = Vec::new();
        let offset = params.offset.unwrap_or(0);
        if offset < 0 {
            errors.push(FieldError::new("offset", "must be greater than or equal to 0"));
        }
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
        if limit < 0 {
            errors.push(FieldError::new("limit", "must be greater than or equal to 0"));
        } else if limit > MAX_LIMIT {
            errors.push(FieldError::new(
                "limit",
                format!("must be less than or equal to {}", MAX_LIMIT),
            ));
        }
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok((offset, limit))
    }
}

fn required(field: &str, value: Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
    if value.is_none() {
        errors.push(FieldError::new(field, "is required"));
    }
    value
}

fn not_null(
    field: &str,
    value: Option<Option<String>>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(None) => {
            errors.push(FieldError::new(field, "must not be null"));
            None
        }
        Some(v) => v,
        None => None,
    }
}

fn check_name(name: &str, errors: &mut Vec<FieldError>) {
    if name.is_empty() {
        errors.push(FieldError::new(NAME_FIELD, "must not be empty"));
    }
}

// Counted in chars, not bytes.
fn check_length(field: &str, value: &str, max: usize, errors: &mut Vec<FieldError>) {
    if value.chars().count() > max {
        errors.push(FieldError::new(
            field,
            format!("must be at most {} characters", max),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: Option<&str>, description: Option<&str>, alter_ego: Option<&str>) -> HeroCreate {
        HeroCreate {
            name: name.map(String::from),
            description: description.map(String::from),
            alter_ego: alter_ego.map(String::from),
        }
    }

    fn fields(err: AppError) -> Vec<String> {
        match err {
            AppError::Validation(fields) => fields.into_iter().map(|f| f.field).collect(),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn create_accepts_minimal_hero() {
        let hero =
            HeroValidator::validate_create(create(Some("Spider-Boy"), None, Some("Pedro Parqueador")))
                .unwrap();
        assert_eq!(hero.name, "Spider-Boy");
        assert_eq!(hero.description, None);
        assert_eq!(hero.alter_ego, "Pedro Parqueador");
    }

    #[test]
    fn create_requires_alter_ego() {
        let err = HeroValidator::validate_create(create(Some("Spider-Boy"), None, None)).unwrap_err();
        assert_eq!(fields(err), vec!["alter_ego"]);
    }

    #[test]
    fn create_reports_every_problem() {
        let long = "x".repeat(1001);
        let err = HeroValidator::validate_create(create(Some(""), Some(&long), None)).unwrap_err();
        assert_eq!(fields(err), vec!["name", "description", "alter_ego"]);
    }

    #[test]
    fn alter_ego_limit_counts_characters() {
        let hundred = "é".repeat(100);
        assert!(HeroValidator::validate_create(create(Some("A"), None, Some(&hundred))).is_ok());
        let too_long = "é".repeat(101);
        let err =
            HeroValidator::validate_create(create(Some("A"), None, Some(&too_long))).unwrap_err();
        assert_eq!(fields(err), vec!["alter_ego"]);
    }

    #[test]
    fn update_allows_clearing_description_only() {
        let changes = HeroValidator::validate_update(HeroUpdate {
            description: Some(None),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(changes.description, Some(None));
        assert!(changes.name.is_none());

        let err = HeroValidator::validate_update(HeroUpdate {
            name: Some(None),
            alter_ego: Some(None),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(fields(err), vec!["name", "alter_ego"]);
    }

    #[test]
    fn empty_update_is_valid() {
        let changes = HeroValidator::validate_update(HeroUpdate::default()).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn list_defaults_and_bounds() {
        assert_eq!(
            HeroValidator::validate_list(ListParams::default()).unwrap(),
            (0, DEFAULT_LIMIT)
        );
        assert_eq!(
            HeroValidator::validate_list(ListParams {
                offset: Some(5),
                limit: Some(100)
            })
            .unwrap(),
            (5, 100)
        );
        let err = HeroValidator::validate_list(ListParams {
            offset: None,
            limit: Some(101),
        })
        .unwrap_err();
        assert_eq!(fields(err), vec!["limit"]);
        let err = HeroValidator::validate_list(ListParams {
            offset: Some(-1),
            limit: None,
        })
        .unwrap_err();
        assert_eq!(fields(err), vec!["offset"]);
    }
}
