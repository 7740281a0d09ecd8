//! Hero CRUD handlers.

use crate::error::AppError;
use crate::model::{HeroCreate, HeroUpdate, ListParams};
use crate::response::{Ack, Message};
use crate::service::HeroService;
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub const WELCOME_MESSAGE: &str = "Welcome to the Heroes API!";

fn json_rejection(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge(rejection.body_text());
    }
    AppError::invalid("body", rejection.body_text())
}

fn path_rejection(rejection: PathRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "invalid hero id");
    AppError::invalid("id", "must be an integer")
}

fn query_rejection(rejection: QueryRejection) -> AppError {
    AppError::invalid("query", rejection.body_text())
}

pub async fn welcome() -> Json<Message> {
    Json(Message {
        message: WELCOME_MESSAGE.to_string(),
    })
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<HeroCreate>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(input) = body.map_err(json_rejection)?;
    let hero = HeroService::create(state.store.as_ref(), input).await?;
    Ok((StatusCode::CREATED, Json(state.view(hero))))
}

pub async fn list(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(query_rejection)?;
    let heroes = HeroService::list(state.store.as_ref(), params).await?;
    let views: Vec<_> = heroes.into_iter().map(|h| state.view(h)).collect();
    Ok(Json(views))
}

pub async fn read(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(path_rejection)?;
    let hero = HeroService::get(state.store.as_ref(), id).await?;
    Ok(Json(state.view(hero)))
}

pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<HeroUpdate>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(path_rejection)?;
    let Json(patch) = body.map_err(json_rejection)?;
    let hero = HeroService::update(state.store.as_ref(), id, patch).await?;
    Ok(Json(state.view(hero)))
}

pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id.map_err(path_rejection)?;
    HeroService::delete(state.store.as_ref(), id).await?;
    Ok(Json(Ack::ok()))
}
