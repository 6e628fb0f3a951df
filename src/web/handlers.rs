use super::{AppState, Result};
use crate::core::{Collection, Item, NewItem};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn list_items(State(state): State<AppState>) -> Json<Collection> {
    Json(state.items.list().await)
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>> {
    let item = state.items.get(&id).await?;
    Ok(Json(item))
}

pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<NewItem>,
) -> Result<(StatusCode, Json<Item>)> {
    let created = state.items.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
