//! HTTP surface
//!
//! Maps the item endpoints onto [`ItemService`] and serves the API
//! reference next to them.

use crate::core::ServiceError;
use crate::service::ItemService;
use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

pub mod handlers;
pub mod openapi;

pub const ITEMS_PATH: &str = "/items";
pub const ITEM_PATH: &str = "/items/:id";
pub const HEALTH_PATH: &str = "/health";
pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemService>,
}

impl AppState {
    pub fn new(items: Arc<ItemService>) -> Self {
        Self { items }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTH_PATH, get(handlers::health))
        .route(
            ITEMS_PATH,
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(ITEM_PATH, get(handlers::get_item))
        .route(DOCS_PATH, get(openapi::docs_page))
        .route(OPENAPI_PATH, get(openapi::openapi_json))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Storage(err) => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse {
                    message: "Item not found".to_string(),
                }),
            )
                .into_response(),
            // Storage failures carry no body; the detail only goes to the log.
            ApiError::Internal(detail) => {
                error!(error = %detail, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::ApiError;
    use crate::core::{ServiceError, StoreError};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn not_found_maps_to_message_body() {
        let response = ApiError::from(ServiceError::NotFound("x".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert_eq!(&bytes[..], br#"{"message":"Item not found"}"#);
    }

    #[tokio::test]
    async fn storage_error_maps_to_bare_500() {
        let err = ServiceError::Storage(StoreError::Task("writer panicked".into()));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        assert!(bytes.is_empty());
    }
}
