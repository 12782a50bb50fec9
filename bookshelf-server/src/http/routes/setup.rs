//! Schema setup endpoint
//!
//! Destructive: drops and recreates the books table, discarding every
//! record. Meant for development and test environments.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

use crate::db::repos::BookRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Setup response
#[derive(Serialize)]
pub struct SetupResponse {
    pub success: bool,
}

/// POST /setup - drop and recreate the storage schema
async fn setup(State(state): State<Arc<AppState>>) -> Result<Json<SetupResponse>, ApiError> {
    BookRepo::new(&state.pool).reset_schema().await?;
    tracing::info!("schema reset, all records dropped");

    Ok(Json(SetupResponse { success: true }))
}

/// Setup routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/setup", post(setup))
}
