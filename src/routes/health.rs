//! Health check endpoint for container orchestration.
//!
//! Load balancers and deploy tooling poll this to see that the process is up
//! and which deployment variant answered.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;
use crate::version::VersionLabel;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: VersionLabel,
}

/// Health check handler. Always healthy while the process can answer.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: state.config.version.clone(),
    })
}
