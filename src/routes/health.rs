//! Healthcheck route.

use crate::{app_state::AppState, error::AppResult};
use axum::{self, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A healthcheck response containing diagnostic information for the service
#[derive(ToSchema, Eq, PartialEq, Debug, Deserialize, Serialize)]
pub struct HealthcheckResponse {
    /// Environment the server runs in
    environment: String,
    /// `base_url` handed to every widget
    widget_base_url: String,
}

/// GET handler for checking service health.
#[utoipa::path(
    get,
    path = "/healthcheck",
    responses(
        (status = 200, description = "iproov-demo-server healthy", body=HealthcheckResponse),
    )
)]
pub async fn healthcheck(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, axum::Json<HealthcheckResponse>)> {
    let response = HealthcheckResponse {
        environment: state.environment.to_string(),
        widget_base_url: state.iproov.widget_base_url().to_string(),
    };

    Ok((StatusCode::OK, axum::Json(response)))
}
