//! OpenAPI doc generation.

use crate::{
    error::AppError,
    routes::{health, ping, token_entry, verify},
};
use utoipa::OpenApi;

/// API documentation generator.
#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck,
        ping::get,
        token_entry::get,
        token_entry::submit,
        verify::get,
        verify::passthrough,
    ),
    components(schemas(AppError, health::HealthcheckResponse))
)]

/// Tied to OpenAPI documentation.
#[derive(Debug)]
pub struct ApiDoc;
