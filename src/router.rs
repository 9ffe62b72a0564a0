//! Main [axum::Router] interface for webserver.

use crate::{
    app_state::AppState,
    middleware::{request_ulid::MakeRequestUlid, runtime},
    routes::{
        fallback::notfound_404,
        health, ping, token_entry,
        verify::{self, PASSTHROUGH_PATH, VERIFY_PATH},
    },
};
use axum::{body::Body, http::Request, routing::get, Router};
use http::{header, HeaderName};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer, sensitive_headers::SetSensitiveHeadersLayer,
    timeout::TimeoutLayer, trace::TraceLayer, ServiceBuilderExt,
};

/// Request identifier header.
pub const REQUEST_ID: &str = "x-request-id";

/// Setup main router for application.
pub fn setup_app_router(app_state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(token_entry::get).post(token_entry::submit))
        .route(VERIFY_PATH, get(verify::get))
        .route(PASSTHROUGH_PATH, get(verify::passthrough))
        .route("/ping", get(ping::get))
        .fallback(notfound_404)
        .with_state(app_state.clone());

    let healthcheck_router = Router::new()
        .route("/healthcheck", get(health::healthcheck))
        .with_state(app_state);

    Router::merge(router, healthcheck_router)
}

/// Wrap `router` in the request handling stack shared by every route.
pub fn setup_middleware(router: Router, timeout: Duration) -> Router {
    let req_id = HeaderName::from_static(REQUEST_ID);

    router
        // Spans carry the path only; query strings hold tokens.
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID)
                    .and_then(|id| id.to_str().ok())
                    .unwrap_or_default();

                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = request.uri().path(),
                    request_id,
                )
            }),
        )
        // Set and propagate "x-request-id" (as a ulid) per request.
        .layer(
            ServiceBuilder::new()
                .set_request_id(req_id.clone(), MakeRequestUlid)
                .propagate_request_id(req_id),
        )
        .layer(TimeoutLayer::new(timeout))
        // Catches runtime panics and converts them into
        // `500 Internal Server` responses.
        .layer(CatchPanicLayer::custom(runtime::catch_panic))
        // Mark headers as sensitive on both requests and responses.
        .layer(SetSensitiveHeadersLayer::new([
            header::AUTHORIZATION,
            header::COOKIE,
        ]))
}
