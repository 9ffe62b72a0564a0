//! Verification page routes.

use crate::{
    app_state::AppState,
    extract::request_context::RequestContext,
    pages::{
        passthrough::PASSTHROUGH,
        verify::{VerificationPage, VERIFY},
    },
};
use axum::{self, extract::State, response::Html};

/// Path of the page the token-entry form navigates to.
pub const VERIFY_PATH: &str = "/verify";

/// Path external links point to.
pub const PASSTHROUGH_PATH: &str = "/passthrough";

/// GET handler for the verification page reached from the token-entry form.
#[utoipa::path(
    get,
    path = "/verify",
    params(
        ("value" = Option<String>, Query, description = "Verification token")
    ),
    responses(
        (status = 200, description = "Page embedding the iproov-me widget", content_type = "text/html", body = String)
    )
)]
pub async fn get(State(state): State<AppState>, ctx: RequestContext) -> Html<String> {
    render(VERIFY, &state, &ctx)
}

/// GET handler for tokens arriving on an external link.
#[utoipa::path(
    get,
    path = "/passthrough",
    params(
        ("verifyToken" = Option<String>, Query, description = "Verification token")
    ),
    responses(
        (status = 200, description = "Page mounting the iproov-me widget client-side", content_type = "text/html", body = String)
    )
)]
pub async fn passthrough(State(state): State<AppState>, ctx: RequestContext) -> Html<String> {
    render(PASSTHROUGH, &state, &ctx)
}

fn render(page: VerificationPage, state: &AppState, ctx: &RequestContext) -> Html<String> {
    let token = page.token(ctx);

    if token.is_empty() {
        tracing::debug!(page = page.name, path = ctx.path(), "no token in query string");
    }

    tracing::info!(
        subject = "verification_page",
        category = "render",
        page = page.name,
        ?token,
        "mounting widget"
    );

    Html(page.render(&token, &state.iproov))
}
