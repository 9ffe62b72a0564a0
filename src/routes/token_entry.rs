//! Token-entry routes.

use crate::{
    error::AppResult,
    pages::token_entry::{self, TokenEntryForm},
};
use axum::{
    self,
    extract::rejection::FormRejection,
    response::{Html, Redirect},
    Form,
};

/// GET handler rendering the token-entry form.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Token-entry form", content_type = "text/html", body = String)
    )
)]
pub async fn get() -> Html<String> {
    Html(token_entry::render("/"))
}

/// POST handler for a submitted token; navigates to the verification page.
#[utoipa::path(
    post,
    path = "/",
    request_body(content = String, content_type = "application/x-www-form-urlencoded", description = "tokenValue=<token>"),
    responses(
        (status = 303, description = "Redirect to /verify?value=<token>"),
        (status = 415, description = "Not a form submission", body = AppError)
    )
)]
pub async fn submit(form: Result<Form<TokenEntryForm>, FormRejection>) -> AppResult<Redirect> {
    let Form(form) = form?;
    let token = form.into_token();

    tracing::info!(
        subject = "token_entry",
        category = "navigate",
        ?token,
        "forwarding typed token"
    );

    Ok(Redirect::to(&token_entry::verification_location(
        super::verify::VERIFY_PATH,
        &token,
    )))
}
