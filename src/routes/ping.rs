//! Liveness route.

use crate::error::AppResult;
use axum::{self, http::StatusCode};

/// GET handler answering liveness checks with an empty `200 OK`.
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Server is up"),
        (status = 500, description = "Server cannot answer", body=AppError)
    )
)]
pub async fn get() -> AppResult<StatusCode> {
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{RouteBuilder, TestContext};
    use http::{Method, StatusCode};
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[test_log::test(tokio::test)]
    async fn test_ping_has_empty_body() -> TestResult {
        let ctx = TestContext::new();

        let (status, body) = RouteBuilder::new(ctx.app(), Method::GET, "/ping")
            .into_raw_response()
            .await?;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());

        Ok(())
    }

    #[test_log::test(tokio::test)]
    async fn test_ping_rejects_post() -> TestResult {
        let ctx = TestContext::new();

        let (status, _) = RouteBuilder::new(ctx.app(), Method::POST, "/ping")
            .into_raw_response()
            .await?;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

        Ok(())
    }
}
