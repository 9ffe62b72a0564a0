//! Helpers for running isolated webserver instances
use crate::{
    app_state::AppState,
    router::{setup_app_router, setup_middleware},
    settings::{self, AppEnvironment},
};
use axum::Router;
use std::{sync::Arc, time::Duration};

/// A router wired up like the running server, with test settings.
#[derive(Debug)]
pub(crate) struct TestContext {
    app: Router,
    app_state: AppState,
}

impl TestContext {
    /// Create a new test context with default widget settings
    pub(crate) fn new() -> Self {
        Self::new_with_iproov(settings::IProov::default())
    }

    pub(crate) fn new_with_iproov(iproov: settings::IProov) -> Self {
        let app_state = AppState {
            environment: AppEnvironment::Local,
            iproov: Arc::new(iproov),
        };

        let app = setup_middleware(
            setup_app_router(app_state.clone()),
            Duration::from_secs(5),
        );

        Self { app, app_state }
    }

    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    #[allow(unused)]
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }
}
