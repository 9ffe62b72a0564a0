//! The Axum Application State

use crate::settings::{self, AppEnvironment};
use std::sync::Arc;

#[derive(Clone, Debug)]
/// Global application route state.
pub struct AppState {
    /// Environment the server runs in
    pub environment: AppEnvironment,
    /// Everything the widget needs to know about the verification service
    pub iproov: Arc<settings::IProov>,
}

impl AppState {
    /// Create application state from loaded settings.
    pub fn new(settings: &settings::Settings) -> Self {
        Self {
            environment: settings.environment(),
            iproov: Arc::new(settings.iproov().clone()),
        }
    }
}
