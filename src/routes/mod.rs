//! Routes for [axum::Router].

pub mod fallback;
pub mod health;
pub mod ping;
pub mod token_entry;
pub mod verify;
