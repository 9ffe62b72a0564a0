//! Page rendering, independent of the HTTP layer.

pub mod passthrough;
pub mod token_entry;
pub mod verify;
