//! Extractors

pub mod request_context;
