#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![deny(unreachable_pub)]

//! iproov-demo-server
//!
//! Serves the pages used to try out an iProov face-verification flow by hand:
//! a form for typing a token, and pages embedding the `iproov-me` widget with
//! a token taken from the query string.

pub mod app_state;
pub mod docs;
pub mod error;
pub mod extract;
pub mod html;
pub mod middleware;
pub mod pages;
pub mod router;
pub mod routes;
pub mod settings;
pub mod token;
pub mod widget;

#[cfg(test)]
mod test_utils;
