//! Framework-agnostic responders.
//!
//! These take the outcome chosen by a webhook handler, encode it, and write it
//! through a `FlowResponseBuilder`. Framework-specific routes (Axum, Actix, etc.)
//! read the request, decide, call one responder, and return the built response.

pub mod api_connector;
pub mod extension;

pub use api_connector::handle_api_connector;
pub use extension::{handle_envelope, handle_start, handle_submit};
