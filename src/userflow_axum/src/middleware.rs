//! Basic authentication guard for the webhook routes.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use userflow_adapters::auth::BasicAuthValidator;
use userflow_core::FlowRequest;

use crate::adapters::{AxumRequest, response_builder};

/// Reject the request with a Basic challenge unless it carries the configured
/// credentials.
///
/// Install with `axum::middleware::from_fn_with_state(validator, require_basic_auth)`.
pub async fn require_basic_auth(
    State(validator): State<Arc<BasicAuthValidator>>,
    req: Request,
    next: Next,
) -> Response {
    let req = AxumRequest(req);

    match validator.validate(&req) {
        Ok(()) => next.run(req.into()).await,
        Err(reason) => {
            tracing::warn!(
                %reason,
                method = req.method(),
                path = req.path(),
                "Rejected webhook call"
            );
            validator.unauthorized_response(response_builder())
        }
    }
}
