use axum::response::IntoResponse;
use thiserror::Error;
use userflow_core::{FlowResponseHelpers, UserFlowError};

use crate::adapters::response_builder;

/// Errors a webhook route can end with instead of a protocol response.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error(transparent)]
    UserFlow(#[from] UserFlowError),
}

impl IntoResponse for RouteError {
    fn into_response(self) -> axum::response::Response {
        let message = self.to_string();
        match self {
            RouteError::UserFlow(e) if e.is_client_error() => {
                response_builder().bad_request(&message)
            }
            RouteError::UserFlow(_) => {
                tracing::error!(error = %message, "Webhook route failed");
                response_builder().internal_error(&message)
            }
        }
    }
}
