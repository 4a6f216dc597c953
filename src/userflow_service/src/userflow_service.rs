use std::sync::Arc;

use axum::{Router, middleware, routing::post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use userflow_adapters::auth::BasicAuthValidator;
use userflow_axum::{
    require_basic_auth,
    routes::{
        ATTRIBUTE_COLLECTION_START_PATH, ATTRIBUTE_COLLECTION_SUBMIT_PATH,
        SIGNUP_BEFORE_CREATE_PATH, attribute_collection_start, attribute_collection_submit,
        signup_before_create,
    },
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// Webhook service exposing the API connector and custom extension routes
/// behind Basic authentication.
pub struct UserFlowService {
    router: Router,
}

impl UserFlowService {
    /// Build the router.
    ///
    /// # Arguments
    /// * `validator` - Basic auth validator; an unconfigured one rejects every call
    pub fn new(validator: BasicAuthValidator) -> Self {
        if !validator.is_configured() {
            tracing::warn!(
                "Basic auth credentials are not configured, all webhook calls will be rejected"
            );
        }

        let router = Router::new()
            .route(SIGNUP_BEFORE_CREATE_PATH, post(signup_before_create))
            .route(ATTRIBUTE_COLLECTION_START_PATH, post(attribute_collection_start))
            .route(ATTRIBUTE_COLLECTION_SUBMIT_PATH, post(attribute_collection_submit))
            .layer(middleware::from_fn_with_state(
                Arc::new(validator),
                require_basic_auth,
            ));

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be mounted on another router.
    pub fn as_nested_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Serve the webhook routes on `listener` until the server stops.
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_nested_router();

        tracing::info!("User flow service listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
