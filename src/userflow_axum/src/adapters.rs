//! Axum adapters for the framework-agnostic HTTP traits.
//!
//! `FlowRequest` and `FlowResponseBuilder` live in `userflow_core`; they are
//! implemented here on newtype wrappers to satisfy the orphan rule:
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │  userflow_core::FlowRequest (trait)        │
//! └────────────────┬───────────────────────────┘
//!                  │
//!                  ▼
//! ┌────────────────────────────────────────────┐
//! │  AxumRequest(axum::Request)                │
//! │  impl FlowRequest for AxumRequest { }      │
//! └────────────────────────────────────────────┘
//! ```

use axum::body::Body;
use axum::extract::Request as AxumExtractRequest;
use axum::http::{Response, StatusCode};
use userflow_core::{FlowRequest, FlowResponseBuilder};

/// Newtype wrapper around Axum's request type.
#[repr(transparent)]
pub struct AxumRequest(pub AxumExtractRequest);

impl From<AxumExtractRequest> for AxumRequest {
    fn from(req: AxumExtractRequest) -> Self {
        AxumRequest(req)
    }
}

impl From<AxumRequest> for AxumExtractRequest {
    fn from(wrapper: AxumRequest) -> Self {
        wrapper.0
    }
}

impl FlowRequest for AxumRequest {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.headers().get(name)?.to_str().ok()
    }

    fn method(&self) -> &str {
        self.0.method().as_str()
    }

    fn path(&self) -> &str {
        self.0.uri().path()
    }
}

/// Response builder producing `axum::response::Response`.
pub struct AxumResponseBuilder {
    builder: axum::http::response::Builder,
    body: Option<String>,
}

impl AxumResponseBuilder {
    pub fn new() -> Self {
        Self {
            builder: Response::builder(),
            body: None,
        }
    }
}

impl Default for AxumResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowResponseBuilder for AxumResponseBuilder {
    type Response = Response<Body>;

    fn status(mut self, code: u16) -> Self {
        self.builder = self.builder.status(code);
        self
    }

    fn header(mut self, name: &str, value: &str) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    fn body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    fn build(self) -> Self::Response {
        let body = self.body.unwrap_or_default();
        self.builder.body(Body::from(body)).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Invalid response parts");
            let mut fallback = Response::new(Body::empty());
            *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            fallback
        })
    }
}

/// Fresh builder for a route handler.
pub fn response_builder() -> AxumResponseBuilder {
    AxumResponseBuilder::new()
}
