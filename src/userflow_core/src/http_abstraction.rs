//! Zero-cost HTTP abstraction traits for the user-flow responders.
//!
//! The core never depends on a web framework. Framework crates implement these
//! traits on newtype wrappers of their own request and response types:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  userflow_core: Defines HTTP traits      │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  userflow_axum: Newtype wrappers         │
//! │  struct AxumRequest(axum::Request)       │
//! │  impl FlowRequest for AxumRequest { }    │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  Responders and Basic auth use the       │
//! │  traits (generic over framework)         │
//! └──────────────────────────────────────────┘
//! ```

use crate::protocol::APPLICATION_JSON;

/// Trait for inbound webhook requests.
///
/// # Implementation Notes
///
/// - Return `&str` references directly from the framework's data structures
/// - Header lookup must ignore case (RFC 9110)
pub trait FlowRequest {
    /// Get a header value by name. `None` if missing or not valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;

    /// Get the HTTP method (GET, POST, etc.)
    fn method(&self) -> &str;

    /// Get the request path
    fn path(&self) -> &str;
}

/// Trait for building the outbound HTTP response.
///
/// This is the "create response, set status, set header, write body"
/// capability the responders hand their encoded JSON to:
/// ```ignore
/// builder
///     .status(200)
///     .json_body(envelope.to_json()?)
///     .build()
/// ```
pub trait FlowResponseBuilder: Sized {
    /// The final response type produced by this builder
    type Response;

    /// Set the HTTP status code
    fn status(self, code: u16) -> Self;

    /// Add an HTTP header
    fn header(self, name: &str, value: &str) -> Self;

    /// Set the body text
    fn body(self, body: String) -> Self;

    /// Set an already-encoded JSON body with `Content-Type: application/json`
    fn json_body(self, body: String) -> Self {
        self.header("content-type", APPLICATION_JSON).body(body)
    }

    /// Build the final response
    fn build(self) -> Self::Response;
}

/// Helper methods for common responses.
///
/// Automatically implemented for all types that implement `FlowResponseBuilder`.
pub trait FlowResponseHelpers: FlowResponseBuilder {
    /// Create a 200 OK JSON response
    fn ok_json(self, body: String) -> Self::Response {
        self.status(200).json_body(body).build()
    }

    /// Create a 400 Bad Request response with an `{"error": ...}` body
    fn bad_request(self, message: &str) -> Self::Response {
        self.status(400)
            .json_body(serde_json::json!({ "error": message }).to_string())
            .build()
    }

    /// Create a 401 Unauthorized Basic challenge
    fn unauthorized(self, realm: &str) -> Self::Response {
        self.status(401)
            .header("www-authenticate", &format!("Basic realm=\"{realm}\""))
            .body("Unauthorized".to_string())
            .build()
    }

    /// Create a 500 Internal Server Error response with an `{"error": ...}` body
    fn internal_error(self, message: &str) -> Self::Response {
        self.status(500)
            .json_body(serde_json::json!({ "error": message }).to_string())
            .build()
    }
}

// Blanket implementation for all FlowResponseBuilder types
impl<T: FlowResponseBuilder> FlowResponseHelpers for T {}
