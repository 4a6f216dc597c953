//! HTTP Basic authentication for the webhook endpoints.
//!
//! The identity platform is configured with one static username/password
//! pair. Requests that do not present exactly that pair are rejected with a
//! `401` Basic challenge.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use secrecy::{ExposeSecret, Secret};
use thiserror::Error;
use userflow_core::{FlowRequest, FlowResponseBuilder, FlowResponseHelpers};

use crate::config::BASIC_AUTH_REALM;

const BASIC_SCHEME: &str = "Basic ";

/// The credential pair the platform must present.
#[derive(Debug)]
pub struct BasicAuthCredentials {
    username: String,
    password: Secret<String>,
}

impl BasicAuthCredentials {
    pub fn new(username: impl Into<String>, password: Secret<String>) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn matches(&self, username: &str, password: &str) -> bool {
        !self.username.is_empty()
            && !self.password.expose_secret().is_empty()
            && self.username == username
            && self.password.expose_secret() == password
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BasicAuthError {
    #[error("Missing authorization header")]
    MissingHeader,
    #[error("Unsupported authorization scheme")]
    UnsupportedScheme,
    #[error("Malformed basic credentials")]
    MalformedCredentials,
    #[error("Basic credentials are not configured")]
    NotConfigured,
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Validates the `Authorization` header against the configured pair.
///
/// Without configured credentials every request is rejected.
#[derive(Debug)]
pub struct BasicAuthValidator {
    expected: Option<BasicAuthCredentials>,
}

impl BasicAuthValidator {
    pub fn new(expected: Option<BasicAuthCredentials>) -> Self {
        Self { expected }
    }

    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }

    /// Validate the `Authorization` header of a request.
    pub fn validate<R: FlowRequest>(&self, req: &R) -> Result<(), BasicAuthError> {
        self.validate_header(req.header("authorization"))
    }

    pub fn validate_header(&self, header: Option<&str>) -> Result<(), BasicAuthError> {
        let header = header
            .filter(|h| !h.trim().is_empty())
            .ok_or(BasicAuthError::MissingHeader)?;

        let encoded = header
            .get(..BASIC_SCHEME.len())
            .filter(|scheme| scheme.eq_ignore_ascii_case(BASIC_SCHEME))
            .map(|_| header[BASIC_SCHEME.len()..].trim())
            .ok_or(BasicAuthError::UnsupportedScheme)?;

        let decoded = STANDARD
            .decode(encoded)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .ok_or(BasicAuthError::MalformedCredentials)?;

        let (username, password) = decoded
            .split_once(':')
            .ok_or(BasicAuthError::MalformedCredentials)?;

        let expected = self.expected.as_ref().ok_or(BasicAuthError::NotConfigured)?;

        if expected.matches(username, password) {
            Ok(())
        } else {
            Err(BasicAuthError::InvalidCredentials)
        }
    }

    /// `401` with `WWW-Authenticate: Basic realm="B2C"` and body `Unauthorized`.
    pub fn unauthorized_response<B: FlowResponseBuilder>(&self, builder: B) -> B::Response {
        builder.unauthorized(BASIC_AUTH_REALM)
    }
}
