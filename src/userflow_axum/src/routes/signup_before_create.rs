//! API connector sample: validate and normalize the email claim before the
//! account is created.

use axum::response::Response;
use serde_json::Value;
use userflow_adapters::handlers::api_connector::{continue_response, validation_error};
use userflow_core::{Claims, get_string, parse_body};

use super::RouteError;
use crate::adapters::response_builder;

const EMAIL_CLAIM: &str = "email";
const MALFORMED_EMAIL_MESSAGE: &str = "Email address is missing or malformed.";

#[tracing::instrument(name = "Signup before create", skip(body))]
pub async fn signup_before_create(body: String) -> Result<Response, RouteError> {
    let email = parse_body(&body)?
        .as_ref()
        .and_then(|body| body.as_object())
        .and_then(|object| get_string(object, EMAIL_CLAIM))
        .filter(|email| !email.trim().is_empty() && email.contains('@'));

    let Some(email) = email else {
        return Ok(validation_error(response_builder(), MALFORMED_EMAIL_MESSAGE)?);
    };

    let mut claims = Claims::new();
    claims.insert(EMAIL_CLAIM.to_string(), Value::String(email.to_lowercase()));

    Ok(continue_response(response_builder(), Some(claims))?)
}
