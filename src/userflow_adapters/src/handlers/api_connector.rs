//! Responders for the API connector webhook.

use userflow_core::{ApiConnectorResponse, Claims, FlowResponseBuilder, UserFlowError};

/// Write an API connector response with its contract status code.
pub fn handle_api_connector<B: FlowResponseBuilder>(
    builder: B,
    response: &ApiConnectorResponse,
) -> Result<B::Response, UserFlowError> {
    let overridden = response.overridden_contract_keys();
    if !overridden.is_empty() {
        tracing::warn!(
            keys = ?overridden,
            "Continue claims override API connector contract keys"
        );
    }

    let body = response.to_json()?;

    tracing::debug!(
        action = response.action().as_str(),
        status = response.status(),
        "Writing API connector response"
    );

    Ok(builder.status(response.status()).json_body(body).build())
}

/// `200 OK` Continue, optionally returning claims to prefill or override.
pub fn continue_response<B: FlowResponseBuilder>(
    builder: B,
    claims: Option<Claims>,
) -> Result<B::Response, UserFlowError> {
    handle_api_connector(builder, &ApiConnectorResponse::continue_with(claims))
}

/// `200 OK` block page showing `user_message`.
pub fn show_block_page<B: FlowResponseBuilder>(
    builder: B,
    user_message: &str,
) -> Result<B::Response, UserFlowError> {
    handle_api_connector(builder, &ApiConnectorResponse::show_block_page(user_message)?)
}

/// `400 Bad Request` validation error that keeps the page displayed.
pub fn validation_error<B: FlowResponseBuilder>(
    builder: B,
    user_message: &str,
) -> Result<B::Response, UserFlowError> {
    handle_api_connector(builder, &ApiConnectorResponse::validation_error(user_message)?)
}
