//! Responders for the Start and Submit custom authentication extension events.

use userflow_core::{
    AttributeErrors, AttributeValues, ExtensionEvent, FlowResponseBuilder, FlowResponseHelpers,
    ResponseEnvelope, StartAction, SubmitAction, UserFlowError, encode_start, encode_submit,
};

/// Write an envelope as `200 OK` with a JSON body.
///
/// # Returns
/// The built response, or `UserFlowError::Serialization` if encoding failed,
/// in which case nothing has been written.
pub fn handle_envelope<E, B>(
    builder: B,
    envelope: &ResponseEnvelope<E>,
) -> Result<B::Response, UserFlowError>
where
    E: ExtensionEvent,
    B: FlowResponseBuilder,
{
    let body = envelope.to_json()?;

    tracing::debug!(
        event = envelope.odata_type(),
        actions = envelope.actions().len(),
        "Writing extension response"
    );

    Ok(builder.ok_json(body))
}

/// Respond to a Start event with a single action.
pub fn handle_start<B: FlowResponseBuilder>(
    builder: B,
    action: StartAction,
) -> Result<B::Response, UserFlowError> {
    handle_envelope(builder, &encode_start(action))
}

/// Respond to a Submit event with a single action.
pub fn handle_submit<B: FlowResponseBuilder>(
    builder: B,
    action: SubmitAction,
) -> Result<B::Response, UserFlowError> {
    handle_envelope(builder, &encode_submit(action))
}

// Start

/// Continue with default behavior (Start).
pub fn start_continue<B: FlowResponseBuilder>(builder: B) -> Result<B::Response, UserFlowError> {
    handle_start(builder, StartAction::continue_with_default_behavior())
}

/// Prefill input values before the attribute page renders.
pub fn start_set_prefill_values<B: FlowResponseBuilder>(
    builder: B,
    inputs: AttributeValues,
) -> Result<B::Response, UserFlowError> {
    handle_start(builder, StartAction::set_prefill_values(inputs))
}

/// Block the flow at Start with a message and optional title.
pub fn start_show_block_page<B: FlowResponseBuilder>(
    builder: B,
    message: &str,
    title: Option<&str>,
) -> Result<B::Response, UserFlowError> {
    let action = StartAction::show_block_page(message, title.map(str::to_string))?;
    handle_start(builder, action)
}

// Submit

/// Continue with default behavior (Submit).
pub fn submit_continue<B: FlowResponseBuilder>(builder: B) -> Result<B::Response, UserFlowError> {
    handle_submit(builder, SubmitAction::continue_with_default_behavior())
}

/// Override submitted attributes and continue.
pub fn submit_modify_attributes<B: FlowResponseBuilder>(
    builder: B,
    attributes: AttributeValues,
) -> Result<B::Response, UserFlowError> {
    handle_submit(builder, SubmitAction::modify_attribute_values(attributes))
}

/// Keep the page displayed with a message and per-field errors.
pub fn submit_show_validation_error<B: FlowResponseBuilder>(
    builder: B,
    message: &str,
    attribute_errors: Option<AttributeErrors>,
) -> Result<B::Response, UserFlowError> {
    let action = SubmitAction::show_validation_error(message, attribute_errors)?;
    handle_submit(builder, action)
}

/// Block the flow at Submit with a message and optional title.
pub fn submit_show_block_page<B: FlowResponseBuilder>(
    builder: B,
    message: &str,
    title: Option<&str>,
) -> Result<B::Response, UserFlowError> {
    let action = SubmitAction::show_block_page(message, title.map(str::to_string))?;
    handle_submit(builder, action)
}
