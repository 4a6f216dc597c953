//! Start event sample: let the attribute page render unchanged.

use axum::response::Response;
use userflow_adapters::handlers::extension::start_continue;
use userflow_core::parse_body;

use super::RouteError;
use crate::adapters::response_builder;

#[tracing::instrument(name = "Attribute collection start", skip(body))]
pub async fn attribute_collection_start(body: String) -> Result<Response, RouteError> {
    parse_body(&body)?;

    Ok(start_continue(response_builder())?)
}
