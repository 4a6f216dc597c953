//! Submit event sample: reject city values that contain digits.

use axum::response::Response;
use userflow_adapters::handlers::extension::{submit_continue, submit_show_validation_error};
use userflow_core::{AttributeErrors, get_object, get_string, parse_body};

use super::RouteError;
use crate::adapters::response_builder;

const CITY_ATTRIBUTE: &str = "city";
const FIX_ERRORS_MESSAGE: &str = "Please fix the below errors to proceed.";
const CITY_HAS_DIGITS_MESSAGE: &str = "City cannot contain any numbers";

#[tracing::instrument(name = "Attribute collection submit", skip(body))]
pub async fn attribute_collection_submit(body: String) -> Result<Response, RouteError> {
    let body = parse_body(&body)?;
    let city = body
        .as_ref()
        .and_then(|body| body.as_object())
        .and_then(|root| get_object(root, "data"))
        .and_then(|data| get_object(data, "userSignUpInfo"))
        .and_then(|info| get_object(info, "attributes"))
        .and_then(|attributes| get_object(attributes, CITY_ATTRIBUTE))
        .and_then(|city| get_string(city, "value"));

    match city {
        Some(city) if city.chars().any(|c| c.is_ascii_digit()) => {
            tracing::debug!("Submitted city contains digits");

            let mut errors = AttributeErrors::new();
            errors.insert(CITY_ATTRIBUTE.to_string(), CITY_HAS_DIGITS_MESSAGE.to_string());
            Ok(submit_show_validation_error(
                response_builder(),
                FIX_ERRORS_MESSAGE,
                Some(errors),
            )?)
        }
        _ => Ok(submit_continue(response_builder())?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    fn submit_body(city: &str) -> String {
        json!({
            "type": "microsoft.graph.authenticationEvent.attributeCollectionSubmit",
            "data": {
                "userSignUpInfo": {
                    "attributes": {
                        "city": { "value": city, "attributeType": "builtIn" }
                    }
                }
            }
        })
        .to_string()
    }

    async fn call(body: String) -> (StatusCode, Value) {
        let response = attribute_collection_submit(body).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_city_with_digits_shows_validation_error() {
        let (status, body) = call(submit_body("Oslo 0150")).await;
        let action = &body["data"]["actions"][0];

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            action["@odata.type"],
            "microsoft.graph.attributeCollectionSubmit.showValidationError"
        );
        assert_eq!(action["message"], FIX_ERRORS_MESSAGE);
        assert_eq!(action["attributeErrors"]["city"], CITY_HAS_DIGITS_MESSAGE);
    }

    #[tokio::test]
    async fn test_plain_city_continues() {
        let (_, body) = call(submit_body("Oslo")).await;

        assert_eq!(
            body["data"]["actions"][0]["@odata.type"],
            "microsoft.graph.attributeCollectionSubmit.continueWithDefaultBehavior"
        );
    }

    #[tokio::test]
    async fn test_missing_city_continues() {
        for raw in [String::new(), "{}".to_string(), r#"{"data":{}}"#.to_string()] {
            let (status, body) = call(raw).await;

            assert_eq!(status, StatusCode::OK);
            assert_eq!(
                body["data"]["@odata.type"],
                "microsoft.graph.onAttributeCollectionSubmitResponseData"
            );
        }
    }
}
