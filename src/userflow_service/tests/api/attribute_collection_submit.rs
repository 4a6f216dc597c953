use serde_json::{Value, json};

use crate::helpers::TestApp;

const PATH: &str = "/api/entra/attribute-collection-submit";

fn submit_payload(city: &str) -> Value {
    json!({
        "type": "microsoft.graph.authenticationEvent.attributeCollectionSubmit",
        "data": {
            "userSignUpInfo": {
                "attributes": {
                    "city": {
                        "@odata.type": "microsoft.graph.stringDirectoryAttributeValue",
                        "value": city,
                        "attributeType": "builtIn"
                    }
                }
            }
        }
    })
}

#[tokio::test]
async fn city_with_digits_shows_validation_error() {
    let app = TestApp::new().await;

    let response = app.post_authorized(PATH, &submit_payload("Tr0ndheim")).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "data": {
                "@odata.type": "microsoft.graph.onAttributeCollectionSubmitResponseData",
                "actions": [{
                    "@odata.type": "microsoft.graph.attributeCollectionSubmit.showValidationError",
                    "message": "Please fix the below errors to proceed.",
                    "attributeErrors": { "city": "City cannot contain any numbers" }
                }]
            }
        })
    );
}

#[tokio::test]
async fn valid_city_continues() {
    let app = TestApp::new().await;

    let response = app.post_authorized(PATH, &submit_payload("Trondheim")).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body["data"]["actions"][0]["@odata.type"],
        "microsoft.graph.attributeCollectionSubmit.continueWithDefaultBehavior"
    );
}
