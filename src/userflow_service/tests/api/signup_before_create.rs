use serde_json::{Value, json};

use crate::helpers::TestApp;

const PATH: &str = "/api/b2c/signup-before-create";

#[tokio::test]
async fn valid_email_continues_with_normalized_claim() {
    let app = TestApp::new().await;

    let response = app
        .post_authorized(
            PATH,
            &json!({ "email": "Jane.Doe@Contoso.com", "ui_locales": "en-US" }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"version":"1.0.0","action":"Continue","email":"jane.doe@contoso.com"}"#
    );
}

#[tokio::test]
async fn malformed_email_is_validation_error() {
    let app = TestApp::new().await;

    let response = app
        .post_authorized(PATH, &json!({ "email": "not-an-email" }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "version": "1.0.0",
            "status": 400,
            "action": "ValidationError",
            "userMessage": "Email address is missing or malformed."
        })
    );
}

#[tokio::test]
async fn invalid_json_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}{}", app.address, PATH))
        .header(
            "Authorization",
            crate::helpers::basic_header(crate::helpers::USERNAME, crate::helpers::PASSWORD),
        )
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["error"].is_string());
}
