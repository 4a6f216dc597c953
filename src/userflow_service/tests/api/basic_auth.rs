use serde_json::json;

use crate::helpers::{PASSWORD, TestApp, USERNAME, basic_header};

const START_PATH: &str = "/api/entra/attribute-collection-start";

async fn assert_challenged(response: reqwest::Response) {
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(
        response
            .headers()
            .get("www-authenticate")
            .and_then(|v| v.to_str().ok()),
        Some("Basic realm=\"B2C\"")
    );
    assert_eq!(response.text().await.unwrap(), "Unauthorized");
}

#[tokio::test]
async fn missing_authorization_is_challenged() {
    let app = TestApp::new().await;

    let response = app
        .post_with_authorization(START_PATH, &json!({}), None)
        .await;

    assert_challenged(response).await;
}

#[tokio::test]
async fn bad_authorization_headers_are_challenged() {
    let app = TestApp::new().await;
    let wrong_password = basic_header(USERNAME, "nope");
    let wrong_user = basic_header("someone-else", PASSWORD);

    let cases = [
        "Bearer eyJhbGciOiJIUzI1NiJ9.e30.sig",
        "Basic %%%not-base64%%%",
        "Basic YjJjLWNvbm5lY3Rvcg==",
        wrong_password.as_str(),
        wrong_user.as_str(),
    ];

    for header in cases {
        let response = app
            .post_with_authorization(START_PATH, &json!({}), Some(header))
            .await;

        assert_challenged(response).await;
    }
}

#[tokio::test]
async fn unconfigured_service_rejects_everything() {
    let app = TestApp::unconfigured().await;

    let response = app.post_authorized(START_PATH, &json!({})).await;

    assert_challenged(response).await;
}

#[tokio::test]
async fn scheme_is_case_insensitive() {
    let app = TestApp::new().await;
    let header = basic_header(USERNAME, PASSWORD).replace("Basic", "basic");

    let response = app
        .post_with_authorization(START_PATH, &json!({}), Some(&header))
        .await;

    assert_eq!(response.status().as_u16(), 200);
}
