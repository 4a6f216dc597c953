use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn start_continues_with_default_behavior() {
    let app = TestApp::new().await;

    let response = app
        .post_authorized(
            "/api/entra/attribute-collection-start",
            &json!({
                "type": "microsoft.graph.authenticationEvent.attributeCollectionStart",
                "data": { "authenticationEventListenerId": "00000000-0000-0000-0000-000000000000" }
            }),
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"data":{"@odata.type":"microsoft.graph.onAttributeCollectionStartResponseData","actions":[{"@odata.type":"microsoft.graph.attributeCollectionStart.continueWithDefaultBehavior"}]}}"#
    );
}
