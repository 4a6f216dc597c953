use base64::{Engine as _, engine::general_purpose::STANDARD};
use reqwest::Client;
use secrecy::Secret;
use serde_json::Value;
use tokio::net::TcpListener;
use userflow_adapters::{
    auth::{BasicAuthCredentials, BasicAuthValidator},
    config::test,
};
use userflow_service::UserFlowService;

pub const USERNAME: &str = "b2c-connector";
pub const PASSWORD: &str = "correct horse battery staple";

pub struct TestApp {
    pub address: String,
    pub http_client: Client,
}

impl TestApp {
    /// Spawn the service on an ephemeral port with known credentials.
    pub async fn new() -> Self {
        let credentials = BasicAuthCredentials::new(USERNAME, Secret::new(PASSWORD.to_string()));
        Self::spawn(BasicAuthValidator::new(Some(credentials))).await
    }

    /// Spawn the service without configured credentials.
    pub async fn unconfigured() -> Self {
        Self::spawn(BasicAuthValidator::new(None)).await
    }

    async fn spawn(validator: BasicAuthValidator) -> Self {
        let listener = TcpListener::bind(test::APP_ADDRESS).await.unwrap();
        let address = format!("http://{}", listener.local_addr().unwrap());

        let service = UserFlowService::new(validator);
        tokio::spawn(async move {
            service.run_standalone(listener).await.unwrap();
        });

        Self {
            address,
            http_client: Client::new(),
        }
    }

    pub async fn post_authorized(&self, path: &str, body: &Value) -> reqwest::Response {
        self.post_with_authorization(path, body, Some(&basic_header(USERNAME, PASSWORD)))
            .await
    }

    pub async fn post_with_authorization(
        &self,
        path: &str,
        body: &Value,
        authorization: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self
            .http_client
            .post(format!("{}{}", self.address, path))
            .json(body);

        if let Some(authorization) = authorization {
            request = request.header("Authorization", authorization);
        }

        request.send().await.expect("Failed to execute request.")
    }
}

pub fn basic_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
