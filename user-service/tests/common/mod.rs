use secrecy::Secret;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use user_service::config::{MongoConfig, UserConfig};
use user_service::services::UserStore;
use user_service::startup::Application;

pub const TEST_TABLE: &str = "users_test";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

pub fn test_config() -> UserConfig {
    UserConfig {
        common: CoreConfig {
            port: 0, // Random port
            log_level: "error".to_string(),
            otlp_endpoint: None,
        },
        host: "127.0.0.1".to_string(),
        mongodb: MongoConfig {
            uri: Secret::new("mongodb://unused:27017".to_string()),
            database: "user_test".to_string(),
        },
        users_table_name: TEST_TABLE.to_string(),
    }
}

impl TestApp {
    pub async fn spawn(store: Arc<dyn UserStore>) -> Self {
        let app = Application::build(test_config(), store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
