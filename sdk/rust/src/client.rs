use reqwest::{Client, Response};
use serde::Serialize;

/// Path segment the relay strips before forwarding to the backend `/api` tree.
pub const PROXY_API_PREFIX: &str = "/proxy/api/";

/// Resolve a backend service path to its URL behind the relay.
///
/// `resolve_service_url("http://localhost:3001", "chat/stream")` gives
/// `http://localhost:3001/proxy/api/chat/stream`.
pub fn resolve_service_url(proxy_url: &str, path: &str) -> String {
    format!(
        "{}{}{}",
        proxy_url.trim_end_matches('/'),
        PROXY_API_PREFIX,
        path.trim_start_matches('/')
    )
}

pub struct RelayClient {
    client: Client,
    proxy_url: String,
}

impl RelayClient {
    pub fn new(proxy_url: &str) -> Self {
        Self::with_client(Client::new(), proxy_url)
    }

    pub fn with_client(client: Client, proxy_url: &str) -> Self {
        Self {
            client,
            proxy_url: proxy_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn proxy_url(&self) -> &str {
        &self.proxy_url
    }

    /// URL of a backend service path, routed through the relay.
    pub fn service_url(&self, path: &str) -> String {
        resolve_service_url(&self.proxy_url, path)
    }

    /// Probe the relay's own health endpoint. Never reaches the backend.
    pub async fn health(&self) -> Result<String, Box<dyn std::error::Error>> {
        let resp = self
            .client
            .get(format!("{}/health", self.proxy_url))
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Relay returned error status {}: {}", status, text).into());
        }
        Ok(text)
    }

    /// GET a backend service path through the relay.
    pub async fn get(&self, path: &str) -> Result<Response, reqwest::Error> {
        self.client.get(self.service_url(path)).send().await
    }

    /// POST a JSON body to a backend service path through the relay.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<Response, reqwest::Error> {
        self.client.post(self.service_url(path)).json(body).send().await
    }
}
